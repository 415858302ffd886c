// Copyright (c) collatedb.dev 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use collatedb_core::{EncodedKey, Result};

use crate::{memory::Memory, store::StoreContains};

impl StoreContains for Memory {
	fn contains(&self, key: &EncodedKey) -> Result<bool> {
		Ok(self.rows.contains_key(key))
	}
}
