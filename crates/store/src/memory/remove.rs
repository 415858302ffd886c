// Copyright (c) collatedb.dev 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use collatedb_core::{EncodedKey, Result};

use crate::{memory::Memory, store::StoreRemove};

impl StoreRemove for Memory {
	fn remove(&self, key: &EncodedKey) -> Result<()> {
		self.rows.remove(key);
		Ok(())
	}
}
