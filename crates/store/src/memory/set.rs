// Copyright (c) collatedb.dev 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use collatedb_core::{EncodedKey, Result, row::EncodedRow};

use crate::{memory::Memory, store::StoreSet};

impl StoreSet for Memory {
	fn set(&self, key: &EncodedKey, row: EncodedRow) -> Result<()> {
		self.rows.insert(key.clone(), row);
		Ok(())
	}
}
