// Copyright (c) collatedb.dev 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use collatedb_core::{EncodedKey, Result};

use crate::{
	memory::Memory,
	store::{StoreGet, StoredRow},
};

impl StoreGet for Memory {
	fn get(&self, key: &EncodedKey) -> Result<Option<StoredRow>> {
		Ok(self.rows.get(key).map(|entry| StoredRow {
			key: entry.key().clone(),
			row: entry.value().clone(),
		}))
	}
}
