// Copyright (c) collatedb.dev 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use collatedb_core::{EncodedKey, Result, row::EncodedRow};
use crossbeam_skiplist::map::Iter as MapIter;

use crate::{
	memory::Memory,
	store::{StoreScan, StoredRow},
};

impl StoreScan for Memory {
	type ScanIter<'a> = Iter<'a>;

	fn scan(&self) -> Result<Self::ScanIter<'_>> {
		Ok(Iter {
			iter: self.rows.iter(),
		})
	}
}

pub struct Iter<'a> {
	pub(crate) iter: MapIter<'a, EncodedKey, EncodedRow>,
}

impl Iterator for Iter<'_> {
	type Item = StoredRow;

	fn next(&mut self) -> Option<Self::Item> {
		let entry = self.iter.next()?;
		Some(StoredRow {
			key: entry.key().clone(),
			row: entry.value().clone(),
		})
	}
}
