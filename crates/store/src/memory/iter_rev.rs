// Copyright (c) collatedb.dev 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use std::iter::Rev;

use collatedb_core::{EncodedKey, Result, row::EncodedRow};
use crossbeam_skiplist::map::Iter as MapIter;

use crate::{
	memory::Memory,
	store::{StoreScanRev, StoredRow},
};

impl StoreScanRev for Memory {
	type ScanIterRev<'a> = IterRev<'a>;

	fn scan_rev(&self) -> Result<Self::ScanIterRev<'_>> {
		Ok(IterRev {
			iter: self.rows.iter().rev(),
		})
	}
}

pub struct IterRev<'a> {
	pub(crate) iter: Rev<MapIter<'a, EncodedKey, EncodedRow>>,
}

impl Iterator for IterRev<'_> {
	type Item = StoredRow;

	fn next(&mut self) -> Option<Self::Item> {
		let entry = self.iter.next()?;
		Some(StoredRow {
			key: entry.key().clone(),
			row: entry.value().clone(),
		})
	}
}
