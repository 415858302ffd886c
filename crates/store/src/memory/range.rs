// Copyright (c) collatedb.dev 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use collatedb_core::{EncodedKey, EncodedKeyRange, Result, row::EncodedRow};
use crossbeam_skiplist::map::Range as MapRange;

use crate::{
	memory::Memory,
	store::{StoreRange, StoredRow},
};

impl StoreRange for Memory {
	type Range<'a> = Range<'a>;

	fn range(&self, range: EncodedKeyRange) -> Result<Self::Range<'_>> {
		Ok(Range {
			range: self.rows.range(range),
		})
	}
}

pub struct Range<'a> {
	pub(crate) range: MapRange<'a, EncodedKey, EncodedKeyRange, EncodedKey, EncodedRow>,
}

impl Iterator for Range<'_> {
	type Item = StoredRow;

	fn next(&mut self) -> Option<Self::Item> {
		let entry = self.range.next()?;
		Some(StoredRow {
			key: entry.key().clone(),
			row: entry.value().clone(),
		})
	}
}
