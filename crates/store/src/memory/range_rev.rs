// Copyright (c) collatedb.dev 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use std::iter::Rev;

use collatedb_core::{EncodedKey, EncodedKeyRange, Result, row::EncodedRow};
use crossbeam_skiplist::map::Range as MapRange;

use crate::{
	memory::Memory,
	store::{StoreRangeRev, StoredRow},
};

impl StoreRangeRev for Memory {
	type RangeRev<'a> = RangeRev<'a>;

	fn range_rev(&self, range: EncodedKeyRange) -> Result<Self::RangeRev<'_>> {
		Ok(RangeRev {
			range: self.rows.range(range).rev(),
		})
	}
}

pub struct RangeRev<'a> {
	pub(crate) range: Rev<MapRange<'a, EncodedKey, EncodedKeyRange, EncodedKey, EncodedRow>>,
}

impl Iterator for RangeRev<'_> {
	type Item = StoredRow;

	fn next(&mut self) -> Option<Self::Item> {
		let entry = self.range.next()?;
		Some(StoredRow {
			key: entry.key().clone(),
			row: entry.value().clone(),
		})
	}
}
