// Copyright (c) collatedb.dev 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use collatedb_core::{EncodedKey, EncodedKeyRange, Result, row::EncodedRow};

/// One stored entry: the encoded key and its row payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredRow {
	pub key: EncodedKey,
	pub row: EncodedRow,
}

/// A sorted key-value substrate. Iteration order is ascending unsigned
/// byte order over keys, which by key construction equals the declared
/// row order; the `_rev` variants walk the same order backwards.
///
/// Substrate failures surface through [`collatedb_core::Error::Store`]
/// unmodified.
pub trait OrderedStore:
	Send
	+ Sync
	+ Clone
	+ StoreGet
	+ StoreContains
	+ StoreSet
	+ StoreRemove
	+ StoreScan
	+ StoreScanRev
	+ StoreRange
	+ StoreRangeRev
	+ 'static
{
}

pub trait StoreGet {
	fn get(&self, key: &EncodedKey) -> Result<Option<StoredRow>>;
}

pub trait StoreContains {
	fn contains(&self, key: &EncodedKey) -> Result<bool>;
}

pub trait StoreSet {
	/// Stores the row under the key, replacing any existing entry.
	fn set(&self, key: &EncodedKey, row: EncodedRow) -> Result<()>;
}

pub trait StoreRemove {
	fn remove(&self, key: &EncodedKey) -> Result<()>;
}

pub trait RowIter: Iterator<Item = StoredRow> + Send {}
impl<T> RowIter for T where T: Iterator<Item = StoredRow> + Send {}

pub trait StoreScan {
	type ScanIter<'a>: RowIter
	where
		Self: 'a;

	fn scan(&self) -> Result<Self::ScanIter<'_>>;
}

pub trait StoreScanRev {
	type ScanIterRev<'a>: RowIter
	where
		Self: 'a;

	fn scan_rev(&self) -> Result<Self::ScanIterRev<'_>>;
}

pub trait StoreRange {
	type Range<'a>: RowIter
	where
		Self: 'a;

	fn range(&self, range: EncodedKeyRange) -> Result<Self::Range<'_>>;

	fn prefix(&self, prefix: &EncodedKey) -> Result<Self::Range<'_>> {
		self.range(EncodedKeyRange::prefix(prefix))
	}
}

pub trait StoreRangeRev {
	type RangeRev<'a>: RowIter
	where
		Self: 'a;

	fn range_rev(&self, range: EncodedKeyRange) -> Result<Self::RangeRev<'_>>;

	fn prefix_rev(&self, prefix: &EncodedKey) -> Result<Self::RangeRev<'_>> {
		self.range_rev(EncodedKeyRange::prefix(prefix))
	}
}
