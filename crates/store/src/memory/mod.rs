// Copyright (c) collatedb.dev 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use std::{ops::Deref, sync::Arc};

use collatedb_core::{EncodedKey, row::EncodedRow};
use crossbeam_skiplist::SkipMap;

mod contains;
mod get;
mod iter;
mod iter_rev;
mod range;
mod range_rev;
mod remove;
mod set;

pub use iter::Iter;
pub use iter_rev::IterRev;
pub use range::Range;
pub use range_rev::RangeRev;

use crate::store::OrderedStore;

/// In-memory substrate over a lock-free skip list. Clones share the map;
/// point operations need no locking, and iterators are weakly consistent.
#[derive(Debug, Clone)]
pub struct Memory(Arc<MemoryInner>);

#[derive(Debug)]
pub struct MemoryInner {
	rows: SkipMap<EncodedKey, EncodedRow>,
}

impl Deref for Memory {
	type Target = MemoryInner;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

impl Default for Memory {
	fn default() -> Self {
		Self::new()
	}
}

impl Memory {
	pub fn new() -> Self {
		Self(Arc::new(MemoryInner {
			rows: SkipMap::new(),
		}))
	}
}

impl OrderedStore for Memory {}

#[cfg(test)]
mod tests {
	use collatedb_core::{EncodedKey, EncodedKeyRange, row::EncodedRow};

	use crate::{
		memory::Memory,
		store::{StoreContains, StoreGet, StoreRange, StoreRangeRev, StoreRemove, StoreScan, StoreScanRev, StoreSet},
	};

	fn store_with(keys: &[&[u8]]) -> Memory {
		let memory = Memory::new();
		for key in keys {
			memory.set(&EncodedKey::new(key.to_vec()), EncodedRow::new(vec![])).unwrap();
		}
		memory
	}

	mod set {
		use super::*;

		#[test]
		fn test_replaces_existing_entry() {
			let memory = Memory::new();
			let key = EncodedKey::new(vec![0x01]);

			memory.set(&key, EncodedRow::new(vec![0xAA])).unwrap();
			memory.set(&key, EncodedRow::new(vec![0xBB])).unwrap();

			let stored = memory.get(&key).unwrap().unwrap();
			assert_eq!(stored.row.as_slice(), &[0xBB]);
			assert_eq!(memory.scan().unwrap().count(), 1);
		}
	}

	mod get {
		use super::*;

		#[test]
		fn test_absent_key() {
			let memory = store_with(&[&[0x01]]);
			assert!(memory.get(&EncodedKey::new(vec![0x02])).unwrap().is_none());
		}
	}

	mod contains {
		use super::*;

		#[test]
		fn test_present_and_absent() {
			let memory = store_with(&[&[0x01]]);
			assert!(memory.contains(&EncodedKey::new(vec![0x01])).unwrap());
			assert!(!memory.contains(&EncodedKey::new(vec![0x02])).unwrap());
		}
	}

	mod remove {
		use super::*;

		#[test]
		fn test_removes_entry() {
			let memory = store_with(&[&[0x01], &[0x02]]);

			memory.remove(&EncodedKey::new(vec![0x01])).unwrap();

			assert!(!memory.contains(&EncodedKey::new(vec![0x01])).unwrap());
			assert_eq!(memory.scan().unwrap().count(), 1);
		}

		#[test]
		fn test_absent_key_is_a_noop() {
			let memory = store_with(&[&[0x01]]);
			memory.remove(&EncodedKey::new(vec![0x09])).unwrap();
			assert_eq!(memory.scan().unwrap().count(), 1);
		}
	}

	mod scan {
		use super::*;

		#[test]
		fn test_ascending_byte_order() {
			let memory = store_with(&[&[0x02], &[0x01, 0xFF], &[0x01]]);

			let keys: Vec<Vec<u8>> = memory.scan().unwrap().map(|stored| stored.key.to_vec()).collect();

			assert_eq!(keys, vec![vec![0x01], vec![0x01, 0xFF], vec![0x02]]);
		}

		#[test]
		fn test_rev_is_exact_reverse() {
			let memory = store_with(&[&[0x02], &[0x01], &[0x03]]);

			let forward: Vec<Vec<u8>> = memory.scan().unwrap().map(|stored| stored.key.to_vec()).collect();
			let mut backward: Vec<Vec<u8>> = memory.scan_rev().unwrap().map(|stored| stored.key.to_vec()).collect();
			backward.reverse();

			assert_eq!(forward, backward);
		}
	}

	mod range {
		use super::*;

		#[test]
		fn test_half_open_bounds() {
			let memory = store_with(&[&[0x01], &[0x02], &[0x03]]);
			let range = EncodedKeyRange::start_end(
				Some(EncodedKey::new(vec![0x01])),
				Some(EncodedKey::new(vec![0x03])),
			);

			let keys: Vec<Vec<u8>> = memory.range(range).unwrap().map(|stored| stored.key.to_vec()).collect();

			assert_eq!(keys, vec![vec![0x01], vec![0x02]]);
		}

		#[test]
		fn test_prefix_default_method() {
			let memory = store_with(&[&[0x01, 0x00], &[0x01, 0x09], &[0x02, 0x00]]);

			let keys: Vec<Vec<u8>> =
				memory.prefix(&EncodedKey::new(vec![0x01])).unwrap().map(|stored| stored.key.to_vec()).collect();

			assert_eq!(keys, vec![vec![0x01, 0x00], vec![0x01, 0x09]]);
		}

		#[test]
		fn test_range_rev_descends() {
			let memory = store_with(&[&[0x01], &[0x02], &[0x03]]);

			let keys: Vec<Vec<u8>> = memory
				.range_rev(EncodedKeyRange::all())
				.unwrap()
				.map(|stored| stored.key.to_vec())
				.collect();

			assert_eq!(keys, vec![vec![0x03], vec![0x02], vec![0x01]]);
		}
	}
}
