// Copyright (c) collatedb.dev 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use std::ops::Deref;

use crate::CowVec;

mod get;
mod layout;
mod set;
mod value;

pub use layout::{Field, RowLayout};

/// An encoded row payload: validity bitset, then fixed-width slots, then
/// the dynamic section holding variable-width data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedRow(pub CowVec<u8>);

impl Deref for EncodedRow {
	type Target = CowVec<u8>;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

impl EncodedRow {
	pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
		Self(CowVec::new(bytes.into()))
	}

	pub fn is_defined(&self, index: usize) -> bool {
		let byte = index / 8;
		let bit = index % 8;
		self.0.as_slice().get(byte).is_some_and(|flags| flags & (1 << bit) != 0)
	}

	pub fn set_valid(&mut self, index: usize, valid: bool) {
		let byte = index / 8;
		let bit = index % 8;
		let buf = self.0.make_mut();
		if valid {
			buf[byte] |= 1 << bit;
		} else {
			buf[byte] &= !(1 << bit);
		}
	}
}
