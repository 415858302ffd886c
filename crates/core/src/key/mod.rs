// Copyright (c) collatedb.dev 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use std::ops::Deref;

use crate::CowVec;

mod layout;
mod range;

pub use layout::{RowKey, RowKeyLayout};
pub use range::EncodedKeyRange;

/// Current layout of the framing bytes ahead of the key fields.
pub(crate) const KEY_VERSION: u8 = 1;

/// Namespace byte after the version. Every key this engine writes today is
/// a table row; the byte keeps room for other key families alongside them.
#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum KeyKind {
	TableRow = 0x01,
}

/// A fully encoded key. Compares as raw unsigned bytes, and by construction
/// that comparison equals the logical row order.
#[derive(Debug, Clone, PartialOrd, Ord, Hash, PartialEq, Eq)]
pub struct EncodedKey(pub CowVec<u8>);

impl Deref for EncodedKey {
	type Target = CowVec<u8>;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

impl EncodedKey {
	pub fn new(key: impl Into<Vec<u8>>) -> Self {
		Self(CowVec::new(key.into()))
	}
}
