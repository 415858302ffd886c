// Copyright (c) collatedb.dev 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use std::ops::Deref;

use collatedb_type::Type;
use serde::{Deserialize, Serialize};

/// One column of a validated table definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnDef {
	pub name: String,
	pub ty: Type,
	/// Position in the table's declared column order.
	pub index: ColumnIndex,
}

#[repr(transparent)]
#[derive(Debug, Copy, Clone, PartialOrd, PartialEq, Ord, Eq, Hash, Serialize, Deserialize)]
pub struct ColumnIndex(pub u16);

impl Deref for ColumnIndex {
	type Target = u16;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

impl PartialEq<u16> for ColumnIndex {
	fn eq(&self, other: &u16) -> bool {
		self.0.eq(other)
	}
}

impl From<ColumnIndex> for u16 {
	fn from(value: ColumnIndex) -> Self {
		value.0
	}
}

impl ColumnIndex {
	pub fn as_usize(&self) -> usize {
		self.0 as usize
	}
}
