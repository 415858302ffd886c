// Copyright (c) collatedb.dev 2025
// This file is licensed under the MIT, see license.md file

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// The closed set of logical column types.
///
/// Every type a key or value column may carry is listed here; codecs and
/// layouts dispatch over this enum rather than over trait objects.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Type {
	/// Value is not defined (think null in common programming languages)
	Undefined,
	/// A 1-byte signed integer
	Int1,
	/// A 2-byte signed integer
	Int2,
	/// A 4-byte signed integer
	Int4,
	/// An 8-byte signed integer
	Int8,
	/// A UTF-8 encoded text
	Utf8,
	/// A millisecond-precision point in time
	Timestamp,
	/// An IPv4 or IPv6 address
	Inet,
}

impl Type {
	/// Static slot width in a row payload. Variable-width types store an
	/// (offset, length) pair; inet stores a family tag plus sixteen octets.
	pub fn size(&self) -> usize {
		match self {
			Type::Undefined => 0,
			Type::Int1 => 1,
			Type::Int2 => 2,
			Type::Int4 => 4,
			Type::Int8 => 8,
			Type::Utf8 => 8,
			Type::Timestamp => 8,
			Type::Inet => 17,
		}
	}

	pub fn alignment(&self) -> usize {
		match self {
			Type::Undefined => 1,
			Type::Int1 => 1,
			Type::Int2 => 2,
			Type::Int4 => 4,
			Type::Int8 => 8,
			Type::Utf8 => 4,
			Type::Timestamp => 8,
			Type::Inet => 1,
		}
	}

	pub fn name(&self) -> &'static str {
		match self {
			Type::Undefined => "Undefined",
			Type::Int1 => "Int1",
			Type::Int2 => "Int2",
			Type::Int4 => "Int4",
			Type::Int8 => "Int8",
			Type::Utf8 => "Utf8",
			Type::Timestamp => "Timestamp",
			Type::Inet => "Inet",
		}
	}
}

impl Display for Type {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.name())
	}
}
