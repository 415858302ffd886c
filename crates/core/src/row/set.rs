// Copyright (c) collatedb.dev 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use std::net::IpAddr;

use collatedb_type::{Timestamp, Type};

use crate::row::{EncodedRow, RowLayout};

impl RowLayout {
	pub fn set_i8(&self, row: &mut EncodedRow, index: usize, value: i8) {
		let field = self.field(index);
		debug_assert_eq!(field.ty, Type::Int1);
		row.set_valid(index, true);
		row.0.make_mut()[field.offset] = value as u8;
	}

	pub fn set_i16(&self, row: &mut EncodedRow, index: usize, value: i16) {
		let field = self.field(index);
		debug_assert_eq!(field.ty, Type::Int2);
		row.set_valid(index, true);
		row.0.make_mut()[field.offset..field.offset + 2].copy_from_slice(&value.to_le_bytes());
	}

	pub fn set_i32(&self, row: &mut EncodedRow, index: usize, value: i32) {
		let field = self.field(index);
		debug_assert_eq!(field.ty, Type::Int4);
		row.set_valid(index, true);
		row.0.make_mut()[field.offset..field.offset + 4].copy_from_slice(&value.to_le_bytes());
	}

	pub fn set_i64(&self, row: &mut EncodedRow, index: usize, value: i64) {
		let field = self.field(index);
		debug_assert_eq!(field.ty, Type::Int8);
		row.set_valid(index, true);
		row.0.make_mut()[field.offset..field.offset + 8].copy_from_slice(&value.to_le_bytes());
	}

	pub fn set_timestamp(&self, row: &mut EncodedRow, index: usize, value: Timestamp) {
		let field = self.field(index);
		debug_assert_eq!(field.ty, Type::Timestamp);
		row.set_valid(index, true);
		row.0.make_mut()[field.offset..field.offset + 8].copy_from_slice(&value.to_millis().to_le_bytes());
	}

	/// Appends the text bytes to the dynamic section and stores their
	/// absolute offset and length in the slot. Each slot is written at
	/// most once per row, so the dynamic section never holds dead bytes.
	pub fn set_utf8(&self, row: &mut EncodedRow, index: usize, value: &str) {
		let field = self.field(index);
		debug_assert_eq!(field.ty, Type::Utf8);
		row.set_valid(index, true);

		let buf = row.0.make_mut();
		let offset = buf.len() as u32;
		let len = value.len() as u32;
		buf[field.offset..field.offset + 4].copy_from_slice(&offset.to_le_bytes());
		buf[field.offset + 4..field.offset + 8].copy_from_slice(&len.to_le_bytes());
		buf.extend_from_slice(value.as_bytes());
	}

	pub fn set_inet(&self, row: &mut EncodedRow, index: usize, value: &IpAddr) {
		let field = self.field(index);
		debug_assert_eq!(field.ty, Type::Inet);

		let mut slot = [0u8; 17];
		match value {
			IpAddr::V4(addr) => {
				slot[0] = 4;
				slot[1..5].copy_from_slice(&addr.octets());
			}
			IpAddr::V6(addr) => {
				slot[0] = 6;
				slot[1..17].copy_from_slice(&addr.octets());
			}
		}

		row.set_valid(index, true);
		row.0.make_mut()[field.offset..field.offset + 17].copy_from_slice(&slot);
	}

	pub fn set_undefined(&self, row: &mut EncodedRow, index: usize) {
		let field = self.field(index);
		row.set_valid(index, false);
		row.0.make_mut()[field.offset..field.offset + field.size].fill(0);
	}
}
