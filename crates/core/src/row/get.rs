// Copyright (c) collatedb.dev 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

use collatedb_type::{Timestamp, Type};

use crate::row::{EncodedRow, RowLayout};

impl RowLayout {
	pub fn get_i8(&self, row: &EncodedRow, index: usize) -> i8 {
		let field = self.field(index);
		debug_assert_eq!(field.ty, Type::Int1);
		row[field.offset] as i8
	}

	pub fn get_i16(&self, row: &EncodedRow, index: usize) -> i16 {
		let field = self.field(index);
		debug_assert_eq!(field.ty, Type::Int2);
		i16::from_le_bytes(read_array(row, field.offset))
	}

	pub fn get_i32(&self, row: &EncodedRow, index: usize) -> i32 {
		let field = self.field(index);
		debug_assert_eq!(field.ty, Type::Int4);
		i32::from_le_bytes(read_array(row, field.offset))
	}

	pub fn get_i64(&self, row: &EncodedRow, index: usize) -> i64 {
		let field = self.field(index);
		debug_assert_eq!(field.ty, Type::Int8);
		i64::from_le_bytes(read_array(row, field.offset))
	}

	pub fn get_timestamp(&self, row: &EncodedRow, index: usize) -> Timestamp {
		let field = self.field(index);
		debug_assert_eq!(field.ty, Type::Timestamp);
		Timestamp::from_millis(i64::from_le_bytes(read_array(row, field.offset)))
	}

	pub fn get_utf8<'a>(&self, row: &'a EncodedRow, index: usize) -> &'a str {
		let field = self.field(index);
		debug_assert_eq!(field.ty, Type::Utf8);

		let offset = u32::from_le_bytes(read_array(row, field.offset)) as usize;
		let len = u32::from_le_bytes(read_array(row, field.offset + 4)) as usize;
		let bytes = &row.as_slice()[offset..offset + len];
		// The dynamic section is only ever written by set_utf8, from text
		// that was valid when stored.
		unsafe { std::str::from_utf8_unchecked(bytes) }
	}

	pub fn get_inet(&self, row: &EncodedRow, index: usize) -> IpAddr {
		let field = self.field(index);
		debug_assert_eq!(field.ty, Type::Inet);

		let slot = &row.as_slice()[field.offset..field.offset + 17];
		if slot[0] == 4 {
			let mut octets = [0u8; 4];
			octets.copy_from_slice(&slot[1..5]);
			IpAddr::V4(Ipv4Addr::from(octets))
		} else {
			debug_assert_eq!(slot[0], 6);
			let mut octets = [0u8; 16];
			octets.copy_from_slice(&slot[1..17]);
			IpAddr::V6(Ipv6Addr::from(octets))
		}
	}
}

fn read_array<const N: usize>(row: &EncodedRow, offset: usize) -> [u8; N] {
	let mut bytes = [0u8; N];
	bytes.copy_from_slice(&row.as_slice()[offset..offset + N]);
	bytes
}

#[cfg(test)]
mod tests {
	mod get {
		use std::net::IpAddr;

		use collatedb_type::{Timestamp, Type};

		use crate::row::RowLayout;

		#[test]
		fn test_integers_round_trip() {
			let layout = RowLayout::new(&[Type::Int1, Type::Int2, Type::Int4, Type::Int8]);
			let mut row = layout.allocate_row();

			layout.set_i8(&mut row, 0, i8::MIN);
			layout.set_i16(&mut row, 1, -2);
			layout.set_i32(&mut row, 2, 0);
			layout.set_i64(&mut row, 3, i64::MAX);

			assert_eq!(layout.get_i8(&row, 0), i8::MIN);
			assert_eq!(layout.get_i16(&row, 1), -2);
			assert_eq!(layout.get_i32(&row, 2), 0);
			assert_eq!(layout.get_i64(&row, 3), i64::MAX);
		}

		#[test]
		fn test_timestamp_round_trip() {
			let layout = RowLayout::new(&[Type::Timestamp]);
			let mut row = layout.allocate_row();

			layout.set_timestamp(&mut row, 0, Timestamp::from_millis(-86_400_000));

			assert_eq!(layout.get_timestamp(&row, 0), Timestamp::from_millis(-86_400_000));
		}

		#[test]
		fn test_utf8_round_trip() {
			let layout = RowLayout::new(&[Type::Utf8, Type::Int4, Type::Utf8]);
			let mut row = layout.allocate_row();

			layout.set_utf8(&mut row, 0, "éagle");
			layout.set_i32(&mut row, 1, 9);
			layout.set_utf8(&mut row, 2, "");

			assert_eq!(layout.get_utf8(&row, 0), "éagle");
			assert_eq!(layout.get_utf8(&row, 2), "");
			assert_eq!(layout.get_i32(&row, 1), 9);
		}

		#[test]
		fn test_inet_round_trip() {
			let layout = RowLayout::new(&[Type::Inet, Type::Inet]);
			let mut row = layout.allocate_row();

			let v4: IpAddr = "1.2.3.4".parse().unwrap();
			let v6: IpAddr = "180::2978:9018:b288:3f6c".parse().unwrap();
			layout.set_inet(&mut row, 0, &v4);
			layout.set_inet(&mut row, 1, &v6);

			assert_eq!(layout.get_inet(&row, 0), v4);
			assert_eq!(layout.get_inet(&row, 1), v6);
		}
	}
}
