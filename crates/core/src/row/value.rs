// Copyright (c) collatedb.dev 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use collatedb_type::{Type, Value};

use crate::row::{EncodedRow, RowLayout};

impl RowLayout {
	/// Encodes one value per column into a fresh row. Callers validate
	/// arity and column types against the table definition first.
	pub fn encode_values(&self, values: &[Value]) -> EncodedRow {
		debug_assert_eq!(values.len(), self.fields.len());
		let mut row = self.allocate_row();
		for (index, value) in values.iter().enumerate() {
			self.set_value(&mut row, index, value);
		}
		row
	}

	pub fn decode_values(&self, row: &EncodedRow) -> Vec<Value> {
		(0..self.fields.len()).map(|index| self.get_value(row, index)).collect()
	}

	pub fn set_value(&self, row: &mut EncodedRow, index: usize, value: &Value) {
		match (self.field(index).ty, value) {
			(_, Value::Undefined) => self.set_undefined(row, index),
			(Type::Int1, Value::Int1(v)) => self.set_i8(row, index, *v),
			(Type::Int2, Value::Int2(v)) => self.set_i16(row, index, *v),
			(Type::Int4, Value::Int4(v)) => self.set_i32(row, index, *v),
			(Type::Int8, Value::Int8(v)) => self.set_i64(row, index, *v),
			(Type::Utf8, Value::Utf8(v)) => self.set_utf8(row, index, v),
			(Type::Timestamp, Value::Timestamp(v)) => self.set_timestamp(row, index, *v),
			(Type::Inet, Value::Inet(v)) => self.set_inet(row, index, v),
			(ty, value) => unreachable!("slot {ty:?} cannot hold {value:?}"),
		}
	}

	pub fn get_value(&self, row: &EncodedRow, index: usize) -> Value {
		if !row.is_defined(index) {
			return Value::Undefined;
		}
		match self.field(index).ty {
			Type::Undefined => Value::Undefined,
			Type::Int1 => Value::Int1(self.get_i8(row, index)),
			Type::Int2 => Value::Int2(self.get_i16(row, index)),
			Type::Int4 => Value::Int4(self.get_i32(row, index)),
			Type::Int8 => Value::Int8(self.get_i64(row, index)),
			Type::Utf8 => Value::Utf8(self.get_utf8(row, index).to_string()),
			Type::Timestamp => Value::Timestamp(self.get_timestamp(row, index)),
			Type::Inet => Value::Inet(self.get_inet(row, index)),
		}
	}
}

#[cfg(test)]
mod tests {
	mod encode_values {
		use collatedb_type::{Type, Value};

		use crate::row::RowLayout;

		fn layout() -> RowLayout {
			RowLayout::new(&[
				Type::Int1,
				Type::Int2,
				Type::Int4,
				Type::Int8,
				Type::Utf8,
				Type::Timestamp,
				Type::Inet,
			])
		}

		#[test]
		fn test_round_trip() {
			let layout = layout();
			let values = vec![
				Value::int1(-3i8),
				Value::int2(500i16),
				Value::int4(-70_000),
				Value::int8(1i64 << 40),
				Value::utf8("dog"),
				Value::timestamp(1723686000123i64),
				Value::Inet("180::2978:9018:b288:3f6c".parse().unwrap()),
			];

			let row = layout.encode_values(&values);

			assert_eq!(layout.decode_values(&row), values);
		}

		#[test]
		fn test_undefined_columns() {
			let layout = layout();
			let values = vec![
				Value::Undefined,
				Value::int2(1i16),
				Value::Undefined,
				Value::Undefined,
				Value::Undefined,
				Value::Undefined,
				Value::Undefined,
			];

			let row = layout.encode_values(&values);

			assert_eq!(layout.decode_values(&row), values);
			assert!(!row.is_defined(0));
			assert!(row.is_defined(1));
		}

		#[test]
		fn test_empty_text_stays_defined() {
			let layout = RowLayout::new(&[Type::Utf8]);

			let row = layout.encode_values(&[Value::utf8("")]);

			assert!(row.is_defined(0));
			assert_eq!(layout.decode_values(&row), vec![Value::utf8("")]);
		}
	}
}
