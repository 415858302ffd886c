// Copyright (c) collatedb.dev 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use std::net::IpAddr;

use collatedb_type::Value;

use crate::{
	EncodedKey, SortDirection,
	encoding::keycode::{ESCAPE, INET4_TAG, INET6_TAG, MARKER_DEFINED, MARKER_UNDEFINED, TERMINATOR},
};

/// Builds a key left to right. Fixed framing goes through the `extend_*`
/// primitives, which write plain big-endian bytes; schema-driven fields go
/// through [`KeySerializer::extend_field`], which applies the field framing
/// and the column's sort direction.
pub struct KeySerializer {
	output: Vec<u8>,
}

impl KeySerializer {
	pub fn new() -> Self {
		Self {
			output: Vec::new(),
		}
	}

	pub fn with_capacity(capacity: usize) -> Self {
		Self {
			output: Vec::with_capacity(capacity),
		}
	}

	pub fn extend_u8(&mut self, value: u8) -> &mut Self {
		self.output.push(value);
		self
	}

	pub fn extend_u16(&mut self, value: u16) -> &mut Self {
		self.output.extend_from_slice(&value.to_be_bytes());
		self
	}

	pub fn extend_u64(&mut self, value: u64) -> &mut Self {
		self.output.extend_from_slice(&value.to_be_bytes());
		self
	}

	pub fn extend_from_slice(&mut self, bytes: &[u8]) -> &mut Self {
		self.output.extend_from_slice(bytes);
		self
	}

	/// Appends one field in its order-preserving form. The caller has
	/// already validated the value against the column, so a mismatched
	/// variant here is a bug rather than an input error.
	pub fn extend_field(&mut self, value: &Value, direction: SortDirection) -> &mut Self {
		let start = self.output.len();
		match value {
			Value::Undefined => {
				self.output.push(MARKER_UNDEFINED);
			}
			Value::Int1(v) => self.extend_int_payload(&v.to_be_bytes()),
			Value::Int2(v) => self.extend_int_payload(&v.to_be_bytes()),
			Value::Int4(v) => self.extend_int_payload(&v.to_be_bytes()),
			Value::Int8(v) => self.extend_int_payload(&v.to_be_bytes()),
			Value::Timestamp(ts) => self.extend_int_payload(&ts.to_millis().to_be_bytes()),
			Value::Utf8(text) => {
				self.output.push(MARKER_DEFINED);
				for &byte in text.as_bytes() {
					if byte == 0x00 {
						self.output.extend_from_slice(&ESCAPE);
					} else {
						self.output.push(byte);
					}
				}
				self.output.extend_from_slice(&TERMINATOR);
			}
			Value::Inet(addr) => {
				self.output.push(MARKER_DEFINED);
				match addr {
					IpAddr::V4(v4) => {
						self.output.push(INET4_TAG);
						self.output.extend_from_slice(&v4.octets());
					}
					IpAddr::V6(v6) => {
						self.output.push(INET6_TAG);
						self.output.extend_from_slice(&v6.octets());
					}
				}
			}
		}
		if direction.is_desc() {
			for byte in &mut self.output[start..] {
				*byte = !*byte;
			}
		}
		self
	}

	fn extend_int_payload(&mut self, be: &[u8]) {
		self.output.push(MARKER_DEFINED);
		let start = self.output.len();
		self.output.extend_from_slice(be);
		// Flipping the sign bit maps two's complement onto unsigned order.
		self.output[start] ^= 0x80;
	}

	pub fn to_encoded_key(self) -> EncodedKey {
		EncodedKey::new(self.output)
	}
}

impl Default for KeySerializer {
	fn default() -> Self {
		Self::new()
	}
}
