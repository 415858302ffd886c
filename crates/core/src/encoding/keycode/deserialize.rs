// Copyright (c) collatedb.dev 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

use collatedb_type::{Timestamp, Type, Value};

use crate::{
	SortDirection,
	encoding::keycode::{INET4_TAG, INET6_TAG, MARKER_DEFINED, MARKER_UNDEFINED},
	error::CorruptKeyError,
};

/// Reads a key back left to right, advancing through the input slice. The
/// framing primitives mirror [`super::KeySerializer`]; fields additionally
/// need the column type and direction, since the bytes alone do not say
/// where a field ends or whether it was complemented.
pub struct KeyDeserializer<'a> {
	input: &'a [u8],
}

impl<'a> KeyDeserializer<'a> {
	pub fn from_bytes(input: &'a [u8]) -> Self {
		Self {
			input,
		}
	}

	pub fn read_u8(&mut self) -> Result<u8, CorruptKeyError> {
		Ok(self.take(1)?[0])
	}

	pub fn read_u16(&mut self) -> Result<u16, CorruptKeyError> {
		let bytes = self.take(2)?;
		Ok(u16::from_be_bytes([bytes[0], bytes[1]]))
	}

	pub fn read_u64(&mut self) -> Result<u64, CorruptKeyError> {
		let bytes = self.take(8)?;
		let mut be = [0u8; 8];
		be.copy_from_slice(bytes);
		Ok(u64::from_be_bytes(be))
	}

	pub fn remaining(&self) -> usize {
		self.input.len()
	}

	pub fn is_empty(&self) -> bool {
		self.input.is_empty()
	}

	/// Reads one field encoded by [`super::KeySerializer::extend_field`]
	/// with the same type and direction.
	pub fn read_field(&mut self, ty: Type, direction: SortDirection) -> Result<Value, CorruptKeyError> {
		let mask = if direction.is_desc() {
			0xFF
		} else {
			0x00
		};

		match self.read_u8()? ^ mask {
			MARKER_UNDEFINED => return Ok(Value::Undefined),
			MARKER_DEFINED => {}
			byte => {
				return Err(CorruptKeyError::InvalidMarker {
					byte,
				});
			}
		}

		match ty {
			// No encoder output carries a defined payload for an
			// undefined-typed column.
			Type::Undefined => Err(CorruptKeyError::InvalidMarker {
				byte: MARKER_DEFINED,
			}),
			Type::Int1 => {
				let bytes = self.take(1)?;
				Ok(Value::Int1((bytes[0] ^ mask ^ 0x80) as i8))
			}
			Type::Int2 => {
				let bytes = self.take(2)?;
				let be = [bytes[0] ^ mask ^ 0x80, bytes[1] ^ mask];
				Ok(Value::Int2(i16::from_be_bytes(be)))
			}
			Type::Int4 => {
				let bytes = self.take(4)?;
				let mut be = [0u8; 4];
				for (slot, &byte) in be.iter_mut().zip(bytes) {
					*slot = byte ^ mask;
				}
				be[0] ^= 0x80;
				Ok(Value::Int4(i32::from_be_bytes(be)))
			}
			Type::Int8 => Ok(Value::Int8(self.read_sign_flipped_i64(mask)?)),
			Type::Timestamp => Ok(Value::Timestamp(Timestamp::from_millis(self.read_sign_flipped_i64(mask)?))),
			Type::Utf8 => {
				let mut bytes = Vec::new();
				loop {
					let Some((&first, rest)) = self.input.split_first() else {
						return Err(CorruptKeyError::MissingTerminator);
					};
					self.input = rest;
					let logical = first ^ mask;
					if logical != 0x00 {
						bytes.push(logical);
						continue;
					}
					let Some((&second, rest)) = self.input.split_first() else {
						return Err(CorruptKeyError::MissingTerminator);
					};
					self.input = rest;
					match second ^ mask {
						0x00 => break,
						0xFF => bytes.push(0x00),
						byte => {
							return Err(CorruptKeyError::InvalidEscape {
								byte,
							});
						}
					}
				}
				let text = String::from_utf8(bytes).map_err(|_| CorruptKeyError::InvalidUtf8)?;
				Ok(Value::Utf8(text))
			}
			Type::Inet => match self.read_u8()? ^ mask {
				INET4_TAG => {
					let bytes = self.take(4)?;
					let mut octets = [0u8; 4];
					for (slot, &byte) in octets.iter_mut().zip(bytes) {
						*slot = byte ^ mask;
					}
					Ok(Value::Inet(IpAddr::V4(Ipv4Addr::from(octets))))
				}
				INET6_TAG => {
					let bytes = self.take(16)?;
					let mut octets = [0u8; 16];
					for (slot, &byte) in octets.iter_mut().zip(bytes) {
						*slot = byte ^ mask;
					}
					Ok(Value::Inet(IpAddr::V6(Ipv6Addr::from(octets))))
				}
				tag => Err(CorruptKeyError::UnknownInetFamily {
					tag,
				}),
			},
		}
	}

	fn read_sign_flipped_i64(&mut self, mask: u8) -> Result<i64, CorruptKeyError> {
		let bytes = self.take(8)?;
		let mut be = [0u8; 8];
		for (slot, &byte) in be.iter_mut().zip(bytes) {
			*slot = byte ^ mask;
		}
		be[0] ^= 0x80;
		Ok(i64::from_be_bytes(be))
	}

	fn take(&mut self, len: usize) -> Result<&'a [u8], CorruptKeyError> {
		if self.input.len() < len {
			return Err(CorruptKeyError::Truncated);
		}
		let (head, rest) = self.input.split_at(len);
		self.input = rest;
		Ok(head)
	}
}
