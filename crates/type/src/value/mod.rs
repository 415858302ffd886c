// Copyright (c) collatedb.dev 2025
// This file is licensed under the MIT, see license.md file

use std::{
	cmp::Ordering,
	fmt::{Display, Formatter},
	net::IpAddr,
};

use serde::{Deserialize, Serialize};

mod timestamp;
mod r#type;

pub use timestamp::Timestamp;
pub use r#type::Type;

/// A typed column value, represented as a native Rust type.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Value {
	/// Value is not defined (think null in common programming languages)
	Undefined,
	/// A 1-byte signed integer
	Int1(i8),
	/// A 2-byte signed integer
	Int2(i16),
	/// A 4-byte signed integer
	Int4(i32),
	/// An 8-byte signed integer
	Int8(i64),
	/// A UTF-8 encoded text
	Utf8(String),
	/// A millisecond-precision point in time
	Timestamp(Timestamp),
	/// An IPv4 or IPv6 address
	Inet(IpAddr),
}

impl Value {
	pub fn undefined() -> Self {
		Value::Undefined
	}

	pub fn int1(v: impl Into<i8>) -> Self {
		Value::Int1(v.into())
	}

	pub fn int2(v: impl Into<i16>) -> Self {
		Value::Int2(v.into())
	}

	pub fn int4(v: impl Into<i32>) -> Self {
		Value::Int4(v.into())
	}

	pub fn int8(v: impl Into<i64>) -> Self {
		Value::Int8(v.into())
	}

	pub fn utf8(v: impl Into<String>) -> Self {
		Value::Utf8(v.into())
	}

	pub fn timestamp(v: impl Into<Timestamp>) -> Self {
		Value::Timestamp(v.into())
	}

	pub fn inet(v: impl Into<IpAddr>) -> Self {
		Value::Inet(v.into())
	}
}

impl PartialOrd for Value {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

impl Ord for Value {
	fn cmp(&self, other: &Self) -> Ordering {
		match (self, other) {
			(Value::Undefined, Value::Undefined) => Ordering::Equal,
			(Value::Int1(l), Value::Int1(r)) => l.cmp(r),
			(Value::Int2(l), Value::Int2(r)) => l.cmp(r),
			(Value::Int4(l), Value::Int4(r)) => l.cmp(r),
			(Value::Int8(l), Value::Int8(r)) => l.cmp(r),
			(Value::Utf8(l), Value::Utf8(r)) => l.cmp(r),
			(Value::Timestamp(l), Value::Timestamp(r)) => l.cmp(r),
			// IpAddr orders all v4 before all v6, raw octets within
			// a family, which matches the key encoding.
			(Value::Inet(l), Value::Inet(r)) => l.cmp(r),
			(left, right) => {
				unimplemented!("cmp {left:?} {right:?}")
			}
		}
	}
}

impl Display for Value {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			Value::Undefined => f.write_str("undefined"),
			Value::Int1(value) => Display::fmt(value, f),
			Value::Int2(value) => Display::fmt(value, f),
			Value::Int4(value) => Display::fmt(value, f),
			Value::Int8(value) => Display::fmt(value, f),
			Value::Utf8(value) => Display::fmt(value, f),
			Value::Timestamp(value) => Display::fmt(value, f),
			Value::Inet(value) => Display::fmt(value, f),
		}
	}
}

impl Value {
	pub fn get_type(&self) -> Type {
		match self {
			Value::Undefined => Type::Undefined,
			Value::Int1(_) => Type::Int1,
			Value::Int2(_) => Type::Int2,
			Value::Int4(_) => Type::Int4,
			Value::Int8(_) => Type::Int8,
			Value::Utf8(_) => Type::Utf8,
			Value::Timestamp(_) => Type::Timestamp,
			Value::Inet(_) => Type::Inet,
		}
	}

	pub fn is_undefined(&self) -> bool {
		matches!(self, Value::Undefined)
	}
}

#[cfg(test)]
mod tests {
	mod cmp {
		use std::net::IpAddr;

		use crate::Value;

		#[test]
		fn test_int4() {
			assert!(Value::int4(3) < Value::int4(5));
			assert!(Value::int4(-1) < Value::int4(0));
			assert!(Value::int4(i32::MIN) < Value::int4(i32::MAX));
		}

		#[test]
		fn test_utf8() {
			assert!(Value::utf8("ant") < Value::utf8("bear"));
			assert!(Value::utf8("dog") < Value::utf8("dog1"));
			assert!(Value::utf8("") < Value::utf8(" "));
		}

		#[test]
		fn test_inet_family_blocks() {
			let v4_low: IpAddr = "1.2.3.4".parse().unwrap();
			let v4_high: IpAddr = "2.2.3.4".parse().unwrap();
			let v6: IpAddr = "180::2978:9018:b288:3f6c".parse().unwrap();

			assert!(Value::inet(v4_low) < Value::inet(v4_high));
			assert!(Value::inet(v4_high) < Value::inet(v6));
		}
	}

	mod get_type {
		use crate::{Timestamp, Type, Value};

		#[test]
		fn test_all_variants() {
			assert_eq!(Value::Undefined.get_type(), Type::Undefined);
			assert_eq!(Value::int1(1i8).get_type(), Type::Int1);
			assert_eq!(Value::int2(1i16).get_type(), Type::Int2);
			assert_eq!(Value::int4(1).get_type(), Type::Int4);
			assert_eq!(Value::int8(1i64).get_type(), Type::Int8);
			assert_eq!(Value::utf8("x").get_type(), Type::Utf8);
			assert_eq!(Value::timestamp(Timestamp::from_millis(1)).get_type(), Type::Timestamp);
			assert_eq!(
				Value::Inet("10.0.0.1".parse().unwrap()).get_type(),
				Type::Inet
			);
		}
	}
}
