// Copyright (c) collatedb.dev 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

//! Keycode is the lexicographical order-preserving binary encoding behind
//! every row key. Once a schema's values pass through it, comparing the
//! resulting byte strings as plain unsigned bytes gives the same answer as
//! comparing the values themselves under their declared sort directions, so
//! the storage layer never needs to understand the schema to keep rows in
//! order.
//!
//! Each field is framed by a one-byte marker: `0x00` for an absent value,
//! `0x01` for a present one. Absent therefore sorts before present. The
//! payload follows the marker:
//!
//! * Integers and timestamps: big-endian bytes with the sign bit flipped,
//!   so negative values sort below positive ones.
//! * Text: the raw UTF-8 bytes with `0x00` escaped as `0x00 0xFF`,
//!   terminated by `0x00 0x00`. The terminator sorts below every payload
//!   byte, which keeps a string ahead of its own extensions and makes the
//!   field boundary unambiguous without a length prefix.
//! * Inet: a one-byte family tag (`0x04` for v4, `0x06` for v6) followed by
//!   the raw address octets. All v4 addresses group before all v6.
//!
//! A column sorted descending complements every byte of its framed field,
//! marker included. That inverts the field's relative order while leaving
//! its boundaries recoverable: the decoder un-complements as it scans.
//!
//! The encoding is not self-describing. Decoding requires the column types
//! and directions, which the caller supplies from the table definition.

mod deserialize;
mod serialize;

pub use deserialize::KeyDeserializer;
pub use serialize::KeySerializer;

/// Marker byte of a field carrying no value.
pub(crate) const MARKER_UNDEFINED: u8 = 0x00;
/// Marker byte of a field carrying a payload.
pub(crate) const MARKER_DEFINED: u8 = 0x01;

/// A literal `0x00` inside a text payload is written as this pair.
pub(crate) const ESCAPE: [u8; 2] = [0x00, 0xFF];
/// Closes a text payload. Never produced by an escaped payload byte.
pub(crate) const TERMINATOR: [u8; 2] = [0x00, 0x00];

/// Family tag preceding four v4 octets.
pub(crate) const INET4_TAG: u8 = 0x04;
/// Family tag preceding sixteen v6 octets.
pub(crate) const INET6_TAG: u8 = 0x06;

/// Upper bound on the UTF-8 byte length of a single text key field.
pub const MAX_TEXT_FIELD_BYTES: usize = u16::MAX as usize;
