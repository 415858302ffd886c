// Copyright (c) collatedb.dev 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use std::ops::{Bound, RangeBounds};

use crate::EncodedKey;

/// A contiguous span of the encoded keyspace. A backing store resolves it
/// against plain byte order, which by construction equals the logical row
/// order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedKeyRange {
	pub start: Bound<EncodedKey>,
	pub end: Bound<EncodedKey>,
}

impl EncodedKeyRange {
	pub fn new(start: Bound<EncodedKey>, end: Bound<EncodedKey>) -> Self {
		Self {
			start,
			end,
		}
	}

	pub fn all() -> Self {
		Self::new(Bound::Unbounded, Bound::Unbounded)
	}

	/// Half-open range: inclusive start, exclusive end. `None` leaves that
	/// side unbounded.
	pub fn start_end(start: Option<EncodedKey>, end: Option<EncodedKey>) -> Self {
		Self::new(
			start.map_or(Bound::Unbounded, Bound::Included),
			end.map_or(Bound::Unbounded, Bound::Excluded),
		)
	}

	/// Every key beginning with `prefix`. The end bound is the prefix
	/// successor: the shortest byte string above every extension of the
	/// prefix. An all-`0xff` prefix has no successor, so that range runs
	/// to the end of the keyspace.
	pub fn prefix(prefix: &EncodedKey) -> Self {
		let end = match prefix_successor(prefix.as_slice()) {
			Some(bytes) => Bound::Excluded(EncodedKey::new(bytes)),
			None => Bound::Unbounded,
		};
		Self::new(Bound::Included(prefix.clone()), end)
	}
}

/// Drops trailing `0xff` bytes, then increments the last remaining byte.
fn prefix_successor(prefix: &[u8]) -> Option<Vec<u8>> {
	let cut = prefix.iter().rposition(|&byte| byte != 0xff)?;
	let mut successor = prefix[..=cut].to_vec();
	successor[cut] += 1;
	Some(successor)
}

impl RangeBounds<EncodedKey> for EncodedKeyRange {
	fn start_bound(&self) -> Bound<&EncodedKey> {
		self.start.as_ref()
	}

	fn end_bound(&self) -> Bound<&EncodedKey> {
		self.end.as_ref()
	}
}
