// Copyright (c) collatedb.dev 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

//! Seeded value generators for order and round-trip tests. Every
//! generator is driven by an explicit [`StdRng`], so a failing case is
//! reproducible from its seed.

use std::{
	collections::BTreeSet,
	net::{IpAddr, Ipv4Addr, Ipv6Addr},
};

use collatedb_core::SortDirection;
use collatedb_type::{Timestamp, Type, Value};
use rand::{RngExt, SeedableRng, rngs::StdRng, seq::SliceRandom};

/// Letters, digits, punctuation and spaces; everything a text key field
/// is expected to survive.
const TEXT_CHARS: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789 !#$%&()*+,-./:;<=>?@[]^_{}~";

/// Timestamps stay within 1900..2100 so failures print as recognizable
/// instants.
const TIMESTAMP_RANGE_MILLIS: std::ops::RangeInclusive<i64> = -2_208_988_800_000..=4_102_444_800_000;

pub fn rng(seed: u64) -> StdRng {
	StdRng::seed_from_u64(seed)
}

pub fn random_value(rng: &mut StdRng, ty: Type) -> Value {
	match ty {
		Type::Undefined => Value::Undefined,
		Type::Int1 => Value::Int1(rng.random()),
		Type::Int2 => Value::Int2(rng.random()),
		Type::Int4 => Value::Int4(rng.random()),
		Type::Int8 => Value::Int8(rng.random()),
		Type::Utf8 => Value::Utf8(random_text(rng)),
		Type::Timestamp => Value::Timestamp(Timestamp::from_millis(rng.random_range(TIMESTAMP_RANGE_MILLIS))),
		Type::Inet => Value::Inet(random_inet(rng)),
	}
}

pub fn random_text(rng: &mut StdRng) -> String {
	let len = rng.random_range(1..=12);
	(0..len).map(|_| TEXT_CHARS[rng.random_range(0..TEXT_CHARS.len())] as char).collect()
}

pub fn random_inet(rng: &mut StdRng) -> IpAddr {
	if rng.random_bool(0.5) {
		IpAddr::V4(Ipv4Addr::from(rng.random::<u32>()))
	} else {
		IpAddr::V6(Ipv6Addr::from(rng.random::<u128>()))
	}
}

/// `n` distinct values of one type in ascending logical order. `n` must
/// stay below the type's cardinality or this will spin forever.
pub fn distinct_sorted(rng: &mut StdRng, ty: Type, n: usize) -> Vec<Value> {
	let mut values = BTreeSet::new();
	while values.len() < n {
		values.insert(random_value(rng, ty));
	}
	values.into_iter().collect()
}

/// The values in the order a scan over a column of the given direction
/// must yield them.
pub fn in_direction(mut values: Vec<Value>, direction: SortDirection) -> Vec<Value> {
	values.sort();
	if direction.is_desc() {
		values.reverse();
	}
	values
}

/// A copy in random insertion order, so tests never depend on inserting
/// pre-sorted data.
pub fn shuffled(rng: &mut StdRng, mut values: Vec<Value>) -> Vec<Value> {
	values.shuffle(rng);
	values
}
