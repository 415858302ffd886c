// Copyright (c) collatedb.dev 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use xxhash_rust::xxh3::xxh3_64;

/// Fold the xxh3 hash of the encoded partition fields down to the 16-bit
/// bucket stored in the key prefix. Collisions are legal; the appended field
/// bytes keep colliding partitions apart.
pub fn partition_hash(bytes: &[u8]) -> u16 {
	(xxh3_64(bytes) & 0xFFFF) as u16
}
