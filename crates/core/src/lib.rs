// Copyright (c) collatedb.dev 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

#![cfg_attr(not(debug_assertions), deny(warnings))]

pub use error::{CorruptKeyError, EncodingError, Error, Result, SchemaError};
pub use key::{EncodedKey, EncodedKeyRange, KeyKind, RowKey, RowKeyLayout};
pub use row::{EncodedRow, RowLayout};
pub use sort::SortDirection;
pub use util::CowVec;

pub mod catalog;
pub mod encoding;
mod error;
mod key;
pub mod row;
mod sort;
pub mod util;
