// Copyright (c) collatedb.dev 2025
// This file is licensed under the MIT, see license.md file

//! Logical column types and values.
//!
//! The closed [`Type`]/[`Value`] pair is the vocabulary every other crate in
//! the workspace speaks: codecs dispatch over it, schemas are declared in it,
//! rows are decoded back into it.

mod value;

pub use value::{Timestamp, Type, Value};
