// Copyright (c) collatedb.dev 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

mod cowvec;
pub mod hash;

pub use cowvec::CowVec;
