// Copyright (c) collatedb.dev 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

#![cfg_attr(not(debug_assertions), deny(warnings))]

pub use db::Db;
pub use memory::Memory;
pub use scan::RowScan;
pub use store::{
	OrderedStore, RowIter, StoreContains, StoreGet, StoreRange, StoreRangeRev, StoreRemove, StoreScan, StoreScanRev,
	StoreSet, StoredRow,
};
pub use table::{Row, Table};

mod db;
pub mod memory;
mod scan;
mod store;
mod table;
