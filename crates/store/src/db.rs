// Copyright (c) collatedb.dev 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use std::{collections::BTreeMap, sync::Arc};

use collatedb_core::{
	EncodedKey, Result, RowKeyLayout, SchemaError,
	catalog::{TableDef, TableId, TableToCreate},
};
use parking_lot::RwLock;
use tracing::debug;

use crate::{store::OrderedStore, table::Table};

/// The database facade: an in-memory catalog of table definitions over a
/// shared substrate. Clones share both.
#[derive(Clone)]
pub struct Db<S> {
	inner: Arc<DbInner<S>>,
}

struct DbInner<S> {
	store: S,
	catalog: RwLock<Catalog>,
}

struct Catalog {
	tables: BTreeMap<String, TableDef>,
	next_table_id: u64,
}

impl<S: OrderedStore> Db<S> {
	pub fn new(store: S) -> Self {
		Self {
			inner: Arc::new(DbInner {
				store,
				catalog: RwLock::new(Catalog {
					tables: BTreeMap::new(),
					next_table_id: 1,
				}),
			}),
		}
	}

	/// Validates and registers a table definition, returning a handle to
	/// the new table. Table ids are allocated monotonically and never
	/// reused, so keys of a dropped table can never alias a later one.
	pub fn create_table(&self, to_create: TableToCreate) -> Result<Table<S>> {
		let mut catalog = self.inner.catalog.write();
		if catalog.tables.contains_key(&to_create.table) {
			return Err(SchemaError::TableAlreadyExists {
				table: to_create.table,
			}
			.into());
		}

		let def = TableDef::create(TableId(catalog.next_table_id), to_create)?;
		catalog.next_table_id += 1;
		catalog.tables.insert(def.name.clone(), def.clone());
		debug!(table = %def.name, id = def.id.0, "table created");

		Ok(Table::new(def, self.inner.store.clone()))
	}

	/// Removes the definition and deletes the table's rows from the
	/// substrate.
	pub fn drop_table(&self, name: &str) -> Result<()> {
		let def = {
			let mut catalog = self.inner.catalog.write();
			catalog.tables.remove(name).ok_or_else(|| SchemaError::TableNotFound {
				table: name.to_string(),
			})?
		};

		let layout = RowKeyLayout::new(&def);
		let keys: Vec<EncodedKey> =
			self.inner.store.range(layout.table_range())?.map(|stored| stored.key).collect();
		for key in &keys {
			self.inner.store.remove(key)?;
		}
		debug!(table = name, rows = keys.len(), "table dropped");
		Ok(())
	}

	/// A handle to an existing table, or `None` when the name is unknown.
	pub fn table(&self, name: &str) -> Option<Table<S>> {
		let catalog = self.inner.catalog.read();
		catalog.tables.get(name).map(|def| Table::new(def.clone(), self.inner.store.clone()))
	}

	/// Registered table names in name order.
	pub fn tables(&self) -> Vec<String> {
		self.inner.catalog.read().tables.keys().cloned().collect()
	}
}

#[cfg(test)]
mod tests {
	use collatedb_core::catalog::{ColumnToCreate, TableToCreate};
	use collatedb_type::{Type, Value};

	use crate::{db::Db, memory::Memory};

	fn to_create(name: &str) -> TableToCreate {
		TableToCreate {
			table: name.to_string(),
			columns: vec![
				ColumnToCreate {
					name: "h".to_string(),
					ty: Type::Int8,
				},
				ColumnToCreate {
					name: "r1".to_string(),
					ty: Type::Int4,
				},
			],
			partition_key: vec!["h".to_string()],
			clustering_key: vec!["r1".to_string()],
			clustering_order: vec![],
		}
	}

	mod create_table {
		use super::*;

		#[test]
		fn test_duplicate_name_rejected() {
			let db = Db::new(Memory::new());
			db.create_table(to_create("events")).unwrap();

			let err = db.create_table(to_create("events")).unwrap_err();
			assert_eq!(err.code(), "SC_009");
		}

		#[test]
		fn test_ids_are_monotonic() {
			let db = Db::new(Memory::new());
			let first = db.create_table(to_create("a")).unwrap();
			let second = db.create_table(to_create("b")).unwrap();

			assert!(second.def().id.0 > first.def().id.0);
		}

		#[test]
		fn test_dropped_id_never_reused() {
			let db = Db::new(Memory::new());
			let first = db.create_table(to_create("a")).unwrap();
			let first_id = first.def().id.0;
			db.drop_table("a").unwrap();

			let next = db.create_table(to_create("a")).unwrap();
			assert!(next.def().id.0 > first_id);
		}
	}

	mod drop_table {
		use super::*;

		#[test]
		fn test_unknown_table_rejected() {
			let db = Db::new(Memory::new());
			let err = db.drop_table("missing").unwrap_err();
			assert_eq!(err.code(), "SC_010");
		}

		#[test]
		fn test_deletes_rows_of_dropped_table_only() {
			let db = Db::new(Memory::new());
			let a = db.create_table(to_create("a")).unwrap();
			let b = db.create_table(to_create("b")).unwrap();
			a.insert(&[Value::int8(1), Value::int4(1)]).unwrap();
			b.insert(&[Value::int8(1), Value::int4(1)]).unwrap();

			db.drop_table("a").unwrap();

			assert!(db.table("a").is_none());
			assert_eq!(db.tables(), vec!["b".to_string()]);
			assert!(b.contains_key(&[Value::int8(1)], &[Value::int4(1)]).unwrap());
		}

		#[test]
		fn test_recreated_table_starts_empty() {
			let db = Db::new(Memory::new());
			let table = db.create_table(to_create("events")).unwrap();
			table.insert(&[Value::int8(1), Value::int4(1)]).unwrap();
			db.drop_table("events").unwrap();

			let table = db.create_table(to_create("events")).unwrap();
			let scan = table.scan_partition(&[Value::int8(1)]).unwrap();
			assert!(scan.is_exhausted());
		}
	}
}
