// Copyright (c) collatedb.dev 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use collatedb_type::Type;
use serde::{Deserialize, Serialize};

use crate::{
	SortDirection,
	catalog::{ColumnDef, ColumnIndex, TableId},
	error::SchemaError,
};

/// One clustering key position: which column, and which way it sorts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClusteringColumn {
	pub column: ColumnIndex,
	pub direction: SortDirection,
}

/// The two-part primary key: partition columns route a row to its
/// partition, clustering columns order rows within it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrimaryKeyDef {
	pub partition: Vec<ColumnIndex>,
	pub clustering: Vec<ClusteringColumn>,
}

/// A validated table definition. Constructed only through
/// [`TableDef::create`], so every index in the primary key is known to
/// resolve and every direction directive has already been applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableDef {
	pub id: TableId,
	pub name: String,
	pub columns: Vec<ColumnDef>,
	pub primary_key: PrimaryKeyDef,
}

#[derive(Debug, Clone)]
pub struct ColumnToCreate {
	pub name: String,
	pub ty: Type,
}

/// The unvalidated shape a caller hands in. Key membership and sort
/// directions are given by column name; [`TableDef::create`] resolves and
/// checks them.
#[derive(Debug, Clone)]
pub struct TableToCreate {
	pub table: String,
	pub columns: Vec<ColumnToCreate>,
	pub partition_key: Vec<String>,
	pub clustering_key: Vec<String>,
	pub clustering_order: Vec<(String, SortDirection)>,
}

impl TableDef {
	pub fn create(id: TableId, to_create: TableToCreate) -> Result<TableDef, SchemaError> {
		let mut columns: Vec<ColumnDef> = Vec::with_capacity(to_create.columns.len());
		for (position, column) in to_create.columns.iter().enumerate() {
			if column.ty == Type::Undefined {
				return Err(SchemaError::InvalidColumnType {
					column: column.name.clone(),
					ty: column.ty,
				});
			}
			if columns.iter().any(|existing| existing.name == column.name) {
				return Err(SchemaError::DuplicateColumn {
					column: column.name.clone(),
				});
			}
			columns.push(ColumnDef {
				name: column.name.clone(),
				ty: column.ty,
				index: ColumnIndex(position as u16),
			});
		}

		if to_create.partition_key.is_empty() {
			return Err(SchemaError::EmptyPartitionKey);
		}

		let mut partition: Vec<ColumnIndex> = Vec::with_capacity(to_create.partition_key.len());
		for name in &to_create.partition_key {
			let column = resolve(&columns, name)?;
			if partition.contains(&column.index) {
				return Err(SchemaError::DuplicateColumn {
					column: name.clone(),
				});
			}
			partition.push(column.index);
		}

		let mut clustering: Vec<ClusteringColumn> = Vec::with_capacity(to_create.clustering_key.len());
		for name in &to_create.clustering_key {
			let column = resolve(&columns, name)?;
			if partition.contains(&column.index) {
				return Err(SchemaError::ColumnInBothKeys {
					column: name.clone(),
				});
			}
			if clustering.iter().any(|entry| entry.column == column.index) {
				return Err(SchemaError::DuplicateColumn {
					column: name.clone(),
				});
			}
			clustering.push(ClusteringColumn {
				column: column.index,
				direction: SortDirection::Asc,
			});
		}

		let mut directed: Vec<ColumnIndex> = Vec::new();
		for (name, direction) in &to_create.clustering_order {
			let column = resolve(&columns, name)?;
			if partition.contains(&column.index) {
				return Err(SchemaError::OrderedPartitionColumn {
					column: name.clone(),
				});
			}
			let Some(entry) = clustering.iter_mut().find(|entry| entry.column == column.index) else {
				return Err(SchemaError::OrderedNonClusteringColumn {
					column: name.clone(),
				});
			};
			if directed.contains(&column.index) {
				return Err(SchemaError::DuplicateOrderDirective {
					column: name.clone(),
				});
			}
			entry.direction = *direction;
			directed.push(column.index);
		}

		Ok(TableDef {
			id,
			name: to_create.table,
			columns,
			primary_key: PrimaryKeyDef {
				partition,
				clustering,
			},
		})
	}

	pub fn column(&self, name: &str) -> Option<&ColumnDef> {
		self.columns.iter().find(|column| column.name == name)
	}

	/// Indexes inside a validated definition always resolve.
	pub fn column_at(&self, index: ColumnIndex) -> &ColumnDef {
		&self.columns[index.as_usize()]
	}

	/// Partition columns in declared key order.
	pub fn partition_columns(&self) -> impl Iterator<Item = &ColumnDef> {
		self.primary_key.partition.iter().map(|index| self.column_at(*index))
	}

	/// Clustering columns with their directions, in declared key order.
	pub fn clustering_columns(&self) -> impl Iterator<Item = (&ColumnDef, SortDirection)> {
		self.primary_key.clustering.iter().map(|entry| (self.column_at(entry.column), entry.direction))
	}

	pub fn is_key_column(&self, index: ColumnIndex) -> bool {
		self.primary_key.partition.contains(&index)
			|| self.primary_key.clustering.iter().any(|entry| entry.column == index)
	}

	/// Columns stored in the row payload rather than in the key.
	pub fn value_columns(&self) -> impl Iterator<Item = &ColumnDef> {
		self.columns.iter().filter(|column| !self.is_key_column(column.index))
	}
}

fn resolve<'a>(columns: &'a [ColumnDef], name: &str) -> Result<&'a ColumnDef, SchemaError> {
	columns.iter().find(|column| column.name == name).ok_or_else(|| SchemaError::UnknownColumn {
		column: name.to_string(),
	})
}

#[cfg(test)]
mod tests {
	mod create {
		use collatedb_type::Type;

		use crate::{
			SortDirection,
			catalog::{ColumnToCreate, TableDef, TableId, TableToCreate},
		};

		fn column(name: &str, ty: Type) -> ColumnToCreate {
			ColumnToCreate {
				name: name.to_string(),
				ty,
			}
		}

		fn to_create() -> TableToCreate {
			TableToCreate {
				table: "events".to_string(),
				columns: vec![
					column("h", Type::Int8),
					column("r1", Type::Int4),
					column("r2", Type::Utf8),
					column("payload", Type::Timestamp),
				],
				partition_key: vec!["h".to_string()],
				clustering_key: vec!["r1".to_string(), "r2".to_string()],
				clustering_order: vec![("r1".to_string(), SortDirection::Desc)],
			}
		}

		#[test]
		fn test_valid_definition() {
			let def = TableDef::create(TableId(1), to_create()).unwrap();

			assert_eq!(def.name, "events");
			assert_eq!(def.columns.len(), 4);
			assert_eq!(def.primary_key.partition.len(), 1);
			assert_eq!(def.primary_key.partition[0], 0u16);

			let clustering: Vec<_> = def.clustering_columns().collect();
			assert_eq!(clustering[0].0.name, "r1");
			assert_eq!(clustering[0].1, SortDirection::Desc);
			assert_eq!(clustering[1].0.name, "r2");
			assert_eq!(clustering[1].1, SortDirection::Asc);

			let values: Vec<_> = def.value_columns().map(|column| column.name.as_str()).collect();
			assert_eq!(values, vec!["payload"]);
		}

		#[test]
		fn test_empty_partition_key() {
			let mut to_create = to_create();
			to_create.partition_key.clear();
			let err = TableDef::create(TableId(1), to_create).unwrap_err();
			assert_eq!(err.code(), "SC_006");
		}

		#[test]
		fn test_unknown_partition_column() {
			let mut to_create = to_create();
			to_create.partition_key = vec!["missing".to_string()];
			let err = TableDef::create(TableId(1), to_create).unwrap_err();
			assert_eq!(err.code(), "SC_003");
		}

		#[test]
		fn test_duplicate_column() {
			let mut to_create = to_create();
			to_create.columns.push(column("h", Type::Int8));
			let err = TableDef::create(TableId(1), to_create).unwrap_err();
			assert_eq!(err.code(), "SC_004");
		}

		#[test]
		fn test_column_in_both_keys() {
			let mut to_create = to_create();
			to_create.clustering_key.push("h".to_string());
			let err = TableDef::create(TableId(1), to_create).unwrap_err();
			assert_eq!(err.code(), "SC_005");
		}

		#[test]
		fn test_undefined_column_type() {
			let mut to_create = to_create();
			to_create.columns.push(column("broken", Type::Undefined));
			let err = TableDef::create(TableId(1), to_create).unwrap_err();
			assert_eq!(err.code(), "SC_007");
		}

		#[test]
		fn test_order_directive_on_partition_column() {
			let mut to_create = to_create();
			to_create.clustering_order.push(("h".to_string(), SortDirection::Desc));
			let err = TableDef::create(TableId(1), to_create).unwrap_err();
			assert_eq!(err.code(), "SC_001");
		}

		#[test]
		fn test_order_directive_on_value_column() {
			let mut to_create = to_create();
			to_create.clustering_order.push(("payload".to_string(), SortDirection::Asc));
			let err = TableDef::create(TableId(1), to_create).unwrap_err();
			assert_eq!(err.code(), "SC_002");
		}

		#[test]
		fn test_duplicate_order_directive() {
			let mut to_create = to_create();
			to_create.clustering_order.push(("r1".to_string(), SortDirection::Asc));
			let err = TableDef::create(TableId(1), to_create).unwrap_err();
			assert_eq!(err.code(), "SC_008");
		}

		#[test]
		fn test_direction_defaults_to_ascending() {
			let mut to_create = to_create();
			to_create.clustering_order.clear();
			let def = TableDef::create(TableId(1), to_create).unwrap();
			assert!(def.clustering_columns().all(|(_, direction)| direction == SortDirection::Asc));
		}

		#[test]
		fn test_table_without_clustering_key() {
			let mut to_create = to_create();
			to_create.clustering_key.clear();
			to_create.clustering_order.clear();
			let def = TableDef::create(TableId(1), to_create).unwrap();
			assert!(def.primary_key.clustering.is_empty());
		}
	}
}
