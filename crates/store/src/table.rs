// Copyright (c) collatedb.dev 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use std::{ops::Deref, sync::Arc};

use collatedb_core::{EncodingError, Result, RowKeyLayout, RowLayout, catalog::TableDef, row::EncodedRow};
use collatedb_type::{Type, Value};
use tracing::trace;

use crate::{
	scan::RowScan,
	store::{OrderedStore, StoredRow},
};

/// A decoded row, values in the table's declared column order.
#[derive(Debug, Clone, PartialEq)]
pub struct Row(pub Vec<Value>);

impl Deref for Row {
	type Target = [Value];

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

/// Handle to one table: its definition, the codecs derived from it, and
/// the shared substrate. Key columns live in the encoded key; the other
/// columns travel as the row payload.
#[derive(Debug, Clone)]
pub struct Table<S> {
	def: Arc<TableDef>,
	key_layout: RowKeyLayout,
	row_layout: RowLayout,
	store: S,
}

impl<S: OrderedStore> Table<S> {
	pub(crate) fn new(def: TableDef, store: S) -> Self {
		let key_layout = RowKeyLayout::new(&def);
		let value_types: Vec<Type> = def.value_columns().map(|column| column.ty).collect();
		let row_layout = RowLayout::new(&value_types);
		Self {
			def: Arc::new(def),
			key_layout,
			row_layout,
			store,
		}
	}

	pub fn def(&self) -> &TableDef {
		&self.def
	}

	/// Inserts a full row given in declared column order. An existing row
	/// under the same primary key is replaced; key columns never change.
	pub fn insert(&self, row: &[Value]) -> Result<()> {
		let key = self.key_layout.encode_key(row)?;
		let payload = self.encode_payload(row)?;
		self.store.set(&key, payload)
	}

	/// Looks up one row by its primary key parts.
	pub fn get(&self, partition: &[Value], clustering: &[Value]) -> Result<Option<Row>> {
		let key = self.key_layout.key_of(partition, clustering)?;
		match self.store.get(&key)? {
			Some(stored) => Ok(Some(self.assemble(&stored)?)),
			None => Ok(None),
		}
	}

	pub fn contains_key(&self, partition: &[Value], clustering: &[Value]) -> Result<bool> {
		let key = self.key_layout.key_of(partition, clustering)?;
		self.store.contains(&key)
	}

	/// Removes one row by its primary key parts. Absent rows are not an
	/// error.
	pub fn delete(&self, partition: &[Value], clustering: &[Value]) -> Result<()> {
		let key = self.key_layout.key_of(partition, clustering)?;
		self.store.remove(&key)
	}

	/// All rows of one partition in declared clustering order.
	pub fn scan_partition(&self, partition: &[Value]) -> Result<RowScan<'_, S, S::Range<'_>>> {
		let range = self.key_layout.partition_range(partition)?;
		trace!(table = %self.def.name, "partition scan");
		Ok(RowScan::new(self, self.store.range(range)?))
	}

	/// All rows of one partition in the exact reverse of declared order.
	pub fn scan_partition_rev(&self, partition: &[Value]) -> Result<RowScan<'_, S, S::RangeRev<'_>>> {
		let range = self.key_layout.partition_range(partition)?;
		trace!(table = %self.def.name, "reverse partition scan");
		Ok(RowScan::new(self, self.store.range_rev(range)?))
	}

	/// Rows of one partition whose leading clustering columns equal the
	/// given values, in declared order.
	pub fn scan_prefix(&self, partition: &[Value], clustering: &[Value]) -> Result<RowScan<'_, S, S::Range<'_>>> {
		let range = self.key_layout.clustering_range(partition, clustering)?;
		trace!(table = %self.def.name, "clustering prefix scan");
		Ok(RowScan::new(self, self.store.range(range)?))
	}

	/// Like [`Table::scan_prefix`], walked back to front.
	pub fn scan_prefix_rev(
		&self,
		partition: &[Value],
		clustering: &[Value],
	) -> Result<RowScan<'_, S, S::RangeRev<'_>>> {
		let range = self.key_layout.clustering_range(partition, clustering)?;
		trace!(table = %self.def.name, "reverse clustering prefix scan");
		Ok(RowScan::new(self, self.store.range_rev(range)?))
	}

	fn encode_payload(&self, row: &[Value]) -> Result<EncodedRow> {
		let mut payload = self.row_layout.allocate_row();
		for (slot, column) in self.def.value_columns().enumerate() {
			let value = &row[column.index.as_usize()];
			if !value.is_undefined() && value.get_type() != column.ty {
				return Err(EncodingError::TypeMismatch {
					column: column.name.clone(),
					expected: column.ty,
					actual: value.get_type(),
				}
				.into());
			}
			self.row_layout.set_value(&mut payload, slot, value);
		}
		Ok(payload)
	}

	/// Rebuilds the full row from its two stored halves.
	pub(crate) fn assemble(&self, stored: &StoredRow) -> Result<Row> {
		let key = self.key_layout.decode_key(&stored.key)?;
		let payload = self.row_layout.decode_values(&stored.row);

		let mut values = vec![Value::Undefined; self.def.columns.len()];
		for (value, column) in key.partition.into_iter().zip(self.def.partition_columns()) {
			values[column.index.as_usize()] = value;
		}
		for (value, (column, _)) in key.clustering.into_iter().zip(self.def.clustering_columns()) {
			values[column.index.as_usize()] = value;
		}
		for (value, column) in payload.into_iter().zip(self.def.value_columns()) {
			values[column.index.as_usize()] = value;
		}
		Ok(Row(values))
	}
}
