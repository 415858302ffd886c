// Copyright (c) collatedb.dev 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use collatedb_type::{Type, Value};

use crate::{
	EncodedKey, EncodedKeyRange, SortDirection,
	catalog::{TableDef, TableId},
	encoding::keycode::{KeyDeserializer, KeySerializer, MAX_TEXT_FIELD_BYTES},
	error::{CorruptKeyError, EncodingError},
	key::{KEY_VERSION, KeyKind},
	util::hash::partition_hash,
};

/// Version, kind, table id and partition hash ahead of the key fields.
const FRAMING_LEN: usize = 12;

/// Turns rows of one table into encoded keys and back.
///
/// A key is laid out as
///
/// ```text
/// [version u8][kind u8][table id u64][partition hash u16][partition fields][clustering fields]
/// ```
///
/// The framing is plain big-endian, so keys group by table first and then
/// by partition hash. Partition fields always encode ascending; clustering
/// fields carry their column's declared direction.
#[derive(Debug, Clone)]
pub struct RowKeyLayout {
	table: TableId,
	columns: usize,
	partition: Vec<KeyField>,
	clustering: Vec<KeyField>,
}

#[derive(Debug, Clone)]
struct KeyField {
	/// Position of the column in the declared row order.
	index: usize,
	name: String,
	ty: Type,
	direction: SortDirection,
}

/// The logical key recovered from an encoded row key.
#[derive(Debug, Clone, PartialEq)]
pub struct RowKey {
	pub partition: Vec<Value>,
	pub clustering: Vec<Value>,
}

impl RowKeyLayout {
	pub fn new(def: &TableDef) -> Self {
		let partition = def
			.partition_columns()
			.map(|column| KeyField {
				index: column.index.as_usize(),
				name: column.name.clone(),
				ty: column.ty,
				direction: SortDirection::Asc,
			})
			.collect();

		let clustering = def
			.clustering_columns()
			.map(|(column, direction)| KeyField {
				index: column.index.as_usize(),
				name: column.name.clone(),
				ty: column.ty,
				direction,
			})
			.collect();

		Self {
			table: def.id,
			columns: def.columns.len(),
			partition,
			clustering,
		}
	}

	/// Encodes the key of a full row given in declared column order.
	pub fn encode_key(&self, row: &[Value]) -> Result<EncodedKey, EncodingError> {
		if row.len() != self.columns {
			return Err(EncodingError::ColumnCountMismatch {
				expected: self.columns,
				actual: row.len(),
			});
		}

		let selected: Vec<&Value> = self.partition.iter().map(|field| &row[field.index]).collect();
		let partition_bytes = self.encode_partition_fields(&selected)?;

		let mut key = self.framed(&partition_bytes);
		for field in &self.clustering {
			let value = &row[field.index];
			check_field(field, value)?;
			key.extend_field(value, field.direction);
		}
		Ok(key.to_encoded_key())
	}

	/// Key prefix shared by every row of one partition. Takes the
	/// partition values in partition-key order.
	pub fn partition_prefix(&self, partition: &[Value]) -> Result<EncodedKey, EncodingError> {
		if partition.len() != self.partition.len() {
			return Err(EncodingError::ColumnCountMismatch {
				expected: self.partition.len(),
				actual: partition.len(),
			});
		}

		let selected: Vec<&Value> = partition.iter().collect();
		let partition_bytes = self.encode_partition_fields(&selected)?;
		Ok(self.framed(&partition_bytes).to_encoded_key())
	}

	/// The contiguous span holding every row of one partition.
	pub fn partition_range(&self, partition: &[Value]) -> Result<EncodedKeyRange, EncodingError> {
		Ok(EncodedKeyRange::prefix(&self.partition_prefix(partition)?))
	}

	/// Key prefix for rows of one partition whose leading clustering
	/// columns equal `clustering`. Equality only: a direction flip changes
	/// the field's bytes but not the fact that equal values share them.
	pub fn clustering_prefix(&self, partition: &[Value], clustering: &[Value]) -> Result<EncodedKey, EncodingError> {
		if clustering.len() > self.clustering.len() {
			return Err(EncodingError::ColumnCountMismatch {
				expected: self.clustering.len(),
				actual: clustering.len(),
			});
		}

		let prefix = self.partition_prefix(partition)?;
		let mut key = KeySerializer::with_capacity(prefix.len() + clustering.len() * 16);
		key.extend_from_slice(prefix.as_slice());
		for (field, value) in self.clustering.iter().zip(clustering) {
			check_field(field, value)?;
			key.extend_field(value, field.direction);
		}
		Ok(key.to_encoded_key())
	}

	pub fn clustering_range(&self, partition: &[Value], clustering: &[Value]) -> Result<EncodedKeyRange, EncodingError> {
		Ok(EncodedKeyRange::prefix(&self.clustering_prefix(partition, clustering)?))
	}

	/// Encodes the complete primary key from its two parts. Unlike
	/// [`RowKeyLayout::clustering_prefix`], every clustering column must
	/// be given.
	pub fn key_of(&self, partition: &[Value], clustering: &[Value]) -> Result<EncodedKey, EncodingError> {
		if clustering.len() != self.clustering.len() {
			return Err(EncodingError::ColumnCountMismatch {
				expected: self.clustering.len(),
				actual: clustering.len(),
			});
		}
		self.clustering_prefix(partition, clustering)
	}

	/// The span holding every row of the table, all partitions included.
	pub fn table_range(&self) -> EncodedKeyRange {
		let mut key = KeySerializer::with_capacity(10);
		key.extend_u8(KEY_VERSION).extend_u8(KeyKind::TableRow as u8).extend_u64(self.table.0);
		EncodedKeyRange::prefix(&key.to_encoded_key())
	}

	/// Splits a stored key back into its partition and clustering values.
	pub fn decode_key(&self, key: &EncodedKey) -> Result<RowKey, CorruptKeyError> {
		let mut de = KeyDeserializer::from_bytes(key.as_slice());

		let version = de.read_u8()?;
		if version != KEY_VERSION {
			return Err(CorruptKeyError::UnknownVersion {
				version,
			});
		}

		let kind = de.read_u8()?;
		if kind != KeyKind::TableRow as u8 {
			return Err(CorruptKeyError::UnknownKind {
				kind,
			});
		}

		let table = de.read_u64()?;
		if table != self.table.0 {
			return Err(CorruptKeyError::TableMismatch {
				expected: self.table.0,
				actual: table,
			});
		}

		// The hash is derivable from the partition fields that follow.
		de.read_u16()?;

		let mut partition = Vec::with_capacity(self.partition.len());
		for field in &self.partition {
			partition.push(de.read_field(field.ty, SortDirection::Asc)?);
		}

		let mut clustering = Vec::with_capacity(self.clustering.len());
		for field in &self.clustering {
			clustering.push(de.read_field(field.ty, field.direction)?);
		}

		if !de.is_empty() {
			return Err(CorruptKeyError::TrailingBytes {
				remaining: de.remaining(),
			});
		}

		Ok(RowKey {
			partition,
			clustering,
		})
	}

	fn encode_partition_fields(&self, values: &[&Value]) -> Result<Vec<u8>, EncodingError> {
		let mut serializer = KeySerializer::with_capacity(self.partition.len() * 16);
		for (field, value) in self.partition.iter().zip(values) {
			if value.is_undefined() {
				return Err(EncodingError::UndefinedPartitionColumn {
					column: field.name.clone(),
				});
			}
			check_field(field, value)?;
			serializer.extend_field(value, SortDirection::Asc);
		}
		Ok(serializer.to_encoded_key().to_vec())
	}

	fn framed(&self, partition_bytes: &[u8]) -> KeySerializer {
		let hash = partition_hash(partition_bytes);
		let mut key = KeySerializer::with_capacity(FRAMING_LEN + partition_bytes.len() + self.clustering.len() * 16);
		key.extend_u8(KEY_VERSION)
			.extend_u8(KeyKind::TableRow as u8)
			.extend_u64(self.table.0)
			.extend_u16(hash)
			.extend_from_slice(partition_bytes);
		key
	}
}

fn check_field(field: &KeyField, value: &Value) -> Result<(), EncodingError> {
	if let Value::Utf8(text) = value {
		if text.len() > MAX_TEXT_FIELD_BYTES {
			return Err(EncodingError::KeyFieldTooLong {
				length: text.len(),
				max: MAX_TEXT_FIELD_BYTES,
			});
		}
	}

	if value.is_undefined() {
		return Ok(());
	}

	let actual = value.get_type();
	if actual != field.ty {
		return Err(EncodingError::TypeMismatch {
			column: field.name.clone(),
			expected: field.ty,
			actual,
		});
	}

	Ok(())
}
