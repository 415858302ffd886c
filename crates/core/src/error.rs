// Copyright (c) collatedb.dev 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use collatedb_type::Type;

/// Rejections raised while validating a table definition. These surface at
/// creation time; a definition that passed validation never produces them
/// again.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SchemaError {
	#[error("clustering order directive on partition column '{column}'")]
	OrderedPartitionColumn {
		column: String,
	},

	#[error("clustering order directive on non-clustering column '{column}'")]
	OrderedNonClusteringColumn {
		column: String,
	},

	#[error("unknown column '{column}'")]
	UnknownColumn {
		column: String,
	},

	#[error("duplicate column '{column}'")]
	DuplicateColumn {
		column: String,
	},

	#[error("column '{column}' appears in both partition and clustering key")]
	ColumnInBothKeys {
		column: String,
	},

	#[error("partition key must name at least one column")]
	EmptyPartitionKey,

	#[error("column '{column}' declared with unsupported type {ty}")]
	InvalidColumnType {
		column: String,
		ty: Type,
	},

	#[error("duplicate clustering order directive for column '{column}'")]
	DuplicateOrderDirective {
		column: String,
	},

	#[error("table '{table}' already exists")]
	TableAlreadyExists {
		table: String,
	},

	#[error("table '{table}' not found")]
	TableNotFound {
		table: String,
	},
}

impl SchemaError {
	pub fn code(&self) -> &'static str {
		match self {
			SchemaError::OrderedPartitionColumn { .. } => "SC_001",
			SchemaError::OrderedNonClusteringColumn { .. } => "SC_002",
			SchemaError::UnknownColumn { .. } => "SC_003",
			SchemaError::DuplicateColumn { .. } => "SC_004",
			SchemaError::ColumnInBothKeys { .. } => "SC_005",
			SchemaError::EmptyPartitionKey => "SC_006",
			SchemaError::InvalidColumnType { .. } => "SC_007",
			SchemaError::DuplicateOrderDirective { .. } => "SC_008",
			SchemaError::TableAlreadyExists { .. } => "SC_009",
			SchemaError::TableNotFound { .. } => "SC_010",
		}
	}
}

/// Rejections raised while encoding values against a schema. Deterministic:
/// the same input fails the same way every time, so nothing here is
/// retryable.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EncodingError {
	#[error("column '{column}' expects {expected}, got {actual}")]
	TypeMismatch {
		column: String,
		expected: Type,
		actual: Type,
	},

	#[error("expected {expected} values, got {actual}")]
	ColumnCountMismatch {
		expected: usize,
		actual: usize,
	},

	#[error("partition column '{column}' must not be undefined")]
	UndefinedPartitionColumn {
		column: String,
	},

	#[error("text key field of {length} bytes exceeds the {max} byte limit")]
	KeyFieldTooLong {
		length: usize,
		max: usize,
	},
}

impl EncodingError {
	pub fn code(&self) -> &'static str {
		match self {
			EncodingError::TypeMismatch { .. } => "EN_001",
			EncodingError::ColumnCountMismatch { .. } => "EN_002",
			EncodingError::UndefinedPartitionColumn { .. } => "EN_003",
			EncodingError::KeyFieldTooLong { .. } => "EN_004",
		}
	}
}

/// Malformed bytes encountered while decoding a key. Any of these on a key
/// the encoder produced means the stored bytes were damaged or the wrong
/// schema is being applied.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CorruptKeyError {
	#[error("unknown key version {version:#04x}")]
	UnknownVersion {
		version: u8,
	},

	#[error("unknown key kind {kind:#04x}")]
	UnknownKind {
		kind: u8,
	},

	#[error("key belongs to table {actual}, expected {expected}")]
	TableMismatch {
		expected: u64,
		actual: u64,
	},

	#[error("key ends inside a field")]
	Truncated,

	#[error("unterminated text field")]
	MissingTerminator,

	#[error("invalid escape byte {byte:#04x}")]
	InvalidEscape {
		byte: u8,
	},

	#[error("text field is not valid utf-8")]
	InvalidUtf8,

	#[error("unknown inet family tag {tag:#04x}")]
	UnknownInetFamily {
		tag: u8,
	},

	#[error("invalid field marker {byte:#04x}")]
	InvalidMarker {
		byte: u8,
	},

	#[error("{remaining} trailing bytes after the last field")]
	TrailingBytes {
		remaining: usize,
	},
}

impl CorruptKeyError {
	pub fn code(&self) -> &'static str {
		match self {
			CorruptKeyError::UnknownVersion { .. } => "KC_001",
			CorruptKeyError::UnknownKind { .. } => "KC_002",
			CorruptKeyError::TableMismatch { .. } => "KC_003",
			CorruptKeyError::Truncated => "KC_004",
			CorruptKeyError::MissingTerminator => "KC_005",
			CorruptKeyError::InvalidEscape { .. } => "KC_006",
			CorruptKeyError::InvalidUtf8 => "KC_007",
			CorruptKeyError::UnknownInetFamily { .. } => "KC_008",
			CorruptKeyError::InvalidMarker { .. } => "KC_009",
			CorruptKeyError::TrailingBytes { .. } => "KC_010",
		}
	}
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error(transparent)]
	Schema(#[from] SchemaError),

	#[error(transparent)]
	Encoding(#[from] EncodingError),

	#[error(transparent)]
	CorruptKey(#[from] CorruptKeyError),

	/// Substrate failures pass through unmodified; this core never
	/// reinterprets them.
	#[error("store: {0}")]
	Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl Error {
	pub fn code(&self) -> &'static str {
		match self {
			Error::Schema(err) => err.code(),
			Error::Encoding(err) => err.code(),
			Error::CorruptKey(err) => err.code(),
			Error::Store(_) => "ST_001",
		}
	}
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
	mod display {
		use collatedb_type::Type;

		use crate::error::{CorruptKeyError, EncodingError, SchemaError};

		#[test]
		fn test_ordered_partition_column() {
			let err = SchemaError::OrderedPartitionColumn {
				column: "h1".to_string(),
			};
			assert_eq!(err.to_string(), "clustering order directive on partition column 'h1'");
			assert_eq!(err.code(), "SC_001");
		}

		#[test]
		fn test_type_mismatch() {
			let err = EncodingError::TypeMismatch {
				column: "r1".to_string(),
				expected: Type::Int4,
				actual: Type::Utf8,
			};
			assert_eq!(err.to_string(), "column 'r1' expects Int4, got Utf8");
			assert_eq!(err.code(), "EN_001");
		}

		#[test]
		fn test_trailing_bytes() {
			let err = CorruptKeyError::TrailingBytes {
				remaining: 3,
			};
			assert_eq!(err.to_string(), "3 trailing bytes after the last field");
			assert_eq!(err.code(), "KC_010");
		}
	}

	mod conversion {
		use crate::{Error, error::SchemaError};

		#[test]
		fn test_unified_code_delegates() {
			let err: Error = SchemaError::EmptyPartitionKey.into();
			assert_eq!(err.code(), "SC_006");
		}
	}
}
