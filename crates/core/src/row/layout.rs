// Copyright (c) collatedb.dev 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use std::{ops::Deref, sync::Arc};

use collatedb_type::Type;

use crate::row::EncodedRow;

/// One fixed-width slot in the static section of a row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
	/// Byte offset of the slot, measured from the start of the row.
	pub offset: usize,
	pub size: usize,
	pub align: usize,
	pub ty: Type,
}

#[derive(Debug)]
pub struct RowLayoutInner {
	pub fields: Vec<Field>,
	pub alignment: usize,
	/// Bytes reserved for the validity bitset at the start of the row.
	pub bitset_size: usize,
	/// Bitset plus fixed-width slots, padded to the layout alignment.
	/// The dynamic section for variable-width data starts here.
	pub static_size: usize,
}

/// Slot layout for a row payload.
///
/// A row starts with a validity bitset of one bit per column, followed by
/// one fixed-width slot per column in declared order. Variable-width data
/// lives in a dynamic section appended after the static section; its slot
/// holds the absolute offset and length of the bytes.
#[derive(Debug, Clone)]
pub struct RowLayout(Arc<RowLayoutInner>);

impl Deref for RowLayout {
	type Target = RowLayoutInner;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

impl RowLayout {
	pub fn new(types: &[Type]) -> Self {
		let bitset_size = (types.len() + 7) / 8;
		let mut fields = Vec::with_capacity(types.len());
		let mut alignment = 1usize;
		let mut offset = bitset_size;

		for &ty in types {
			let size = ty.size();
			let align = ty.alignment();
			alignment = alignment.max(align);
			offset = align_up(offset, align);
			fields.push(Field {
				offset,
				size,
				align,
				ty,
			});
			offset += size;
		}

		let static_size = align_up(offset, alignment);

		Self(Arc::new(RowLayoutInner {
			fields,
			alignment,
			bitset_size,
			static_size,
		}))
	}

	/// Allocates a zeroed row covering the static section. Every column
	/// starts out undefined.
	pub fn allocate_row(&self) -> EncodedRow {
		EncodedRow::new(vec![0u8; self.static_size])
	}

	pub fn field(&self, index: usize) -> &Field {
		&self.fields[index]
	}
}

const fn align_up(offset: usize, align: usize) -> usize {
	(offset + align - 1) & !(align - 1)
}
