// Copyright (c) collatedb.dev 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use collatedb_core::Result;

use crate::{
	store::{OrderedStore, RowIter, StoredRow},
	table::{Row, Table},
};

/// Lazily decodes the rows of one scan, in substrate cursor order.
///
/// The scan positions eagerly: opening it reads the first entry, so a
/// range with no matching keys is exhausted before the first `next` call.
/// Once the cursor runs out, or a decode error has been yielded, the
/// iterator stays exhausted. Dropping the scan releases the substrate
/// cursor with it; there is no separate close step.
pub struct RowScan<'a, S, I> {
	table: &'a Table<S>,
	inner: I,
	head: Option<StoredRow>,
	done: bool,
}

impl<'a, S: OrderedStore, I: RowIter> RowScan<'a, S, I> {
	pub(crate) fn new(table: &'a Table<S>, mut inner: I) -> Self {
		let head = inner.next();
		let done = head.is_none();
		Self {
			table,
			inner,
			head,
			done,
		}
	}

	/// Whether the scan has nothing further to yield. True from the
	/// start when no key matched the range.
	pub fn is_exhausted(&self) -> bool {
		self.done
	}
}

impl<S: OrderedStore, I: RowIter> Iterator for RowScan<'_, S, I> {
	type Item = Result<Row>;

	fn next(&mut self) -> Option<Self::Item> {
		if self.done {
			return None;
		}

		let stored = match self.head.take().or_else(|| self.inner.next()) {
			Some(stored) => stored,
			None => {
				self.done = true;
				return None;
			}
		};

		match self.table.assemble(&stored) {
			Ok(row) => Some(Ok(row)),
			Err(err) => {
				// One bad key ends the scan; entries past it are not
				// trustworthy.
				self.done = true;
				Some(Err(err))
			}
		}
	}
}
