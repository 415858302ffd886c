// Copyright (c) collatedb.dev 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use std::{ops::Deref, sync::Arc};

use serde::{Deserialize, Serialize};

/// A clone-on-write vector.
///
/// Cloning shares the underlying buffer; the first mutation through
/// [`CowVec::make_mut`] on a shared buffer copies it. Keys and rows are
/// handed around and retained by iterators, so shared ownership is the
/// common case and copies are the exception.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CowVec<T>(Arc<Vec<T>>);

impl<T> CowVec<T> {
	pub fn new(items: Vec<T>) -> Self {
		Self(Arc::new(items))
	}

	pub fn with_capacity(capacity: usize) -> Self {
		Self(Arc::new(Vec::with_capacity(capacity)))
	}

	pub fn as_slice(&self) -> &[T] {
		self.0.as_slice()
	}
}

impl<T: Clone> CowVec<T> {
	/// Mutable access to the underlying vector, copying it first when the
	/// buffer is shared with other clones.
	pub fn make_mut(&mut self) -> &mut Vec<T> {
		Arc::make_mut(&mut self.0)
	}

	pub fn to_vec(&self) -> Vec<T> {
		self.0.as_ref().clone()
	}
}

impl<T> Default for CowVec<T> {
	fn default() -> Self {
		Self(Arc::new(Vec::new()))
	}
}

impl<T> Deref for CowVec<T> {
	type Target = [T];

	fn deref(&self) -> &Self::Target {
		self.0.as_slice()
	}
}

impl<T> From<Vec<T>> for CowVec<T> {
	fn from(items: Vec<T>) -> Self {
		Self::new(items)
	}
}

impl<T: Clone> FromIterator<T> for CowVec<T> {
	fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
		Self::new(iter.into_iter().collect())
	}
}

impl<'a, T> IntoIterator for &'a CowVec<T> {
	type Item = &'a T;
	type IntoIter = std::slice::Iter<'a, T>;

	fn into_iter(self) -> Self::IntoIter {
		self.0.iter()
	}
}

#[cfg(test)]
mod tests {
	mod make_mut {
		use crate::util::CowVec;

		#[test]
		fn test_unshared_buffer_mutates_in_place() {
			let mut vec = CowVec::new(vec![1u8, 2, 3]);
			let ptr = vec.as_ptr();
			vec.make_mut().push(4);
			assert_eq!(vec.as_slice(), &[1, 2, 3, 4]);
			assert_eq!(vec.as_ptr(), ptr);
		}

		#[test]
		fn test_shared_buffer_copies_on_write() {
			let original = CowVec::new(vec![1u8, 2, 3]);
			let mut clone = original.clone();

			assert_eq!(original.as_ptr(), clone.as_ptr());

			clone.make_mut().push(4);

			assert_ne!(original.as_ptr(), clone.as_ptr());
			assert_eq!(original.as_slice(), &[1, 2, 3]);
			assert_eq!(clone.as_slice(), &[1, 2, 3, 4]);
		}
	}

	mod ordering {
		use crate::util::CowVec;

		#[test]
		fn test_unsigned_lexicographic() {
			let a = CowVec::new(vec![0x00u8, 0x01]);
			let b = CowVec::new(vec![0x00u8, 0x02]);
			let c = CowVec::new(vec![0x01u8]);

			assert!(a < b);
			assert!(b < c);
		}
	}
}
