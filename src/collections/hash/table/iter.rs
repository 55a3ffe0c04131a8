use std::hash::{BuildHasher, Hash};
use std::iter::FusedIterator;
use std::slice;

use super::HashTable;
use crate::collections::contiguous::array_list::IntoIter as ListIntoIter;
use crate::collections::contiguous::ArrayList;
use crate::collections::hash::bucket::{self, Bucket, IntoEntries};

impl<'a, T: Hash + Eq, B: BuildHasher> IntoIterator for &'a HashTable<T, B> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        Iter {
            table: &self.table,
            slots: self.occupied.iter(),
            current: None,
            remaining: self.len,
        }
    }
}

/// A borrowed iterator over the values of a [`HashTable`], bucket by bucket.
pub struct Iter<'a, T> {
    pub(crate) table: &'a [Option<Bucket<T>>],
    pub(crate) slots: slice::Iter<'a, usize>,
    pub(crate) current: Option<bucket::Iter<'a, T>>,
    pub(crate) remaining: usize,
}

impl<'a, T: Eq> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(value) = self.current.as_mut().and_then(Iterator::next) {
                self.remaining -= 1;
                return Some(value);
            }

            let table = self.table;
            let slot = self.slots.next()?;
            self.current = table[*slot].as_ref().map(Bucket::iter);
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T: Eq> ExactSizeIterator for Iter<'_, T> {}

impl<T: Eq> FusedIterator for Iter<'_, T> {}

impl<T: Hash + Eq, B: BuildHasher> IntoIterator for HashTable<T, B> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            remaining: self.len,
            table: self.table,
            slots: self.occupied.into_iter(),
            current: None,
        }
    }
}

/// An owned iterator over the values of a [`HashTable`], bucket by bucket.
pub struct IntoIter<T> {
    pub(crate) table: ArrayList<Option<Bucket<T>>>,
    pub(crate) slots: ListIntoIter<usize>,
    pub(crate) current: Option<IntoEntries<T>>,
    pub(crate) remaining: usize,
}

impl<T: Eq> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some((_, value)) = self.current.as_mut().and_then(Iterator::next) {
                self.remaining -= 1;
                return Some(value);
            }

            let slot = self.slots.next()?;
            self.current = self.table[slot].take().map(Bucket::into_entries);
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T: Eq> ExactSizeIterator for IntoIter<T> {}

impl<T: Eq> FusedIterator for IntoIter<T> {}
