use std::marker::PhantomData;
use std::mem;

use super::ArrayList;
#[doc(inline)]
pub use crate::collections::contiguous::array::IntoIter;

impl<T> IntoIterator for ArrayList<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    /// Moves the live values out in order. The buffer is handed to the iterator as-is, so no
    /// reallocation happens even if the ArrayList isn't full.
    fn into_iter(mut self) -> Self::IntoIter {
        let len = mem::take(&mut self.len);
        let (buf, size) = mem::take(&mut self.arr).into_parts();
        IntoIter {
            // MaybeUninit<T> has the same layout as T, so the iterator deallocates it correctly.
            buf: buf.cast(),
            size,
            start: 0,
            end: len,
            _phantom: PhantomData,
        }
    }
}

impl<'a, T> IntoIterator for &'a ArrayList<T> {
    type Item = &'a T;

    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut ArrayList<T> {
    type Item = &'a mut T;

    type IntoIter = std::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
