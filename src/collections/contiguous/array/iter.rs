use std::alloc;
use std::iter::FusedIterator;
use std::marker::PhantomData;
use std::ptr::{self, NonNull};

use super::Array;

impl<T> IntoIterator for Array<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        let (buf, size) = self.into_parts();
        IntoIter {
            buf,
            size,
            start: 0,
            end: size,
            _phantom: PhantomData,
        }
    }
}

impl<'a, T> IntoIterator for &'a Array<T> {
    type Item = &'a T;

    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An owned iterator over the values of an [`Array`] (and therefore of an
/// [`ArrayList`](crate::collections::contiguous::ArrayList) too). Values in `start..end` haven't
/// been yielded yet and are still owned by the iterator.
pub struct IntoIter<T> {
    pub(crate) buf: NonNull<T>,
    pub(crate) size: usize,
    pub(crate) start: usize,
    pub(crate) end: usize,
    pub(crate) _phantom: PhantomData<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.start == self.end {
            return None;
        }

        // SAFETY: start < end <= size, the value is initialized and is never read again because
        // start moves past it.
        let value = unsafe { self.buf.add(self.start).read() };
        self.start += 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.end - self.start;
        (len, Some(len))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.start == self.end {
            return None;
        }

        self.end -= 1;
        // SAFETY: The newly decremented end is >= start, so the value is initialized and unread.
        Some(unsafe { self.buf.add(self.end).read() })
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        // SAFETY: Values in start..end are initialized and haven't been moved out.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(
                self.buf.add(self.start).as_ptr(),
                self.end - self.start,
            ));
        }

        let layout = Array::<T>::make_layout(self.size);
        if layout.size() != 0 {
            // SAFETY: buf was allocated by an Array of the same size, using this layout.
            unsafe { alloc::dealloc(self.buf.as_ptr().cast(), layout) }
        }
    }
}

// SAFETY: IntoIter uniquely owns its remaining values and allocation.
unsafe impl<T: Send> Send for IntoIter<T> {}
// SAFETY: IntoIter provides no shared access to its values.
unsafe impl<T: Sync> Sync for IntoIter<T> {}
