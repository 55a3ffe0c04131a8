use std::cmp;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::mem::{self, MaybeUninit};
use std::ops::{Deref, DerefMut};
use std::ptr;
use std::slice;

use crate::collections::contiguous::Array;
use crate::util::error::{CapacityExhausted, IndexOrExhausted, IndexOutOfRange, InvalidArgument};
use crate::util::fmt::DebugWith;
use crate::util::result::ResultExtension;

/// The capacity used by [`ArrayList::new`] and restored by [`ArrayList::clear`].
pub const DEFAULT_CAP: usize = 12;

/// The default absolute maximum capacity, which no ArrayList grows beyond unless it is created
/// from a larger sequence.
pub const ABSOLUTE_MAX_CAP: usize = 2_147_483_591;

/// A growable, contiguous list with an absolute ceiling on its capacity.
///
/// Elements occupy the initialized prefix `0..len` of an [`Array`] buffer. When an insertion
/// wouldn't fit, the buffer grows by a whole multiple of its current capacity (at least doubling),
/// clamped to `max_cap`. Once `len` reaches `max_cap` every further insertion fails with
/// [`CapacityExhausted`].
///
/// Read access goes through `Deref<Target = [T]>`, so `get`, indexing, `first`, `last`, `iter` and
/// friends all come from slices and only ever see the `len` live elements.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the ArrayList.
/// - `i`: The index of the item in question.
///
/// | Method | Complexity |
/// |-|-|
/// | `get` | `O(1)` |
/// | `add` | `O(1)`*, `O(n)` |
/// | `insert` | `O(n-i)` |
/// | `remove_at(0)` | `O(n)`** |
/// | `remove_at` | `O(n-i)` |
/// | `index_of` | `O(n)` |
/// | `into_array` | `O(n)`, `O(1)` |
///
/// \* If the ArrayList doesn't have enough capacity for the new element, `add` takes `O(n)`.
///
/// \** Removing the first element moves the remainder into a fresh allocation.
pub struct ArrayList<T> {
    pub(crate) arr: Array<MaybeUninit<T>>,
    pub(crate) len: usize,
    pub(crate) max_cap: usize,
}

impl<T> ArrayList<T> {
    /// Creates an empty ArrayList with [`DEFAULT_CAP`] and [`ABSOLUTE_MAX_CAP`].
    ///
    /// # Examples
    /// ```
    /// # use simple_collections::collections::contiguous::ArrayList;
    /// # use simple_collections::collections::contiguous::array_list::DEFAULT_CAP;
    /// let list: ArrayList<u8> = ArrayList::new();
    /// assert_eq!(list.len(), 0);
    /// assert_eq!(list.cap(), DEFAULT_CAP);
    /// ```
    pub fn new() -> ArrayList<T> {
        ArrayList::from_parts_unchecked(DEFAULT_CAP, ABSOLUTE_MAX_CAP)
    }

    /// Creates an empty ArrayList with the provided capacity.
    ///
    /// # Panics
    /// Panics if `cap` is 0.
    pub fn with_cap(cap: usize) -> ArrayList<T> {
        ArrayList::try_with_cap(cap).throw()
    }

    /// Creates an empty ArrayList with the provided capacity, returning [`InvalidArgument`] if it
    /// is 0.
    pub fn try_with_cap(cap: usize) -> Result<ArrayList<T>, InvalidArgument> {
        ArrayList::try_with_limits(cap, cmp::max(cap, ABSOLUTE_MAX_CAP))
    }

    /// Creates an empty ArrayList with the provided capacity, which will never grow beyond
    /// `max_cap`.
    ///
    /// # Panics
    /// Panics if either bound is 0 or if `cap` exceeds `max_cap`.
    ///
    /// # Examples
    /// ```
    /// # use simple_collections::collections::contiguous::ArrayList;
    /// let mut list = ArrayList::with_limits(1, 2);
    /// list.add('a').add('b');
    /// assert!(list.try_add('c').is_err());
    /// ```
    pub fn with_limits(cap: usize, max_cap: usize) -> ArrayList<T> {
        ArrayList::try_with_limits(cap, max_cap).throw()
    }

    /// Creates an empty ArrayList with the provided capacity and absolute maximum capacity,
    /// returning [`InvalidArgument`] if either bound is 0 or if `cap` exceeds `max_cap`.
    pub fn try_with_limits(cap: usize, max_cap: usize) -> Result<ArrayList<T>, InvalidArgument> {
        if cap < 1 {
            return Err(InvalidArgument { argument: "cap", value: cap, min: 1 });
        }
        if max_cap < cap {
            return Err(InvalidArgument { argument: "max_cap", value: max_cap, min: cap });
        }

        Ok(ArrayList::from_parts_unchecked(cap, max_cap))
    }

    /// Creates a full ArrayList from a sequence of known length: `len` and `cap` both equal the
    /// length of the sequence.
    ///
    /// # Examples
    /// ```
    /// # use simple_collections::collections::contiguous::ArrayList;
    /// let list = ArrayList::from_exact(10..15);
    /// assert_eq!(list.len(), 5);
    /// assert_eq!(list.cap(), 5);
    /// ```
    pub fn from_exact<I>(items: I) -> ArrayList<T>
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: ExactSizeIterator,
    {
        ArrayList::from(Array::from_exact(items))
    }

    /// Returns the number of elements in the ArrayList.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the ArrayList contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of elements the ArrayList can hold before it needs to grow.
    pub const fn cap(&self) -> usize {
        self.arr.size()
    }

    /// Returns the absolute maximum capacity of the ArrayList.
    pub const fn max_cap(&self) -> usize {
        self.max_cap
    }

    /// Appends `value` to the end of the ArrayList, growing first if needed. Returns self so that
    /// calls can be chained.
    ///
    /// # Panics
    /// Panics if the ArrayList is already holding `max_cap` elements.
    ///
    /// # Examples
    /// ```
    /// # use simple_collections::collections::contiguous::ArrayList;
    /// let mut list = ArrayList::with_cap(4);
    /// list.add(1).add(2).add(3).add(4).add(5);
    /// assert_eq!(list.len(), 5);
    /// assert_eq!(list.cap(), 8);
    /// ```
    pub fn add(&mut self, value: T) -> &mut ArrayList<T> {
        self.try_add(value).throw()
    }

    /// Appends `value` to the end of the ArrayList, returning [`CapacityExhausted`] instead of
    /// panicking if it can't grow any further.
    pub fn try_add(&mut self, value: T) -> Result<&mut ArrayList<T>, CapacityExhausted> {
        self.try_reserve(1)?;

        // SAFETY: There is capacity for at least one more value, so len is within the allocation.
        unsafe { self.arr.ptr.add(self.len).write(MaybeUninit::new(value)); }
        self.len += 1;

        Ok(self)
    }

    /// Inserts `value` at `index`, moving all following elements one position to the right. An
    /// `index` equal to `len` appends.
    ///
    /// # Panics
    /// Panics if `index > len` or if the ArrayList can't grow any further.
    pub fn insert(&mut self, index: usize, value: T) {
        self.try_insert(index, value).throw()
    }

    /// Inserts `value` at `index`, returning an error rather than panicking if `index > len` or
    /// if the ArrayList can't grow any further.
    pub fn try_insert(&mut self, index: usize, value: T) -> Result<(), IndexOrExhausted> {
        if index > self.len {
            return Err(IndexOutOfRange { index, len: self.len }.into());
        }
        self.try_reserve(1)?;

        // SAFETY: index <= len and there is capacity for len + 1 values, so both the shifted range
        // and the written slot are within the allocation. ptr::copy handles the overlap.
        unsafe {
            let slot = self.arr.ptr.add(index);
            ptr::copy(slot.as_ptr(), slot.add(1).as_ptr(), self.len - index);
            slot.write(MaybeUninit::new(value));
        }
        self.len += 1;

        Ok(())
    }

    /// Replaces the element at `index` with `new_value`, returning the old value.
    ///
    /// # Panics
    /// Panics if `index` is out of range.
    pub fn replace(&mut self, index: usize, new_value: T) -> T {
        self.try_replace(index, new_value).throw()
    }

    /// Replaces the element at `index` with `new_value`, returning [`IndexOutOfRange`] rather than
    /// panicking.
    pub fn try_replace(&mut self, index: usize, new_value: T) -> Result<T, IndexOutOfRange> {
        self.check_index(index)?;
        Ok(mem::replace(&mut self[index], new_value))
    }

    /// Removes and returns the element at `index`, closing the gap it leaves.
    ///
    /// # Panics
    /// Panics if `index` is out of range.
    ///
    /// # Examples
    /// ```
    /// # use simple_collections::collections::contiguous::ArrayList;
    /// let mut list = ArrayList::from_exact(['a', 'b', 'c', 'd']);
    /// assert_eq!(list.remove_at(0), 'a');
    /// assert_eq!(list.remove_at(1), 'c');
    /// assert_eq!(list.as_array(), &['b', 'd']);
    /// ```
    pub fn remove_at(&mut self, index: usize) -> T {
        self.try_remove_at(index).throw()
    }

    /// Removes and returns the element at `index`, returning [`IndexOutOfRange`] rather than
    /// panicking.
    ///
    /// Removing the first element moves the remaining ones into a fresh buffer of the same
    /// capacity, removing the last one just vacates its slot and removing any other element shifts
    /// the following ones left in place.
    pub fn try_remove_at(&mut self, index: usize) -> Result<T, IndexOutOfRange> {
        self.check_index(index)?;
        let last = self.len - 1;

        let value = if index == 0 {
            let fresh = Array::<T>::new_uninit(self.cap());
            // SAFETY: len > 0, so the first value is initialized. The remaining last values fit in
            // the fresh allocation of the same capacity, which can't overlap the current one.
            let value = unsafe {
                let value = self.arr.ptr.read().assume_init();
                ptr::copy_nonoverlapping(self.arr.ptr.add(1).as_ptr(), fresh.ptr.as_ptr(), last);
                value
            };
            // The old buffer only holds moved-from values now, dropping it just deallocates.
            self.arr = fresh;
            value
        } else {
            // SAFETY: index < len, so the value is initialized. Values after it are moved into the
            // gap, leaving the slot at last logically uninitialized.
            unsafe {
                let slot = self.arr.ptr.add(index);
                let value = slot.read().assume_init();
                ptr::copy(slot.add(1).as_ptr(), slot.as_ptr(), last - index);
                value
            }
        };

        self.len = last;
        Ok(value)
    }

    /// Removes and returns the first element, if there is one.
    pub fn remove_first(&mut self) -> Option<T> {
        self.try_remove_at(0).ok()
    }

    /// Removes and returns the last element, if there is one.
    pub fn remove_last(&mut self) -> Option<T> {
        let last = self.len.checked_sub(1)?;
        self.try_remove_at(last).ok()
    }

    /// Returns the live elements as a densely packed slice of exactly `len` elements.
    pub fn as_array(&self) -> &[T] {
        self
    }

    /// Converts self into an [`Array`] holding exactly the live elements, trimming any unused
    /// capacity. No reallocation happens if the ArrayList is full.
    pub fn into_array(mut self) -> Array<T> {
        self.arr.realloc(self.len);
        self.len = 0;
        let arr = mem::take(&mut self.arr);
        // SAFETY: The buffer has just been trimmed to the previous len, so every value is
        // initialized. Ownership of the values moves to the new Array while self is left empty.
        unsafe { arr.assume_init() }
    }

    /// Ensures that `extra` more elements fit without another allocation.
    ///
    /// # Panics
    /// Panics if `len + extra` would exceed `max_cap`.
    pub fn reserve(&mut self, extra: usize) {
        self.try_reserve(extra).throw()
    }

    /// Ensures that `extra` more elements fit without another allocation, returning
    /// [`CapacityExhausted`] if `len + extra` would exceed `max_cap`.
    ///
    /// When growth is required, the new capacity is `(cap + extra) / cap + 1` times the current
    /// capacity (so at least double), clamped to `max_cap`.
    pub fn try_reserve(&mut self, extra: usize) -> Result<(), CapacityExhausted> {
        let cap = self.cap();
        if cap - self.len >= extra {
            return Ok(());
        }

        let available = self.max_cap - self.len;
        if available < extra {
            return Err(CapacityExhausted { requested: extra, available });
        }

        let new_cap = self.projected_cap(cap.saturating_add(extra));
        log::trace!("ArrayList growing from {cap} to {new_cap} slots ({} in use)", self.len);

        self.arr.realloc(new_cap);
        Ok(())
    }

    /// Drops every element and replaces the buffer with a fresh one of the default capacity.
    pub fn clear(&mut self) {
        let len = mem::take(&mut self.len);
        // SAFETY: The first len values are initialized. len is reset first so that a panicking
        // destructor can't lead to a double drop.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(self.data_ptr(), len));
        }
        self.arr = Array::new_uninit(cmp::min(DEFAULT_CAP, self.max_cap));
    }

    pub(crate) fn from_parts_unchecked(cap: usize, max_cap: usize) -> ArrayList<T> {
        ArrayList {
            arr: Array::new_uninit(cap),
            len: 0,
            max_cap,
        }
    }

    /// Computes the capacity to grow to so that `required` elements fit.
    pub(crate) fn projected_cap(&self, required: usize) -> usize {
        let cap = self.cap();
        if cap == 0 {
            return cmp::min(cmp::max(DEFAULT_CAP, required), self.max_cap);
        }

        let factor = required / cap + 1;
        if factor < 2 {
            cmp::min(cap.saturating_mul(2), self.max_cap)
        } else {
            cmp::min(factor.saturating_mul(cap), self.max_cap)
        }
    }

    pub(crate) const fn check_index(&self, index: usize) -> Result<(), IndexOutOfRange> {
        if index < self.len {
            Ok(())
        } else {
            Err(IndexOutOfRange { index, len: self.len })
        }
    }

    const fn data_ptr(&self) -> *mut T {
        self.arr.ptr.as_ptr().cast()
    }
}

impl<T: PartialEq> ArrayList<T> {
    /// Returns the index of the first element equal to `item`.
    pub fn index_of(&self, item: &T) -> Option<usize> {
        self.iter().position(|element| element == item)
    }

    /// Returns the index of the last element equal to `item`.
    pub fn last_index_of(&self, item: &T) -> Option<usize> {
        self.iter().rposition(|element| element == item)
    }
}

impl<T> Drop for ArrayList<T> {
    fn drop(&mut self) {
        // SAFETY: The first len values are initialized and owned by self. The buffer itself only
        // holds MaybeUninit values, so dropping it afterwards just deallocates.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(self.data_ptr(), self.len));
        }
    }
}

impl<T> Deref for ArrayList<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        // SAFETY: The first len values are initialized, the pointer is aligned and non-null, and
        // the borrow of self prevents mutation for the lifetime of the slice.
        unsafe { slice::from_raw_parts(self.data_ptr(), self.len) }
    }
}

impl<T> DerefMut for ArrayList<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        // SAFETY: As with deref, with the mutable borrow of self guaranteeing uniqueness.
        unsafe { slice::from_raw_parts_mut(self.data_ptr(), self.len) }
    }
}

impl<T> AsRef<[T]> for ArrayList<T> {
    fn as_ref(&self) -> &[T] {
        self
    }
}

impl<T> AsMut<[T]> for ArrayList<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self
    }
}

// SAFETY: ArrayList uniquely owns its buffer, so it can be sent when T can.
unsafe impl<T: Send> Send for ArrayList<T> {}
// SAFETY: Shared access only hands out &T, there is no interior mutability.
unsafe impl<T: Sync> Sync for ArrayList<T> {}

impl<T> Default for ArrayList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Array<T>> for ArrayList<T> {
    fn from(value: Array<T>) -> Self {
        let len = value.size();
        ArrayList {
            arr: value.forget_init(),
            len,
            max_cap: cmp::max(len, ABSOLUTE_MAX_CAP),
        }
    }
}

impl<T, const N: usize> From<[T; N]> for ArrayList<T> {
    fn from(value: [T; N]) -> Self {
        ArrayList::from_exact(value)
    }
}

impl<T> From<ArrayList<T>> for Array<T> {
    fn from(value: ArrayList<T>) -> Self {
        value.into_array()
    }
}

impl<T> Extend<T> for ArrayList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        // Reserving is only an optimisation, so an oversized hint shouldn't fail here.
        let _ = self.try_reserve(iter.size_hint().0);
        for item in iter {
            self.add(item);
        }
    }
}

impl<T> FromIterator<T> for ArrayList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = ArrayList::new();
        list.extend(iter);
        list
    }
}

impl<T: Clone> Clone for ArrayList<T> {
    fn clone(&self) -> Self {
        let mut list = ArrayList::from_parts_unchecked(self.cap(), self.max_cap);
        for value in self.iter() {
            list.add(value.clone());
        }
        list
    }
}

impl<T: PartialEq> PartialEq for ArrayList<T> {
    fn eq(&self, other: &Self) -> bool {
        **self == **other
    }
}

impl<T: Eq> Eq for ArrayList<T> {}

impl<T: Hash> Hash for ArrayList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (**self).hash(state);
    }
}

impl<T: Debug> Debug for ArrayList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArrayList")
            .field("contents", &DebugWith(|f: &mut Formatter<'_>| {
                f.debug_list().entries(self.iter()).finish()
            }))
            .field("len", &self.len)
            .field("cap", &self.cap())
            .field("max_cap", &self.max_cap)
            .finish()
    }
}

impl<T: Debug> Display for ArrayList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
