use std::alloc::{self, Layout};
use std::borrow::Borrow;
use std::fmt::{self, Debug, Display, Formatter};
use std::marker::PhantomData;
use std::mem::{self, MaybeUninit};
use std::ops::{Deref, DerefMut};
use std::ptr::{self, NonNull};
use std::slice;

use crate::util::fmt::DebugWith;

/// An array that is sized at runtime, similar to a `Box<[T]>`. The size never changes unless the
/// Array is explicitly reallocated.
///
/// `Array<MaybeUninit<T>>` is the raw buffer behind [`ArrayList`](super::super::ArrayList), which
/// tracks which prefix of the buffer is initialized. An initialized `Array<T>` is what a densely
/// packed copy of a collection is returned as.
///
/// # Time Complexity
/// | Method | Complexity |
/// |-|-|
/// | `get` | `O(1)` |
/// | `size` | `O(1)` |
/// | `realloc` | `O(n)`*, `O(1)` |
///
/// \* The allocator may be able to resize in place, but this isn't guaranteed.
pub struct Array<T> {
    pub(crate) ptr: NonNull<T>,
    pub(crate) size: usize,
    pub(crate) _phantom: PhantomData<T>,
}

impl<T> Array<T> {
    /// Creates a new Array with size 0, without allocating.
    ///
    /// # Examples
    /// ```
    /// # use simple_collections::collections::contiguous::Array;
    /// let arr: Array<u8> = Array::new();
    /// assert_eq!(arr.size(), 0);
    /// ```
    pub const fn new() -> Array<T> {
        Array {
            ptr: NonNull::dangling(),
            size: 0,
            _phantom: PhantomData,
        }
    }

    /// Returns the size of the Array.
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Creates a new Array of [`MaybeUninit<T>`] with the provided `size`. All values are
    /// uninitialized.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    pub fn new_uninit(size: usize) -> Array<MaybeUninit<T>> {
        let layout = Array::<MaybeUninit<T>>::make_layout(size);

        Array {
            ptr: Array::<MaybeUninit<T>>::make_ptr(layout),
            size,
            _phantom: PhantomData,
        }
    }

    /// Creates an Array holding every item produced by an [`ExactSizeIterator`], in order.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`], or if the iterator produces fewer items
    /// than its reported length.
    ///
    /// # Examples
    /// ```
    /// # use simple_collections::collections::contiguous::Array;
    /// let arr = Array::from_exact([1, 2, 3]);
    /// assert_eq!(&*arr, &[1, 2, 3]);
    /// ```
    pub fn from_exact<I>(items: I) -> Array<T>
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: ExactSizeIterator,
    {
        let iter = items.into_iter();
        let size = iter.len();
        let arr = Array::<T>::new_uninit(size);

        let mut written = 0;
        for item in iter.take(size) {
            // SAFETY: written < size, so the offset is within the allocation.
            unsafe { arr.ptr.add(written).write(MaybeUninit::new(item)); }
            written += 1;
        }

        if written < size {
            for i in 0..written {
                // SAFETY: Every value before written has just been initialized.
                unsafe { arr.ptr.add(i).as_mut().assume_init_drop(); }
            }
            panic!("Iterator produced {written} items but reported a length of {size}!");
        }

        // SAFETY: All size values have been initialized.
        unsafe { arr.assume_init() }
    }

    /// Decomposes an Array into its pointer and size, without dropping or deallocating anything.
    /// The parts can be passed to [`Array::from_parts`] to rebuild it.
    pub const fn into_parts(self) -> (NonNull<T>, usize) {
        let parts = (self.ptr, self.size);
        mem::forget(self);
        parts
    }

    /// Rebuilds an Array from the parts produced by [`Array::into_parts`].
    ///
    /// # Safety
    /// `ptr` must have been allocated by the global allocator with the layout of `size` values of
    /// `T` (or be dangling if that layout has size 0) and must point to `size` initialized values.
    pub const unsafe fn from_parts(ptr: NonNull<T>, size: usize) -> Array<T> {
        Array {
            ptr,
            size,
            _phantom: PhantomData,
        }
    }

    /// Reinterprets self as an Array of possibly uninitialized values, which allows it to be
    /// reallocated. No values are dropped.
    pub fn forget_init(self) -> Array<MaybeUninit<T>> {
        let (ptr, size) = self.into_parts();
        // SAFETY: MaybeUninit<T> has the same layout as T, so the allocation is unchanged.
        unsafe { Array::from_parts(ptr.cast(), size) }
    }

    /// Creates the [`Layout`] for `size` values of `T`.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    pub(crate) fn make_layout(size: usize) -> Layout {
        Layout::array::<T>(size).unwrap_or_else(|_| panic!("Capacity overflow!"))
    }

    /// Allocates memory for the provided [`Layout`], returning a dangling pointer if it has size
    /// 0. Allocation failure is reported with [`alloc::handle_alloc_error`].
    pub(crate) fn make_ptr(layout: Layout) -> NonNull<T> {
        if layout.size() == 0 {
            NonNull::dangling()
        } else {
            // SAFETY: Zero-sized layouts have been guarded against.
            let raw_ptr = unsafe { alloc::alloc(layout) };
            NonNull::new(raw_ptr.cast()).unwrap_or_else(|| alloc::handle_alloc_error(layout))
        }
    }
}

impl<T> Array<MaybeUninit<T>> {
    /// Assumes that every value of the Array is initialized.
    ///
    /// # Safety
    /// It is up to the caller to guarantee that all values are initialized.
    pub unsafe fn assume_init(self) -> Array<T> {
        let (ptr, size) = self.into_parts();
        // SAFETY: The layout is unchanged and the caller guarantees initialization.
        unsafe { Array::from_parts(ptr.cast(), size) }
    }

    /// Reallocates the Array to hold `new_size` values. Values below `min(size, new_size)` are
    /// preserved, new locations are uninitialized. Values beyond `new_size` are discarded without
    /// being dropped, so the caller must have moved or dropped them first.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    pub fn realloc(&mut self, new_size: usize) {
        if new_size == self.size {
            return;
        }

        let new_layout = Array::<MaybeUninit<T>>::make_layout(new_size);
        let old_layout = Array::<MaybeUninit<T>>::make_layout(self.size);

        self.ptr = match (old_layout.size(), new_layout.size()) {
            // Zero-sized types never allocate, the pointer stays dangling.
            (0, 0) => self.ptr,
            (0, _) => Array::<MaybeUninit<T>>::make_ptr(new_layout),
            (_, 0) => {
                // SAFETY: ptr was allocated with old_layout, which has non-zero size.
                unsafe { alloc::dealloc(self.ptr.as_ptr().cast(), old_layout) };
                NonNull::dangling()
            },
            (_, new_bytes) => {
                // SAFETY: ptr was allocated with old_layout, the new size is non-zero and was
                // checked to not exceed isize::MAX when creating new_layout.
                let raw_ptr = unsafe {
                    alloc::realloc(self.ptr.as_ptr().cast(), old_layout, new_bytes)
                };
                NonNull::new(raw_ptr.cast())
                    .unwrap_or_else(|| alloc::handle_alloc_error(new_layout))
            },
        };
        self.size = new_size;
    }
}

impl<T> Default for Array<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Array<T> {
    fn drop(&mut self) {
        // SAFETY: All size values are initialized, and nothing else refers to them.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(self.ptr.as_ptr(), self.size));
        }

        let layout = Array::<T>::make_layout(self.size);
        if layout.size() != 0 {
            // SAFETY: ptr is allocated in the global allocator with this exact layout.
            unsafe { alloc::dealloc(self.ptr.as_ptr().cast(), layout) }
        }
    }
}

impl<T> Deref for Array<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        // SAFETY: The allocation is valid, aligned and initialized for size values, and the borrow
        // of self prevents mutation for the lifetime of the slice.
        unsafe { slice::from_raw_parts(self.ptr.as_ptr(), self.size) }
    }
}

impl<T> DerefMut for Array<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        // SAFETY: As with deref, with the mutable borrow of self guaranteeing uniqueness.
        unsafe { slice::from_raw_parts_mut(self.ptr.as_ptr(), self.size) }
    }
}

impl<T> AsRef<[T]> for Array<T> {
    fn as_ref(&self) -> &[T] {
        self
    }
}

impl<T> Borrow<[T]> for Array<T> {
    fn borrow(&self) -> &[T] {
        self
    }
}

// SAFETY: Array uniquely owns its allocation, so it can be sent when T can.
unsafe impl<T: Send> Send for Array<T> {}
// SAFETY: Array has no interior mutability, shared access only hands out &T.
unsafe impl<T: Sync> Sync for Array<T> {}

impl<T: Clone> Clone for Array<T> {
    fn clone(&self) -> Self {
        Array::from_exact(self.iter().cloned())
    }
}

impl<T: PartialEq> PartialEq for Array<T> {
    fn eq(&self, other: &Self) -> bool {
        **self == **other
    }
}

impl<T: Eq> Eq for Array<T> {}

impl<T, const N: usize> From<[T; N]> for Array<T> {
    fn from(value: [T; N]) -> Self {
        Array::from_exact(value)
    }
}

impl<T: Debug> Debug for Array<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Array")
            .field("contents", &DebugWith(|f: &mut Formatter<'_>| {
                f.debug_list().entries(self.iter()).finish()
            }))
            .field("size", &self.size)
            .finish()
    }
}

impl<T: Debug> Display for Array<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
