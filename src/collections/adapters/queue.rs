use std::fmt::{self, Debug, Formatter};

use crate::collections::contiguous::ArrayList;
use crate::util::error::{EmptyCollection, InvalidArgument};
use crate::util::result::ResultExtension;

/// A first-in first-out queue.
///
/// Values are appended to the end of an [`ArrayList`] and dequeued from its start, which moves the
/// remaining values into a fresh buffer. `dequeue` is therefore `O(n)`, everything else is `O(1)`
/// amortized.
pub struct Queue<T> {
    pub(crate) list: ArrayList<T>,
}

impl<T> Queue<T> {
    pub fn new() -> Queue<T> {
        Queue {
            list: ArrayList::new(),
        }
    }

    /// Creates an empty queue with room for `cap` values before it needs to grow.
    ///
    /// # Panics
    /// Panics if `cap` is 0.
    pub fn with_cap(cap: usize) -> Queue<T> {
        Queue::try_with_cap(cap).throw()
    }

    pub fn try_with_cap(cap: usize) -> Result<Queue<T>, InvalidArgument> {
        Ok(Queue {
            list: ArrayList::try_with_cap(cap)?,
        })
    }

    pub const fn len(&self) -> usize {
        self.list.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Adds `value` to the back of the queue.
    ///
    /// # Panics
    /// Panics if the underlying list has reached its maximum capacity.
    pub fn enqueue(&mut self, value: T) {
        self.list.add(value);
    }

    /// Removes and returns the value at the front of the queue.
    pub fn dequeue(&mut self) -> Result<T, EmptyCollection> {
        self.list.remove_first().ok_or(EmptyCollection)
    }

    /// Returns a reference to the value at the front of the queue, without removing it.
    pub fn peek(&self) -> Result<&T, EmptyCollection> {
        self.list.first().ok_or(EmptyCollection)
    }
}

impl<T: PartialEq> Queue<T> {
    pub fn contains(&self, value: &T) -> bool {
        self.list.contains(value)
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Queue {
            list: iter.into_iter().collect(),
        }
    }
}

impl<T: Debug> Debug for Queue<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Queue")
            .field("front_first", &self.list)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fifo_order() {
        let mut queue = Queue::with_cap(2);
        queue.enqueue(1);
        queue.enqueue(2);
        queue.enqueue(3);
        assert_eq!(queue.len(), 3);
        assert_eq!(queue.peek(), Ok(&1));
        assert!(queue.contains(&3));
        assert_eq!(queue.dequeue(), Ok(1));
        queue.enqueue(4);
        assert_eq!(queue.dequeue(), Ok(2));
        assert_eq!(queue.dequeue(), Ok(3));
        assert_eq!(queue.dequeue(), Ok(4));
        assert_eq!(queue.dequeue(), Err(EmptyCollection));
        assert_eq!(queue.peek(), Err(EmptyCollection));
    }

    #[test]
    fn test_invalid_cap() {
        assert!(Queue::<u8>::try_with_cap(0).is_err());
        let queue: Queue<&str> = ["a", "b"].into_iter().collect();
        assert_eq!(queue.peek(), Ok(&"a"));
    }
}
