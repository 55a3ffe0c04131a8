use std::fmt::{self, Debug, Formatter};

use crate::collections::linked::LinkedList;
use crate::util::error::EmptyCollection;

/// A last-in first-out stack. The top of the stack is the front of the underlying list, so every
/// operation other than `contains` is `O(1)`.
pub struct Stack<T> {
    pub(crate) list: LinkedList<T>,
}

impl<T> Stack<T> {
    pub const fn new() -> Stack<T> {
        Stack {
            list: LinkedList::new(),
        }
    }

    pub const fn len(&self) -> usize {
        self.list.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Places `value` on top of the stack.
    pub fn push(&mut self, value: T) {
        self.list.insert_first(value);
    }

    /// Removes and returns the value on top of the stack.
    ///
    /// # Examples
    /// ```
    /// # use simple_collections::collections::adapters::Stack;
    /// # use simple_collections::error::EmptyCollection;
    /// let mut stack = Stack::new();
    /// stack.push(1);
    /// stack.push(2);
    /// assert_eq!(stack.pop(), Ok(2));
    /// assert_eq!(stack.pop(), Ok(1));
    /// assert_eq!(stack.pop(), Err(EmptyCollection));
    /// ```
    pub fn pop(&mut self) -> Result<T, EmptyCollection> {
        self.list.pop_front().ok_or(EmptyCollection)
    }

    /// Returns a reference to the value on top of the stack, without removing it.
    pub fn peek(&self) -> Result<&T, EmptyCollection> {
        self.list.front().ok_or(EmptyCollection)
    }
}

impl<T: PartialEq> Stack<T> {
    pub fn contains(&self, value: &T) -> bool {
        self.list.contains(value)
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for Stack<T> {
    /// Pushes every item in order, so the last item ends up on top.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut stack = Stack::new();
        for value in iter {
            stack.push(value);
        }
        stack
    }
}

impl<T: Debug> Debug for Stack<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stack")
            .field("top_first", &self.list)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::panic::assert_panics;
    use crate::util::result::ResultExtension;

    #[test]
    fn test_empty_stack() {
        let mut stack: Stack<u8> = Stack::new();
        assert_eq!(stack.pop(), Err(EmptyCollection));
        assert_eq!(stack.peek(), Err(EmptyCollection));
        assert_panics!({ stack.pop().throw(); }, "empty");
    }

    #[test]
    fn test_lifo_order() {
        let mut stack: Stack<char> = "abc".chars().collect();
        assert_eq!(stack.len(), 3);
        assert_eq!(stack.peek(), Ok(&'c'));
        assert!(stack.contains(&'a'));
        assert_eq!(stack.pop(), Ok('c'));
        stack.push('d');
        assert_eq!(stack.pop(), Ok('d'));
        assert_eq!(stack.pop(), Ok('b'));
        assert_eq!(stack.pop(), Ok('a'));
        assert!(stack.is_empty());
    }
}
