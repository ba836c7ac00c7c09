//! A forward-only singly linked list. Each node owns the next one through a `Box` and the list
//! owns the head. There is no tail pointer, so appending walks the whole chain.
//!
//! # Examples
//!
//! ```
//! use generic_ds::list::List;
//!
//! let mut list = List::new();
//! list.add(1);
//! list.add(2);
//! list.insert(0, 0);
//!
//! assert_eq!(list.len(), 3);
//! assert_eq!(list.index(&2), Some(2));
//! assert_eq!(list.index(&9), None);
//! ```

use std::fmt;

use crate::error::ListError;

/// A singly linked list supporting appends, positional inserts and linear search.
pub struct List<T> {
    head: Link<T>,
    len: usize,
}

type Link<T> = Option<Box<Node<T>>>;

struct Node<T> {
    value: T,
    next: Link<T>,
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for List<T> {
    fn drop(&mut self) {
        // Unlink one node at a time so dropping a long chain doesn't recurse.
        let mut current = self.head.take();
        while let Some(mut node) = current {
            current = node.next.take();
        }
    }
}

impl<T> fmt::Debug for List<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut list = f.debug_list();
        let mut current = self.head.as_deref();
        while let Some(node) = current {
            list.entry(&node.value);
            current = node.next.as_deref();
        }
        list.finish()
    }
}

impl<T> List<T> {
    /// Generates a new, empty `List`.
    pub fn new() -> Self {
        Self { head: None, len: 0 }
    }

    /// The number of elements in the list.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the list has no elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Appends `value` after the current last element.
    pub fn add(&mut self, value: T) {
        let tail = self.link_at(self.len);
        *tail = Some(Box::new(Node { value, next: None }));
        self.len += 1;
    }

    /// Inserts `value` so that it ends up at `position`, moving everything from `position` on one
    /// place back. A `position` past the end appends instead; this is not an error.
    ///
    /// # Examples
    ///
    /// ```
    /// use generic_ds::list::List;
    ///
    /// let mut list = List::new();
    /// list.add('a');
    /// list.insert('z', 100);
    ///
    /// assert_eq!(list.index(&'z'), Some(1));
    /// assert_eq!(list.len(), 2);
    /// ```
    pub fn insert(&mut self, value: T, position: usize) {
        let link = self.link_at(position);
        let next = link.take();
        *link = Some(Box::new(Node { value, next }));
        self.len += 1;
    }

    /// Like [`List::insert`] but refuses a `position` past the end instead of appending.
    ///
    /// # Examples
    ///
    /// ```
    /// use generic_ds::error::ListError;
    /// use generic_ds::list::List;
    ///
    /// let mut list = List::new();
    /// assert_eq!(list.try_insert(1, 0), Ok(()));
    /// assert_eq!(
    ///     list.try_insert(2, 5),
    ///     Err(ListError::PositionOutOfBounds { position: 5, len: 1 })
    /// );
    /// assert_eq!(list.len(), 1);
    /// ```
    pub fn try_insert(&mut self, value: T, position: usize) -> Result<(), ListError> {
        if position > self.len {
            return Err(ListError::PositionOutOfBounds {
                position,
                len: self.len,
            });
        }
        self.insert(value, position);
        Ok(())
    }

    /// Returns the position of the first element equal to `value`, or `None` if there is none.
    pub fn index(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        let mut current = self.head.as_deref();
        let mut position = 0;
        while let Some(node) = current {
            if node.value == *value {
                return Some(position);
            }
            current = node.next.as_deref();
            position += 1;
        }
        None
    }

    /// Walks at most `position` links from the head and returns the link it stopped on. Stops
    /// early at the empty link after the last node.
    fn link_at(&mut self, position: usize) -> &mut Link<T> {
        let mut link = &mut self.head;
        for _ in 0..position {
            match link {
                Some(node) => link = &mut node.next,
                None => break,
            }
        }
        link
    }
}
