//! An unbalanced BST ordered by a caller-supplied comparator. Nodes are owned by their parent
//! through a `Box` so there is no sharing and no `unsafe`.
//!
//! # Examples
//!
//! ```
//! use generic_ds::tree::Tree;
//!
//! let mut tree = Tree::new(|a: &i32, b: &i32| a.cmp(b));
//!
//! // Nothing in here yet.
//! assert!(!tree.contains(&1));
//!
//! tree.insert(1);
//! assert!(tree.contains(&1));
//!
//! // Inserting an equal value overwrites the stored one instead of adding a node.
//! tree.insert(1);
//! assert_eq!(tree.len(), 1);
//! ```

use std::cmp::Ordering;
use std::fmt;

/// A Binary Search Tree ordered by the comparator `C`. Values can be inserted and looked up but
/// never removed. No rebalancing is done so inserting in sorted order produces a chain.
pub struct Tree<T, C = fn(&T, &T) -> Ordering> {
    root: Link<T>,
    compare: C,
    len: usize,
}

type Link<T> = Option<Box<Node<T>>>;

struct Node<T> {
    value: T,
    left: Link<T>,
    right: Link<T>,
}

impl<T> Default for Tree<T>
where
    T: Ord,
{
    fn default() -> Self {
        Self::new(T::cmp)
    }
}

impl<T, C> Drop for Tree<T, C> {
    fn drop(&mut self) {
        // Detach children before each node is dropped so a deep chain doesn't recurse.
        let mut stack: Vec<Box<Node<T>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

impl<T, C> fmt::Debug for Tree<T, C>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tree")
            .field("values", &InOrder(&self.root))
            .field("len", &self.len)
            .finish()
    }
}

/// Renders the values below a link in comparator order without recursing.
struct InOrder<'a, T>(&'a Link<T>);

impl<T> fmt::Debug for InOrder<'_, T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut list = f.debug_list();
        let mut stack = Vec::new();
        let mut current = self.0.as_deref();
        loop {
            while let Some(node) = current {
                stack.push(node);
                current = node.left.as_deref();
            }
            match stack.pop() {
                Some(node) => {
                    list.entry(&node.value);
                    current = node.right.as_deref();
                }
                None => break,
            }
        }
        list.finish()
    }
}

impl<T, C> Tree<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    /// Generates a new, empty `Tree` ordered by `compare`. The comparator must be a consistent
    /// total order: the same two values always compare the same way.
    pub fn new(compare: C) -> Self {
        Self {
            root: None,
            compare,
            len: 0,
        }
    }

    /// Inserts `value` into the tree. If a stored value compares equal to it, that value is
    /// overwritten and the node count is unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use generic_ds::tree::Tree;
    ///
    /// let mut tree = Tree::new(|a: &(i32, &str), b: &(i32, &str)| a.0.cmp(&b.0));
    ///
    /// tree.insert((1, "one"));
    /// tree.insert((1, "uno"));
    ///
    /// assert_eq!(tree.get(&(1, "")), Some(&(1, "uno")));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, value: T) {
        let mut link = &mut self.root;
        while let Some(node) = link {
            match (self.compare)(&value, &node.value) {
                Ordering::Less => link = &mut node.left,
                Ordering::Equal => {
                    node.value = value;
                    return;
                }
                Ordering::Greater => link = &mut node.right,
            }
        }
        *link = Some(Box::new(Node {
            value,
            left: None,
            right: None,
        }));
        self.len += 1;
    }

    /// Returns `true` if some stored value compares equal to `value`.
    ///
    /// # Examples
    ///
    /// ```
    /// use generic_ds::tree::Tree;
    ///
    /// let mut tree = Tree::new(|a: &i32, b: &i32| a.cmp(b));
    /// tree.insert(5);
    ///
    /// assert!(tree.contains(&5));
    /// assert!(!tree.contains(&42));
    /// ```
    pub fn contains(&self, value: &T) -> bool {
        self.get(value).is_some()
    }

    /// Potentially finds the stored value that compares equal to `probe`. If no node matches,
    /// `None` is returned.
    pub fn get(&self, probe: &T) -> Option<&T> {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            current = match (self.compare)(probe, &node.value) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Equal => return Some(&node.value),
                Ordering::Greater => node.right.as_deref(),
            };
        }
        None
    }
}

impl<T, C> Tree<T, C> {
    /// The number of nodes in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree has no nodes.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Gets the height of this tree: the number of nodes on the longest path from the root to a
    /// leaf. An empty tree has height 0.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut stack: Vec<(&Node<T>, usize)> =
            self.root.as_deref().map(|root| (root, 1)).into_iter().collect();
        while let Some((node, depth)) = stack.pop() {
            height = height.max(depth);
            stack.extend(node.left.as_deref().map(|left| (left, depth + 1)));
            stack.extend(node.right.as_deref().map(|right| (right, depth + 1)));
        }
        height
    }
}
