//! This crate exposes a couple of generic data structures, mostly for educational purposes.
//!
//! ## Ordered Tree
//!
//! [`tree::Tree`] is a Binary Search Tree ordered by a comparator supplied when the tree is
//! created. A comparator takes two values and says whether the first is less than, equal to, or
//! greater than the second. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! Two values that compare equal never live in separate nodes: inserting the second one
//! overwrites the first. This tree does not rebalance itself, so its height (and the cost of a
//! lookup) depends on insertion order. Inserting sorted values produces a chain.
//!
//! ## Singly Linked List
//!
//! [`list::List`] is a chain of nodes where each node owns the next. It supports appending,
//! inserting at a position and finding the position of a value.
//!
//! Neither structure supports removal or iteration.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod error;
pub mod list;
pub mod numeric;
pub mod person;
pub mod tree;
