//! A two-field record that can be ordered in a [`Tree`](crate::tree::Tree).
//!
//! # Examples
//!
//! ```
//! use generic_ds::person::Person;
//! use generic_ds::tree::Tree;
//!
//! let mut tree = Tree::new(Person::compare);
//! tree.insert(Person::new("Ada", 36));
//!
//! assert!(tree.contains(&Person::new("Ada", 36)));
//! assert!(!tree.contains(&Person::new("Ada", 37)));
//! ```

use std::cmp::Ordering;

/// Someone with a name and an age.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    /// Compared first.
    pub name: String,
    /// Breaks ties between equal names.
    pub age: u32,
}

impl Person {
    /// Creates a `Person`.
    pub fn new(name: impl Into<String>, age: u32) -> Self {
        Self {
            name: name.into(),
            age,
        }
    }

    /// Orders people by name, then by age.
    pub fn compare(&self, other: &Self) -> Ordering {
        self.name
            .cmp(&other.name)
            .then_with(|| self.age.cmp(&other.age))
    }
}
