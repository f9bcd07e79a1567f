//! Core types for priority queues.
//!
//! Contains the stored element type and the owned name snapshot handed out
//! by [`PriorityQueue::names`](super::PriorityQueue::names).

use serde::{Deserialize, Serialize};

/// A named element stored in a priority queue.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Element {
    /// Element name, owned by the queue while the element is stored.
    pub name: String,
    /// Priority; unique within a queue, higher values come first.
    pub priority: u32,
}

impl Element {
    /// Create a new element.
    pub fn new(name: impl Into<String>, priority: u32) -> Self {
        Self {
            name: name.into(),
            priority,
        }
    }

    /// Consume the element, returning its name.
    #[must_use]
    pub fn into_name(self) -> String {
        self.name
    }
}

/// Owned copies of every element name of a queue, highest priority first.
///
/// The list shares nothing with the queue it came from; mutating the queue
/// afterwards does not affect it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct NameList {
    names: Vec<String>,
}

impl NameList {
    pub(crate) fn new(names: Vec<String>) -> Self {
        Self { names }
    }

    /// Number of names in the list.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns true if the list holds no names.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Name at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&str> {
        self.names.get(index).map(String::as_str)
    }

    /// Iterate over the names in order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// View the names as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.names
    }

    /// Take ownership of the underlying names.
    #[must_use]
    pub fn into_vec(self) -> Vec<String> {
        self.names
    }

    /// Release the list and every name in it, returning how many names were
    /// released.
    pub fn release(self) -> usize {
        let count = self.names.len();
        drop(self);
        count
    }
}

impl IntoIterator for NameList {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.names.into_iter()
    }
}

impl<'a> IntoIterator for &'a NameList {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.names.iter()
    }
}

impl From<NameList> for Vec<String> {
    fn from(list: NameList) -> Self {
        list.names
    }
}
