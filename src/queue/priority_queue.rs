//! Priority queue implementation.
//!
//! Elements are kept in a `VecDeque` ordered from the highest priority (the
//! head) to the lowest. Priorities are unique within a queue; names are not.

use std::collections::VecDeque;

use tracing::{debug, trace, warn};

use super::types::{Element, NameList};
use crate::config::{QueueConfig, ReorderPolicy};
use crate::error::{Error, Result};
use crate::validation::{NameKind, validate_name};

/// A queue of named elements ordered by descending, unique priority.
///
/// # Example
///
/// ```
/// use prioq::PriorityQueue;
///
/// # fn main() -> prioq::Result<()> {
/// let mut queue = PriorityQueue::new();
/// queue.insert("A", 5)?;
/// queue.insert("B", 9)?;
/// queue.insert("C", 3)?;
///
/// assert_eq!(queue.names().into_vec(), vec!["B", "A", "C"]);
/// assert_eq!(queue.remove_range(4, 9), 2);
/// assert_eq!(queue.dequeue().as_deref(), Some("C"));
/// assert!(queue.is_empty());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct PriorityQueue {
    elements: VecDeque<Element>,
    config: QueueConfig,
}

impl PriorityQueue {
    /// Create an empty, unbounded queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty queue with the given configuration.
    #[must_use]
    pub fn with_config(config: QueueConfig) -> Self {
        Self {
            elements: VecDeque::new(),
            config,
        }
    }

    /// The configuration this queue was created with.
    #[must_use]
    pub fn config(&self) -> &QueueConfig {
        &self.config
    }

    /// Reset the queue to empty, keeping its configuration.
    pub fn reset(&mut self) {
        self.clear();
    }

    /// Insert a new element at its sorted position.
    ///
    /// The queue is scanned from the head; the element goes immediately
    /// before the first element with a lower priority.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The name is empty or contains null bytes ([`Error::InvalidArgument`])
    /// - Any element already has this priority ([`Error::DuplicatePriority`])
    /// - The queue holds `max_elements` elements ([`Error::QueueFull`])
    ///
    /// The queue is left unchanged on error.
    pub fn insert(&mut self, name: impl Into<String>, priority: u32) -> Result<()> {
        let name = name.into();
        validate_name(NameKind::Element, &name)?;

        if self.holds_priority(priority, None) {
            debug!(element = %name, priority, "Rejected insert with duplicate priority");
            return Err(Error::duplicate_priority(priority));
        }

        if let Some(max) = self.config.max_elements
            && self.elements.len() >= max
        {
            warn!(element = %name, priority, max, "Rejected insert into full queue");
            return Err(Error::QueueFull { max });
        }

        let index = self.insertion_index(priority);
        trace!(element = %name, priority, index, "Inserted element");
        self.elements.insert(index, Element { name, priority });
        Ok(())
    }

    /// Returns true if the queue holds no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Number of elements in the queue.
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Copy of the head element's name, without removing it.
    #[must_use]
    pub fn peek(&self) -> Option<String> {
        self.elements.front().map(|e| e.name.clone())
    }

    /// Borrow the head element.
    #[must_use]
    pub fn peek_element(&self) -> Option<&Element> {
        self.elements.front()
    }

    /// Remove the head element and hand its name to the caller.
    pub fn dequeue(&mut self) -> Option<String> {
        self.dequeue_element().map(Element::into_name)
    }

    /// Remove the head element and return it whole.
    pub fn dequeue_element(&mut self) -> Option<Element> {
        let element = self.elements.pop_front()?;
        trace!(element = %element.name, priority = element.priority, "Dequeued element");
        Some(element)
    }

    /// Owned copies of every element name, in queue order.
    #[must_use]
    pub fn names(&self) -> NameList {
        NameList::new(self.elements.iter().map(|e| e.name.clone()).collect())
    }

    /// Snapshot of every priority, in queue order.
    #[must_use]
    pub fn priorities(&self) -> Vec<u32> {
        self.elements.iter().map(|e| e.priority).collect()
    }

    /// Iterate over the elements in queue order.
    pub fn iter(&self) -> impl Iterator<Item = &Element> {
        self.elements.iter()
    }

    /// Remove every element, returning how many were released.
    ///
    /// Safe to call on an empty queue.
    pub fn clear(&mut self) -> usize {
        let count = self.elements.len();
        self.elements.clear();
        if count > 0 {
            debug!(released = count, "Cleared queue");
        }
        count
    }

    /// Returns true if an element with this name is stored.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.elements.iter().any(|e| e.name == name)
    }

    /// Priority of the first element with this name, counted from the head.
    ///
    /// While the queue is descending this is the highest priority among
    /// elements sharing the name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] for an empty or malformed name and
    /// [`Error::ElementNotFound`] if no element has this name.
    pub fn priority_of(&self, name: &str) -> Result<u32> {
        validate_name(NameKind::Element, name)?;
        self.elements
            .iter()
            .find(|e| e.name == name)
            .map(|e| e.priority)
            .ok_or_else(|| Error::element_not_found(name))
    }

    /// Remove every element whose priority lies in `low..=high`.
    ///
    /// Survivors keep their relative order. A range with `low > high` is
    /// empty and removes nothing. Returns the number of elements removed.
    pub fn remove_range(&mut self, low: u32, high: u32) -> usize {
        let range = low..=high;
        let before = self.elements.len();
        self.elements.retain(|e| !range.contains(&e.priority));
        let removed = before - self.elements.len();
        debug!(low, high, removed, remaining = self.elements.len(), "Removed priority range");
        removed
    }

    /// Change the priority of the element named `name`.
    ///
    /// With [`ReorderPolicy::Resort`] the element is moved to its sorted
    /// position. With [`ReorderPolicy::InPlace`] it stays where it is, which
    /// can leave the queue out of descending order (see [`Self::is_ordered`]).
    ///
    /// # Errors
    ///
    /// Checked in this order:
    /// - The name is empty or malformed ([`Error::InvalidArgument`])
    /// - Another element already has `new_priority` ([`Error::DuplicatePriority`])
    /// - The name occurs more than once ([`Error::AmbiguousTarget`])
    /// - No element has this name ([`Error::ElementNotFound`])
    ///
    /// The queue is left unchanged on error.
    pub fn change_priority(&mut self, name: &str, new_priority: u32) -> Result<()> {
        validate_name(NameKind::Element, name)?;

        let mut target = None;
        let mut occurrences = 0usize;
        for (index, element) in self.elements.iter().enumerate() {
            if element.name == name {
                occurrences += 1;
                if target.is_none() {
                    target = Some(index);
                }
            }
        }

        if self.holds_priority(new_priority, Some(name)) {
            debug!(element = %name, priority = new_priority, "Rejected priority change onto taken priority");
            return Err(Error::duplicate_priority(new_priority));
        }

        if occurrences > 1 {
            debug!(element = %name, occurrences, "Rejected priority change for ambiguous name");
            return Err(Error::ambiguous_target(name, occurrences));
        }

        let Some(index) = target else {
            debug!(element = %name, "Rejected priority change for missing element");
            return Err(Error::element_not_found(name));
        };

        match self.config.reorder {
            ReorderPolicy::Resort => {
                if let Some(mut element) = self.elements.remove(index) {
                    let old = element.priority;
                    element.priority = new_priority;
                    let to = self.insertion_index(new_priority);
                    self.elements.insert(to, element);
                    debug!(element = %name, old, new = new_priority, from = index, to, "Changed priority");
                }
            },
            ReorderPolicy::InPlace => {
                if let Some(element) = self.elements.get_mut(index) {
                    let old = element.priority;
                    element.priority = new_priority;
                    debug!(element = %name, old, new = new_priority, index, "Changed priority in place");
                }
            },
        }

        Ok(())
    }

    /// Returns true if priorities are strictly descending from the head.
    ///
    /// Always true unless [`ReorderPolicy::InPlace`] priority changes have
    /// moved elements out of order.
    #[must_use]
    pub fn is_ordered(&self) -> bool {
        self.elements
            .iter()
            .zip(self.elements.iter().skip(1))
            .all(|(a, b)| a.priority > b.priority)
    }

    /// Position before the first element with a lower priority.
    fn insertion_index(&self, priority: u32) -> usize {
        self.elements
            .iter()
            .position(|e| e.priority < priority)
            .unwrap_or(self.elements.len())
    }

    /// Whether some element holds `priority`, ignoring elements named `except`.
    fn holds_priority(&self, priority: u32, except: Option<&str>) -> bool {
        self.elements
            .iter()
            .any(|e| e.priority == priority && except != Some(e.name.as_str()))
    }
}

impl<'a> IntoIterator for &'a PriorityQueue {
    type Item = &'a Element;
    type IntoIter = std::collections::vec_deque::Iter<'a, Element>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}
