//! Main registry implementation.
//!
//! Provides the public `QueueRegistry` API: named queue lifetimes, lookup,
//! and teardown.

use tracing::{debug, info, warn};

use super::types::{Occupancy, QueueBinding};
use crate::config::{QueueConfig, RegistryConfig};
use crate::error::{Error, Result};
use crate::queue::PriorityQueue;
use crate::validation::{NameKind, validate_name};

/// Named collection of priority queues.
///
/// Queue names are unique and compared exactly (case-sensitive). Iteration
/// follows insertion order. The registry owns every queue; callers borrow
/// them through [`get`](Self::get) and [`get_mut`](Self::get_mut).
#[derive(Debug, Clone, Default)]
pub struct QueueRegistry {
    bindings: Vec<QueueBinding>,
    config: RegistryConfig,
}

impl QueueRegistry {
    /// Create an empty, unbounded registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty registry with the given configuration.
    #[must_use]
    pub fn with_config(config: RegistryConfig) -> Self {
        Self {
            bindings: Vec::new(),
            config,
        }
    }

    /// The configuration this registry was created with.
    #[must_use]
    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// Configuration given to every queue this registry creates.
    #[must_use]
    pub fn queue_config(&self) -> &QueueConfig {
        &self.config.queue
    }

    /// Bind a new empty queue to `name`, after all existing bindings.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The name is empty or contains null bytes ([`Error::InvalidArgument`])
    /// - A queue with this name already exists ([`Error::DuplicateQueue`])
    /// - The registry holds `max_queues` queues ([`Error::RegistryFull`])
    pub fn add_queue(&mut self, name: impl Into<String>) -> Result<()> {
        let name = name.into();
        validate_name(NameKind::Queue, &name)?;

        if self.position(&name).is_some() {
            debug!(queue = %name, "Rejected duplicate queue name");
            return Err(Error::duplicate_queue(name));
        }

        if let Some(max) = self.config.max_queues
            && self.bindings.len() >= max
        {
            warn!(queue = %name, max, "Rejected queue, registry is full");
            return Err(Error::RegistryFull { max });
        }

        debug!(queue = %name, count = self.bindings.len() + 1, "Added queue");
        let queue = PriorityQueue::with_config(self.config.queue.clone());
        self.bindings.push(QueueBinding::new(name, queue));
        Ok(())
    }

    /// Number of bound queues.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Returns true if no queues are bound.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Returns true if a queue is bound to `name`.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Borrow the queue bound to `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&PriorityQueue> {
        self.position(name).map(|i| &self.bindings[i].queue)
    }

    /// Mutably borrow the queue bound to `name`.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut PriorityQueue> {
        let index = self.position(name)?;
        Some(&mut self.bindings[index].queue)
    }

    /// Whether the named queue is missing, empty, or holds elements.
    #[must_use]
    pub fn occupancy(&self, name: &str) -> Occupancy {
        Occupancy::of(self.get(name))
    }

    /// Number of elements in the named queue, or `None` if it doesn't exist.
    #[must_use]
    pub fn queue_len(&self, name: &str) -> Option<usize> {
        self.get(name).map(PriorityQueue::len)
    }

    /// Remove the queue bound to `name`, releasing all of its elements.
    ///
    /// Returns `Ok(true)` if the queue existed and was removed,
    /// `Ok(false)` if no queue has this name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if the name is empty or malformed.
    pub fn remove_queue(&mut self, name: &str) -> Result<bool> {
        validate_name(NameKind::Queue, name)?;

        let Some(index) = self.position(name) else {
            debug!(queue = %name, "Queue to remove not found");
            return Ok(false);
        };

        let binding = self.bindings.remove(index);
        debug!(
            queue = %binding.name,
            index,
            released = binding.queue.len(),
            "Removed queue"
        );
        Ok(true)
    }

    /// Tear down every queue and its elements, returning how many queues
    /// were removed.
    pub fn clear(&mut self) -> usize {
        let queues = self.bindings.len();
        if queues > 0 {
            let elements = self.total_elements();
            info!(queues, elements, "Cleared registry");
        }
        self.bindings.clear();
        queues
    }

    /// Queue names in insertion order.
    #[must_use]
    pub fn queue_names(&self) -> Vec<String> {
        self.bindings.iter().map(|b| b.name.clone()).collect()
    }

    /// Iterate over `(name, queue)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &PriorityQueue)> {
        self.bindings.iter().map(|b| (b.name.as_str(), &b.queue))
    }

    /// Total number of elements across all queues.
    #[must_use]
    pub fn total_elements(&self) -> usize {
        self.bindings.iter().map(|b| b.queue.len()).sum()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.bindings.iter().position(|b| b.name == name)
    }
}
