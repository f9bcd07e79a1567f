//! Core types for the queue registry.

use crate::queue::PriorityQueue;

/// A name-to-queue binding owned by the registry (internal).
#[derive(Debug, Clone)]
pub(crate) struct QueueBinding {
    pub(crate) name: String,
    pub(crate) queue: PriorityQueue,
}

impl QueueBinding {
    pub(crate) fn new(name: String, queue: PriorityQueue) -> Self {
        Self { name, queue }
    }
}

/// Whether a named queue exists and holds elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Occupancy {
    /// No queue is bound to the name.
    Missing,
    /// The queue exists and holds no elements.
    Empty,
    /// The queue exists and holds at least one element.
    NonEmpty,
}

impl Occupancy {
    pub(crate) fn of(queue: Option<&PriorityQueue>) -> Self {
        match queue {
            None => Self::Missing,
            Some(q) if q.is_empty() => Self::Empty,
            Some(_) => Self::NonEmpty,
        }
    }
}
