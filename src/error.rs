//! Error types for queue and registry operations.
//!
//! Every fallible operation returns one of these variants and leaves the
//! queue or registry exactly as it was before the call.

/// Result type for queue and registry operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Queue and registry errors with structured context.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// A required argument is missing or malformed (e.g. an empty name).
    #[error("invalid argument: {reason}")]
    InvalidArgument { reason: String },

    /// Another element of the queue already holds this priority.
    #[error("priority {priority} is already present in the queue")]
    DuplicatePriority { priority: u32 },

    /// A queue with this name is already bound in the registry.
    #[error("queue '{name}' already exists")]
    DuplicateQueue { name: String },

    /// No element with this name exists in the queue.
    #[error("element not found: {name}")]
    ElementNotFound { name: String },

    /// The element name occurs more than once, so the target is ambiguous.
    #[error("element '{name}' occurs {occurrences} times in the queue")]
    AmbiguousTarget { name: String, occurrences: usize },

    /// The queue reached its configured element limit.
    #[error("queue is full (max elements: {max})")]
    QueueFull { max: usize },

    /// The registry reached its configured queue limit.
    #[error("registry is full (max queues: {max})")]
    RegistryFull { max: usize },
}

impl Error {
    /// Create an invalid argument error.
    pub fn invalid_argument(reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            reason: reason.into(),
        }
    }

    /// Create a duplicate priority error.
    #[must_use]
    pub fn duplicate_priority(priority: u32) -> Self {
        Self::DuplicatePriority { priority }
    }

    /// Create a duplicate queue error.
    pub fn duplicate_queue(name: impl Into<String>) -> Self {
        Self::DuplicateQueue { name: name.into() }
    }

    /// Create an element not found error.
    pub fn element_not_found(name: impl Into<String>) -> Self {
        Self::ElementNotFound { name: name.into() }
    }

    /// Create an ambiguous target error.
    pub fn ambiguous_target(name: impl Into<String>, occurrences: usize) -> Self {
        Self::AmbiguousTarget {
            name: name.into(),
            occurrences,
        }
    }

    /// Returns true for errors caused by a name or priority that already exists.
    #[must_use]
    pub fn is_duplicate(&self) -> bool {
        matches!(
            self,
            Self::DuplicatePriority { .. } | Self::DuplicateQueue { .. }
        )
    }

    /// Returns true for errors caused by a capacity limit.
    #[must_use]
    pub fn is_capacity(&self) -> bool {
        matches!(self, Self::QueueFull { .. } | Self::RegistryFull { .. })
    }
}
