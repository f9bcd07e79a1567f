//! Registry of named priority queues.
//!
//! Each queue is bound to a unique, case-sensitive name and owned by the
//! registry. Removing a binding, or clearing the registry, drops the queue
//! and every element in it.
//!
//! # Examples
//!
//! ```rust
//! use prioq::{Error, QueueRegistry};
//!
//! # fn main() -> prioq::Result<()> {
//! let mut registry = QueueRegistry::new();
//! registry.add_queue("jobs")?;
//!
//! // Names are unique
//! assert!(matches!(
//!     registry.add_queue("jobs"),
//!     Err(Error::DuplicateQueue { .. })
//! ));
//! assert_eq!(registry.len(), 1);
//!
//! // Operate on the queue through a borrow
//! if let Some(jobs) = registry.get_mut("jobs") {
//!     jobs.insert("build", 5)?;
//!     jobs.insert("deploy", 1)?;
//! }
//! assert_eq!(registry.get("jobs").and_then(|q| q.peek()).as_deref(), Some("build"));
//!
//! assert!(registry.remove_queue("jobs")?);
//! assert!(registry.get("jobs").is_none());
//! # Ok(())
//! # }
//! ```

mod store;
mod types;

// Re-export public API
pub use store::QueueRegistry;
pub use types::Occupancy;
