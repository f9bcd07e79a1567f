//! In-memory registry of named priority queues.
//!
//! - [`PriorityQueue`] - named elements ordered by descending, unique priority
//! - [`QueueRegistry`] - queues bound to unique names, owned by the registry
//! - [`Config`] - capacity limits and reorder policy, loadable from TOML
//!
//! Everything is synchronous and single-threaded. Failed operations return an
//! [`Error`] and leave the structure untouched.
//!
//! ```rust
//! use prioq::QueueRegistry;
//!
//! # fn main() -> anyhow::Result<()> {
//! let mut registry = QueueRegistry::new();
//! registry.add_queue("inbox")?;
//!
//! let inbox = registry.get_mut("inbox").expect("just added");
//! inbox.insert("A", 5)?;
//! inbox.insert("B", 9)?;
//! inbox.insert("C", 3)?;
//!
//! assert_eq!(inbox.names().into_vec(), vec!["B", "A", "C"]);
//! assert_eq!(inbox.remove_range(4, 9), 2);
//! assert_eq!(inbox.dequeue().as_deref(), Some("C"));
//! assert!(inbox.is_empty());
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod constants;
mod error;
pub mod queue;
pub mod registry;
mod validation;

pub use config::{Config, QueueConfig, RegistryConfig, ReorderPolicy, ValidationResult};
pub use error::{Error, Result};
pub use queue::{Element, NameList, PriorityQueue};
pub use registry::{Occupancy, QueueRegistry};
