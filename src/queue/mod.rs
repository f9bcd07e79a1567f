//! Priority queues of named elements.
//!
//! A [`PriorityQueue`] keeps its elements strictly descending by priority,
//! with no two elements sharing a priority. Names may repeat as long as
//! their priorities differ.
//!
//! # Examples
//!
//! ## Ordered Insertion
//!
//! ```rust
//! use prioq::PriorityQueue;
//!
//! # fn main() -> prioq::Result<()> {
//! let mut queue = PriorityQueue::new();
//! queue.insert("low", 1)?;
//! queue.insert("high", 10)?;
//!
//! // Duplicate priorities are rejected
//! assert!(queue.insert("also-high", 10).is_err());
//!
//! assert_eq!(queue.peek().as_deref(), Some("high"));
//! assert_eq!(queue.priority_of("low")?, 1);
//! # Ok(())
//! # }
//! ```
//!
//! ## Name Snapshots
//!
//! ```rust
//! use prioq::PriorityQueue;
//!
//! # fn main() -> prioq::Result<()> {
//! let mut queue = PriorityQueue::new();
//! queue.insert("b", 2)?;
//! queue.insert("a", 3)?;
//!
//! let names = queue.names();
//! queue.clear();
//!
//! // The snapshot owns its names
//! assert_eq!(names.len(), 2);
//! assert_eq!(names.release(), 2);
//! # Ok(())
//! # }
//! ```

mod priority_queue;
mod types;

// Re-export public API
pub use priority_queue::PriorityQueue;
pub use types::{Element, NameList};
