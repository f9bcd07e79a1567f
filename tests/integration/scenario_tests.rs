//! End-to-end scenarios through the public API.

use anyhow::{Context, Result};
use prioq::{Error, Occupancy, PriorityQueue, QueueRegistry};

// =============================================================================
// Queue Scenarios
// =============================================================================

#[test]
fn test_insert_range_remove_drain() -> Result<()> {
    let mut queue = PriorityQueue::new();
    queue.insert("A", 5)?;
    queue.insert("B", 9)?;
    queue.insert("C", 3)?;

    assert_eq!(queue.names().into_vec(), vec!["B", "A", "C"]);

    assert_eq!(queue.remove_range(4, 9), 2);
    assert_eq!(queue.names().into_vec(), vec!["C"]);

    assert_eq!(queue.peek().as_deref(), Some("C"));
    assert_eq!(queue.dequeue().as_deref(), Some("C"));
    assert!(queue.is_empty());

    Ok(())
}

#[test]
fn test_dequeued_names_are_owned() -> Result<()> {
    let mut queue = PriorityQueue::new();
    queue.insert("first", 2)?;
    queue.insert("second", 1)?;

    let mut taken = queue.dequeue().context("head")?;
    taken.push_str("-done");

    // The queue kept nothing of the dequeued name
    assert_eq!(queue.names().into_vec(), vec!["second"]);
    assert_eq!(taken, "first-done");

    Ok(())
}

#[test]
fn test_change_priority_lifecycle() -> Result<()> {
    let mut queue = PriorityQueue::new();
    queue.insert("render", 10)?;
    queue.insert("encode", 20)?;
    queue.insert("upload", 30)?;

    // Collision with another element
    assert_eq!(
        queue.change_priority("render", 20),
        Err(Error::duplicate_priority(20))
    );

    // Promote render above everything
    queue.change_priority("render", 40)?;
    assert_eq!(queue.peek().as_deref(), Some("render"));
    assert_eq!(queue.names().into_vec(), vec!["render", "upload", "encode"]);

    // Ambiguous once the name repeats
    queue.insert("render", 5)?;
    assert!(matches!(
        queue.change_priority("render", 1),
        Err(Error::AmbiguousTarget { occurrences: 2, .. })
    ));

    Ok(())
}

// =============================================================================
// Registry Scenarios
// =============================================================================

#[test]
fn test_duplicate_queue_name() -> Result<()> {
    let mut registry = QueueRegistry::new();

    registry.add_queue("x")?;
    let err = registry.add_queue("x").unwrap_err();

    assert_eq!(err, Error::duplicate_queue("x"));
    assert!(err.is_duplicate());
    assert_eq!(registry.len(), 1);

    Ok(())
}

#[test]
fn test_registry_lifecycle() -> Result<()> {
    let mut registry = QueueRegistry::new();
    registry.add_queue("urgent")?;
    registry.add_queue("batch")?;

    {
        let urgent = registry.get_mut("urgent").context("urgent queue")?;
        urgent.insert("page-oncall", 100)?;
        urgent.insert("restart-db", 90)?;
    }
    {
        let batch = registry.get_mut("batch").context("batch queue")?;
        for (i, job) in ["reindex", "vacuum", "backup"].iter().enumerate() {
            batch.insert(*job, u32::try_from(i)?)?;
        }
    }

    assert_eq!(registry.total_elements(), 5);
    assert_eq!(registry.occupancy("urgent"), Occupancy::NonEmpty);

    // Drain the urgent queue through the registry handle
    let urgent = registry.get_mut("urgent").context("urgent queue")?;
    let mut drained = Vec::new();
    while let Some(name) = urgent.dequeue() {
        drained.push(name);
    }
    assert_eq!(drained, vec!["page-oncall", "restart-db"]);
    assert_eq!(registry.occupancy("urgent"), Occupancy::Empty);

    // Removing a queue drops its elements
    assert!(registry.remove_queue("batch")?);
    assert!(registry.get("batch").is_none());
    assert_eq!(registry.occupancy("batch"), Occupancy::Missing);
    assert_eq!(registry.total_elements(), 0);

    assert_eq!(registry.clear(), 1);
    assert!(registry.is_empty());

    Ok(())
}
