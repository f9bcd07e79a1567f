//! Registries built from TOML configuration.

use std::io::Write;

use anyhow::{Context, Result};
use prioq::{Config, Error, QueueRegistry, ReorderPolicy};

#[test]
fn test_registry_from_config_file() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("prioq.toml");
    let mut file = std::fs::File::create(&path)?;
    writeln!(
        file,
        r#"
[registry]
max_queues = 1

[registry.queue]
max_elements = 2
reorder = "in_place"
"#
    )?;
    drop(file);

    let config = Config::load_from(&path)?;
    let validation = config.validate()?;
    assert!(validation.has_warnings());

    let mut registry = QueueRegistry::with_config(config.registry);
    registry.add_queue("only")?;
    assert_eq!(
        registry.add_queue("another"),
        Err(Error::RegistryFull { max: 1 })
    );

    let queue = registry.get_mut("only").context("queue only")?;
    assert_eq!(queue.config().reorder, ReorderPolicy::InPlace);
    queue.insert("a", 10)?;
    queue.insert("b", 5)?;
    assert_eq!(queue.insert("c", 1), Err(Error::QueueFull { max: 2 }));

    // In-place policy keeps the element where it was
    queue.change_priority("b", 50)?;
    assert_eq!(queue.names().into_vec(), vec!["a", "b"]);
    assert!(!queue.is_ordered());

    Ok(())
}

#[test]
fn test_invalid_config_rejected() -> Result<()> {
    let config = Config::from_toml_str("[registry]\nmax_queues = 0\n")?;

    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("max_queues cannot be 0"));

    Ok(())
}
