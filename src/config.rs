//! Configuration types for queues and registries.
//!
//! This module provides configuration structs for capacity limits and the
//! reordering policy applied when an element's priority changes. It includes:
//!
//! - [`Config`] - Root configuration struct, loadable from TOML
//! - [`RegistryConfig`] - Registry-wide limits plus the per-queue defaults
//! - [`QueueConfig`] - Per-queue limits and [`ReorderPolicy`]
//!
//! All configuration types support serde deserialization and default to
//! unlimited capacity with [`ReorderPolicy::Resort`].
//!
//! ```toml
//! [registry]
//! max_queues = 16
//!
//! [registry.queue]
//! max_elements = 1000
//! reorder = "in_place"
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::constants;

/// Result of configuration validation.
#[derive(Debug, Default)]
pub struct ValidationResult {
    /// Non-fatal warnings that should be surfaced but don't prevent operation.
    pub warnings: Vec<String>,
}

impl ValidationResult {
    /// Returns true if there are any warnings.
    #[must_use]
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

/// What happens to an element's position after its priority changes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReorderPolicy {
    /// Move the element to its sorted position, keeping the queue strictly
    /// descending at all times.
    #[default]
    Resort,
    /// Update the priority where the element sits. The queue may stop being
    /// descending until the out-of-place elements are removed.
    InPlace,
}

/// Per-queue configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct QueueConfig {
    /// Maximum number of elements per queue (None = unlimited).
    #[serde(default)]
    pub max_elements: Option<usize>,
    /// Reordering applied by `change_priority`.
    #[serde(default)]
    pub reorder: ReorderPolicy,
}

/// Registry configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RegistryConfig {
    /// Maximum number of queues (None = unlimited).
    #[serde(default)]
    pub max_queues: Option<usize>,
    /// Configuration applied to every queue the registry creates.
    #[serde(default)]
    pub queue: QueueConfig,
}

/// prioq.toml configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub registry: RegistryConfig,
}

impl Config {
    /// Load configuration from prioq.toml in the current directory.
    ///
    /// # Errors
    ///
    /// Returns an error if prioq.toml cannot be read or contains invalid TOML.
    pub fn load() -> Result<Self> {
        Self::load_from(constants::DEFAULT_CONFIG_FILE)
    }

    /// Load configuration from the specified path.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read (IO error)
    /// - The file contains invalid TOML syntax
    /// - Fields are unknown or have invalid types
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_toml_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Parse configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not valid TOML or does not match
    /// the configuration schema.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content).context("Invalid prioq configuration")?;
        Ok(config)
    }

    /// Validate configuration.
    ///
    /// Returns a `ValidationResult` containing any non-fatal warnings.
    ///
    /// # Errors
    ///
    /// Returns an error if validation fails with one or more errors:
    /// - `max_queues` set to 0
    /// - `max_elements` set to 0
    pub fn validate(&self) -> Result<ValidationResult> {
        let mut errors = Vec::new();
        let mut warnings = Vec::new();

        // 1. Registry limits
        match self.registry.max_queues {
            Some(0) => errors.push(
                "registry.max_queues cannot be 0. Omit it for an unlimited registry".to_string(),
            ),
            Some(max) if max > constants::LARGE_REGISTRY_WARN_THRESHOLD => {
                warnings.push(format!(
                    "registry.max_queues {max} is very high (> {})\n  \
                     Queue lookup is a linear scan over all bound names",
                    constants::LARGE_REGISTRY_WARN_THRESHOLD
                ));
            },
            _ => {},
        }

        // 2. Queue limits
        let queue = &self.registry.queue;
        match queue.max_elements {
            Some(0) => errors.push(
                "registry.queue.max_elements cannot be 0. Omit it for unlimited queues"
                    .to_string(),
            ),
            Some(max) if max > constants::LARGE_QUEUE_WARN_THRESHOLD => {
                warnings.push(format!(
                    "registry.queue.max_elements {max} is very high (> {})\n  \
                     Inserts and priority changes scan the whole queue",
                    constants::LARGE_QUEUE_WARN_THRESHOLD
                ));
            },
            _ => {},
        }

        // 3. Reorder policy
        if queue.reorder == ReorderPolicy::InPlace {
            warnings.push(
                "registry.queue.reorder = \"in_place\" lets change_priority leave queues \
                 out of descending order\n  \
                 Recommendation: use \"resort\" unless the historic behavior is required"
                    .to_string(),
            );
        }

        if !errors.is_empty() {
            anyhow::bail!(
                "Configuration validation failed:\n  - {}",
                errors.join("\n  - ")
            );
        }

        Ok(ValidationResult { warnings })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_empty_config() {
        let config = Config::from_toml_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.registry.max_queues, None);
        assert_eq!(config.registry.queue.reorder, ReorderPolicy::Resort);
    }

    #[test]
    fn test_parse_full_config() {
        let toml_str = r#"
[registry]
max_queues = 16

[registry.queue]
max_elements = 1000
reorder = "in_place"
"#;
        let config = Config::from_toml_str(toml_str).unwrap();
        assert_eq!(config.registry.max_queues, Some(16));
        assert_eq!(config.registry.queue.max_elements, Some(1000));
        assert_eq!(config.registry.queue.reorder, ReorderPolicy::InPlace);
    }

    #[test]
    fn test_parse_rejects_unknown_field() {
        let toml_str = r#"
[registry]
max_queue = 16
"#;
        assert!(Config::from_toml_str(toml_str).is_err());
    }

    #[test]
    fn test_parse_rejects_unknown_policy() {
        let toml_str = r#"
[registry.queue]
reorder = "sometimes"
"#;
        assert!(Config::from_toml_str(toml_str).is_err());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[registry]\nmax_queues = 2").unwrap();

        let config = Config::load_from(file.path()).unwrap();
        assert_eq!(config.registry.max_queues, Some(2));
    }

    #[test]
    fn test_load_from_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load_from(dir.path().join("absent.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn test_validate_default_config() {
        let result = Config::default().validate().unwrap();
        assert!(!result.has_warnings());
    }

    #[test]
    fn test_validate_zero_limits() {
        let config = Config {
            registry: RegistryConfig {
                max_queues: Some(0),
                queue: QueueConfig {
                    max_elements: Some(0),
                    ..Default::default()
                },
            },
        };
        let err = config.validate().unwrap_err().to_string();
        assert!(err.contains("max_queues cannot be 0"));
        assert!(err.contains("max_elements cannot be 0"));
    }

    #[test]
    fn test_validate_warnings() {
        let config = Config {
            registry: RegistryConfig {
                max_queues: Some(constants::LARGE_REGISTRY_WARN_THRESHOLD + 1),
                queue: QueueConfig {
                    max_elements: Some(constants::LARGE_QUEUE_WARN_THRESHOLD + 1),
                    reorder: ReorderPolicy::InPlace,
                },
            },
        };
        let result = config.validate().unwrap();
        assert_eq!(result.warnings.len(), 3);
        assert!(result.warnings[2].contains("in_place"));
    }
}
