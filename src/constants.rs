//! Shared constants and defaults.

/// Default configuration file name, looked up in the current directory.
pub const DEFAULT_CONFIG_FILE: &str = "prioq.toml";

/// Queue capacity above which configuration validation emits a warning.
///
/// Inserts and priority changes scan the whole queue, so very large queues
/// get slow.
pub const LARGE_QUEUE_WARN_THRESHOLD: usize = 100_000;

/// Registry capacity above which configuration validation emits a warning.
pub const LARGE_REGISTRY_WARN_THRESHOLD: usize = 10_000;
