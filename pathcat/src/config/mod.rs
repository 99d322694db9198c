//! Configuration system for pathcat.
//!
//! This module provides hierarchical configuration with support for:
//! - YAML configuration files (user config and project files)
//! - Environment variable overrides
//! - Programmatic configuration via builder pattern
//! - Validation of encoding labels, separator and drive label
//!
//! # Configuration Precedence
//!
//! Configuration is merged from multiple sources with the following precedence
//! (highest to lowest):
//!
//! 1. Programmatic overrides (via `ConfigBuilder::with_config`)
//! 2. Environment variables (`PATHCAT_*`)
//! 3. Private project config (`pathcat.local.yaml`)
//! 4. Project config (`pathcat.yaml`)
//! 5. User config (`~/.pathcat/config.yaml`)
//! 6. Built-in defaults
//!
//! # Examples
//!
//! Loading from a specific directory:
//!
//! ```no_run
//! use pathcat::config::ConfigBuilder;
//! use std::path::Path;
//!
//! let config = ConfigBuilder::new()
//!     .with_working_dir(Path::new("/path/to/project"))
//!     .build()
//!     .unwrap();
//! let options = config.process_options().unwrap();
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

// Re-export key types at module root
pub use builder::ConfigBuilder;
pub use environment::EnvironmentConfig;
pub use loader::{default_data_dir, resolve_data_dir, ConfigLoader, ConfigSource};
pub use merger::ConfigMerger;
pub use schema::{parse_separator, Config, DEFAULT_FALLBACK_ENCODING};
pub use validator::ConfigValidator;
