//! Configuration management for the todo application.
//!
//! Loads configuration from environment variables with sensible defaults.
//!
//! | variable | meaning | default |
//! |----------|---------|---------|
//! | `TODO_SEED_FILE` | JSON array of `{ "id", "text", "done" }` records | built-in seed |
//! | `TODO_STRICT` | `true` reports rejected commands | `false` |
//! | `RUST_LOG` | tracing filter | `todo=info,tasklist_runtime=info` |

use crate::collection::TodoCollection;
use crate::reducer::RejectionPolicy;
use crate::types::{TodoId, TodoRecord};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default tracing filter
pub const DEFAULT_LOG_FILTER: &str = "todo=info,tasklist_runtime=info";

/// Errors from loading configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The seed file could not be read
    #[error("Failed to read seed file {path}: {source}")]
    Io {
        /// Seed file location
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// The seed file is not a valid todo collection
    #[error("Invalid seed file {path}: {source}")]
    Parse {
        /// Seed file location
        path: PathBuf,
        /// Underlying error
        #[source]
        source: serde_json::Error,
    },
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Where the starting collection comes from; `None` uses [`default_seed`]
    pub seed_file: Option<PathBuf>,
    /// Handling of rejected commands
    pub policy: RejectionPolicy,
    /// Tracing filter directive
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed_file: None,
            policy: RejectionPolicy::Ignore,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// Unparseable values fall back to their defaults.
    #[must_use]
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let strict = lookup("TODO_STRICT")
            .and_then(|s| s.trim().parse::<bool>().ok())
            .unwrap_or(false);

        Self {
            seed_file: lookup("TODO_SEED_FILE")
                .filter(|s| !s.trim().is_empty())
                .map(PathBuf::from),
            policy: if strict {
                RejectionPolicy::Report
            } else {
                RejectionPolicy::Ignore
            },
            log_filter: lookup("RUST_LOG").unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
        }
    }

    /// Build the starting collection.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the seed file cannot be read or does not
    /// hold a valid collection (blank text, duplicate ids, bad JSON).
    pub fn load_seed(&self) -> Result<TodoCollection, ConfigError> {
        match &self.seed_file {
            Some(path) => load_seed_file(path),
            None => Ok(default_seed()),
        }
    }
}

/// Read a collection from a JSON seed file
///
/// # Errors
///
/// See [`Config::load_seed`].
pub fn load_seed_file(path: &Path) -> Result<TodoCollection, ConfigError> {
    let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let collection: TodoCollection =
        serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    tracing::info!(
        path = %path.display(),
        records = collection.len(),
        "Loaded seed collection"
    );
    Ok(collection)
}

/// Built-in starting collection: four pending tasks and one done
#[must_use]
pub fn default_seed() -> TodoCollection {
    let records = [
        (1, "Read the ownership chapter", false),
        (2, "Write the todo reducer", false),
        (3, "Wire the reducer into a store", false),
        (4, "Add property tests", false),
        (5, "Set up the workspace", true),
    ]
    .into_iter()
    .map(|(id, text, done)| TodoRecord::with_done(TodoId::new(id), text, done))
    .collect();

    // Static data with distinct ids and non-blank text.
    TodoCollection::from_records(records).unwrap_or_default()
}
