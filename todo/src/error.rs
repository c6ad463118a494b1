//! Error types for the todo list.

use crate::types::TodoId;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Reasons a todo command or a seed collection is rejected
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TodoError {
    /// Add was called with blank text
    #[error("Task text cannot be empty")]
    EmptyText,

    /// No record with this id exists
    #[error("Task {0} not found")]
    NotFound(TodoId),

    /// Two records in a seed collection share an id
    #[error("Task id {0} is used more than once")]
    DuplicateId(TodoId),

    /// The highest id is `u64::MAX`, so no new id can be assigned
    #[error("No task ids left to assign")]
    IdSpaceExhausted,
}
