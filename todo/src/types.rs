//! Domain types for the todo list.
//!
//! A todo list is an ordered collection of records that can be added,
//! toggled between pending and done, and deleted.

use crate::collection::TodoCollection;
use crate::error::TodoError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Identifier of a todo record, unique within its collection
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoId(u64);

impl TodoId {
    /// Id given to the first record of an empty collection
    pub const FIRST: Self = Self(1);

    /// Wraps a raw id
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw id
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }

    /// The id after this one, or `None` at `u64::MAX`
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        match self.0.checked_add(1) {
            Some(id) => Some(Self(id)),
            None => None,
        }
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for TodoId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}

/// A single todo record
///
/// `id` and `text` never change after creation; `done` flips through
/// [`TodoCollection::toggle`].
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TodoRecord {
    /// Unique identifier
    pub id: TodoId,
    /// What needs doing
    pub text: String,
    /// Whether the task is finished
    #[serde(default)]
    pub done: bool,
}

impl TodoRecord {
    /// Creates a pending record
    #[must_use]
    pub fn new(id: TodoId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            done: false,
        }
    }

    /// Creates a record with an explicit `done` flag
    #[must_use]
    pub fn with_done(id: TodoId, text: impl Into<String>, done: bool) -> Self {
        Self {
            id,
            text: text.into(),
            done,
        }
    }

    /// Copy of this record with `done` flipped
    #[must_use]
    pub fn toggled(&self) -> Self {
        Self {
            id: self.id,
            text: self.text.clone(),
            done: !self.done,
        }
    }
}

/// State of the todo list
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoState {
    /// All records, in insertion order
    pub collection: TodoCollection,
    /// Why the last command was rejected, when rejections are reported
    pub last_error: Option<TodoError>,
}

impl TodoState {
    /// Creates a state seeded with the given collection
    #[must_use]
    pub const fn new(collection: TodoCollection) -> Self {
        Self {
            collection,
            last_error: None,
        }
    }
}

/// Commands accepted by the todo reducer
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TodoAction {
    /// Append a pending record; blank text is rejected
    Add {
        /// Task text
        text: String,
    },

    /// Flip a record between pending and done
    Toggle {
        /// Record to flip
        id: TodoId,
    },

    /// Remove a record
    Delete {
        /// Record to remove
        id: TodoId,
    },
}

impl TodoAction {
    /// Shorthand for [`TodoAction::Add`]
    #[must_use]
    pub fn add(text: impl Into<String>) -> Self {
        Self::Add { text: text.into() }
    }

    /// Shorthand for [`TodoAction::Toggle`]
    #[must_use]
    pub const fn toggle(id: TodoId) -> Self {
        Self::Toggle { id }
    }

    /// Shorthand for [`TodoAction::Delete`]
    #[must_use]
    pub const fn delete(id: TodoId) -> Self {
        Self::Delete { id }
    }
}
