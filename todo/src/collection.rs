//! The todo collection and its pure transitions.
//!
//! Every operation takes `&self` and returns a new collection value; the
//! input is never modified. Holders detect change by comparing values or by
//! checking [`Transition::event`].
//!
//! The `try_*` operations report why a command was rejected. The plain
//! operations turn every rejection into a no-op that returns the collection
//! unchanged.

use crate::error::TodoError;
use crate::types::{TodoId, TodoRecord};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tasklist_core::environment::Notification;

/// Ordered sequence of todo records with unique ids
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<TodoRecord>", into = "Vec<TodoRecord>")]
pub struct TodoCollection {
    records: Vec<TodoRecord>,
}

/// Something that changed in a collection
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TodoEvent {
    /// A record was appended
    Added {
        /// The new record
        record: TodoRecord,
    },

    /// A record's `done` flag flipped
    Toggled {
        /// Record that changed
        id: TodoId,
        /// The flag's new value
        done: bool,
    },

    /// A record was removed
    Deleted {
        /// The removed record
        record: TodoRecord,
    },
}

impl TodoEvent {
    /// Id of the record the event is about
    #[must_use]
    pub const fn id(&self) -> TodoId {
        match self {
            Self::Added { record } | Self::Deleted { record } => record.id,
            Self::Toggled { id, .. } => *id,
        }
    }

    /// User feedback for this event
    #[must_use]
    pub fn notification(&self) -> Notification {
        match self {
            Self::Added { .. } => Notification::success("Task added"),
            Self::Toggled { done: true, .. } => Notification::success("done"),
            Self::Toggled { done: false, .. } => Notification::success("undone"),
            Self::Deleted { .. } => Notification::error("Deleted"),
        }
    }
}

/// Result of a lenient operation
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transition {
    /// Collection after the operation
    pub collection: TodoCollection,
    /// What changed, or `None` for a no-op
    pub event: Option<TodoEvent>,
}

impl Transition {
    fn settle(
        original: &TodoCollection,
        result: Result<(TodoCollection, TodoEvent), TodoError>,
    ) -> Self {
        match result {
            Ok((collection, event)) => Self {
                collection,
                event: Some(event),
            },
            Err(_) => Self {
                collection: original.clone(),
                event: None,
            },
        }
    }

    /// Returns true if the operation changed the collection
    #[must_use]
    pub const fn changed(&self) -> bool {
        self.event.is_some()
    }
}

impl TodoCollection {
    /// Creates an empty collection
    #[must_use]
    pub const fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Builds a collection from existing records, keeping their order
    ///
    /// # Errors
    ///
    /// - [`TodoError::EmptyText`] if any record has blank text
    /// - [`TodoError::DuplicateId`] if two records share an id
    pub fn from_records(records: Vec<TodoRecord>) -> Result<Self, TodoError> {
        let mut seen = HashSet::with_capacity(records.len());
        for record in &records {
            if record.text.trim().is_empty() {
                return Err(TodoError::EmptyText);
            }
            if !seen.insert(record.id) {
                return Err(TodoError::DuplicateId(record.id));
            }
        }
        Ok(Self { records })
    }

    /// All records in collection order
    #[must_use]
    pub fn records(&self) -> &[TodoRecord] {
        &self.records
    }

    /// Iterates over all records in collection order
    pub fn iter(&self) -> std::slice::Iter<'_, TodoRecord> {
        self.records.iter()
    }

    /// Number of records
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if there are no records
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Looks up a record by id
    #[must_use]
    pub fn get(&self, id: TodoId) -> Option<&TodoRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Checks whether a record exists
    #[must_use]
    pub fn contains(&self, id: TodoId) -> bool {
        self.get(id).is_some()
    }

    /// Highest id in the collection
    #[must_use]
    pub fn max_id(&self) -> Option<TodoId> {
        self.records.iter().map(|r| r.id).max()
    }

    /// Id the next added record will get: `max + 1`, or `1` when empty
    ///
    /// `None` once the highest id is `u64::MAX`.
    #[must_use]
    pub fn next_id(&self) -> Option<TodoId> {
        self.max_id().map_or(Some(TodoId::FIRST), TodoId::next)
    }

    /// Records not yet done, in collection order
    pub fn pending(&self) -> impl Iterator<Item = &TodoRecord> + '_ {
        self.records.iter().filter(|r| !r.done)
    }

    /// Records marked done, in collection order
    pub fn completed(&self) -> impl Iterator<Item = &TodoRecord> + '_ {
        self.records.iter().filter(|r| r.done)
    }

    /// Number of pending records
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.pending().count()
    }

    /// Number of done records
    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.completed().count()
    }

    /// Appends a pending record with the next id
    ///
    /// `text` is stored as given; only the blank check trims it.
    ///
    /// # Errors
    ///
    /// - [`TodoError::EmptyText`] if `text` is empty or whitespace
    /// - [`TodoError::IdSpaceExhausted`] if no id is left
    pub fn try_add(&self, text: &str) -> Result<(Self, TodoEvent), TodoError> {
        if text.trim().is_empty() {
            return Err(TodoError::EmptyText);
        }
        let id = self.next_id().ok_or(TodoError::IdSpaceExhausted)?;
        let record = TodoRecord::new(id, text);

        let mut records = Vec::with_capacity(self.records.len() + 1);
        records.extend_from_slice(&self.records);
        records.push(record.clone());

        Ok((Self { records }, TodoEvent::Added { record }))
    }

    /// Flips `done` on one record, leaving the others untouched
    ///
    /// # Errors
    ///
    /// [`TodoError::NotFound`] if no record has this id.
    pub fn try_toggle(&self, id: TodoId) -> Result<(Self, TodoEvent), TodoError> {
        let done = self.get(id).map(|r| !r.done).ok_or(TodoError::NotFound(id))?;

        let records = self
            .records
            .iter()
            .map(|r| if r.id == id { r.toggled() } else { r.clone() })
            .collect();

        Ok((Self { records }, TodoEvent::Toggled { id, done }))
    }

    /// Removes one record
    ///
    /// # Errors
    ///
    /// [`TodoError::NotFound`] if no record has this id.
    pub fn try_delete(&self, id: TodoId) -> Result<(Self, TodoEvent), TodoError> {
        let record = self.get(id).cloned().ok_or(TodoError::NotFound(id))?;

        let records = self.records.iter().filter(|r| r.id != id).cloned().collect();

        Ok((Self { records }, TodoEvent::Deleted { record }))
    }

    /// Lenient [`try_add`](Self::try_add): blank text is a no-op
    #[must_use]
    pub fn add(&self, text: &str) -> Transition {
        Transition::settle(self, self.try_add(text))
    }

    /// Lenient [`try_toggle`](Self::try_toggle): an unknown id is a no-op
    #[must_use]
    pub fn toggle(&self, id: TodoId) -> Transition {
        Transition::settle(self, self.try_toggle(id))
    }

    /// Lenient [`try_delete`](Self::try_delete): an unknown id is a no-op
    #[must_use]
    pub fn delete(&self, id: TodoId) -> Transition {
        Transition::settle(self, self.try_delete(id))
    }
}

impl TryFrom<Vec<TodoRecord>> for TodoCollection {
    type Error = TodoError;

    fn try_from(records: Vec<TodoRecord>) -> Result<Self, Self::Error> {
        Self::from_records(records)
    }
}

impl From<TodoCollection> for Vec<TodoRecord> {
    fn from(collection: TodoCollection) -> Self {
        collection.records
    }
}

impl<'a> IntoIterator for &'a TodoCollection {
    type Item = &'a TodoRecord;
    type IntoIter = std::slice::Iter<'a, TodoRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(n: u64) -> TodoId {
        TodoId::new(n)
    }

    fn record(n: u64, text: &str, done: bool) -> TodoRecord {
        TodoRecord::with_done(id(n), text, done)
    }

    fn collection(records: Vec<TodoRecord>) -> TodoCollection {
        TodoCollection::from_records(records).unwrap_or_default()
    }

    fn ab() -> TodoCollection {
        collection(vec![record(1, "a", false), record(2, "b", true)])
    }

    fn ids<'a>(records: impl Iterator<Item = &'a TodoRecord>) -> Vec<u64> {
        records.map(|r| r.id.get()).collect()
    }

    #[test]
    fn add_appends_with_next_id() {
        let transition = ab().add("c");

        assert_eq!(
            transition.collection.records(),
            [record(1, "a", false), record(2, "b", true), record(3, "c", false)]
        );
        assert_eq!(ids(transition.collection.pending()), [1, 3]);
        assert_eq!(
            transition.event,
            Some(TodoEvent::Added {
                record: record(3, "c", false)
            })
        );
    }

    #[test]
    fn add_to_empty_collection_starts_at_one() {
        let transition = TodoCollection::new().add("x");
        assert_eq!(transition.collection.records(), [record(1, "x", false)]);
    }

    #[test]
    fn add_uses_max_id_not_last_id() {
        let start = collection(vec![record(7, "late", false), record(3, "early", false)]);
        let transition = start.add("next");
        assert_eq!(transition.event.map(|e| e.id()), Some(id(8)));
    }

    #[test]
    fn add_keeps_text_as_given() {
        let transition = TodoCollection::new().add("  padded ");
        assert_eq!(transition.collection.records()[0].text, "  padded ");
    }

    #[test]
    fn blank_add_is_noop() {
        for text in ["", "   ", "\t\n"] {
            let transition = ab().add(text);
            assert_eq!(transition.collection, ab());
            assert!(!transition.changed());
            assert_eq!(ab().try_add(text), Err(TodoError::EmptyText));
        }
    }

    #[test]
    fn add_when_ids_exhausted_is_noop() {
        let full = collection(vec![record(u64::MAX, "last", false)]);
        assert_eq!(full.next_id(), None);
        assert_eq!(full.try_add("more"), Err(TodoError::IdSpaceExhausted));
        assert!(!full.add("more").changed());
    }

    #[test]
    fn toggle_flips_one_record() {
        let transition = ab().toggle(id(2));

        assert_eq!(
            transition.collection.records(),
            [record(1, "a", false), record(2, "b", false)]
        );
        assert_eq!(transition.collection.completed().count(), 0);
        assert_eq!(
            transition.event,
            Some(TodoEvent::Toggled {
                id: id(2),
                done: false
            })
        );
    }

    #[test]
    fn toggle_twice_restores_original() {
        let start = ab();
        let once = start.toggle(id(1)).collection;
        assert_eq!(once.get(id(1)).map(|r| r.done), Some(true));
        assert_eq!(once.toggle(id(1)).collection, start);
    }

    #[test]
    fn toggle_unknown_id_is_noop() {
        let transition = ab().toggle(id(99));
        assert_eq!(transition.collection, ab());
        assert_eq!(transition.event, None);
        assert_eq!(ab().try_toggle(id(99)), Err(TodoError::NotFound(id(99))));
    }

    #[test]
    fn delete_removes_record() {
        let transition = ab().delete(id(1));
        assert_eq!(transition.collection.records(), [record(2, "b", true)]);
        assert_eq!(
            transition.event,
            Some(TodoEvent::Deleted {
                record: record(1, "a", false)
            })
        );
    }

    #[test]
    fn delete_twice_is_idempotent() {
        let once = ab().delete(id(1)).collection;
        let twice = once.delete(id(1));
        assert_eq!(twice.collection, once);
        assert!(!twice.changed());
    }

    #[test]
    fn operations_leave_input_untouched() {
        let start = ab();
        let _ = start.add("c");
        let _ = start.toggle(id(1));
        let _ = start.delete(id(2));
        assert_eq!(start, ab());
    }

    #[test]
    fn views_partition_in_order() {
        let c = collection(vec![
            record(1, "a", true),
            record(2, "b", false),
            record(3, "c", true),
            record(4, "d", false),
        ]);
        assert_eq!(ids(c.pending()), [2, 4]);
        assert_eq!(ids(c.completed()), [1, 3]);
        assert_eq!(c.pending_count() + c.completed_count(), c.len());
    }

    #[test]
    fn event_notifications() {
        let added = TodoEvent::Added {
            record: record(1, "a", false),
        };
        assert_eq!(added.notification(), Notification::success("Task added"));

        let done = TodoEvent::Toggled { id: id(1), done: true };
        assert_eq!(done.notification(), Notification::success("done"));

        let undone = TodoEvent::Toggled { id: id(1), done: false };
        assert_eq!(undone.notification(), Notification::success("undone"));

        let deleted = TodoEvent::Deleted {
            record: record(1, "a", false),
        };
        assert_eq!(deleted.notification(), Notification::error("Deleted"));
    }

    #[test]
    fn from_records_rejects_duplicates_and_blank_text() {
        assert_eq!(
            TodoCollection::from_records(vec![record(1, "a", false), record(1, "b", false)]),
            Err(TodoError::DuplicateId(id(1)))
        );
        assert_eq!(
            TodoCollection::from_records(vec![record(1, " ", false)]),
            Err(TodoError::EmptyText)
        );
    }

    #[test]
    fn deserialize_validates() {
        let ok: Result<TodoCollection, _> =
            serde_json::from_str(r#"[{"id":1,"text":"a","done":false},{"id":2,"text":"b","done":true}]"#);
        assert_eq!(ok.ok(), Some(ab()));

        let dup: Result<TodoCollection, _> =
            serde_json::from_str(r#"[{"id":1,"text":"a"},{"id":1,"text":"b"}]"#);
        assert!(dup.is_err());
    }
}
