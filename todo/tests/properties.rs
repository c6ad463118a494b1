//! Property tests for the todo collection transitions.

use proptest::prelude::*;
use std::collections::HashSet;
use todo::{TodoCollection, TodoId, TodoRecord};

#[derive(Clone, Debug)]
enum Op {
    Add(String),
    Toggle(u64),
    Delete(u64),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        "[ a-z]{0,8}".prop_map(Op::Add),
        (0_u64..12).prop_map(Op::Toggle),
        (0_u64..12).prop_map(Op::Delete),
    ]
}

fn apply(collection: &TodoCollection, op: &Op) -> TodoCollection {
    match op {
        Op::Add(text) => collection.add(text).collection,
        Op::Toggle(id) => collection.toggle(TodoId::new(*id)).collection,
        Op::Delete(id) => collection.delete(TodoId::new(*id)).collection,
    }
}

fn run(ops: &[Op]) -> TodoCollection {
    ops.iter().fold(TodoCollection::new(), |c, op| apply(&c, op))
}

fn sorted_ids<'a>(records: impl Iterator<Item = &'a TodoRecord>) -> Vec<TodoId> {
    let mut ids: Vec<_> = records.map(|r| r.id).collect();
    ids.sort_unstable();
    ids
}

proptest! {
    #[test]
    fn ids_stay_unique(ops in prop::collection::vec(op(), 0..40)) {
        let collection = run(&ops);
        let unique: HashSet<_> = collection.iter().map(|r| r.id).collect();
        prop_assert_eq!(unique.len(), collection.len());
    }

    #[test]
    fn text_is_never_blank(ops in prop::collection::vec(op(), 0..40)) {
        let collection = run(&ops);
        prop_assert!(collection.iter().all(|r| !r.text.trim().is_empty()));
    }

    #[test]
    fn blank_add_never_changes_length(
        ops in prop::collection::vec(op(), 0..20),
        blank in "[ \t]{0,4}",
    ) {
        let collection = run(&ops);
        let transition = collection.add(&blank);
        prop_assert_eq!(transition.collection.len(), collection.len());
        prop_assert!(transition.event.is_none());
    }

    #[test]
    fn add_uses_max_plus_one(ops in prop::collection::vec(op(), 0..20)) {
        let collection = run(&ops);
        let expected = collection.max_id().map_or(1, |id| id.get() + 1);
        let after = collection.add("x").collection;
        let added = after.records().last().map(|r| r.id.get());
        prop_assert_eq!(added, Some(expected));
    }

    #[test]
    fn toggle_is_an_involution(ops in prop::collection::vec(op(), 0..20), id in 0_u64..12) {
        let collection = run(&ops);
        let id = TodoId::new(id);
        let twice = collection.toggle(id).collection.toggle(id).collection;
        prop_assert_eq!(twice, collection);
    }

    #[test]
    fn delete_is_idempotent(ops in prop::collection::vec(op(), 0..20), id in 0_u64..12) {
        let collection = run(&ops);
        let id = TodoId::new(id);
        let once = collection.delete(id).collection;
        let twice = once.delete(id);
        prop_assert!(!once.contains(id));
        prop_assert!(!twice.changed());
        prop_assert_eq!(twice.collection, once);
    }

    #[test]
    fn views_partition_collection(ops in prop::collection::vec(op(), 0..40)) {
        let collection = run(&ops);

        let combined = sorted_ids(collection.pending().chain(collection.completed()));
        prop_assert_eq!(combined, sorted_ids(collection.iter()));

        prop_assert!(collection.pending().all(|r| !r.done));
        prop_assert!(collection.completed().all(|r| r.done));

        // Views keep collection order.
        let order: Vec<_> = collection.iter().map(|r| r.id).collect();
        let pending: Vec<_> = collection.pending().map(|r| r.id).collect();
        let pending_in_order: Vec<_> = order
            .iter()
            .copied()
            .filter(|id| pending.contains(id))
            .collect();
        prop_assert_eq!(pending, pending_in_order);
    }

    #[test]
    fn serde_preserves_collection(ops in prop::collection::vec(op(), 0..20)) {
        let collection = run(&ops);
        let json = serde_json::to_string(&collection).unwrap_or_default();
        let back: Result<TodoCollection, _> = serde_json::from_str(&json);
        prop_assert_eq!(back.ok(), Some(collection));
    }
}
