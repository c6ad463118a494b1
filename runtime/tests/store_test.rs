//! Integration tests for Store effect execution
//!
//! Covers dispatch feedback ordering, sequential effects, the dispatch limit,
//! and shutdown using a small counter reducer.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)] // Test code can use unwrap/expect/panic

use tasklist_core::environment::{Notification, Notifier, NotifierEnvironment};
use tasklist_core::{SmallVec, effect::Effect, reducer::Reducer, smallvec};
use tasklist_runtime::store::DEFAULT_DISPATCH_LIMIT;
use tasklist_runtime::{Store, StoreError};
use tasklist_testing::RecordingNotifier;

// ============================================================================
// Test Fixtures
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
enum CounterAction {
    /// Add one and announce it
    Increment,
    /// Dispatch `Increment` the given number of times, one after another
    CountTo(u32),
    /// Two notifications in a fixed order
    Announce,
    /// Dispatches itself forever
    Loop,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct CounterState {
    value: u32,
    loops: u32,
}

#[derive(Clone)]
struct CounterReducer;

impl Reducer for CounterReducer {
    type State = CounterState;
    type Action = CounterAction;
    type Environment = RecordingNotifier;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        _env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            CounterAction::Increment => {
                state.value += 1;
                smallvec![Effect::Notify(Notification::success(state.value.to_string()))]
            },
            CounterAction::CountTo(0) => smallvec![Effect::None],
            CounterAction::CountTo(n) => smallvec![
                Effect::dispatch(CounterAction::Increment),
                Effect::dispatch(CounterAction::CountTo(n - 1)),
            ],
            CounterAction::Announce => smallvec![Effect::Sequential(vec![
                Effect::Notify(Notification::success("first")),
                Effect::None,
                Effect::Notify(Notification::error("second")),
            ])],
            CounterAction::Loop => {
                state.loops += 1;
                smallvec![Effect::dispatch(CounterAction::Loop)]
            },
        }
    }
}

type CounterStore = Store<CounterState, CounterAction, RecordingNotifier, CounterReducer>;

fn store() -> (CounterStore, RecordingNotifier) {
    let notifier = RecordingNotifier::new();
    let store = Store::new(CounterState::default(), CounterReducer, notifier.clone());
    (store, notifier)
}

// ============================================================================
// Tests
// ============================================================================

#[tokio::test]
async fn test_send_runs_reducer_and_notifies() {
    let (store, notifier) = store();

    store.send(CounterAction::Increment).await.unwrap();
    store.send(CounterAction::Increment).await.unwrap();

    assert_eq!(store.state(|s| s.value).await, 2);
    assert_eq!(notifier.titles(), ["1", "2"]);
}

#[tokio::test]
async fn test_dispatch_feedback_settles_before_send_returns() {
    let (store, notifier) = store();

    store.send(CounterAction::CountTo(3)).await.unwrap();

    assert_eq!(store.state(|s| s.value).await, 3);
    assert_eq!(notifier.titles(), ["1", "2", "3"]);
}

#[tokio::test]
async fn test_sequential_effects_keep_order() {
    let (store, notifier) = store();

    store.send(CounterAction::Announce).await.unwrap();

    assert_eq!(
        notifier.notifications(),
        [Notification::success("first"), Notification::error("second")]
    );
    assert_eq!(store.snapshot().await, CounterState::default());
}

#[tokio::test]
async fn test_dispatch_limit_stops_runaway_feedback() {
    let (store, _notifier) = store();
    let store = store.with_dispatch_limit(10);

    let result = store.send(CounterAction::Loop).await;

    assert_eq!(result, Err(StoreError::DispatchLimitExceeded(10)));
    // Actions reduced before the limit was hit keep their changes.
    assert_eq!(store.state(|s| s.loops).await, 10);
}

#[tokio::test]
async fn test_default_dispatch_limit() {
    let (store, _notifier) = store();

    let result = store.send(CounterAction::Loop).await;

    assert_eq!(
        result,
        Err(StoreError::DispatchLimitExceeded(DEFAULT_DISPATCH_LIMIT))
    );
}

#[tokio::test]
async fn test_zero_dispatch_limit_still_processes_one_action() {
    let (store, notifier) = store();
    let store = store.with_dispatch_limit(0);

    store.send(CounterAction::Increment).await.unwrap();

    assert_eq!(notifier.len(), 1);
}

#[tokio::test]
async fn test_shutdown_is_shared_by_clones() {
    let (store, notifier) = store();
    let clone = store.clone();

    assert!(!clone.is_shutting_down());
    store.shutdown();
    store.shutdown();

    assert!(clone.is_shutting_down());
    assert_eq!(
        clone.send(CounterAction::Increment).await,
        Err(StoreError::ShutdownInProgress)
    );
    assert_eq!(store.state(|s| s.value).await, 0);
    assert!(notifier.is_empty());
}

#[tokio::test]
async fn test_environment_is_exposed() {
    let (store, notifier) = store();

    store
        .environment()
        .notifier()
        .notify(&Notification::success("direct"));

    assert_eq!(notifier.titles(), ["direct"]);
}
