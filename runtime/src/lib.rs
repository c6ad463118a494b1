//! # Tasklist Runtime
//!
//! Runtime implementation for the Tasklist reducer architecture.
//!
//! This crate provides the Store runtime that coordinates reducer execution
//! and effect handling.
//!
//! ## Core Components
//!
//! - **Store**: single-writer owner of state; runs the reducer and executes effects
//! - **Notifiers**: stock [`Notifier`](tasklist_core::environment::Notifier)
//!   implementations ([`TracingNotifier`], [`ChannelNotifier`], [`NoopNotifier`])
//!
//! ## Example
//!
//! ```ignore
//! use tasklist_runtime::Store;
//!
//! let store = Store::new(initial_state, my_reducer, environment);
//!
//! // Send an action
//! store.send(Action::DoSomething).await?;
//!
//! // Read state
//! let value = store.state(|s| s.some_field).await;
//! ```

use tasklist_core::{effect::Effect, environment::NotifierEnvironment, reducer::Reducer};
use std::collections::VecDeque;
use std::marker::PhantomData;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::RwLock;

/// Stock notifier implementations
pub mod notifier;

/// Error types for the Store runtime
pub mod error {
    use thiserror::Error;

    /// Errors that can occur during Store operations
    #[derive(Error, Debug, Clone, PartialEq, Eq)]
    pub enum StoreError {
        /// Store is shutting down and not accepting new actions
        ///
        /// This error is returned when `send()` is called after `shutdown()`.
        #[error("Store is shutting down")]
        ShutdownInProgress,

        /// A chain of `Effect::Dispatch` feedback exceeded the configured limit
        ///
        /// State changes made by the actions processed before the limit was
        /// hit are kept.
        #[error("Dispatch chain exceeded {0} actions")]
        DispatchLimitExceeded(usize),
    }
}

pub use error::StoreError;
pub use notifier::{ChannelNotifier, NoopNotifier, TracingNotifier};
pub use store::Store;

/// Store module - The runtime for reducers
pub mod store {
    use super::{
        AtomicBool, Arc, Effect, NotifierEnvironment, Ordering, PhantomData, Reducer, RwLock,
        StoreError, VecDeque,
    };

    /// Default upper bound on actions processed by one `send` call
    pub const DEFAULT_DISPATCH_LIMIT: usize = 1024;

    /// The Store - runtime coordinator for a reducer
    ///
    /// The Store manages:
    /// 1. State (behind `RwLock`; the write lock is the single-writer boundary)
    /// 2. Reducer (business logic)
    /// 3. Environment (injected dependencies)
    /// 4. Effect execution (notifications and dispatch feedback)
    ///
    /// Cloning a store is cheap and yields a handle onto the same state.
    ///
    /// # Type Parameters
    ///
    /// - `S`: State type
    /// - `A`: Action type
    /// - `E`: Environment type
    /// - `R`: Reducer implementation
    pub struct Store<S, A, E, R>
    where
        R: Reducer<State = S, Action = A, Environment = E>,
    {
        state: Arc<RwLock<S>>,
        reducer: R,
        environment: E,
        shutdown: Arc<AtomicBool>,
        dispatch_limit: usize,
        _action: PhantomData<fn() -> A>,
    }

    impl<S, A, E, R> Store<S, A, E, R>
    where
        R: Reducer<State = S, Action = A, Environment = E>,
        E: NotifierEnvironment,
    {
        /// Create a new store with initial state, reducer, and environment
        #[must_use]
        pub fn new(initial_state: S, reducer: R, environment: E) -> Self {
            Self {
                state: Arc::new(RwLock::new(initial_state)),
                reducer,
                environment,
                shutdown: Arc::new(AtomicBool::new(false)),
                dispatch_limit: DEFAULT_DISPATCH_LIMIT,
                _action: PhantomData,
            }
        }

        /// Override the maximum number of actions a single `send` may process
        ///
        /// The initial action counts toward the limit. A limit of zero is
        /// treated as one.
        #[must_use]
        pub fn with_dispatch_limit(mut self, limit: usize) -> Self {
            self.dispatch_limit = limit.max(1);
            self
        }

        /// Send an action to the store
        ///
        /// The reducer runs to completion under the write lock. Effects run
        /// after the lock is released; actions produced by
        /// [`Effect::Dispatch`] are processed in FIFO order before this call
        /// returns.
        ///
        /// # Errors
        ///
        /// - [`StoreError::ShutdownInProgress`] if `shutdown()` was called
        /// - [`StoreError::DispatchLimitExceeded`] if dispatch feedback did not settle
        #[tracing::instrument(skip(self, action), name = "store_send")]
        pub async fn send(&self, action: A) -> Result<(), StoreError> {
            if self.shutdown.load(Ordering::Acquire) {
                tracing::warn!("Rejected action: store is shutting down");
                metrics::counter!("store.shutdown.rejected_actions").increment(1);
                return Err(StoreError::ShutdownInProgress);
            }

            let mut queue = VecDeque::from([action]);
            let mut processed = 0_usize;

            while let Some(action) = queue.pop_front() {
                if processed == self.dispatch_limit {
                    tracing::error!(
                        limit = self.dispatch_limit,
                        dropped = queue.len() + 1,
                        "Dispatch limit exceeded"
                    );
                    return Err(StoreError::DispatchLimitExceeded(self.dispatch_limit));
                }
                processed += 1;

                tracing::debug!("Processing action");
                metrics::counter!("store.actions.total").increment(1);

                let effects = {
                    let mut state = self.state.write().await;

                    let span = tracing::debug_span!("reducer_execution");
                    let _enter = span.enter();

                    let start = std::time::Instant::now();
                    let effects = self.reducer.reduce(&mut state, action, &self.environment);
                    metrics::histogram!("store.reducer.duration_seconds")
                        .record(start.elapsed().as_secs_f64());

                    tracing::trace!("Reducer completed, returned {} effects", effects.len());
                    effects
                };

                for effect in effects {
                    self.execute_effect(effect, &mut queue);
                }
            }

            Ok(())
        }

        fn execute_effect(&self, effect: Effect<A>, queue: &mut VecDeque<A>) {
            match effect {
                Effect::None => {
                    tracing::trace!("Executing Effect::None (no-op)");
                    metrics::counter!("store.effects.executed", "type" => "none").increment(1);
                },
                Effect::Notify(notification) => {
                    tracing::debug!(
                        kind = %notification.kind,
                        title = %notification.title,
                        "Delivering notification"
                    );
                    metrics::counter!("store.effects.executed", "type" => "notify").increment(1);
                    self.environment.notifier().notify(&notification);
                },
                Effect::Dispatch(action) => {
                    tracing::trace!("Queueing dispatched action");
                    metrics::counter!("store.effects.executed", "type" => "dispatch").increment(1);
                    queue.push_back(*action);
                },
                Effect::Sequential(effects) => {
                    tracing::trace!("Executing Effect::Sequential with {} effects", effects.len());
                    metrics::counter!("store.effects.executed", "type" => "sequential")
                        .increment(1);
                    for effect in effects {
                        self.execute_effect(effect, queue);
                    }
                },
            }
        }

        /// Read current state via a closure
        ///
        /// Access state through a closure to ensure the lock is released promptly:
        ///
        /// ```ignore
        /// let pending = store.state(|s| s.collection.pending_count()).await;
        /// ```
        pub async fn state<F, T>(&self, f: F) -> T
        where
            F: FnOnce(&S) -> T,
        {
            let state = self.state.read().await;
            f(&state)
        }

        /// Clone the current state
        pub async fn snapshot(&self) -> S
        where
            S: Clone,
        {
            self.state(S::clone).await
        }

        /// Stop accepting actions
        ///
        /// Actions already inside `send` finish normally. Every later `send`
        /// on this store or any of its clones returns
        /// [`StoreError::ShutdownInProgress`].
        pub fn shutdown(&self) {
            if !self.shutdown.swap(true, Ordering::AcqRel) {
                tracing::info!("Store shutting down");
                metrics::counter!("store.shutdown.initiated").increment(1);
            }
        }

        /// Returns true once `shutdown()` has been called
        #[must_use]
        pub fn is_shutting_down(&self) -> bool {
            self.shutdown.load(Ordering::Acquire)
        }

        /// Injected environment
        #[must_use]
        pub const fn environment(&self) -> &E {
            &self.environment
        }
    }

    impl<S, A, E, R> Clone for Store<S, A, E, R>
    where
        R: Reducer<State = S, Action = A, Environment = E> + Clone,
        E: Clone,
    {
        fn clone(&self) -> Self {
            Self {
                state: Arc::clone(&self.state),
                reducer: self.reducer.clone(),
                environment: self.environment.clone(),
                shutdown: Arc::clone(&self.shutdown),
                dispatch_limit: self.dispatch_limit,
                _action: PhantomData,
            }
        }
    }
}
