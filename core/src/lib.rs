//! # Tasklist Core
//!
//! Core traits and types for the Tasklist reducer architecture.
//!
//! ## Core Concepts
//!
//! - **State**: Domain state for a feature (owned, `Clone`)
//! - **Action**: All possible inputs to a reducer
//! - **Reducer**: Pure function `(State, Action, Environment) → (State, Effects)`
//! - **Effect**: Side effect descriptions (not execution)
//! - **Environment**: Injected capabilities, such as the [`environment::Notifier`]
//!
//! ## Example
//!
//! ```
//! use tasklist_core::{effect::Effect, reducer::Reducer, smallvec, SmallVec};
//! use tasklist_core::environment::Notification;
//!
//! #[derive(Clone, Debug, Default)]
//! struct CounterState {
//!     count: u32,
//! }
//!
//! #[derive(Clone, Debug)]
//! enum CounterAction {
//!     Increment,
//! }
//!
//! struct CounterReducer;
//!
//! impl Reducer for CounterReducer {
//!     type State = CounterState;
//!     type Action = CounterAction;
//!     type Environment = ();
//!
//!     fn reduce(
//!         &self,
//!         state: &mut CounterState,
//!         action: CounterAction,
//!         _env: &(),
//!     ) -> SmallVec<[Effect<CounterAction>; 4]> {
//!         match action {
//!             CounterAction::Increment => {
//!                 state.count += 1;
//!                 smallvec![Effect::Notify(Notification::success("incremented"))]
//!             }
//!         }
//!     }
//! }
//!
//! let mut state = CounterState::default();
//! let effects = CounterReducer.reduce(&mut state, CounterAction::Increment, &());
//! assert_eq!(state.count, 1);
//! assert_eq!(effects.len(), 1);
//! ```

// Re-export commonly used types
pub use serde::{Deserialize, Serialize};
pub use smallvec::{smallvec, SmallVec};

/// Reducer module - The core trait for business logic
///
/// Reducers are pure functions: `(State, Action, Environment) → (State, Effects)`
///
/// They contain all business logic and are deterministic and testable.
pub mod reducer {
    use super::effect::Effect;
    use smallvec::SmallVec;

    /// The Reducer trait - core abstraction for business logic
    ///
    /// # Type Parameters
    ///
    /// - `State`: The domain state this reducer operates on
    /// - `Action`: The action type this reducer processes
    /// - `Environment`: The injected dependencies this reducer needs
    pub trait Reducer {
        /// The state type this reducer operates on
        type State;

        /// The action type this reducer processes
        type Action;

        /// The environment type with injected dependencies
        type Environment;

        /// Reduce an action into state changes and effects
        ///
        /// This is a pure function that:
        /// 1. Validates the action
        /// 2. Updates state
        /// 3. Returns effect descriptions to be executed
        ///
        /// Implementations must not perform I/O. Anything observable outside
        /// the state goes into the returned effects.
        fn reduce(
            &self,
            state: &mut Self::State,
            action: Self::Action,
            env: &Self::Environment,
        ) -> SmallVec<[Effect<Self::Action>; 4]>;
    }
}

/// Effect module - Side effect descriptions
///
/// Effects describe side effects to be performed by the runtime.
/// They are values, so reducers stay pure and tests can inspect them.
pub mod effect {
    use crate::environment::Notification;

    /// Effect type - describes a side effect to be executed
    ///
    /// Effects are NOT executed immediately. They are descriptions of what should happen,
    /// returned from reducers and executed by the Store runtime.
    ///
    /// # Type Parameters
    ///
    /// - `Action`: The action type that effects can produce (feedback loop)
    #[derive(Clone, Debug, PartialEq, Eq)]
    pub enum Effect<Action> {
        /// No-op effect
        None,

        /// Hand a notification to the environment's notifier
        ///
        /// Fire-and-forget: the notifier cannot fail or delay the transition
        /// that produced it.
        Notify(Notification),

        /// Feed an action back into the reducer once the current one completes
        Dispatch(Box<Action>),

        /// Run effects in order
        Sequential(Vec<Effect<Action>>),
    }

    impl<Action> Effect<Action> {
        /// Chain effects to run sequentially
        #[must_use]
        pub const fn chain(effects: Vec<Effect<Action>>) -> Effect<Action> {
            Effect::Sequential(effects)
        }

        /// Wrap an action to be dispatched after the current one
        #[must_use]
        pub fn dispatch(action: Action) -> Effect<Action> {
            Effect::Dispatch(Box::new(action))
        }

        /// Returns true if executing this effect does nothing
        #[must_use]
        pub fn is_none(&self) -> bool {
            match self {
                Effect::None => true,
                Effect::Sequential(effects) => effects.iter().all(Effect::is_none),
                Effect::Notify(_) | Effect::Dispatch(_) => false,
            }
        }

        /// Collects every notification this effect would emit, in execution order
        #[must_use]
        pub fn notifications(&self) -> Vec<&Notification> {
            let mut out = Vec::new();
            self.collect_notifications(&mut out);
            out
        }

        fn collect_notifications<'a>(&'a self, out: &mut Vec<&'a Notification>) {
            match self {
                Effect::Notify(notification) => out.push(notification),
                Effect::Sequential(effects) => {
                    for effect in effects {
                        effect.collect_notifications(out);
                    }
                },
                Effect::None | Effect::Dispatch(_) => {},
            }
        }
    }
}

/// Environment module - Dependency injection traits
///
/// All external capabilities are abstracted behind traits and injected
/// via the Environment parameter.
pub mod environment {
    use serde::{Deserialize, Serialize};
    use std::fmt;
    use std::sync::Arc;

    /// Severity of a notification
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
    #[serde(rename_all = "lowercase")]
    pub enum NotificationKind {
        /// The mutation went through
        Success,
        /// Destructive or rejected operation
        Error,
    }

    impl NotificationKind {
        /// Wire label (`"success"` / `"error"`)
        #[must_use]
        pub const fn as_str(self) -> &'static str {
            match self {
                Self::Success => "success",
                Self::Error => "error",
            }
        }
    }

    impl fmt::Display for NotificationKind {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str(self.as_str())
        }
    }

    /// A transient piece of user feedback, e.g. a toast
    #[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct Notification {
        /// Severity
        pub kind: NotificationKind,
        /// Short human-readable title
        pub title: String,
    }

    impl Notification {
        /// Creates a success notification
        #[must_use]
        pub fn success(title: impl Into<String>) -> Self {
            Self {
                kind: NotificationKind::Success,
                title: title.into(),
            }
        }

        /// Creates an error notification
        #[must_use]
        pub fn error(title: impl Into<String>) -> Self {
            Self {
                kind: NotificationKind::Error,
                title: title.into(),
            }
        }
    }

    impl fmt::Display for Notification {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "[{}] {}", self.kind, self.title)
        }
    }

    /// Notifier trait - displays transient feedback
    ///
    /// Delivery is fire-and-forget. Implementations must not block and have
    /// no way to report failure back to the caller.
    ///
    /// # Examples
    ///
    /// ```ignore
    /// struct StderrNotifier;
    /// impl Notifier for StderrNotifier {
    ///     fn notify(&self, notification: &Notification) {
    ///         eprintln!("{notification}");
    ///     }
    /// }
    /// ```
    pub trait Notifier: Send + Sync {
        /// Deliver a notification
        fn notify(&self, notification: &Notification);
    }

    impl<N: Notifier + ?Sized> Notifier for Arc<N> {
        fn notify(&self, notification: &Notification) {
            (**self).notify(notification);
        }
    }

    impl<N: Notifier + ?Sized> Notifier for Box<N> {
        fn notify(&self, notification: &Notification) {
            (**self).notify(notification);
        }
    }

    /// Environments that carry a notifier
    ///
    /// The runtime uses this to execute [`crate::effect::Effect::Notify`].
    pub trait NotifierEnvironment {
        /// Returns the injected notifier
        fn notifier(&self) -> &dyn Notifier;
    }

    /// `()` is a valid environment for reducers that never notify
    impl NotifierEnvironment for () {
        fn notifier(&self) -> &dyn Notifier {
            &Silent
        }
    }

    struct Silent;

    impl Notifier for Silent {
        fn notify(&self, _notification: &Notification) {}
    }
}
