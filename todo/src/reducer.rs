//! Reducer logic for the todo list.
//!
//! Commands run through the strict `try_*` transitions on
//! [`TodoCollection`](crate::collection::TodoCollection). What happens to a
//! rejected command is decided by the environment's [`RejectionPolicy`].

use crate::error::TodoError;
use crate::types::{TodoAction, TodoState};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use tasklist_core::{
    SmallVec,
    effect::Effect,
    environment::{Notification, Notifier, NotifierEnvironment},
    reducer::Reducer,
    smallvec,
};

/// What the reducer does with a command it cannot apply
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RejectionPolicy {
    /// Silent no-op: no state change, no notification
    #[default]
    Ignore,
    /// Record the error in `last_error` and send an error notification
    Report,
}

/// Environment dependencies for the todo reducer
#[derive(Clone)]
pub struct TodoEnvironment {
    /// Receives one notification per applied (or reported) command
    pub notifier: Arc<dyn Notifier>,
    /// Handling of rejected commands
    pub policy: RejectionPolicy,
}

impl TodoEnvironment {
    /// Creates an environment that ignores rejected commands
    #[must_use]
    pub fn new(notifier: Arc<dyn Notifier>) -> Self {
        Self {
            notifier,
            policy: RejectionPolicy::Ignore,
        }
    }

    /// Sets the rejection policy
    #[must_use]
    pub fn with_policy(mut self, policy: RejectionPolicy) -> Self {
        self.policy = policy;
        self
    }
}

impl fmt::Debug for TodoEnvironment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TodoEnvironment")
            .field("notifier", &"<dyn Notifier>")
            .field("policy", &self.policy)
            .finish()
    }
}

impl NotifierEnvironment for TodoEnvironment {
    fn notifier(&self) -> &dyn Notifier {
        self.notifier.as_ref()
    }
}

/// Reducer for the todo list
#[derive(Clone, Copy, Debug, Default)]
pub struct TodoReducer;

impl TodoReducer {
    /// Creates a new `TodoReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn reject(
        state: &mut TodoState,
        error: TodoError,
        env: &TodoEnvironment,
    ) -> SmallVec<[Effect<TodoAction>; 4]> {
        match env.policy {
            RejectionPolicy::Ignore => {
                tracing::debug!(%error, "Ignoring rejected command");
                SmallVec::new()
            },
            RejectionPolicy::Report => {
                tracing::warn!(%error, "Rejected command");
                let notification = Notification::error(error.to_string());
                state.last_error = Some(error);
                smallvec![Effect::Notify(notification)]
            },
        }
    }
}

impl Reducer for TodoReducer {
    type State = TodoState;
    type Action = TodoAction;
    type Environment = TodoEnvironment;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        let result = match action {
            TodoAction::Add { text } => state.collection.try_add(&text),
            TodoAction::Toggle { id } => state.collection.try_toggle(id),
            TodoAction::Delete { id } => state.collection.try_delete(id),
        };

        match result {
            Ok((collection, event)) => {
                tracing::debug!(id = %event.id(), ?event, "Applied command");
                state.collection = collection;
                state.last_error = None;
                smallvec![Effect::Notify(event.notification())]
            },
            Err(error) => Self::reject(state, error, env),
        }
    }
}
