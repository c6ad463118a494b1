//! Todo list store.
//!
//! Records are added, toggled between pending and done, and deleted. Every
//! applied command produces a [`Notification`](tasklist_core::environment::Notification)
//! for an injected notifier; the pending and done views are derived from the
//! collection on demand.
//!
//! - [`collection`]: the collection value and its pure transitions
//! - [`reducer`]: the reducer that drives those transitions from actions
//! - [`config`]: seed data and policy from the environment
//! - [`command`]: line commands for the CLI
//!
//! # Quick Start
//!
//! ```no_run
//! use std::sync::Arc;
//! use tasklist_runtime::{Store, TracingNotifier};
//! use todo::{TodoAction, TodoEnvironment, TodoId, TodoReducer, TodoState, default_seed};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let env = TodoEnvironment::new(Arc::new(TracingNotifier));
//! let store = Store::new(TodoState::new(default_seed()), TodoReducer::new(), env);
//!
//! store.send(TodoAction::add("Buy milk")).await?;
//! store.send(TodoAction::toggle(TodoId::new(6))).await?;
//!
//! let (pending, done) = store
//!     .state(|s| (s.collection.pending_count(), s.collection.completed_count()))
//!     .await;
//! println!("Tasks to do - {pending}, Done - {done}");
//! # Ok(())
//! # }
//! ```

pub mod collection;
pub mod command;
pub mod config;
pub mod error;
pub mod reducer;
pub mod types;

// Re-export commonly used types
pub use collection::{TodoCollection, TodoEvent, Transition};
pub use config::{Config, ConfigError, default_seed};
pub use error::TodoError;
pub use reducer::{RejectionPolicy, TodoEnvironment, TodoReducer};
pub use types::{TodoAction, TodoId, TodoRecord, TodoState};

/// Store type for the todo list
pub type TodoStore = tasklist_runtime::Store<TodoState, TodoAction, TodoEnvironment, TodoReducer>;
