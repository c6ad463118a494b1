//! # Tasklist Testing
//!
//! Testing utilities and helpers for the Tasklist reducer architecture.
//!
//! This crate provides:
//! - [`ReducerTest`]: Given-When-Then builder for reducers
//! - [`assertions`]: effect assertion helpers
//! - [`mocks::RecordingNotifier`]: captures notifications for inspection
//!
//! ## Example
//!
//! ```ignore
//! use tasklist_testing::RecordingNotifier;
//! use tasklist_runtime::Store;
//!
//! #[tokio::test]
//! async fn add_notifies() {
//!     let notifier = RecordingNotifier::new();
//!     let store = Store::new(TodoState::default(), TodoReducer::new(), env(&notifier));
//!
//!     store.send(TodoAction::add("Buy milk")).await?;
//!
//!     assert_eq!(notifier.titles(), ["Task added"]);
//! }
//! ```

use tasklist_core::environment::{Notification, Notifier, NotifierEnvironment};


/// Mock implementations of Environment traits
pub mod mocks {
    use super::{Notification, Notifier, NotifierEnvironment};
    use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

    /// Notifier that records every notification it receives
    ///
    /// Clones share the same log, so a test can keep one handle and give
    /// another to the environment under test.
    ///
    /// # Example
    ///
    /// ```
    /// use tasklist_core::environment::{Notification, Notifier};
    /// use tasklist_testing::mocks::RecordingNotifier;
    ///
    /// let notifier = RecordingNotifier::new();
    /// notifier.clone().notify(&Notification::success("Task added"));
    /// assert_eq!(notifier.titles(), ["Task added"]);
    /// ```
    #[derive(Debug, Clone, Default)]
    pub struct RecordingNotifier {
        log: Arc<Mutex<Vec<Notification>>>,
    }

    impl RecordingNotifier {
        /// Create an empty recorder
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }

        // A panicking assertion elsewhere must not hide what was recorded.
        fn lock(&self) -> MutexGuard<'_, Vec<Notification>> {
            self.log.lock().unwrap_or_else(PoisonError::into_inner)
        }

        /// All notifications received so far, oldest first
        #[must_use]
        pub fn notifications(&self) -> Vec<Notification> {
            self.lock().clone()
        }

        /// Titles of all notifications received so far
        #[must_use]
        pub fn titles(&self) -> Vec<String> {
            self.lock().iter().map(|n| n.title.clone()).collect()
        }

        /// The most recent notification
        #[must_use]
        pub fn last(&self) -> Option<Notification> {
            self.lock().last().cloned()
        }

        /// Number of notifications received
        #[must_use]
        pub fn len(&self) -> usize {
            self.lock().len()
        }

        /// Returns true if nothing has been received
        #[must_use]
        pub fn is_empty(&self) -> bool {
            self.lock().is_empty()
        }

        /// Forget everything recorded so far
        pub fn clear(&self) {
            self.lock().clear();
        }
    }

    impl Notifier for RecordingNotifier {
        fn notify(&self, notification: &Notification) {
            self.lock().push(notification.clone());
        }
    }

    /// Lets a bare recorder serve as the environment for simple reducers
    impl NotifierEnvironment for RecordingNotifier {
        fn notifier(&self) -> &dyn Notifier {
            self
        }
    }
}

// Re-export commonly used items
pub use mocks::RecordingNotifier;
pub use reducer_test::{ReducerTest, assertions};
