use std::sync::{Mutex, MutexGuard, PoisonError};

use business::domain::food_details::services::Navigator;

/// Navigation host of the terminal: it only remembers the root the stack
/// was last reset to.
#[derive(Default)]
pub struct ConsoleNavigator {
    root: Mutex<Option<String>>,
}

impl ConsoleNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_root(&self) -> Option<String> {
        self.lock().clone()
    }

    fn lock(&self) -> MutexGuard<'_, Option<String>> {
        self.root.lock().unwrap_or_else(|poisoned: PoisonError<_>| {
            tracing::warn!("Navigator state was poisoned, recovering");
            poisoned.into_inner()
        })
    }
}

impl Navigator for ConsoleNavigator {
    fn reset(&self, root: &str) {
        tracing::info!(root, "Navigation stack reset");
        *self.lock() = Some(root.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_start_without_root() {
        assert!(ConsoleNavigator::new().current_root().is_none());
    }

    #[test]
    fn should_remember_last_reset_root() {
        let navigator = ConsoleNavigator::new();

        navigator.reset("Dashboard");

        assert_eq!(navigator.current_root().as_deref(), Some("Dashboard"));
    }

    #[test]
    fn should_keep_resetting_after_poisoned_lock() {
        let navigator = std::sync::Arc::new(ConsoleNavigator::new());
        let poisoner = navigator.clone();
        let _ = std::thread::spawn(move || {
            let _guard = poisoner.root.lock().unwrap();
            panic!("poison the navigator lock");
        })
        .join();

        navigator.reset("Dashboard");

        assert_eq!(navigator.current_root().as_deref(), Some("Dashboard"));
    }
}
