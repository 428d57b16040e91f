//! LoadingFlag - "A run is in progress"
//!
//! The flag is raised by [`LoadingFlag::begin`] and lowered when the
//! returned guard is dropped, on every exit path.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Shared in-progress flag. Clones observe the same flag.
#[derive(Debug, Clone, Default)]
pub struct LoadingFlag(Arc<AtomicBool>);

impl LoadingFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_loading(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }

    /// Raise the flag until the guard is dropped
    #[must_use = "the flag is lowered as soon as the guard is dropped"]
    pub fn begin(&self) -> LoadingGuard {
        self.0.store(true, Ordering::SeqCst);
        LoadingGuard {
            flag: Arc::clone(&self.0),
        }
    }
}

/// Lowers the loading flag on drop
#[derive(Debug)]
pub struct LoadingGuard {
    flag: Arc<AtomicBool>,
}

impl Drop for LoadingGuard {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guard_lowers_flag() {
        let flag = LoadingFlag::new();
        assert!(!flag.is_loading());

        {
            let _guard = flag.begin();
            assert!(flag.is_loading());
            // Clones share state
            assert!(flag.clone().is_loading());
        }

        assert!(!flag.is_loading());
    }

    #[test]
    fn test_guard_lowers_flag_on_early_return() {
        fn failing_step(flag: &LoadingFlag) -> Result<(), String> {
            let _guard = flag.begin();
            Err("boom".to_string())
        }

        let flag = LoadingFlag::new();
        assert!(failing_step(&flag).is_err());
        assert!(!flag.is_loading());
    }
}
