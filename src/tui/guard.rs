//! Terminal cleanup tied to scope.

use tracing::debug;

/// Runs its cleanup exactly once, when dropped.
///
/// Created right after raw mode is enabled, so an early `?`, a failed
/// `Terminal::new` or a panic in the event loop still puts the terminal back.
pub struct RestoreGuard<F: FnOnce()> {
    restore: Option<F>,
}

impl<F: FnOnce()> RestoreGuard<F> {
    /// Arms the guard with `restore`.
    pub fn new(restore: F) -> Self {
        Self {
            restore: Some(restore),
        }
    }
}

impl<F: FnOnce()> Drop for RestoreGuard<F> {
    fn drop(&mut self) {
        if let Some(restore) = self.restore.take() {
            debug!("Restoring terminal");
            restore();
        }
    }
}
