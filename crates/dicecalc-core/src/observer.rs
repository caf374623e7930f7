//! Observer pattern for progress tracking.

use crate::progress::ProgressUpdate;

/// Observer trait for receiving progress updates.
///
/// The simulator calls observers from rayon worker threads, so
/// implementations must tolerate concurrent, unordered updates.
pub trait ProgressObserver: Send + Sync {
    /// Receive a progress update.
    fn on_progress(&self, update: &ProgressUpdate);
}
