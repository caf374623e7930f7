//! Concrete observer implementations.

use std::sync::atomic::{AtomicU64, Ordering};

use tracing::{debug, info};

use crate::constants::PROGRESS_REPORT_THRESHOLD;
use crate::observer::ProgressObserver;
use crate::progress::ProgressUpdate;

/// Observer that logs progress through `tracing`, throttled by progress change.
pub struct LoggingObserver {
    last_reported: AtomicU64,
}

impl LoggingObserver {
    /// Create a new logging observer.
    #[must_use]
    pub fn new() -> Self {
        Self {
            last_reported: AtomicU64::new(0f64.to_bits()),
        }
    }
}

impl Default for LoggingObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressObserver for LoggingObserver {
    fn on_progress(&self, update: &ProgressUpdate) {
        let fraction = update.fraction();
        let last = f64::from_bits(self.last_reported.load(Ordering::Relaxed));
        if update.done {
            info!(source = update.source, total = update.total, "complete");
            self.last_reported.store(0f64.to_bits(), Ordering::Relaxed);
        } else if fraction - last >= PROGRESS_REPORT_THRESHOLD {
            debug!(
                source = update.source,
                progress = format!("{:.1}%", fraction * 100.0),
                step = update.current,
                total = update.total,
                "progress update"
            );
            self.last_reported.store(fraction.to_bits(), Ordering::Relaxed);
        }
    }
}

/// Null object pattern. Does nothing with progress updates.
pub struct NoOpObserver;

impl NoOpObserver {
    /// Create a new no-op observer that discards all progress updates.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for NoOpObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressObserver for NoOpObserver {
    fn on_progress(&self, _update: &ProgressUpdate) {}
}
