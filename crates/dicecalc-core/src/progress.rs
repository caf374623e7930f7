//! Progress updates emitted by long-running computations.

/// Progress update sent from the calculator or the simulator to observers.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressUpdate {
    /// Component producing the update.
    pub source: &'static str,
    /// Completed units of work (memo entries or trial chunks).
    pub current: u64,
    /// Total units of work.
    pub total: u64,
    /// Whether this is the final update.
    pub done: bool,
}

impl ProgressUpdate {
    /// Create an intermediate progress update.
    #[must_use]
    pub fn new(source: &'static str, current: u64, total: u64) -> Self {
        Self {
            source,
            current,
            total,
            done: false,
        }
    }

    /// Create a completion update.
    #[must_use]
    pub fn done(source: &'static str, total: u64) -> Self {
        Self {
            source,
            current: total,
            total,
            done: true,
        }
    }

    /// Completed fraction in [0.0, 1.0].
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn fraction(&self) -> f64 {
        if self.total == 0 {
            return 1.0;
        }
        (self.current as f64 / self.total as f64).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fraction_of_update() {
        assert!((ProgressUpdate::new("memo", 1, 4).fraction() - 0.25).abs() < f64::EPSILON);
        assert!((ProgressUpdate::done("memo", 4).fraction() - 1.0).abs() < f64::EPSILON);
        assert!((ProgressUpdate::new("memo", 0, 0).fraction() - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn done_update_is_complete() {
        let update = ProgressUpdate::done("simulation", 12);
        assert!(update.done);
        assert_eq!(update.current, 12);
    }
}
