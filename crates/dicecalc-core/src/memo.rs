//! Compute-once, read-many memo table of expected rounds.
//!
//! Entry `k - 1` holds E(k). The table only grows, by appending the next
//! dice count, so it is always a dense prefix E(1)..=E(len).

use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::{Mutex, RwLock};
use tracing::debug;

use crate::decimal::Decimal;
use crate::error::DiceError;

/// Memo table keyed by dice count.
///
/// Readers take the `values` read lock. Writers first take the `fill` lock,
/// so exactly one thread extends the table at a time and every entry is
/// computed at most once.
pub struct MemoTable {
    values: RwLock<Vec<Decimal>>,
    fill: Mutex<()>,
    computed: AtomicU64,
}

impl MemoTable {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self {
            values: RwLock::new(Vec::new()),
            fill: Mutex::new(()),
            computed: AtomicU64::new(0),
        }
    }

    /// Cached E(n), if present.
    #[must_use]
    pub fn get(&self, n: u32) -> Option<Decimal> {
        let index = usize::try_from(n).ok()?.checked_sub(1)?;
        self.values.read().get(index).cloned()
    }

    /// Number of cached entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.read().len()
    }

    /// Whether the table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.read().is_empty()
    }

    /// Total number of entries ever computed.
    #[must_use]
    pub fn computations(&self) -> u64 {
        self.computed.load(Ordering::Acquire)
    }

    /// Cached entries E(1)..=E(n), or fewer if not yet computed.
    #[must_use]
    pub fn prefix(&self, n: u32) -> Vec<Decimal> {
        let values = self.values.read();
        let end = usize::try_from(n).map_or(values.len(), |n| n.min(values.len()));
        values[..end].to_vec()
    }

    /// Return E(n), filling missing entries bottom-up.
    ///
    /// `compute(k, lower)` must return E(k) given `lower == [E(1), .., E(k-1)]`.
    /// `on_entry(k)` is called after E(k) is stored.
    pub fn get_or_fill<F, P>(
        &self,
        n: u32,
        mut compute: F,
        mut on_entry: P,
    ) -> Result<Decimal, DiceError>
    where
        F: FnMut(u32, &[Decimal]) -> Result<Decimal, DiceError>,
        P: FnMut(u32),
    {
        DiceError::check_dice(n)?;
        if let Some(value) = self.get(n) {
            return Ok(value);
        }

        let _guard = self.fill.lock();
        loop {
            let (k, value) = {
                let values = self.values.read();
                if let Some(value) = values.get(n as usize - 1) {
                    return Ok(value.clone());
                }
                let k = u32::try_from(values.len() + 1)
                    .map_err(|_| DiceError::Arithmetic("memo table index overflow".into()))?;
                (k, compute(k, &values)?)
            };
            debug!(dice = k, "memo entry computed");
            self.values.write().push(value);
            self.computed.fetch_add(1, Ordering::AcqRel);
            on_entry(k);
        }
    }
}

impl Default for MemoTable {
    fn default() -> Self {
        Self::new()
    }
}
