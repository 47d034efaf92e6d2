//! Sequential spell tracker.

use tracing::trace;

use crate::backtrack::{AssignRule, BacktrackBuffer, PendingMonth};
use crate::result::PalmerIndices;
use crate::select::select_weighted;
use crate::state::{MonthValues, SeverityState};
use crate::transition::{Resolution, step};

/// Runs the spell recurrence one month at a time.
///
/// Months are final once resolved; until then they sit in the backtrack
/// buffer. [`SpellTracker::finish`] resolves whatever is left with each
/// month's own X3.
#[derive(Debug, Clone, Default)]
pub struct SpellTracker {
    state: SeverityState,
    buffer: BacktrackBuffer,
    values: Vec<Option<MonthValues>>,
    pdsi: Vec<f64>,
    phdi: Vec<f64>,
    pmdi: Vec<f64>,
}

impl SpellTracker {
    /// Creates a tracker in the near-normal state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a tracker with room for `n_months`.
    pub fn with_capacity(n_months: usize) -> Self {
        Self {
            values: Vec::with_capacity(n_months),
            pdsi: Vec::with_capacity(n_months),
            phdi: Vec::with_capacity(n_months),
            pmdi: Vec::with_capacity(n_months),
            ..Self::default()
        }
    }

    /// State carried into the next month.
    pub fn state(&self) -> &SeverityState {
        &self.state
    }

    /// Months still waiting for resolution.
    pub fn pending(&self) -> &BacktrackBuffer {
        &self.buffer
    }

    /// Number of months pushed so far.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if no months have been pushed.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Provisional values of month `index`, `None` for missing months.
    pub fn provisional(&self, index: usize) -> Option<&MonthValues> {
        self.values.get(index).and_then(Option::as_ref)
    }

    /// Final PDSI of month `index`, NaN while unresolved or missing.
    pub fn pdsi_at(&self, index: usize) -> f64 {
        self.pdsi.get(index).copied().unwrap_or(f64::NAN)
    }

    /// Processes the next month and returns its index.
    ///
    /// A NaN Z-index marks a missing month: it stays NaN and the state is
    /// carried over it unchanged.
    pub fn push_month(&mut self, z: f64) -> usize {
        let index = self.values.len();
        self.pdsi.push(f64::NAN);
        self.phdi.push(f64::NAN);
        self.pmdi.push(f64::NAN);

        if z.is_nan() {
            self.values.push(None);
            trace!(index, "missing month skipped");
            return index;
        }

        let step = step(&self.state, z);
        self.values.push(Some(step.values));
        self.state = step.next;

        match step.resolution {
            Resolution::Assign(rule) => {
                self.resolve_pending(rule);
                self.finalize(index, step.values.x);
            }
            Resolution::Defer => self.buffer.push(PendingMonth {
                month: index,
                x1: step.values.x1,
                x2: step.values.x2,
                x3: step.values.x3,
            }),
        }

        trace!(
            index,
            z,
            x1 = step.values.x1,
            x2 = step.values.x2,
            x3 = step.values.x3,
            prob = step.values.prob,
            pending = self.buffer.len(),
            "month processed"
        );
        index
    }

    /// Resolves any pending months with their own X3 and returns the
    /// indices.
    pub fn finish(mut self) -> PalmerIndices {
        if !self.buffer.is_empty() {
            trace!(pending = self.buffer.len(), "flushing at end of series");
        }
        self.resolve_pending(AssignRule::UseX3);
        PalmerIndices::new(self.pdsi, self.phdi, self.pmdi)
    }

    fn resolve_pending(&mut self, rule: AssignRule) {
        for (month, value) in self.buffer.flush(rule) {
            self.finalize(month, value);
        }
    }

    fn finalize(&mut self, index: usize, value: f64) {
        let Some(v) = self.values[index] else {
            return;
        };
        self.pdsi[index] = value;
        self.phdi[index] = if v.x3 != 0.0 { v.x3 } else { value };
        self.pmdi[index] = select_weighted(v.prob, v.x1, v.x2, v.x3);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn resolved_month_is_final_immediately() {
        let mut t = SpellTracker::new();
        let i = t.push_month(-0.9);
        assert!(t.pending().is_empty());
        assert_relative_eq!(t.pdsi_at(i), -0.3, epsilon = 1e-12);
    }

    #[test]
    fn missing_month_keeps_state() {
        let mut t = SpellTracker::new();
        t.push_month(0.9);
        let before = *t.state();
        let i = t.push_month(f64::NAN);
        assert_eq!(*t.state(), before);
        assert!(t.provisional(i).is_none());
        assert!(t.pdsi_at(i).is_nan());
    }

    #[test]
    fn ambiguous_month_waits_for_spell() {
        let mut t = SpellTracker::new();
        t.push_month(1.5); // x1 = 0.5
        t.push_month(-1.2); // x1 = 0.0485, x2 = -0.4: ambiguous
        assert_eq!(t.pending().len(), 1);
        assert!(t.pdsi_at(1).is_nan());

        t.push_month(-2.0); // x2 = -1.0255: drought established
        assert!(t.pending().is_empty());
        // Backtracked month takes its X2 history
        let x2 = t.provisional(1).unwrap().x2;
        assert_relative_eq!(t.pdsi_at(1), x2);
        assert!(t.pdsi_at(2) <= -1.0);
    }

    #[test]
    fn finish_flushes_with_x3() {
        let mut t = SpellTracker::with_capacity(2);
        t.push_month(1.5);
        t.push_month(-1.2);
        let indices = t.finish();
        // The pending month had no established spell, so its X3 is 0
        assert_eq!(indices.pdsi()[1], 0.0);
        assert_eq!(indices.len(), 2);
    }
}
