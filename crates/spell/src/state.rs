//! Recurrence state and per-month provisional values.

/// State carried from one month to the next.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SeverityState {
    /// Severity of an incipient wet spell (>= 0).
    pub x1: f64,
    /// Severity of an incipient drought (<= 0).
    pub x2: f64,
    /// Severity of the established spell, 0 when none is established.
    pub x3: f64,
    /// Effective wetness or dryness accumulated since abatement began.
    pub v: f64,
    /// Percent probability (0..=100) that the established spell has ended.
    pub prob: f64,
}

impl SeverityState {
    /// Returns `true` when no abatement is in progress.
    pub fn is_settled(&self) -> bool {
        self.prob == 0.0 || self.prob == 100.0
    }
}

/// Provisional values computed for one month.
///
/// These are the inputs to the month's final PDSI, PHDI and PMDI once its
/// classification is resolved.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MonthValues {
    /// Probability that the established spell has ended.
    pub prob: f64,
    /// Incipient wet severity.
    pub x1: f64,
    /// Incipient dry severity.
    pub x2: f64,
    /// Established spell severity.
    pub x3: f64,
    /// Value used for the month if it resolves on its own.
    pub x: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_settled_near_normal() {
        let s = SeverityState::default();
        assert!(s.is_settled());
        assert_eq!(s.x3, 0.0);
    }

    #[test]
    fn abatement_is_not_settled() {
        let s = SeverityState {
            prob: 42.0,
            ..SeverityState::default()
        };
        assert!(!s.is_settled());

        let ended = SeverityState {
            prob: 100.0,
            ..SeverityState::default()
        };
        assert!(ended.is_settled());
    }
}
