//! Months whose severity is still undetermined.

/// Which provisional series resolves the buffered months.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssignRule {
    /// A wet spell was established: walk back through the X1 history.
    UseX1,
    /// A drought was established: walk back through the X2 history.
    UseX2,
    /// Each month keeps its own X3.
    UseX3,
}

/// A month awaiting resolution, with its provisional severities.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PendingMonth {
    /// Position of the month in the series.
    pub month: usize,
    /// Incipient wet severity.
    pub x1: f64,
    /// Incipient dry severity.
    pub x2: f64,
    /// Established spell severity.
    pub x3: f64,
}

/// Ordered list of pending months, oldest first.
#[derive(Debug, Clone, Default)]
pub struct BacktrackBuffer {
    entries: Vec<PendingMonth>,
}

impl BacktrackBuffer {
    /// Creates an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of pending months.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing is pending.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Pending months, oldest first.
    pub fn entries(&self) -> &[PendingMonth] {
        &self.entries
    }

    /// Appends a month whose classification is still ambiguous.
    pub fn push(&mut self, pending: PendingMonth) {
        self.entries.push(pending);
    }

    /// Drops every pending month without resolving it.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Resolves every pending month and empties the buffer.
    ///
    /// Returns `(month, value)` pairs, oldest first. For [`AssignRule::UseX1`]
    /// and [`AssignRule::UseX2`] the walk runs from the newest month back,
    /// and switches to the other incipient series at the first month whose
    /// value in the current series is exactly zero.
    pub fn flush(&mut self, rule: AssignRule) -> Vec<(usize, f64)> {
        let resolved: Vec<(usize, f64)> = match rule {
            AssignRule::UseX3 => self.entries.iter().map(|e| (e.month, e.x3)).collect(),
            AssignRule::UseX1 | AssignRule::UseX2 => {
                let mut wet = rule == AssignRule::UseX1;
                let mut out = Vec::with_capacity(self.entries.len());
                for e in self.entries.iter().rev() {
                    let value = if wet {
                        if e.x1 == 0.0 {
                            wet = false;
                            e.x2
                        } else {
                            e.x1
                        }
                    } else if e.x2 == 0.0 {
                        wet = true;
                        e.x1
                    } else {
                        e.x2
                    };
                    out.push((e.month, value));
                }
                out.reverse();
                out
            }
        };
        self.clear();
        resolved
    }
}
