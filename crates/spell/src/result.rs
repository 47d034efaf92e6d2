//! Final severity series.

/// PDSI, PHDI and PMDI for every month of a series.
///
/// Months with a missing Z-index hold NaN.
#[derive(Debug, Clone, PartialEq)]
pub struct PalmerIndices {
    pdsi: Vec<f64>,
    phdi: Vec<f64>,
    pmdi: Vec<f64>,
}

impl PalmerIndices {
    pub(crate) fn new(pdsi: Vec<f64>, phdi: Vec<f64>, pmdi: Vec<f64>) -> Self {
        Self { pdsi, phdi, pmdi }
    }

    /// Number of months.
    pub fn len(&self) -> usize {
        self.pdsi.len()
    }

    /// Returns `true` if there are no months.
    pub fn is_empty(&self) -> bool {
        self.pdsi.is_empty()
    }

    /// Palmer Drought Severity Index.
    pub fn pdsi(&self) -> &[f64] {
        &self.pdsi
    }

    /// Palmer Hydrological Drought Index.
    pub fn phdi(&self) -> &[f64] {
        &self.phdi
    }

    /// Probability-weighted (modified) PDSI, also known as WPLM.
    pub fn pmdi(&self) -> &[f64] {
        &self.pmdi
    }

    /// Consumes `self` and returns `(pdsi, phdi, pmdi)`.
    pub fn into_parts(self) -> (Vec<f64>, Vec<f64>, Vec<f64>) {
        (self.pdsi, self.phdi, self.pmdi)
    }
}
