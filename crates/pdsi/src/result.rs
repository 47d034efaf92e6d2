//! Output of a single-location PDSI run.

use palmer_cafec::{CafecCoefficients, CalibrationPeriod, ClimaticCharacteristic};
use palmer_spell::PalmerIndices;
use palmer_water_balance::WaterBalance;

/// All series and calibration products of one location.
///
/// Series are padded to whole years; padded and missing months hold NaN.
#[derive(Debug, Clone)]
pub struct PalmerOutput {
    /// Number of months supplied before padding.
    n_input_months: usize,
    calibration: CalibrationPeriod,
    water_balance: WaterBalance,
    coefficients: CafecCoefficients,
    characteristic: ClimaticCharacteristic,
    z: Vec<f64>,
    cafec_precip: Vec<f64>,
    indices: PalmerIndices,
}

impl PalmerOutput {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        n_input_months: usize,
        calibration: CalibrationPeriod,
        water_balance: WaterBalance,
        coefficients: CafecCoefficients,
        characteristic: ClimaticCharacteristic,
        z: Vec<f64>,
        cafec_precip: Vec<f64>,
        indices: PalmerIndices,
    ) -> Self {
        Self {
            n_input_months,
            calibration,
            water_balance,
            coefficients,
            characteristic,
            z,
            cafec_precip,
            indices,
        }
    }

    /// Number of months in the padded series.
    pub fn len(&self) -> usize {
        self.z.len()
    }

    /// Returns `true` if there are no months.
    pub fn is_empty(&self) -> bool {
        self.z.is_empty()
    }

    /// Number of months supplied before padding to whole years.
    pub fn n_input_months(&self) -> usize {
        self.n_input_months
    }

    /// First data year.
    pub fn start_year(&self) -> i32 {
        self.water_balance.start_year()
    }

    /// Calibration period actually used.
    pub fn calibration(&self) -> &CalibrationPeriod {
        &self.calibration
    }

    /// Water-balance table.
    pub fn water_balance(&self) -> &WaterBalance {
        &self.water_balance
    }

    /// CAFEC coefficients.
    pub fn coefficients(&self) -> &CafecCoefficients {
        &self.coefficients
    }

    /// Climatic characteristic K.
    pub fn characteristic(&self) -> &ClimaticCharacteristic {
        &self.characteristic
    }

    /// Z-index.
    pub fn z(&self) -> &[f64] {
        &self.z
    }

    /// CAFEC precipitation P̂.
    pub fn cafec_precip(&self) -> &[f64] {
        &self.cafec_precip
    }

    /// Palmer Drought Severity Index.
    pub fn pdsi(&self) -> &[f64] {
        self.indices.pdsi()
    }

    /// Palmer Hydrological Drought Index.
    pub fn phdi(&self) -> &[f64] {
        self.indices.phdi()
    }

    /// Modified PDSI (WPLM).
    pub fn pmdi(&self) -> &[f64] {
        self.indices.pmdi()
    }
}
