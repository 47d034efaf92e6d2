use approx::{assert_abs_diff_eq, assert_relative_eq};
use palmer_cafec::{
    CafecCoefficients, CafecError, CalibrationPeriod, ClimaticCharacteristic, MonthlySums,
    compute_z_index, estimate_cafec_coefficients,
};
use palmer_pdsi::{PalmerConfig, PdsiError, compute_pdsi};
use palmer_spell::track_spells;
use palmer_water_balance::{SoilConstants, simulate_water_balance};

const TEMP_YEAR: [f64; 12] = [
    35.0, 38.0, 46.0, 56.0, 65.0, 73.0, 78.0, 76.0, 69.0, 58.0, 47.0, 38.0,
];

/// A normal first year, then a wet spring and a dry April through September.
const PRECIP: [f64; 24] = [
    3.2, 3.0, 3.9, 3.6, 4.1, 3.8, 4.2, 3.5, 3.3, 2.9, 3.4, 3.6, //
    3.5, 3.3, 4.2, 0.3, 0.2, 0.3, 0.2, 0.3, 0.2, 3.9, 4.1, 3.8,
];

fn temps(n: usize) -> Vec<f64> {
    TEMP_YEAR.iter().copied().cycle().take(n).collect()
}

fn config() -> PalmerConfig {
    PalmerConfig::new(SoilConstants::new(5.0, 1.6, 55.0), 35.0, 2001)
        .with_calibration(CalibrationPeriod::new(2001, 2002))
}

#[test]
fn scenario_a_six_month_deficit() {
    let out = compute_pdsi(&PRECIP, &temps(24), &config()).unwrap();
    assert_eq!(out.len(), 24);

    let expected = [
        -0.098867, -0.22041, -0.329433, 0.584192, 1.194034, 1.882801, 2.609809, 3.1491, 3.541694,
        -0.30579, -0.611995, -0.921202, -0.727451, -0.520798, -0.33543, -0.885072, -1.463924,
        -2.124892, -2.826965, -3.343888, -3.71642, -3.027838, -2.378269, -1.761066,
    ];
    for (i, &e) in expected.iter().enumerate() {
        assert_abs_diff_eq!(out.pdsi()[i], e, epsilon = 1e-4);
    }

    // A drought is established inside the dry months
    assert!((15..=20).any(|i| out.pdsi()[i] < -0.5));
    // It deepens month after month while the deficit lasts
    for i in 16..=20 {
        assert!(out.pdsi()[i] < out.pdsi()[i - 1], "month {i}");
    }
    // and recovers toward normal once the rain returns
    for i in 21..24 {
        assert!(out.pdsi()[i] > out.pdsi()[i - 1], "month {i}");
    }

    assert!(out.pdsi().iter().all(|v| v.is_finite()));
    assert!(out.phdi().iter().all(|v| v.is_finite()));
    assert!(out.pmdi().iter().all(|v| v.is_finite()));
}

#[test]
fn scenario_a_weighting_factors() {
    let out = compute_pdsi(&PRECIP, &temps(24), &config()).unwrap();
    let k = [
        2.883, 2.635, 2.635, 1.062, 0.875, 0.778, 0.989, 1.392, 1.372, 1.845, 1.742, 1.637,
    ];
    for m in 0..12 {
        assert_abs_diff_eq!(out.characteristic().k()[m], k[m], epsilon = 1e-3);
    }
    assert_eq!(out.cafec_precip().len(), 24);
}

#[test]
fn scenario_b_neutral_climate() {
    let t = temps(24);
    let cfg = config();
    let probe = simulate_water_balance(&t, &[0.0; 24], &cfg.water_balance()).unwrap();
    let precip = probe.pe().to_vec();

    // No departures at all: nothing to calibrate K against
    let err = compute_pdsi(&precip, &t, &cfg).unwrap_err();
    assert_eq!(
        err,
        PdsiError::Cafec(CafecError::DegenerateDeparture { month: 1 })
    );

    // The coefficients still predict precipitation exactly
    let wb = simulate_water_balance(&t, &precip, &cfg.water_balance()).unwrap();
    let coefficients =
        estimate_cafec_coefficients(&wb, &CalibrationPeriod::new(2001, 2002)).unwrap();
    for m in 0..12 {
        assert_eq!(coefficients.alpha()[m], 1.0);
        assert_eq!(coefficients.beta()[m], 1.0);
        assert_eq!(coefficients.gamma()[m], 0.0);
        assert_eq!(coefficients.delta()[m], 0.0);
    }

    // With any finite K the anomaly is zero and no spell ever starts
    let z = compute_z_index(&wb, &coefficients, &ClimaticCharacteristic::from_k([1.3; 12]));
    for &v in z.z() {
        assert_abs_diff_eq!(v, 0.0, epsilon = 1e-12);
    }
    let indices = track_spells(z.z(), 2001, 2002).unwrap();
    for i in 0..24 {
        assert_abs_diff_eq!(indices.pdsi()[i], 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(indices.phdi()[i], 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(indices.pmdi()[i], 0.0, epsilon = 1e-12);
    }
}

#[test]
fn scenario_c_full_range_paths_agree() {
    let cfg = config();
    let wb = simulate_water_balance(&temps(24), &PRECIP, &cfg.water_balance()).unwrap();

    // Calibration equal to the data range takes the whole-series path
    let fast = estimate_cafec_coefficients(&wb, &CalibrationPeriod::new(2001, 2002)).unwrap();
    let windowed = CafecCoefficients::from_sums(&MonthlySums::from_window(&wb, 0..2).unwrap());

    for m in 0..12 {
        assert_relative_eq!(fast.alpha()[m], windowed.alpha()[m], epsilon = 1e-12);
        assert_relative_eq!(fast.beta()[m], windowed.beta()[m], epsilon = 1e-12);
        assert_relative_eq!(fast.gamma()[m], windowed.gamma()[m], epsilon = 1e-12);
        assert_relative_eq!(fast.delta()[m], windowed.delta()[m], epsilon = 1e-12);
        assert_relative_eq!(fast.t_ratio()[m], windowed.t_ratio()[m], epsilon = 1e-12);
    }

    // Omitting the calibration period gives the same run
    let default_cfg = PalmerConfig::new(SoilConstants::new(5.0, 1.6, 55.0), 35.0, 2001);
    let a = compute_pdsi(&PRECIP, &temps(24), &cfg).unwrap();
    let b = compute_pdsi(&PRECIP, &temps(24), &default_cfg).unwrap();
    assert_eq!(b.calibration(), &CalibrationPeriod::new(2001, 2002));
    assert_eq!(a.pdsi(), b.pdsi());
}

#[test]
fn incomplete_final_year_is_padded() {
    let mut precip = PRECIP.to_vec();
    precip.extend_from_slice(&[2.1, 2.6, 3.1, 2.8, 2.2, 1.9, 4.4, 5.1, 3.0, 2.2]);
    let cfg = PalmerConfig::new(SoilConstants::new(5.0, 1.6, 55.0), 35.0, 2001);

    let out = compute_pdsi(&precip, &temps(34), &cfg).unwrap();
    assert_eq!(out.n_input_months(), 34);
    assert_eq!(out.len(), 36);
    assert_eq!(out.calibration(), &CalibrationPeriod::new(2001, 2003));
    for i in 34..36 {
        assert!(out.z()[i].is_nan());
        assert!(out.pdsi()[i].is_nan());
        assert!(out.phdi()[i].is_nan());
        assert!(out.pmdi()[i].is_nan());
    }
    assert!(out.pdsi()[..34].iter().all(|v| v.is_finite()));
}

#[test]
fn calibration_outside_data() {
    let cfg = PalmerConfig::new(SoilConstants::new(5.0, 1.6, 55.0), 35.0, 2001)
        .with_calibration(CalibrationPeriod::new(1990, 2002));
    let err = compute_pdsi(&PRECIP, &temps(24), &cfg).unwrap_err();
    assert!(matches!(
        err,
        PdsiError::Cafec(CafecError::InvalidCalibration { .. })
    ));
}

#[test]
fn mismatched_inputs() {
    let err = compute_pdsi(&PRECIP, &temps(23), &config()).unwrap_err();
    assert!(matches!(err, PdsiError::InvalidInput { .. }));

    let err = compute_pdsi(&[], &[], &config()).unwrap_err();
    assert!(matches!(err, PdsiError::Calendar(_)));
}
