use approx::assert_relative_eq;
use palmer_cafec::{
    CafecError, CalibrationPeriod, MonthlySums, compute_z_index, estimate_cafec_coefficients,
    estimate_climatic_characteristic,
};
use palmer_water_balance::{SoilConstants, WaterBalance, WaterBalanceConfig, simulate_water_balance};

const TEMP_YEAR: [f64; 12] = [
    35.0, 38.0, 46.0, 56.0, 65.0, 73.0, 78.0, 76.0, 69.0, 58.0, 47.0, 38.0,
];

const PRECIP: [f64; 36] = [
    3.2, 3.0, 3.9, 3.6, 4.1, 3.8, 4.2, 3.5, 3.3, 2.9, 3.4, 3.6, //
    3.5, 3.3, 4.2, 0.3, 0.2, 0.3, 0.2, 0.3, 0.2, 3.9, 4.1, 3.8, //
    2.1, 2.6, 3.1, 2.8, 2.2, 1.9, 4.4, 5.1, 3.0, 2.2, 2.8, 3.3,
];

fn config() -> WaterBalanceConfig {
    WaterBalanceConfig::new(SoilConstants::new(5.0, 1.6, 55.0), 35.0, 2001)
}

fn temps(n: usize) -> Vec<f64> {
    TEMP_YEAR.iter().copied().cycle().take(n).collect()
}

fn three_years() -> WaterBalance {
    simulate_water_balance(&temps(36), &PRECIP, &config()).unwrap()
}

#[test]
fn coefficients_over_full_period() {
    let wb = three_years();
    let c = estimate_cafec_coefficients(&wb, &CalibrationPeriod::new(2001, 2003)).unwrap();

    // Winter months never lose moisture: alpha = 1, delta = 0
    for m in [0, 1, 2, 10, 11] {
        assert_relative_eq!(c.alpha()[m], 1.0, epsilon = 1e-12);
        assert_eq!(c.delta()[m], 0.0);
    }
    // Summer recharge never happens but is possible: beta = 0
    for m in 4..9 {
        assert_eq!(c.beta()[m], 0.0);
    }
    assert_relative_eq!(c.alpha()[6], 0.391_084_430_392_511_9, epsilon = 1e-6);
    assert_relative_eq!(c.gamma()[0], 0.469_445_785_509_616, epsilon = 1e-6);
    assert_relative_eq!(c.delta()[5], 0.744_421_463_382_677_9, epsilon = 1e-6);
    assert_relative_eq!(c.t_ratio()[7], 2.586_920_149_233_569_6, epsilon = 1e-6);
}

#[test]
fn characteristic_over_full_period() {
    let wb = three_years();
    let period = CalibrationPeriod::new(2001, 2003);
    let c = estimate_cafec_coefficients(&wb, &period).unwrap();
    let k = estimate_climatic_characteristic(&wb, &c, &period).unwrap();

    let expected = [
        1.799_529_346, 2.310_750_275, 1.951_075_162, 1.221_525_962, 1.091_237_222, 0.959_930_508,
        1.083_775_228, 1.209_467_628, 1.414_648_717, 1.734_403_344, 1.690_775_796, 1.586_589_959,
    ];
    for m in 0..12 {
        assert_relative_eq!(k.k()[m], expected[m], epsilon = 1e-5);
        assert!(k.mean_abs_departure()[m] > 0.0);
    }

    let z = compute_z_index(&wb, &c, &k);
    assert_eq!(z.z().len(), 36);
    assert_relative_eq!(z.z()[0], 0.544_650_035_644_555_3, epsilon = 1e-5);
    assert_relative_eq!(z.z()[5], 3.132_901_456_391_558, epsilon = 1e-5);
    assert_relative_eq!(z.z()[24], -1.434_832_245_227_303_7, epsilon = 1e-5);
}

#[test]
fn windowed_calibration() {
    let wb = three_years();
    let period = CalibrationPeriod::new(2002, 2003);
    let c = estimate_cafec_coefficients(&wb, &period).unwrap();
    let k = estimate_climatic_characteristic(&wb, &c, &period).unwrap();

    assert_relative_eq!(c.alpha()[5], 0.394_042_610_094_991, epsilon = 1e-6);
    assert_eq!(c.gamma()[3], 0.0);
    assert_relative_eq!(k.k()[1], 1.870_531_968_718_44, epsilon = 1e-5);

    // Z still covers every month, including the uncalibrated first year
    let z = compute_z_index(&wb, &c, &k);
    assert_relative_eq!(z.z()[4], 3.575_443_212_445_084, epsilon = 1e-5);
    assert_relative_eq!(z.z()[27], 1.403_127_011_702_481_7, epsilon = 1e-5);
}

#[test]
fn full_and_windowed_sums_agree() {
    let wb = three_years();
    let full = MonthlySums::from_full(&wb);
    let window = MonthlySums::from_window(&wb, 0..3).unwrap();
    for m in 0..12 {
        assert_relative_eq!(full.p[m], window.p[m], epsilon = 1e-12);
        assert_relative_eq!(full.pe[m], window.pe[m], epsilon = 1e-12);
        assert_relative_eq!(full.sp[m], window.sp[m], epsilon = 1e-12);
        assert_relative_eq!(full.loss[m], window.loss[m], epsilon = 1e-12);
        assert_relative_eq!(full.et[m], window.et[m], epsilon = 1e-12);
    }
}

#[test]
fn missing_months_are_skipped_in_sums() {
    let mut p = PRECIP.to_vec();
    p[13] = f64::NAN;
    let wb = simulate_water_balance(&temps(36), &p, &config()).unwrap();
    let sums = MonthlySums::from_full(&wb);
    assert!(sums.p[1].is_finite());
    assert_relative_eq!(sums.p[1], 3.0 + 2.6, epsilon = 1e-12);

    let window = MonthlySums::from_window(&wb, 1..3).unwrap();
    assert_relative_eq!(window.p[1], 2.6, epsilon = 1e-12);
}

#[test]
fn window_outside_series() {
    let wb = three_years();
    let err = MonthlySums::from_window(&wb, 2..5).unwrap_err();
    assert!(matches!(err, CafecError::Calendar(_)));
}

#[test]
fn calibration_outside_data() {
    let wb = three_years();
    let err = estimate_cafec_coefficients(&wb, &CalibrationPeriod::new(1999, 2002)).unwrap_err();
    assert_eq!(
        err,
        CafecError::InvalidCalibration {
            start: 1999,
            end: 2002,
            data_start: 2001,
            data_end: 2003,
        }
    );

    let c = estimate_cafec_coefficients(&wb, &CalibrationPeriod::new(2001, 2003)).unwrap();
    let err =
        estimate_climatic_characteristic(&wb, &c, &CalibrationPeriod::new(2002, 2004)).unwrap_err();
    assert!(matches!(err, CafecError::InvalidCalibration { .. }));
}

#[test]
fn neutral_climate_has_degenerate_departure() {
    // Precipitation equal to PE: the soil stays full and P̂ = P every month
    let t = temps(24);
    let probe = simulate_water_balance(&t, &vec![0.0; 24], &config()).unwrap();
    let wb = simulate_water_balance(&t, probe.pe(), &config()).unwrap();

    let period = CalibrationPeriod::new(2001, 2002);
    let c = estimate_cafec_coefficients(&wb, &period).unwrap();
    for m in 0..12 {
        assert_eq!(c.alpha()[m], 1.0);
        assert_eq!(c.beta()[m], 1.0);
        assert_eq!(c.gamma()[m], 0.0);
        assert_eq!(c.delta()[m], 0.0);
    }

    let err = estimate_climatic_characteristic(&wb, &c, &period).unwrap_err();
    assert_eq!(err, CafecError::DegenerateDeparture { month: 1 });
}
