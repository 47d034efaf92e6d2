//! Probability-weighted index (PMDI, also called WPLM).

/// Selects the weighted severity for a month.
///
/// With no established spell the larger-magnitude incipient severity wins
/// (`x1` on ties). While an abatement is in progress the established
/// severity is blended with the opposite incipient one by the probability
/// that the spell has ended. Otherwise the established severity is used.
pub fn select_weighted(prob: f64, x1: f64, x2: f64, x3: f64) -> f64 {
    if x3 == 0.0 {
        if x2.abs() > x1.abs() { x2 } else { x1 }
    } else if prob > 0.0 && prob < 100.0 {
        let p = prob / 100.0;
        let other = if x3 > 0.0 { x2 } else { x1 };
        (1.0 - p) * x3 + p * other
    } else {
        x3
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn no_spell_takes_larger_magnitude() {
        assert_eq!(select_weighted(0.0, 0.4, -0.7, 0.0), -0.7);
        assert_eq!(select_weighted(0.0, 0.9, -0.2, 0.0), 0.9);
    }

    #[test]
    fn tie_prefers_wet() {
        assert_eq!(select_weighted(0.0, 0.5, -0.5, 0.0), 0.5);
        assert_eq!(select_weighted(0.0, 0.0, 0.0, 0.0), 0.0);
    }

    #[test]
    fn wet_spell_blends_with_dry() {
        let w = select_weighted(25.0, 0.3, -0.8, 2.0);
        assert_relative_eq!(w, 0.75 * 2.0 + 0.25 * -0.8);
    }

    #[test]
    fn drought_blends_with_wet() {
        let w = select_weighted(60.0, 0.5, -0.1, -3.0);
        assert_relative_eq!(w, 0.4 * -3.0 + 0.6 * 0.5);
    }

    #[test]
    fn settled_probability_uses_x3() {
        assert_eq!(select_weighted(0.0, 0.3, -0.8, 2.0), 2.0);
        assert_eq!(select_weighted(100.0, 0.3, -0.8, -1.7), -1.7);
    }
}
