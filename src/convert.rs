//! Pure conversion functions: TOML and JSON records -> crate API types.

use anyhow::{Result, bail};

use palmer_pdsi::{CalibrationPeriod, Location, PalmerConfig, SoilConstants};

use crate::config::{CalibrationToml, SoilToml};
use crate::input::{SiteRecord, with_missing};

/// Unit of input temperatures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TempUnit {
    Fahrenheit,
    Celsius,
}

/// Unit of input precipitation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrecipUnit {
    Inches,
    Millimetres,
}

/// Parses a temperature unit name.
pub fn parse_temp_unit(s: &str) -> Result<TempUnit> {
    match s.to_lowercase().as_str() {
        "fahrenheit" | "f" => Ok(TempUnit::Fahrenheit),
        "celsius" | "c" => Ok(TempUnit::Celsius),
        other => bail!("unknown temperature unit: {other:?}"),
    }
}

/// Parses a precipitation unit name.
pub fn parse_precip_unit(s: &str) -> Result<PrecipUnit> {
    match s.to_lowercase().as_str() {
        "inches" | "in" => Ok(PrecipUnit::Inches),
        "mm" | "millimetres" | "millimeters" => Ok(PrecipUnit::Millimetres),
        other => bail!("unknown precipitation unit: {other:?}"),
    }
}

/// Converts a temperature to °F. NaN stays NaN.
pub fn to_fahrenheit(value: f64, unit: TempUnit) -> f64 {
    match unit {
        TempUnit::Fahrenheit => value,
        TempUnit::Celsius => value * 9.0 / 5.0 + 32.0,
    }
}

/// Converts a precipitation depth to inches. NaN stays NaN.
pub fn to_inches(value: f64, unit: PrecipUnit) -> f64 {
    match unit {
        PrecipUnit::Inches => value,
        PrecipUnit::Millimetres => value / 25.4,
    }
}

/// Builds the calibration period; both years or neither must be set.
pub fn build_calibration(cal: &CalibrationToml) -> Result<Option<CalibrationPeriod>> {
    match (cal.start_year, cal.end_year) {
        (Some(start), Some(end)) => {
            if start > end {
                bail!("calibration start_year {start} is after end_year {end}");
            }
            Ok(Some(CalibrationPeriod::new(start, end)))
        }
        (None, None) => Ok(None),
        _ => bail!("calibration needs both start_year and end_year, or neither"),
    }
}

/// Resolves a site's soil constants, falling back to the `[soil]` defaults.
pub fn build_soil(site: &SiteRecord, defaults: &SoilToml) -> Result<SoilConstants> {
    let pick = |own: Option<f64>, fallback: Option<f64>, name: &str| -> Result<f64> {
        match own.or(fallback) {
            Some(v) => Ok(v),
            None => bail!(
                "site {:?} has no {name} and [soil].{name} is not set",
                site.name
            ),
        }
    };
    Ok(SoilConstants::new(
        pick(site.awc, defaults.awc, "awc")?,
        pick(site.b, defaults.b, "b")?,
        pick(site.h, defaults.h, "h")?,
    ))
}

/// Builds a [`PalmerConfig`] for a site.
pub fn build_palmer_config(
    site: &SiteRecord,
    soil: &SoilToml,
    calibration: Option<CalibrationPeriod>,
) -> Result<PalmerConfig> {
    let mut cfg = PalmerConfig::new(build_soil(site, soil)?, site.latitude, site.start_year)
        .with_top_capacity(soil.top_capacity);
    if let Some(period) = calibration {
        cfg = cfg.with_calibration(period);
    }
    Ok(cfg)
}

/// Builds a batch [`Location`] with series converted to inches and °F.
pub fn build_location(
    site: &SiteRecord,
    soil: &SoilToml,
    calibration: Option<CalibrationPeriod>,
    temp_unit: TempUnit,
    precip_unit: PrecipUnit,
) -> Result<Location> {
    Ok(Location {
        precip: with_missing(&site.precip)
            .into_iter()
            .map(|v| to_inches(v, precip_unit))
            .collect(),
        temp: with_missing(&site.temp)
            .into_iter()
            .map(|v| to_fahrenheit(v, temp_unit))
            .collect(),
        config: build_palmer_config(site, soil, calibration)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn site() -> SiteRecord {
        SiteRecord {
            name: "valley".to_string(),
            latitude: 35.0,
            start_year: 2001,
            awc: Some(4.0),
            b: None,
            h: None,
            precip: vec![Some(25.4), None],
            temp: vec![Some(0.0), Some(100.0)],
        }
    }

    fn soil() -> SoilToml {
        SoilToml {
            awc: Some(5.0),
            b: Some(1.6),
            h: Some(55.0),
            top_capacity: 1.0,
        }
    }

    #[test]
    fn units_parse() {
        assert_eq!(parse_temp_unit("Celsius").unwrap(), TempUnit::Celsius);
        assert_eq!(parse_precip_unit("mm").unwrap(), PrecipUnit::Millimetres);
        assert!(parse_temp_unit("kelvin").is_err());
        assert!(parse_precip_unit("feet").is_err());
    }

    #[test]
    fn unit_conversion() {
        assert_eq!(to_fahrenheit(100.0, TempUnit::Celsius), 212.0);
        assert_eq!(to_fahrenheit(50.0, TempUnit::Fahrenheit), 50.0);
        assert_eq!(to_inches(25.4, PrecipUnit::Millimetres), 1.0);
        assert!(to_inches(f64::NAN, PrecipUnit::Millimetres).is_nan());
    }

    #[test]
    fn calibration_pairs() {
        let both = CalibrationToml {
            start_year: Some(1931),
            end_year: Some(1990),
        };
        assert_eq!(
            build_calibration(&both).unwrap(),
            Some(CalibrationPeriod::new(1931, 1990))
        );
        assert_eq!(build_calibration(&CalibrationToml::default()).unwrap(), None);

        let half = CalibrationToml {
            start_year: Some(1931),
            end_year: None,
        };
        assert!(build_calibration(&half).is_err());

        let reversed = CalibrationToml {
            start_year: Some(1990),
            end_year: Some(1931),
        };
        assert!(build_calibration(&reversed).is_err());
    }

    #[test]
    fn site_soil_overrides_defaults() {
        let s = build_soil(&site(), &soil()).unwrap();
        assert_eq!(s.awc(), 4.0);
        assert_eq!(s.b(), 1.6);
        assert_eq!(s.h(), 55.0);
    }

    #[test]
    fn missing_soil_constant() {
        let defaults = SoilToml {
            h: None,
            ..soil()
        };
        let err = build_soil(&site(), &defaults).unwrap_err();
        assert!(err.to_string().contains("has no h"));
    }

    #[test]
    fn location_converted_to_inches_and_fahrenheit() {
        let loc = build_location(
            &site(),
            &soil(),
            None,
            TempUnit::Celsius,
            PrecipUnit::Millimetres,
        )
        .unwrap();
        assert_eq!(loc.precip[0], 1.0);
        assert!(loc.precip[1].is_nan());
        assert_eq!(loc.temp, vec![32.0, 212.0]);
        assert_eq!(loc.config.start_year(), 2001);
    }
}
