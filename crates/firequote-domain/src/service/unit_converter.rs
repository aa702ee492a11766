//! Area unit conversion

use crate::model::Unit;
use firequote_types::{Error, Result};

/// Exact area conversion factor: 1 ft² = 0.09290304 m²
pub const SQFT_TO_SQM: f64 = 0.09290304;

/// Convert an area to square meters.
///
/// Negative or NaN areas are caller contract violations and are rejected.
pub fn to_square_meters(area: f64, unit: Unit) -> Result<f64> {
    validate_area(area)?;
    Ok(match unit {
        Unit::Meters => area,
        Unit::Feet => area * SQFT_TO_SQM,
    })
}

/// Convert an area in square meters back to the given unit
pub fn from_square_meters(area_m2: f64, unit: Unit) -> Result<f64> {
    validate_area(area_m2)?;
    Ok(match unit {
        Unit::Meters => area_m2,
        Unit::Feet => area_m2 / SQFT_TO_SQM,
    })
}

fn validate_area(area: f64) -> Result<()> {
    if area.is_nan() || area < 0.0 {
        return Err(Error::InvalidInput(format!("invalid area: {}", area)));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meters_pass_through() {
        assert_eq!(to_square_meters(250.0, Unit::Meters).unwrap(), 250.0);
    }

    #[test]
    fn test_feet_to_meters() {
        let m2 = to_square_meters(1000.0, Unit::Feet).unwrap();
        assert!((m2 - 92.90304).abs() < 1e-9);
    }

    #[test]
    fn test_round_trip_within_tolerance() {
        for &x in &[0.5, 1.0, 80.0, 250.0, 10000.0] {
            let feet = from_square_meters(x, Unit::Feet).unwrap();
            let back = to_square_meters(feet, Unit::Feet).unwrap();
            assert!((back - x).abs() / x < 1e-6, "round trip drift for {}", x);
        }
    }

    #[test]
    fn test_zero_area_allowed() {
        assert_eq!(to_square_meters(0.0, Unit::Feet).unwrap(), 0.0);
    }

    #[test]
    fn test_negative_area_rejected() {
        assert!(to_square_meters(-1.0, Unit::Meters).is_err());
        assert!(from_square_meters(-0.1, Unit::Feet).is_err());
    }

    #[test]
    fn test_nan_area_rejected() {
        assert!(to_square_meters(f64::NAN, Unit::Meters).is_err());
    }
}
