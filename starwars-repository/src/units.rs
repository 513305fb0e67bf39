//! Unit arguments of the `height` and `length` fields.

use starwars_shared::LengthUnit;

use crate::errors::ResolveError;

/// Parse a raw unit argument. An absent unit means meters.
pub fn parse_unit(unit: Option<&str>) -> Result<LengthUnit, ResolveError> {
    match unit {
        None => Ok(LengthUnit::Meter),
        Some(raw) => raw.parse::<LengthUnit>().map_err(ResolveError::invalid_unit),
    }
}

/// Express a length stored in meters in the requested unit.
///
/// # Returns
///
/// * `Ok(f64)` - The converted length
/// * `Err(ResolveError::InvalidUnit)` - If `unit` is neither `METER` nor `FOOT`
pub fn convert_length(meters: f64, unit: Option<&str>) -> Result<f64, ResolveError> {
    Ok(parse_unit(unit)?.convert(meters))
}

#[cfg(test)]
mod tests {
    use super::*;
    use starwars_shared::FEET_PER_METER;

    #[test]
    fn test_convert_length() {
        assert_eq!(convert_length(12.5, None), Ok(12.5));
        assert_eq!(convert_length(12.5, Some("METER")), Ok(12.5));

        let feet = convert_length(12.5, Some("FOOT")).unwrap();
        assert!((feet - 12.5 * FEET_PER_METER).abs() < 1e-9);
    }

    #[test]
    fn test_unknown_unit_is_rejected() {
        for unit in ["INCH", "foot", ""] {
            assert!(matches!(
                convert_length(1.0, Some(unit)),
                Err(ResolveError::InvalidUnit(_))
            ));
        }
    }
}
