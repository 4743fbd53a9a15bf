//! Unit conversion
//!
//! Every conversion is two hops through the category's hub unit: source to
//! hub, then hub to destination. There are no direct pairwise shortcuts.

use tracing::{debug, trace};
use unitconv_core::ConversionError;
use crate::unit::{LengthUnit, TemperatureUnit, Unit, WeightUnit};
use crate::parse::parse_conversion;

/// Convert between length units via centimeters
pub fn convert_length(from: LengthUnit, to: LengthUnit, value: f64) -> f64 {
    to.from_centimeters(from.to_centimeters(value))
}

/// Convert between weight units via kilograms
pub fn convert_weight(from: WeightUnit, to: WeightUnit, value: f64) -> f64 {
    to.from_kilograms(from.to_kilograms(value))
}

/// Convert between temperature units via Celsius
pub fn convert_temperature(from: TemperatureUnit, to: TemperatureUnit, value: f64) -> f64 {
    to.from_celsius(from.to_celsius(value))
}

/// Convert a value between two parsed units
pub fn convert_units(from: Unit, to: Unit, value: f64) -> Result<f64, ConversionError> {
    let result = match (from, to) {
        (Unit::Length(f), Unit::Length(t)) => convert_length(f, t, value),
        (Unit::Weight(f), Unit::Weight(t)) => convert_weight(f, t, value),
        (Unit::Temperature(f), Unit::Temperature(t)) => convert_temperature(f, t, value),
        _ => return Err(ConversionError::incompatible(from.name(), to.name())),
    };
    trace!(%from, %to, value, result, "converted");
    Ok(result)
}

/// Convert a value between two units given by display name
///
/// Fails with `IncompatibleCategories` when the names belong to different
/// categories or either one is not a known unit. The raw result is returned;
/// formatting belongs to the caller.
pub fn convert(source: &str, destination: &str, value: f64) -> Result<f64, ConversionError> {
    let (from, to) = parse_conversion(source, destination).inspect_err(|_| {
        debug!(source, destination, "rejected: incompatible categories");
    })?;
    convert_units(from, to, value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::UNITS;
    use crate::Category;

    fn assert_close(actual: f64, expected: f64, tolerance: f64) {
        let scale = expected.abs().max(1.0);
        assert!(
            (actual - expected).abs() <= tolerance * scale,
            "expected {} got {}", expected, actual
        );
    }

    #[test]
    fn test_inch_to_centimeter() {
        assert_eq!(convert("Inch", "Centimeter", 1.0).unwrap(), 2.54);
    }

    #[test]
    fn test_kilometer_to_mile() {
        let miles = convert("Kilometer", "Mile", 1.0).unwrap();
        assert_close(miles, 1.0 / 1.60934, 1e-12);
        assert_eq!(format!("{:.5}", miles), "0.62137");
    }

    #[test]
    fn test_kilogram_to_pound() {
        let pounds = convert("Kilogram", "Pound", 1.0).unwrap();
        assert_eq!(format!("{:.4}", pounds), "2.2046");
    }

    #[test]
    fn test_celsius_to_fahrenheit() {
        assert_eq!(convert("Celsius", "Fahrenheit", 100.0).unwrap(), 212.0);
    }

    #[test]
    fn test_fahrenheit_to_kelvin() {
        let kelvin = convert("Fahrenheit", "Kelvin", 32.0).unwrap();
        assert_close(kelvin, 273.15, 1e-12);
    }

    #[test]
    fn test_kelvin_to_fahrenheit_goes_through_celsius() {
        let direct = convert("Kelvin", "Fahrenheit", 300.0).unwrap();
        let hop = (300.0 - 273.15) * 1.8 + 32.0;
        assert_eq!(direct, hop);
    }

    #[test]
    fn test_gram_kilogram() {
        assert_eq!(convert("Kilogram", "Gram", 1.5).unwrap(), 1500.0);
        assert_eq!(convert("Gram", "Kilogram", 250.0).unwrap(), 0.25);
    }

    #[test]
    fn test_ton_to_pound() {
        let pounds = convert("Ton", "Pound", 1.0).unwrap();
        assert_close(pounds, 907.185 / 0.453592, 1e-12);
    }

    #[test]
    fn test_inch_to_kilogram_fails() {
        let err = convert("Inch", "Kilogram", 5.0).unwrap_err();
        assert_eq!(err, ConversionError::incompatible("Inch", "Kilogram"));
    }

    #[test]
    fn test_cross_category_fails_both_ways() {
        for length in UNITS.by_category(Category::Length) {
            for weight in UNITS.by_category(Category::Weight) {
                assert!(convert(length.name(), weight.name(), 1.0).is_err());
                assert!(convert(weight.name(), length.name(), 1.0).is_err());
            }
            for temp in UNITS.by_category(Category::Temperature) {
                assert!(convert(length.name(), temp.name(), 1.0).is_err());
                assert!(convert(temp.name(), length.name(), 1.0).is_err());
            }
        }
    }

    #[test]
    fn test_unrecognized_fails() {
        assert!(convert("Furlong", "Inch", 1.0).is_err());
        assert!(convert("Inch", "Furlong", 1.0).is_err());
        assert!(convert("Furlong", "Furlong", 1.0).is_err());
    }

    #[test]
    fn test_identity() {
        for unit in UNITS.all() {
            for x in [0.0, 1.0, -17.25, 3.5e7, 1e-6] {
                let y = convert(unit.name(), unit.name(), x).unwrap();
                assert_close(y, x, 1e-12);
            }
        }
    }

    #[test]
    fn test_round_trip() {
        for a in UNITS.all() {
            for b in UNITS.by_category(a.category()) {
                for x in [1.0, -40.0, 123.456, 1e5] {
                    let there = convert_units(*a, b, x).unwrap();
                    let back = convert_units(b, *a, there).unwrap();
                    assert_close(back, x, 1e-9);
                }
            }
        }
    }

    #[test]
    fn test_convert_units_rejects_mismatch() {
        let err = convert_units(
            Unit::Temperature(TemperatureUnit::Kelvin),
            Unit::Weight(WeightUnit::Gram),
            1.0,
        ).unwrap_err();
        assert_eq!(err, ConversionError::incompatible("Kelvin", "Gram"));
    }
}
