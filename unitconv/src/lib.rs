//! Unitconv - Unit conversion calculator
//!
//! The caller side of the conversion engine: parses raw input, invokes the
//! engine, and renders the result or a user-facing message.

mod input;
mod render;
mod form;

pub use input::parse_input;
pub use render::{format_result, render_outcome, DISPLAY_DECIMALS};
pub use form::{ConversionForm, Phase};

use serde::{Deserialize, Serialize};
use tracing::debug;
use unitconv_core::ConversionError;
use unitconv_units::{Category, Unit};

/// A completed conversion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conversion {
    pub source: Unit,
    pub destination: Unit,
    pub category: Category,
    /// Parsed input value
    pub value: f64,
    /// Raw converted value
    pub result: f64,
    /// Result as shown to the user
    pub display: String,
}

/// Convert a parsed value between two named units
///
/// Fails with `ResultOutOfRange` when a finite value converts to a
/// non-finite one, so every successful result has a fixed-decimal rendering.
pub fn convert_value(source: &str, destination: &str, value: f64) -> Result<f64, ConversionError> {
    let result = unitconv_units::convert(source, destination, value)?;
    if result.is_finite() {
        Ok(result)
    } else {
        debug!(source, destination, value, "rejected: result out of range");
        Err(ConversionError::ResultOutOfRange {
            from: source.to_string(),
            to: destination.to_string(),
        })
    }
}

/// Parse raw input text and convert it between two named units
pub fn submit_conversion(
    source: &str,
    destination: &str,
    raw_input: &str,
) -> Result<Conversion, ConversionError> {
    let value = parse_input(raw_input)?;
    let (from, to) = unitconv_units::parse_conversion(source, destination)?;
    let result = convert_value(from.name(), to.name(), value)?;

    debug!(source, destination, value, result, "conversion submitted");

    Ok(Conversion {
        source: from,
        destination: to,
        category: from.category(),
        value,
        result,
        display: format_result(result),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_conversion() {
        let c = submit_conversion("Inch", "Centimeter", " 1 ").unwrap();
        assert_eq!(c.source.name(), "Inch");
        assert_eq!(c.destination.name(), "Centimeter");
        assert_eq!(c.category, Category::Length);
        assert_eq!(c.value, 1.0);
        assert_eq!(c.result, 2.54);
        assert_eq!(c.display, "2.5400");
    }

    #[test]
    fn test_input_checked_before_units() {
        // Parse errors win even when the units are incompatible
        assert_eq!(
            submit_conversion("Inch", "Kilogram", ""),
            Err(ConversionError::EmptyInput)
        );
        assert!(matches!(
            submit_conversion("Inch", "Kilogram", "abc"),
            Err(ConversionError::InvalidNumberFormat(_))
        ));
        assert_eq!(
            submit_conversion("Inch", "Kilogram", "5"),
            Err(ConversionError::incompatible("Inch", "Kilogram"))
        );
    }

    #[test]
    fn test_overflowing_result_rejected() {
        let expected = ConversionError::ResultOutOfRange {
            from: "Kilometer".to_string(),
            to: "Centimeter".to_string(),
        };
        assert_eq!(submit_conversion("Kilometer", "Centimeter", "1e304"), Err(expected));
        assert!(matches!(
            submit_conversion("Mile", "Centimeter", "1.7e308"),
            Err(ConversionError::ResultOutOfRange { .. })
        ));
        assert!(matches!(
            convert_value("Kilometer", "Centimeter", -1e304),
            Err(ConversionError::ResultOutOfRange { .. })
        ));
    }

    #[test]
    fn test_large_finite_result_round_trips_through_json() {
        let c = submit_conversion("Kilometer", "Centimeter", "1e300").unwrap();
        let json = serde_json::to_string(&c).unwrap();
        let back: Conversion = serde_json::from_str(&json).unwrap();
        assert!(back.result.is_finite());
        assert_eq!(back.display, c.display);
        assert_eq!(back.source, c.source);
    }

    #[test]
    fn test_conversion_serializes_unit_names() {
        let c = submit_conversion("Kilogram", "Pound", "1").unwrap();
        let json = serde_json::to_value(&c).unwrap();
        assert_eq!(json["source"], "Kilogram");
        assert_eq!(json["destination"], "Pound");
        assert_eq!(json["category"], "weight");
        assert_eq!(json["display"], "2.2046");
    }
}
