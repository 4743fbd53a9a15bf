//! Result rendering
//!
//! Converted values are always shown with four fixed decimals.

use unitconv_core::ConversionError;

/// Decimal places shown in the result label
pub const DISPLAY_DECIMALS: usize = 4;

/// Format a converted value for display
pub fn format_result(value: f64) -> String {
    format!("{:.*}", DISPLAY_DECIMALS, value)
}

/// Text for the result label after a conversion attempt
pub fn render_outcome(outcome: &Result<f64, ConversionError>) -> String {
    match outcome {
        Ok(value) => format_result(*value),
        Err(e) => e.user_message().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_four_decimals() {
        assert_eq!(format_result(212.0), "212.0000");
        assert_eq!(format_result(2.54), "2.5400");
        assert_eq!(format_result(0.621371), "0.6214");
        assert_eq!(format_result(-40.0), "-40.0000");
    }

    #[test]
    fn test_large_values_are_not_abbreviated() {
        assert_eq!(format_result(160934.0), "160934.0000");
    }

    #[test]
    fn test_render_error() {
        let text = render_outcome(&Err(ConversionError::incompatible("Inch", "Kilogram")));
        assert_eq!(text, "Cannot convert between different categories.");
    }
}
