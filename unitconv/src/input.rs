//! Input parsing
//!
//! Raw text from the input field becomes a number here, before the engine
//! is ever called.

use unitconv_core::ConversionError;

/// Parse the text of the input field into a value
///
/// Surrounding whitespace is ignored, as is one trailing type suffix
/// (`1d`, `2.5F`). Non-finite values (`NaN`, `inf`) are rejected along with
/// anything else that is not a plain number.
pub fn parse_input(raw: &str) -> Result<f64, ConversionError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ConversionError::EmptyInput);
    }

    match strip_type_suffix(trimmed).parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(ConversionError::InvalidNumberFormat(trimmed.to_string())),
    }
}

fn strip_type_suffix(text: &str) -> &str {
    match text.strip_suffix(['d', 'D', 'f', 'F']) {
        Some(number) if !number.is_empty() => number,
        _ => text,
    }
}
