//! Unit name parsing, classification and category validation

use unitconv_core::ConversionError;
use crate::{Category, Unit};
use crate::units::UNITS;

/// Parse a display name ("Inch", "Kelvin", ...) into a Unit
pub fn parse_unit(name: &str) -> Option<Unit> {
    UNITS.get(name)
}

/// Classify a unit name into its category
///
/// Total: unknown names come back as `Category::Unrecognized` instead of
/// failing, so two classifications can always be compared.
pub fn classify(name: &str) -> Category {
    parse_unit(name)
        .map(|u| u.category())
        .unwrap_or(Category::Unrecognized)
}

/// Check that two unit names share a recognized category
///
/// Symmetric in its arguments. Returns the shared category.
pub fn validate(source: &str, destination: &str) -> Result<Category, ConversionError> {
    let from = classify(source);
    let to = classify(destination);

    if from.is_recognized() && from == to {
        Ok(from)
    } else {
        Err(ConversionError::incompatible(source, destination))
    }
}

/// Boolean form of [`validate`]
pub fn is_compatible(source: &str, destination: &str) -> bool {
    validate(source, destination).is_ok()
}

/// Resolve both unit names, failing unless they share a category
pub fn parse_conversion(source: &str, destination: &str) -> Result<(Unit, Unit), ConversionError> {
    match (parse_unit(source), parse_unit(destination)) {
        (Some(from), Some(to)) if from.is_compatible(&to) => Ok((from, to)),
        _ => Err(ConversionError::incompatible(source, destination)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify() {
        assert_eq!(classify("Inch"), Category::Length);
        assert_eq!(classify("Ton"), Category::Weight);
        assert_eq!(classify("Fahrenheit"), Category::Temperature);
        assert_eq!(classify("Furlong"), Category::Unrecognized);
        assert_eq!(classify(""), Category::Unrecognized);
        assert_eq!(classify("inch"), Category::Unrecognized);
    }

    #[test]
    fn test_validate_same_category() {
        assert_eq!(validate("Mile", "Centimeter"), Ok(Category::Length));
        assert_eq!(validate("Gram", "Pound"), Ok(Category::Weight));
        assert_eq!(validate("Kelvin", "Kelvin"), Ok(Category::Temperature));
    }

    #[test]
    fn test_validate_is_symmetric() {
        for a in UNITS.all() {
            for b in UNITS.all() {
                assert_eq!(
                    is_compatible(a.name(), b.name()),
                    is_compatible(b.name(), a.name()),
                    "{} / {}", a, b
                );
            }
        }
    }

    #[test]
    fn test_validate_rejects_mixed_categories() {
        let err = validate("Inch", "Kilogram").unwrap_err();
        assert_eq!(err, ConversionError::incompatible("Inch", "Kilogram"));
        assert!(validate("Celsius", "Foot").is_err());
    }

    #[test]
    fn test_validate_rejects_unrecognized() {
        assert!(!is_compatible("Furlong", "Furlong"));
        assert!(!is_compatible("Inch", "Furlong"));
        assert!(!is_compatible("Furlong", "Inch"));
    }

    #[test]
    fn test_parse_conversion() {
        let (from, to) = parse_conversion("Pound", "Ounce").unwrap();
        assert_eq!(from.name(), "Pound");
        assert_eq!(to.name(), "Ounce");
        assert!(parse_conversion("Pound", "Inch").is_err());
    }
}
