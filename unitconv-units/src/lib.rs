//! Unitconv Units - Unit classification and conversion
//!
//! Converts values between units of the same category, routing every
//! conversion through the category's hub unit.
//!
//! Categories:
//! - Length (Inch, Foot, Yard, Mile, Centimeter, Kilometer) via Centimeter
//! - Weight (Pound, Ounce, Ton, Gram, Kilogram) via Kilogram
//! - Temperature (Celsius, Fahrenheit, Kelvin) via Celsius
//!
//! The engine is pure: no state, no I/O, safe to call from any thread.

mod category;
mod unit;
mod parse;
mod convert;
mod units;

pub use category::Category;
pub use unit::{Unit, LengthUnit, WeightUnit, TemperatureUnit, TemperatureFormula};
pub use units::{UnitRegistry, UNITS};
pub use parse::{parse_unit, parse_conversion, classify, validate, is_compatible};
pub use convert::{convert, convert_units, convert_length, convert_weight, convert_temperature};
pub use unitconv_core::ConversionError;
