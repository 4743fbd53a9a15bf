//! Unit representation with conversion factors
//!
//! A `Unit` carries its category in its variant, so a unit can never be
//! looked up in the wrong factor table.

use std::fmt;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use crate::Category;

/// Length units, converted through centimeters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LengthUnit {
    Inch,
    Foot,
    Yard,
    Mile,
    Centimeter,
    Kilometer,
}

impl LengthUnit {
    pub const ALL: [LengthUnit; 6] = [
        LengthUnit::Inch,
        LengthUnit::Foot,
        LengthUnit::Yard,
        LengthUnit::Mile,
        LengthUnit::Centimeter,
        LengthUnit::Kilometer,
    ];

    /// Hub unit for length
    pub const HUB: LengthUnit = LengthUnit::Centimeter;

    /// Centimeters in one of this unit
    pub const fn centimeters(self) -> f64 {
        match self {
            LengthUnit::Inch => 2.54,
            LengthUnit::Foot => 30.48,
            LengthUnit::Yard => 91.44,
            // 1.60934 km, not the international 1609.344 m
            LengthUnit::Mile => 160934.0,
            LengthUnit::Centimeter => 1.0,
            LengthUnit::Kilometer => 100000.0,
        }
    }

    pub fn to_centimeters(self, value: f64) -> f64 {
        value * self.centimeters()
    }

    pub fn from_centimeters(self, centimeters: f64) -> f64 {
        centimeters / self.centimeters()
    }

    pub const fn name(self) -> &'static str {
        match self {
            LengthUnit::Inch => "Inch",
            LengthUnit::Foot => "Foot",
            LengthUnit::Yard => "Yard",
            LengthUnit::Mile => "Mile",
            LengthUnit::Centimeter => "Centimeter",
            LengthUnit::Kilometer => "Kilometer",
        }
    }

    pub const fn symbol(self) -> &'static str {
        match self {
            LengthUnit::Inch => "in",
            LengthUnit::Foot => "ft",
            LengthUnit::Yard => "yd",
            LengthUnit::Mile => "mi",
            LengthUnit::Centimeter => "cm",
            LengthUnit::Kilometer => "km",
        }
    }
}

/// Weight units, converted through kilograms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WeightUnit {
    Pound,
    Ounce,
    Ton,
    Gram,
    Kilogram,
}

impl WeightUnit {
    pub const ALL: [WeightUnit; 5] = [
        WeightUnit::Pound,
        WeightUnit::Ounce,
        WeightUnit::Ton,
        WeightUnit::Gram,
        WeightUnit::Kilogram,
    ];

    /// Hub unit for weight
    pub const HUB: WeightUnit = WeightUnit::Kilogram;

    /// Kilograms in one of this unit
    pub const fn kilograms(self) -> f64 {
        match self {
            WeightUnit::Pound => 0.453592,
            WeightUnit::Ounce => 0.0283495,
            // US short ton
            WeightUnit::Ton => 907.185,
            WeightUnit::Gram => 0.001,
            WeightUnit::Kilogram => 1.0,
        }
    }

    pub fn to_kilograms(self, value: f64) -> f64 {
        value * self.kilograms()
    }

    pub fn from_kilograms(self, kilograms: f64) -> f64 {
        match self {
            // Exact integer reciprocal; x / 0.001 can land one ulp away.
            WeightUnit::Gram => kilograms * 1000.0,
            _ => kilograms / self.kilograms(),
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            WeightUnit::Pound => "Pound",
            WeightUnit::Ounce => "Ounce",
            WeightUnit::Ton => "Ton",
            WeightUnit::Gram => "Gram",
            WeightUnit::Kilogram => "Kilogram",
        }
    }

    pub const fn symbol(self) -> &'static str {
        match self {
            WeightUnit::Pound => "lb",
            WeightUnit::Ounce => "oz",
            WeightUnit::Ton => "ton",
            WeightUnit::Gram => "g",
            WeightUnit::Kilogram => "kg",
        }
    }
}

/// Affine mapping between a temperature unit and Celsius
#[derive(Clone, Copy)]
pub struct TemperatureFormula {
    pub to_celsius: fn(f64) -> f64,
    pub from_celsius: fn(f64) -> f64,
}

impl fmt::Debug for TemperatureFormula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TemperatureFormula").finish_non_exhaustive()
    }
}

/// Temperature units, converted through Celsius
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemperatureUnit {
    Celsius,
    Fahrenheit,
    Kelvin,
}

impl TemperatureUnit {
    pub const ALL: [TemperatureUnit; 3] = [
        TemperatureUnit::Celsius,
        TemperatureUnit::Fahrenheit,
        TemperatureUnit::Kelvin,
    ];

    /// Hub unit for temperature
    pub const HUB: TemperatureUnit = TemperatureUnit::Celsius;

    pub fn formula(self) -> TemperatureFormula {
        match self {
            TemperatureUnit::Celsius => TemperatureFormula {
                to_celsius: |c| c,
                from_celsius: |c| c,
            },
            TemperatureUnit::Fahrenheit => TemperatureFormula {
                to_celsius: |f| (f - 32.0) / 1.8,
                from_celsius: |c| c * 1.8 + 32.0,
            },
            TemperatureUnit::Kelvin => TemperatureFormula {
                to_celsius: |k| k - 273.15,
                from_celsius: |c| c + 273.15,
            },
        }
    }

    pub fn to_celsius(self, value: f64) -> f64 {
        (self.formula().to_celsius)(value)
    }

    pub fn from_celsius(self, celsius: f64) -> f64 {
        (self.formula().from_celsius)(celsius)
    }

    pub const fn name(self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "Celsius",
            TemperatureUnit::Fahrenheit => "Fahrenheit",
            TemperatureUnit::Kelvin => "Kelvin",
        }
    }

    pub const fn symbol(self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "°C",
            TemperatureUnit::Fahrenheit => "°F",
            TemperatureUnit::Kelvin => "K",
        }
    }
}

/// A unit of measurement, tagged by its category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Unit {
    Length(LengthUnit),
    Weight(WeightUnit),
    Temperature(TemperatureUnit),
}

impl Unit {
    /// Every unit, in selector display order
    pub const ALL: [Unit; 14] = [
        Unit::Length(LengthUnit::Inch),
        Unit::Length(LengthUnit::Foot),
        Unit::Length(LengthUnit::Yard),
        Unit::Length(LengthUnit::Mile),
        Unit::Length(LengthUnit::Centimeter),
        Unit::Length(LengthUnit::Kilometer),
        Unit::Weight(WeightUnit::Pound),
        Unit::Weight(WeightUnit::Ounce),
        Unit::Weight(WeightUnit::Ton),
        Unit::Weight(WeightUnit::Gram),
        Unit::Weight(WeightUnit::Kilogram),
        Unit::Temperature(TemperatureUnit::Celsius),
        Unit::Temperature(TemperatureUnit::Fahrenheit),
        Unit::Temperature(TemperatureUnit::Kelvin),
    ];

    pub const fn category(&self) -> Category {
        match self {
            Unit::Length(_) => Category::Length,
            Unit::Weight(_) => Category::Weight,
            Unit::Temperature(_) => Category::Temperature,
        }
    }

    /// Display name, as shown in the unit selectors
    pub const fn name(&self) -> &'static str {
        match self {
            Unit::Length(u) => u.name(),
            Unit::Weight(u) => u.name(),
            Unit::Temperature(u) => u.name(),
        }
    }

    pub const fn symbol(&self) -> &'static str {
        match self {
            Unit::Length(u) => u.symbol(),
            Unit::Weight(u) => u.symbol(),
            Unit::Temperature(u) => u.symbol(),
        }
    }

    /// Check if two units can be converted into each other
    pub fn is_compatible(&self, other: &Unit) -> bool {
        self.category() == other.category()
    }

    /// Check if this is the hub unit of its category
    pub fn is_hub(&self) -> bool {
        self.category().hub() == Some(*self)
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl From<LengthUnit> for Unit {
    fn from(u: LengthUnit) -> Self {
        Unit::Length(u)
    }
}

impl From<WeightUnit> for Unit {
    fn from(u: WeightUnit) -> Self {
        Unit::Weight(u)
    }
}

impl From<TemperatureUnit> for Unit {
    fn from(u: TemperatureUnit) -> Self {
        Unit::Temperature(u)
    }
}

// Units travel on the wire as their display name.
impl Serialize for Unit {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for Unit {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        crate::parse_unit(&name)
            .ok_or_else(|| serde::de::Error::custom(format!("unknown unit: {}", name)))
    }
}
