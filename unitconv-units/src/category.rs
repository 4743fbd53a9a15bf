//! Unit categories
//!
//! Conversion is only defined between two units of the same category.
//! `Unrecognized` is the classifier's answer for names outside the unit set,
//! so category comparison stays total.

use std::fmt;
use serde::{Deserialize, Serialize};
use crate::unit::{LengthUnit, TemperatureUnit, Unit, WeightUnit};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Length,
    Weight,
    Temperature,
    Unrecognized,
}

impl Category {
    /// The three convertible categories, in display order
    pub const ALL: [Category; 3] = [Category::Length, Category::Weight, Category::Temperature];

    pub fn is_recognized(&self) -> bool {
        !matches!(self, Category::Unrecognized)
    }

    /// Hub unit every conversion in this category is routed through
    pub fn hub(&self) -> Option<Unit> {
        match self {
            Category::Length => Some(Unit::Length(LengthUnit::HUB)),
            Category::Weight => Some(Unit::Weight(WeightUnit::HUB)),
            Category::Temperature => Some(Unit::Temperature(TemperatureUnit::HUB)),
            Category::Unrecognized => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Category::Length => "length",
            Category::Weight => "weight",
            Category::Temperature => "temperature",
            Category::Unrecognized => "unrecognized",
        }
    }

    /// Look up a convertible category by name (case-insensitive)
    pub fn from_name(name: &str) -> Option<Category> {
        let name = name.trim().to_lowercase();
        Category::ALL.into_iter().find(|c| c.name() == name)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
