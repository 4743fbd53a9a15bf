//! Unit registry - the fixed, ordered set of selectable units

use std::collections::HashMap;
use std::sync::LazyLock;
use crate::{Category, Unit};

/// Global unit registry
pub static UNITS: LazyLock<UnitRegistry> = LazyLock::new(UnitRegistry::new);

/// Registry of all known units
pub struct UnitRegistry {
    units: Vec<Unit>,
    by_name: HashMap<&'static str, Unit>,
}

impl UnitRegistry {
    pub fn new() -> Self {
        let mut registry = UnitRegistry {
            units: Vec::with_capacity(Unit::ALL.len()),
            by_name: HashMap::new(),
        };
        for unit in Unit::ALL {
            registry.register(unit);
        }
        registry
    }

    /// Get a unit by its display name (case-sensitive)
    pub fn get(&self, name: &str) -> Option<Unit> {
        self.by_name.get(name).copied()
    }

    /// All units in display order
    pub fn all(&self) -> &[Unit] {
        &self.units
    }

    /// Get all units in a category, in display order
    pub fn by_category(&self, category: Category) -> Vec<Unit> {
        self.units.iter()
            .filter(|u| u.category() == category)
            .copied()
            .collect()
    }

    /// All display names, in display order
    pub fn names(&self) -> Vec<&'static str> {
        self.units.iter().map(|u| u.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    fn register(&mut self, unit: Unit) {
        self.units.push(unit);
        self.by_name.insert(unit.name(), unit);
    }
}

impl Default for UnitRegistry {
    fn default() -> Self {
        Self::new()
    }
}
