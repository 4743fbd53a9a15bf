//! Conversion form
//!
//! Holds what the user has selected and typed, and what the result label
//! currently shows. Each submission runs parse, convert and render once and
//! leaves the form waiting for the next input.

use unitconv_core::ConversionError;
use unitconv_units::UNITS;
use crate::{convert_value, parse_input, render_outcome};

/// What the result label is currently showing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Nothing submitted since the last edit
    Idle,
    /// A converted value
    Result,
    /// An error message
    Error,
}

/// Form state: two unit selectors, an input field and a result label
#[derive(Debug, Clone)]
pub struct ConversionForm {
    source: &'static str,
    destination: &'static str,
    input: String,
    result: String,
    last_value: Option<f64>,
    phase: Phase,
}

impl ConversionForm {
    /// Both selectors start on the first unit in the list
    pub fn new() -> Self {
        let first = UNITS.all().first().map(|u| u.name()).unwrap_or_default();
        Self {
            source: first,
            destination: first,
            input: String::new(),
            result: String::new(),
            last_value: None,
            phase: Phase::Idle,
        }
    }

    /// Units offered by both selectors, in display order
    pub fn units(&self) -> Vec<&'static str> {
        UNITS.names()
    }

    /// Select the source unit. Names outside the selector list are ignored.
    pub fn select_source(&mut self, name: &str) -> bool {
        match UNITS.get(name) {
            Some(unit) => {
                self.source = unit.name();
                self.phase = Phase::Idle;
                true
            }
            None => false,
        }
    }

    /// Select the destination unit. Names outside the selector list are ignored.
    pub fn select_destination(&mut self, name: &str) -> bool {
        match UNITS.get(name) {
            Some(unit) => {
                self.destination = unit.name();
                self.phase = Phase::Idle;
                true
            }
            None => false,
        }
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
        self.phase = Phase::Idle;
    }

    /// Run the conversion and update the result label
    ///
    /// The last successfully converted value survives failed submissions.
    pub fn submit(&mut self) -> Result<f64, ConversionError> {
        let outcome = parse_input(&self.input)
            .and_then(|value| convert_value(self.source, self.destination, value));

        self.result = render_outcome(&outcome);
        match outcome {
            Ok(value) => {
                self.last_value = Some(value);
                self.phase = Phase::Result;
            }
            Err(_) => self.phase = Phase::Error,
        }
        outcome
    }

    pub fn source(&self) -> &'static str {
        self.source
    }

    pub fn destination(&self) -> &'static str {
        self.destination
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    /// Text currently shown in the result label
    pub fn result_text(&self) -> &str {
        &self.result
    }

    pub fn last_value(&self) -> Option<f64> {
        self.last_value
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }
}

impl Default for ConversionForm {
    fn default() -> Self {
        Self::new()
    }
}
