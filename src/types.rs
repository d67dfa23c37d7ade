//! Domain types for unit-converter.

use serde::Serialize;

use crate::convert::{self, Converter};

/// Fixed decimal digits used when a domain does not override them.
pub const DEFAULT_PRECISION: usize = 2;

// ============================================================================
// ENUMS
// ============================================================================

/// Which of a converter's two formulas is active.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// A → B, e.g. kilograms to pounds.
    #[default]
    Forward,
    /// B → A, e.g. pounds to kilograms.
    Backward,
}

/// A unit domain, one per tab.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Domain {
    #[default]
    Weight,
    Distance,
    Temperature,
}

/// Output format for one-shot CLI conversions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Human,
    Json,
}

// ============================================================================
// STRUCTS
// ============================================================================

/// Everything that parameterizes a conversion form for one domain.
#[derive(Debug, Clone, Copy)]
pub struct FormConfig {
    /// Label of the forward direction button, e.g. "Kilograms → Pounds".
    pub forward_label: &'static str,
    /// Label of the backward direction button.
    pub backward_label: &'static str,
    pub converter: Converter,
    /// Fixed decimal digits in formatted results.
    pub precision: usize,
}

/// Outcome of a one-shot conversion, as printed by `convert`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConversionReport {
    pub domain: Domain,
    pub direction: Direction,
    /// Label of the active direction.
    pub label: String,
    pub input_unit: String,
    pub output_unit: String,
    /// Formatted single result. None when the single input was empty.
    pub single: Option<String>,
    /// Joined list results. None when the list input was empty.
    pub array: Option<String>,
}

// ============================================================================
// DOMAIN BINDINGS
// ============================================================================

impl Domain {
    /// All domains, in tab order.
    pub const ALL: [Domain; 3] = [Domain::Weight, Domain::Distance, Domain::Temperature];

    /// Form configuration for this domain.
    pub fn form_config(self) -> FormConfig {
        match self {
            Domain::Weight => FormConfig {
                forward_label: "Kilograms → Pounds",
                backward_label: "Pounds → Kilograms",
                converter: convert::WEIGHT,
                precision: DEFAULT_PRECISION,
            },
            Domain::Distance => FormConfig {
                forward_label: "Kilometers → Miles",
                backward_label: "Miles → Kilometers",
                converter: convert::DISTANCE,
                precision: DEFAULT_PRECISION,
            },
            Domain::Temperature => FormConfig {
                forward_label: "Celsius → Fahrenheit",
                backward_label: "Fahrenheit → Celsius",
                converter: convert::TEMPERATURE,
                precision: 1,
            },
        }
    }

    /// Tab caption.
    pub fn title(self) -> &'static str {
        match self {
            Domain::Weight => "Weight",
            Domain::Distance => "Distance",
            Domain::Temperature => "Temperature",
        }
    }

    /// Position in [`Domain::ALL`].
    pub fn index(self) -> usize {
        match self {
            Domain::Weight => 0,
            Domain::Distance => 1,
            Domain::Temperature => 2,
        }
    }

    /// Next tab, wrapping around.
    pub fn next(self) -> Domain {
        Domain::ALL[(self.index() + 1) % Domain::ALL.len()]
    }

    /// Previous tab, wrapping around.
    pub fn prev(self) -> Domain {
        Domain::ALL[(self.index() + Domain::ALL.len() - 1) % Domain::ALL.len()]
    }
}

impl FormConfig {
    /// Label of the button for `direction`.
    pub fn label(&self, direction: Direction) -> &'static str {
        match direction {
            Direction::Forward => self.forward_label,
            Direction::Backward => self.backward_label,
        }
    }
}

impl std::fmt::Display for Domain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.title())
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_weight_and_forward() {
        assert_eq!(Domain::default(), Domain::Weight);
        assert_eq!(Direction::default(), Direction::Forward);
    }

    #[test]
    fn only_temperature_overrides_precision() {
        assert_eq!(Domain::Weight.form_config().precision, 2);
        assert_eq!(Domain::Distance.form_config().precision, 2);
        assert_eq!(Domain::Temperature.form_config().precision, 1);
    }

    #[test]
    fn labels_follow_direction() {
        let config = Domain::Distance.form_config();
        assert_eq!(config.label(Direction::Forward), "Kilometers → Miles");
        assert_eq!(config.label(Direction::Backward), "Miles → Kilometers");
    }

    #[test]
    fn next_and_prev_wrap() {
        assert_eq!(Domain::Weight.next(), Domain::Distance);
        assert_eq!(Domain::Temperature.next(), Domain::Weight);
        assert_eq!(Domain::Weight.prev(), Domain::Temperature);
        assert_eq!(Domain::Distance.prev(), Domain::Weight);
    }

    #[test]
    fn index_matches_all_order() {
        for (i, domain) in Domain::ALL.iter().enumerate() {
            assert_eq!(domain.index(), i);
        }
    }

    #[test]
    fn domain_serializes_lowercase() {
        let json = serde_json::to_string(&Domain::Temperature).unwrap();
        assert_eq!(json, "\"temperature\"");
        let json = serde_json::to_string(&Direction::Backward).unwrap();
        assert_eq!(json, "\"backward\"");
    }
}
