//! Conversion formulas and the converter pairing them.
//!
//! Pure functions — f64 in, f64 out. No range checks: a temperature
//! below absolute zero converts like any other number, and NaN stays NaN.

use crate::types::Direction;

/// Pounds per kilogram.
pub const LB_PER_KG: f64 = 2.20462;

/// Miles per kilometer.
pub const MILES_PER_KM: f64 = 0.621371;

// ============================================================================
// FORMULAS
// ============================================================================

pub fn kg_to_lb(kg: f64) -> f64 {
    kg * LB_PER_KG
}

pub fn lb_to_kg(lb: f64) -> f64 {
    lb / LB_PER_KG
}

pub fn km_to_miles(km: f64) -> f64 {
    km * MILES_PER_KM
}

pub fn miles_to_km(miles: f64) -> f64 {
    miles / MILES_PER_KM
}

pub fn celsius_to_fahrenheit(celsius: f64) -> f64 {
    celsius * 9.0 / 5.0 + 32.0
}

pub fn fahrenheit_to_celsius(fahrenheit: f64) -> f64 {
    (fahrenheit - 32.0) * 5.0 / 9.0
}

// ============================================================================
// CONVERTER
// ============================================================================

/// A unary numeric conversion.
pub type ConversionFn = fn(f64) -> f64;

/// Forward/backward formula pair for one unit domain.
///
/// Stateless and `Copy`, so every form of a domain can hold its own copy.
#[derive(Clone, Copy)]
pub struct Converter {
    forward: ConversionFn,
    backward: ConversionFn,
}

impl Converter {
    pub const fn new(forward: ConversionFn, backward: ConversionFn) -> Self {
        Converter { forward, backward }
    }

    /// The function active for `direction`.
    pub fn select(&self, direction: Direction) -> ConversionFn {
        match direction {
            Direction::Forward => self.forward,
            Direction::Backward => self.backward,
        }
    }

    pub fn apply(&self, direction: Direction, value: f64) -> f64 {
        (self.select(direction))(value)
    }
}

impl std::fmt::Debug for Converter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Converter").finish_non_exhaustive()
    }
}

/// Kilograms ⇄ pounds.
pub const WEIGHT: Converter = Converter::new(kg_to_lb, lb_to_kg);

/// Kilometers ⇄ miles.
pub const DISTANCE: Converter = Converter::new(km_to_miles, miles_to_km);

/// Celsius ⇄ Fahrenheit.
pub const TEMPERATURE: Converter = Converter::new(celsius_to_fahrenheit, fahrenheit_to_celsius);

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const TOLERANCE: f64 = 1e-4;

    fn samples() -> Vec<f64> {
        vec![
            -1.0e6, -459.67, -273.15, -40.0, -1.5, 0.0, 1e-9, 0.5, 1.0, 32.0, 100.0, 212.0,
            12345.678, 9.99e7,
        ]
    }

    fn assert_close(actual: f64, expected: f64) {
        let scale = expected.abs().max(1.0);
        assert!(
            (actual - expected).abs() <= TOLERANCE * scale,
            "expected {} ≈ {}",
            actual,
            expected
        );
    }

    #[test]
    fn weight_forward_one_kg() {
        assert_close(WEIGHT.apply(Direction::Forward, 1.0), 2.20462);
    }

    #[test]
    fn weight_backward_is_one_kg() {
        assert_close(WEIGHT.apply(Direction::Backward, 2.20462), 1.0);
    }

    #[test]
    fn distance_forward_one_km() {
        assert_close(DISTANCE.apply(Direction::Forward, 1.0), 0.621371);
    }

    #[test]
    fn distance_backward_is_one_km() {
        assert_close(DISTANCE.apply(Direction::Backward, 0.621371), 1.0);
    }

    #[test]
    fn temperature_fixed_points() {
        assert_close(TEMPERATURE.apply(Direction::Forward, 0.0), 32.0);
        assert_close(TEMPERATURE.apply(Direction::Forward, 100.0), 212.0);
        assert_close(TEMPERATURE.apply(Direction::Backward, 32.0), 0.0);
        assert_close(TEMPERATURE.apply(Direction::Backward, 212.0), 100.0);
    }

    #[test]
    fn minus_forty_is_the_same_in_both_scales() {
        assert_close(celsius_to_fahrenheit(-40.0), -40.0);
        assert_close(fahrenheit_to_celsius(-40.0), -40.0);
    }

    #[test]
    fn below_absolute_zero_is_accepted() {
        assert_close(celsius_to_fahrenheit(-500.0), -868.0);
    }

    #[test]
    fn backward_inverts_forward_for_every_domain() {
        for converter in [WEIGHT, DISTANCE, TEMPERATURE] {
            for x in samples() {
                let there = converter.apply(Direction::Forward, x);
                let back = converter.apply(Direction::Backward, there);
                assert_close(back, x);
            }
        }
    }

    #[test]
    fn nan_propagates() {
        for converter in [WEIGHT, DISTANCE, TEMPERATURE] {
            assert!(converter.apply(Direction::Forward, f64::NAN).is_nan());
            assert!(converter.apply(Direction::Backward, f64::NAN).is_nan());
        }
    }

    #[test]
    fn select_returns_matching_function() {
        let forward = WEIGHT.select(Direction::Forward);
        let backward = WEIGHT.select(Direction::Backward);
        assert_eq!(forward(10.0), kg_to_lb(10.0));
        assert_eq!(backward(10.0), lb_to_kg(10.0));
    }

    proptest! {
        #[test]
        fn round_trip_holds_across_magnitudes(x in -1.0e12f64..1.0e12) {
            for converter in [WEIGHT, DISTANCE, TEMPERATURE] {
                let back = converter.apply(
                    Direction::Backward,
                    converter.apply(Direction::Forward, x),
                );
                prop_assert!(
                    (back - x).abs() <= TOLERANCE * x.abs().max(1.0),
                    "{:?}: {} came back as {}", converter, x, back
                );
            }
        }
    }
}
