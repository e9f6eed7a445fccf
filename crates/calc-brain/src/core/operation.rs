//! Operation variants understood by the brain
//!
//! The set is closed: every symbol resolves to exactly one of these.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Behavior bound to a symbol in the operation table
#[derive(Debug, Clone, Copy)]
pub enum Operation {
    /// Replaces the accumulator with a fixed value
    Constant(f64),
    /// Applies a function to the accumulator in place
    Unary(fn(f64) -> f64),
    /// Captures the accumulator as first operand and waits for a second
    Binary(fn(f64, f64) -> f64),
    /// Resolves the pending binary operation
    Equals,
    /// Resets the accumulator
    Clear,
}

impl Operation {
    /// Returns the payload-free kind of this operation
    #[must_use]
    pub const fn kind(&self) -> OperationKind {
        match self {
            Self::Constant(_) => OperationKind::Constant,
            Self::Unary(_) => OperationKind::Unary,
            Self::Binary(_) => OperationKind::Binary,
            Self::Equals => OperationKind::Equals,
            Self::Clear => OperationKind::Clear,
        }
    }
}

/// Discriminant of [`Operation`], usable for listing and logging
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperationKind {
    /// Fixed value
    Constant,
    /// Single-operand function
    Unary,
    /// Two-operand function
    Binary,
    /// Resolve pending
    Equals,
    /// Reset accumulator
    Clear,
}

impl OperationKind {
    /// Returns the lowercase name of this kind
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Constant => "constant",
            Self::Unary => "unary",
            Self::Binary => "binary",
            Self::Equals => "equals",
            Self::Clear => "clear",
        }
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Unary and binary functions of the standard table
pub(crate) mod functions {
    pub(crate) fn percent(x: f64) -> f64 {
        x / 100.0
    }

    pub(crate) fn negate(x: f64) -> f64 {
        -x
    }

    pub(crate) fn square(x: f64) -> f64 {
        x * x
    }

    pub(crate) fn multiply(a: f64, b: f64) -> f64 {
        a * b
    }

    pub(crate) fn divide(a: f64, b: f64) -> f64 {
        a / b
    }

    pub(crate) fn subtract(a: f64, b: f64) -> f64 {
        a - b
    }

    pub(crate) fn add(a: f64, b: f64) -> f64 {
        a + b
    }

    /// Remainder of truncating division, sign follows the dividend
    pub(crate) fn modulo(a: f64, b: f64) -> f64 {
        a % b
    }
}

#[cfg(test)]
mod tests {
    use super::functions::*;
    use super::*;

    // ===== Operation::kind tests =====

    #[test]
    fn test_kind_of_each_variant() {
        assert_eq!(Operation::Constant(1.0).kind(), OperationKind::Constant);
        assert_eq!(Operation::Unary(negate).kind(), OperationKind::Unary);
        assert_eq!(Operation::Binary(add).kind(), OperationKind::Binary);
        assert_eq!(Operation::Equals.kind(), OperationKind::Equals);
        assert_eq!(Operation::Clear.kind(), OperationKind::Clear);
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(format!("{}", OperationKind::Binary), "binary");
        assert_eq!(OperationKind::Equals.to_string(), "equals");
    }

    #[test]
    fn test_kind_serializes_lowercase() {
        let json = serde_json::to_string(&OperationKind::Constant).unwrap();
        assert_eq!(json, "\"constant\"");
    }

    // ===== Function tests =====

    #[test]
    fn test_percent() {
        assert_eq!(percent(50.0), 0.5);
    }

    #[test]
    fn test_negate() {
        assert_eq!(negate(3.0), -3.0);
        assert_eq!(negate(-3.0), 3.0);
    }

    #[test]
    fn test_square() {
        assert_eq!(square(-4.0), 16.0);
    }

    #[test]
    fn test_subtract_order() {
        assert_eq!(subtract(10.0, 4.0), 6.0);
    }

    #[test]
    fn test_divide_by_zero_is_infinite() {
        assert_eq!(divide(8.0, 0.0), f64::INFINITY);
        assert_eq!(divide(-8.0, 0.0), f64::NEG_INFINITY);
        assert!(divide(0.0, 0.0).is_nan());
    }

    #[test]
    fn test_modulo_truncates() {
        assert_eq!(modulo(7.0, 3.0), 1.0);
        assert_eq!(modulo(-7.0, 3.0), -1.0);
        assert_eq!(modulo(7.5, 2.0), 1.5);
        assert!(modulo(1.0, 0.0).is_nan());
    }

    #[test]
    fn test_multiply() {
        assert_eq!(multiply(6.0, 7.0), 42.0);
    }
}
