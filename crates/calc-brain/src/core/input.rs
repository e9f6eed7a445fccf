//! Primitive inputs fed to the brain

use crate::core::brain::CalculatorBrain;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One call into the brain
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Input {
    /// Becomes `set_operand`
    Operand(f64),
    /// Becomes `perform_operation`
    Symbol(String),
}

impl Input {
    /// Classifies a complete token
    ///
    /// Finite numbers are operands. Everything else, including `inf` and
    /// `NaN`, is passed through as a symbol.
    #[must_use]
    pub fn parse(token: &str) -> Self {
        match token.parse::<f64>() {
            Ok(value) if value.is_finite() => Self::Operand(value),
            _ => Self::Symbol(token.to_string()),
        }
    }

    /// Applies this input to a brain
    pub fn apply(&self, brain: &mut CalculatorBrain) {
        match self {
            Self::Operand(value) => brain.set_operand(*value),
            Self::Symbol(symbol) => brain.perform_operation(symbol),
        }
    }

    /// Returns true for operands
    #[must_use]
    pub const fn is_operand(&self) -> bool {
        matches!(self, Self::Operand(_))
    }
}

impl FromStr for Input {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl From<f64> for Input {
    fn from(value: f64) -> Self {
        Self::Operand(value)
    }
}

impl From<&str> for Input {
    fn from(symbol: &str) -> Self {
        Self::Symbol(symbol.to_string())
    }
}

impl fmt::Display for Input {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Operand(value) => write!(f, "{value}"),
            Self::Symbol(symbol) => f.write_str(symbol),
        }
    }
}
