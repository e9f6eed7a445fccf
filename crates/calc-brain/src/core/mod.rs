//! Core calculator brain
//!
//! The brain itself never fails. [`BrainError`] only covers building
//! operation tables and loading configuration.

pub mod brain;
pub mod config;
pub mod float_repr;
pub mod input;
pub mod operation;
pub mod table;
pub mod tape;

pub use brain::{BrainState, CalculatorBrain, PendingState};
pub use config::BrainConfig;
pub use input::Input;
pub use operation::{Operation, OperationKind};
pub use table::OperationTable;
pub use tape::{Tape, TapeEntry};

use thiserror::Error;

/// Result type for table and configuration operations
pub type BrainResult<T> = Result<T, BrainError>;

/// Errors raised while assembling an operation table
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BrainError {
    /// Symbols must contain at least one character
    #[error("Symbol must not be empty")]
    EmptySymbol,

    /// Symbol already bound
    #[error("Symbol already defined: {0}")]
    DuplicateSymbol(String),

    /// Symbol not bound
    #[error("Unknown symbol: {0}")]
    UnknownSymbol(String),

    /// Constants must be finite
    #[error("Constant {symbol} must be finite, got {value}")]
    InvalidConstant {
        /// Offending symbol
        symbol: String,
        /// Offending value
        value: f64,
    },

    /// Configuration could not be parsed
    #[error("Invalid configuration: {0}")]
    Config(String),
}
