//! Calculator Brain - operation-accumulator evaluator
//!
//! A small state machine that interprets a stream of operands and
//! operation symbols (constants, unary and binary functions, `=`, `C`)
//! and keeps a running result.
//!
//! # Behavior
//!
//! - Operations missing an operand are silently ignored
//! - Unknown symbols are silently ignored
//! - Division by zero and similar domain errors yield infinity or NaN
//!
//! # Example
//!
//! ```rust
//! use calc_brain::prelude::*;
//!
//! let mut brain = CalculatorBrain::new();
//! brain.set_operand(4.0);
//! brain.perform_operation("+");
//! brain.set_operand(5.0);
//! brain.perform_operation("=");
//! assert_eq!(brain.result(), Some(9.0));
//!
//! // Sessions replay whole tokens and keep a tape
//! let mut session = Session::new();
//! assert_eq!(session.feed_all(["9", "√"]), Some(3.0));
//! assert_eq!(session.tape().render(), "9 √ → 3");
//! ```

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod core;
pub mod driver;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::core::{
        BrainConfig, BrainError, BrainResult, BrainState, CalculatorBrain, Input, Operation,
        OperationKind, OperationTable, PendingState, Tape, TapeEntry,
    };
    pub use crate::driver::Session;
}
