//! The operation-accumulator state machine
//!
//! Inputs arrive as two primitive calls: [`CalculatorBrain::set_operand`]
//! and [`CalculatorBrain::perform_operation`]. Nothing here fails. Missing
//! operands and unknown symbols are ignored, and numeric domain errors
//! surface as IEEE-754 infinities or NaN.

use crate::core::operation::Operation;
use crate::core::table::OperationTable;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// A captured first operand waiting for its second
#[derive(Debug, Clone)]
struct PendingBinaryOperation {
    symbol: String,
    function: fn(f64, f64) -> f64,
    first_operand: f64,
}

impl PendingBinaryOperation {
    fn perform(&self, second_operand: f64) -> f64 {
        (self.function)(self.first_operand, second_operand)
    }
}

/// Read-only view of a pending binary operation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PendingState {
    /// Symbol that created the pending operation
    pub symbol: String,
    /// Accumulator value captured when the symbol was performed
    #[serde(with = "crate::core::float_repr")]
    pub first_operand: f64,
}

/// Serializable snapshot of the brain's state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrainState {
    /// Current accumulator
    #[serde(with = "crate::core::float_repr::option")]
    pub accumulator: Option<f64>,
    /// Pending binary operation, if any
    pub pending: Option<PendingState>,
    /// Set while a binary operation waits for `=`
    pub result_is_pending: bool,
}

/// Calculator brain
#[derive(Debug, Clone, Default)]
pub struct CalculatorBrain {
    accumulator: Option<f64>,
    pending: Option<PendingBinaryOperation>,
    result_is_pending: bool,
    operations: OperationTable,
}

impl CalculatorBrain {
    /// Creates a brain with the standard operation table
    #[must_use]
    pub fn new() -> Self {
        Self::with_table(OperationTable::standard())
    }

    /// Creates a brain with a custom operation table
    #[must_use]
    pub fn with_table(operations: OperationTable) -> Self {
        Self {
            accumulator: None,
            pending: None,
            result_is_pending: false,
            operations,
        }
    }

    /// Replaces the accumulator
    pub fn set_operand(&mut self, operand: f64) {
        trace!(operand, "set operand");
        self.accumulator = Some(operand);
    }

    /// Performs the operation bound to `symbol`
    ///
    /// Unknown symbols are a no-op.
    pub fn perform_operation(&mut self, symbol: &str) {
        let Some(operation) = self.operations.get(symbol) else {
            trace!(symbol, "unknown symbol ignored");
            return;
        };

        match operation {
            Operation::Constant(value) => self.accumulator = Some(value),
            Operation::Unary(function) => {
                let Some(value) = self.accumulator else {
                    trace!(symbol, "unary operation without operand ignored");
                    return;
                };
                self.accumulator = Some(function(value));
            }
            Operation::Binary(function) => {
                let Some(value) = self.accumulator else {
                    trace!(symbol, "binary operation without operand ignored");
                    return;
                };
                self.pending = Some(PendingBinaryOperation {
                    symbol: symbol.to_string(),
                    function,
                    first_operand: value,
                });
                self.result_is_pending = true;
                self.accumulator = None;
            }
            Operation::Equals => {
                if !self.perform_pending_binary_operation() {
                    return;
                }
            }
            // Leaves any pending binary operation in place
            Operation::Clear => self.accumulator = None,
        }

        debug!(
            symbol,
            kind = %operation.kind(),
            accumulator = ?self.accumulator,
            "performed operation"
        );
    }

    /// Returns false when there was nothing to resolve
    fn perform_pending_binary_operation(&mut self) -> bool {
        let (Some(pending), Some(second)) = (&self.pending, self.accumulator) else {
            trace!(
                pending = self.pending.is_some(),
                operand = self.accumulator.is_some(),
                "nothing to resolve"
            );
            return false;
        };

        self.accumulator = Some(pending.perform(second));
        self.pending = None;
        self.result_is_pending = false;
        true
    }

    /// Returns the current accumulator
    #[must_use]
    pub const fn result(&self) -> Option<f64> {
        self.accumulator
    }

    /// Returns true while a binary operation waits for `=`
    #[must_use]
    pub const fn is_result_pending(&self) -> bool {
        self.result_is_pending
    }

    /// Returns true if a binary operation has been captured
    #[must_use]
    pub const fn has_pending_operation(&self) -> bool {
        self.pending.is_some()
    }

    /// Returns the operation table in use
    #[must_use]
    pub const fn operations(&self) -> &OperationTable {
        &self.operations
    }

    /// Captures the current state
    #[must_use]
    pub fn snapshot(&self) -> BrainState {
        BrainState {
            accumulator: self.accumulator,
            pending: self.pending.as_ref().map(|p| PendingState {
                symbol: p.symbol.clone(),
                first_operand: p.first_operand,
            }),
            result_is_pending: self.result_is_pending,
        }
    }
}
