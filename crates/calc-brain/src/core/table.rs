//! Symbol to operation lookup
//!
//! The standard table reproduces the classic scientific keypad: two
//! constants, six unary functions, five binary functions, `=` and `C`.

use crate::core::config::BrainConfig;
use crate::core::operation::{functions, Operation, OperationKind};
use crate::core::{BrainError, BrainResult};
use std::collections::HashMap;
use std::f64::consts;

/// Immutable mapping from symbol strings to [`Operation`]s
#[derive(Debug, Clone)]
pub struct OperationTable {
    operations: HashMap<String, Operation>,
}

impl Default for OperationTable {
    fn default() -> Self {
        Self::standard()
    }
}

impl OperationTable {
    /// Creates a table with no entries
    #[must_use]
    pub fn empty() -> Self {
        Self {
            operations: HashMap::new(),
        }
    }

    /// Creates the standard keypad table
    #[must_use]
    pub fn standard() -> Self {
        let entries: [(&str, Operation); 15] = [
            ("π", Operation::Constant(consts::PI)),
            ("e", Operation::Constant(consts::E)),
            ("√", Operation::Unary(f64::sqrt)),
            ("cos", Operation::Unary(f64::cos)),
            ("sin", Operation::Unary(f64::sin)),
            ("%", Operation::Unary(functions::percent)),
            ("±", Operation::Unary(functions::negate)),
            ("x²", Operation::Unary(functions::square)),
            ("×", Operation::Binary(functions::multiply)),
            ("÷", Operation::Binary(functions::divide)),
            ("-", Operation::Binary(functions::subtract)),
            ("+", Operation::Binary(functions::add)),
            ("mod", Operation::Binary(functions::modulo)),
            ("=", Operation::Equals),
            ("C", Operation::Clear),
        ];

        Self {
            operations: entries
                .into_iter()
                .map(|(symbol, op)| (symbol.to_string(), op))
                .collect(),
        }
    }

    /// Builds the standard table adjusted by a configuration
    ///
    /// Disabled symbols are removed first, then extra constants are added.
    pub fn from_config(config: &BrainConfig) -> BrainResult<Self> {
        let mut table = Self::standard();

        for symbol in &config.disabled {
            table.remove(symbol)?;
        }

        for (symbol, value) in &config.constants {
            if !value.is_finite() {
                return Err(BrainError::InvalidConstant {
                    symbol: symbol.clone(),
                    value: *value,
                });
            }
            table.insert(symbol.clone(), Operation::Constant(*value))?;
        }

        Ok(table)
    }

    /// Adds a new symbol
    ///
    /// Existing symbols are never replaced.
    pub fn insert(&mut self, symbol: impl Into<String>, operation: Operation) -> BrainResult<()> {
        let symbol = symbol.into();
        if symbol.is_empty() {
            return Err(BrainError::EmptySymbol);
        }
        if self.operations.contains_key(&symbol) {
            return Err(BrainError::DuplicateSymbol(symbol));
        }
        self.operations.insert(symbol, operation);
        Ok(())
    }

    /// Removes a symbol, returning its operation
    pub fn remove(&mut self, symbol: &str) -> BrainResult<Operation> {
        self.operations
            .remove(symbol)
            .ok_or_else(|| BrainError::UnknownSymbol(symbol.to_string()))
    }

    /// Looks up the operation bound to `symbol`
    #[must_use]
    pub fn get(&self, symbol: &str) -> Option<Operation> {
        self.operations.get(symbol).copied()
    }

    /// Returns true if `symbol` is bound
    #[must_use]
    pub fn contains(&self, symbol: &str) -> bool {
        self.operations.contains_key(symbol)
    }

    /// Returns the number of bound symbols
    #[must_use]
    pub fn len(&self) -> usize {
        self.operations.len()
    }

    /// Returns true if no symbol is bound
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    /// Lists `(symbol, kind)` pairs sorted by symbol
    #[must_use]
    pub fn entries(&self) -> Vec<(&str, OperationKind)> {
        let mut entries: Vec<_> = self
            .operations
            .iter()
            .map(|(symbol, op)| (symbol.as_str(), op.kind()))
            .collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        entries
    }
}
