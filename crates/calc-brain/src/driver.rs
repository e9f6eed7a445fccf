//! Session driver
//!
//! Couples a [`CalculatorBrain`] with a [`Tape`] and replays complete
//! tokens through it. Tokens must already be whole operands or whole
//! symbols; assembling digits into numbers is the caller's job.

use crate::core::{BrainConfig, BrainResult, CalculatorBrain, Input, OperationTable, Tape};

/// A calculator session: one brain, one tape
#[derive(Debug, Clone, Default)]
pub struct Session {
    brain: CalculatorBrain,
    tape: Tape,
    display: Option<f64>,
}

impl Session {
    /// Creates a session with the standard table
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a session from configuration
    pub fn from_config(config: &BrainConfig) -> BrainResult<Self> {
        let table = OperationTable::from_config(config)?;
        Ok(Self::with_parts(
            CalculatorBrain::with_table(table),
            Tape::with_capacity(config.tape_capacity),
        ))
    }

    /// Creates a session around an existing brain and tape
    #[must_use]
    pub const fn with_parts(brain: CalculatorBrain, tape: Tape) -> Self {
        Self {
            brain,
            tape,
            display: None,
        }
    }

    /// Applies one input and returns the brain's result
    pub fn feed(&mut self, input: Input) -> Option<f64> {
        input.apply(&mut self.brain);
        let result = self.brain.result();
        if result.is_some() {
            self.display = result;
        }
        self.tape.record(input, result);
        result
    }

    /// Classifies and applies one token
    pub fn feed_token(&mut self, token: &str) -> Option<f64> {
        self.feed(Input::parse(token))
    }

    /// Applies tokens in order and returns the final result
    pub fn feed_all<I, S>(&mut self, tokens: I) -> Option<f64>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for token in tokens {
            self.feed_token(token.as_ref());
        }
        self.brain.result()
    }

    /// Returns the brain's current result
    #[must_use]
    pub const fn result(&self) -> Option<f64> {
        self.brain.result()
    }

    /// Returns the last present result seen
    ///
    /// Absent results leave this unchanged.
    #[must_use]
    pub const fn display(&self) -> Option<f64> {
        self.display
    }

    /// Returns the underlying brain
    #[must_use]
    pub const fn brain(&self) -> &CalculatorBrain {
        &self.brain
    }

    /// Returns the tape
    #[must_use]
    pub const fn tape(&self) -> &Tape {
        &self.tape
    }
}
