//! Session tape
//!
//! Bounded record of every input and the result it left behind.

use crate::core::input::Input;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// A single step on the tape
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TapeEntry {
    /// The input that was applied
    pub input: Input,
    /// The brain's result after applying it
    #[serde(with = "crate::core::float_repr::option")]
    pub result: Option<f64>,
}

impl TapeEntry {
    /// Creates a new tape entry
    #[must_use]
    pub const fn new(input: Input, result: Option<f64>) -> Self {
        Self { input, result }
    }

    /// Returns a formatted display string, e.g. `= → 9`
    #[must_use]
    pub fn display(&self) -> String {
        match self.result {
            Some(value) => format!("{} → {value}", self.input),
            None => format!("{} → none", self.input),
        }
    }
}

/// Bounded queue of tape entries, oldest first
#[derive(Debug, Clone, Serialize)]
pub struct Tape {
    entries: VecDeque<TapeEntry>,
    #[serde(skip)]
    capacity: usize,
    #[serde(skip)]
    dropped: usize,
}

impl Default for Tape {
    fn default() -> Self {
        Self::new()
    }
}

impl Tape {
    /// Default maximum tape length
    pub const DEFAULT_CAPACITY: usize = 100;

    /// Creates a tape with default capacity
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }

    /// Creates a tape holding at most `capacity` entries
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity.min(Self::DEFAULT_CAPACITY)),
            capacity,
            dropped: 0,
        }
    }

    /// Appends an entry, dropping the oldest when full
    pub fn push(&mut self, entry: TapeEntry) {
        if self.capacity == 0 {
            self.dropped += 1;
            return;
        }
        if self.entries.len() >= self.capacity {
            self.entries.pop_front();
            self.dropped += 1;
        }
        self.entries.push_back(entry);
    }

    /// Records an input and the result it produced
    pub fn record(&mut self, input: Input, result: Option<f64>) {
        self.push(TapeEntry::new(input, result));
    }

    /// Returns the number of entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the tape is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the maximum number of entries
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns how many entries were evicted since the last clear
    #[must_use]
    pub const fn dropped(&self) -> usize {
        self.dropped
    }

    /// Returns the most recent entry
    #[must_use]
    pub fn last(&self) -> Option<&TapeEntry> {
        self.entries.back()
    }

    /// Iterates entries oldest first
    pub fn iter(&self) -> impl Iterator<Item = &TapeEntry> {
        self.entries.iter()
    }

    /// Removes all entries and resets the eviction count
    pub fn clear(&mut self) {
        self.entries.clear();
        self.dropped = 0;
    }

    /// Renders the inputs followed by the final result
    ///
    /// `4 + 5 =` with a final result of 9 renders as `4 + 5 = → 9`.
    /// Only retained entries are rendered. Once older entries have been
    /// evicted the line starts with `… ` to mark the truncation.
    #[must_use]
    pub fn render(&self) -> String {
        let mut inputs: Vec<String> = Vec::with_capacity(self.entries.len() + 1);
        if self.dropped > 0 {
            inputs.push("…".to_string());
        }
        inputs.extend(self.entries.iter().map(|e| e.input.to_string()));
        match self.last() {
            Some(TapeEntry {
                result: Some(value),
                ..
            }) => format!("{} → {value}", inputs.join(" ")),
            Some(_) => format!("{} → none", inputs.join(" ")),
            None => String::new(),
        }
    }
}
