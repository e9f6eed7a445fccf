//! Token runner
//!
//! Feeds tokens through a [`Session`] and renders the outcome.

use crate::config::{CliConfig, OutputFormat};
use crate::error::CliResult;
use calc_brain::core::{BrainState, OperationKind, TapeEntry};
use calc_brain::driver::Session;
use serde::Serialize;
use std::io::{BufRead, Write};
use tracing::{debug, info};

/// JSON report of a finished run
#[derive(Debug, Serialize)]
pub struct RunReport<'a> {
    /// Final result
    #[serde(serialize_with = "calc_brain::core::float_repr::option::serialize")]
    pub result: Option<f64>,
    /// Final brain state
    pub state: BrainState,
    /// Recorded steps, oldest first
    pub tape: Vec<&'a TapeEntry>,
}

/// Runs token streams against a configured session
#[derive(Debug)]
pub struct TokenRunner {
    config: CliConfig,
    session: Session,
}

impl TokenRunner {
    /// Creates a runner, building the session from the brain configuration
    pub fn new(config: CliConfig) -> CliResult<Self> {
        let session = Session::from_config(&config.brain)?;
        Ok(Self { config, session })
    }

    /// Returns the session
    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// Feeds `tokens` in order, optionally writing each step
    ///
    /// Steps are only written for text output outside quiet mode.
    pub fn feed<I, S, W>(&mut self, tokens: I, trace: bool, out: &mut W) -> CliResult<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
        W: Write,
    {
        let trace = trace
            && self.config.format == OutputFormat::Text
            && !self.config.verbosity.is_quiet();
        let mut count = 0usize;
        for token in tokens {
            let token = token.as_ref();
            let result = self.session.feed_token(token);
            count += 1;
            if trace {
                writeln!(out, "{token} → {}", format_value(result))?;
            }
        }
        info!(tokens = count, "fed tokens");
        Ok(())
    }

    /// Reads whitespace-separated tokens from `reader` and feeds them
    pub fn feed_reader<R, W>(&mut self, reader: R, trace: bool, out: &mut W) -> CliResult<()>
    where
        R: BufRead,
        W: Write,
    {
        for line in reader.lines() {
            let line = line?;
            debug!(line = %line, "read line");
            self.feed(line.split_whitespace(), trace, out)?;
        }
        Ok(())
    }

    /// Writes the final result in the configured format
    pub fn finish<W: Write>(&self, out: &mut W) -> CliResult<()> {
        match self.config.format {
            OutputFormat::Text => {
                writeln!(out, "{}", format_value(self.session.result()))?;
            }
            OutputFormat::Json => {
                let report = RunReport {
                    result: self.session.result(),
                    state: self.session.brain().snapshot(),
                    tape: self.session.tape().iter().collect(),
                };
                serde_json::to_writer_pretty(&mut *out, &report)?;
                writeln!(out)?;
            }
        }
        Ok(())
    }

    /// Writes the active operation table
    pub fn list_symbols<W: Write>(&self, out: &mut W) -> CliResult<()> {
        let entries = self.session.brain().operations().entries();
        match self.config.format {
            OutputFormat::Text => {
                for (symbol, kind) in entries {
                    writeln!(out, "{symbol}\t{kind}")?;
                }
            }
            OutputFormat::Json => {
                #[derive(Serialize)]
                struct SymbolEntry<'a> {
                    symbol: &'a str,
                    kind: OperationKind,
                }

                let entries: Vec<SymbolEntry<'_>> = entries
                    .into_iter()
                    .map(|(symbol, kind)| SymbolEntry { symbol, kind })
                    .collect();
                serde_json::to_writer_pretty(&mut *out, &entries)?;
                writeln!(out)?;
            }
        }
        Ok(())
    }
}

/// Renders an optional result, `none` when absent
#[must_use]
pub fn format_value(value: Option<f64>) -> String {
    value.map_or_else(|| "none".to_string(), |v| v.to_string())
}
