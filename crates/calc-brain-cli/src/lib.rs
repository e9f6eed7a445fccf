//! brainctl library
//!
//! Command-line front end for the calculator brain. Tokens are fed
//! verbatim: numbers become operands, everything else is performed as a
//! symbol.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

mod commands;
mod config;
mod error;
pub mod logging;
mod runner;

pub use commands::{Cli, Commands, EvalArgs, FormatArg, RunArgs};
pub use config::{load_brain_config, CliConfig, OutputFormat, Verbosity};
pub use error::{CliError, CliResult};
pub use runner::{format_value, RunReport, TokenRunner};
