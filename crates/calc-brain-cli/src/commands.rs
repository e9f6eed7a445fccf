//! CLI command definitions using clap

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// brainctl: feed operands and operation symbols through a calculator brain
#[derive(Parser, Debug)]
#[command(name = "brainctl")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Brain configuration file (YAML or JSON)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, default_value = "text", global = true)]
    pub format: FormatArg,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Feed tokens given on the command line
    Eval(EvalArgs),

    /// Feed whitespace-separated tokens from a file or stdin
    Run(RunArgs),

    /// List the active operation symbols
    Symbols,
}

/// Arguments for the eval command
#[derive(Parser, Debug)]
pub struct EvalArgs {
    /// Operands and symbols, in order (e.g. 4 + 5 =)
    #[arg(required = true, allow_hyphen_values = true, allow_negative_numbers = true)]
    pub tokens: Vec<String>,

    /// Print the result after every token
    #[arg(short, long)]
    pub trace: bool,
}

/// Arguments for the run command
#[derive(Parser, Debug)]
pub struct RunArgs {
    /// Token file (reads stdin when omitted or "-")
    pub file: Option<PathBuf>,

    /// Print the result after every token
    #[arg(short, long)]
    pub trace: bool,
}

/// Output format argument
#[derive(ValueEnum, Clone, Copy, Debug, Default)]
pub enum FormatArg {
    /// Human-readable text
    #[default]
    Text,
    /// JSON
    Json,
}

impl From<FormatArg> for crate::config::OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => Self::Text,
            FormatArg::Json => Self::Json,
        }
    }
}
