//! brainctl: drive a calculator brain from the command line
//!
//! ## Usage
//!
//! ```bash
//! brainctl eval 4 + 5 =               # prints 9
//! brainctl eval --trace 9 √           # prints every step
//! brainctl run tokens.txt             # tokens from a file
//! echo "8 ÷ 0 =" | brainctl run       # tokens from stdin
//! brainctl --config brain.yaml symbols
//! ```

use calc_brain_cli::{
    load_brain_config, logging, Cli, CliConfig, CliError, CliResult, Commands, OutputFormat,
    TokenRunner, Verbosity,
};
use clap::Parser;
use std::io::{BufReader, Write};
use std::path::Path;
use std::process::ExitCode;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> CliResult<()> {
    let cli = Cli::parse();
    let config = build_config(&cli)?;
    logging::init_tracing(config.verbosity);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let mut runner = TokenRunner::new(config)?;

    match cli.command {
        Commands::Eval(args) => {
            runner.feed(&args.tokens, args.trace, &mut out)?;
            runner.finish(&mut out)?;
        }
        Commands::Run(args) => {
            match args.file.as_deref() {
                Some(path) if path != Path::new("-") => {
                    if path.is_dir() {
                        return Err(CliError::invalid_argument(format!(
                            "{} is a directory",
                            path.display()
                        )));
                    }
                    let file = std::fs::File::open(path)?;
                    runner.feed_reader(BufReader::new(file), args.trace, &mut out)?;
                }
                _ => {
                    let stdin = std::io::stdin();
                    runner.feed_reader(stdin.lock(), args.trace, &mut out)?;
                }
            }
            runner.finish(&mut out)?;
        }
        Commands::Symbols => runner.list_symbols(&mut out)?,
    }

    out.flush()?;
    Ok(())
}

fn build_config(cli: &Cli) -> CliResult<CliConfig> {
    let verbosity = if cli.quiet {
        Verbosity::Quiet
    } else {
        match cli.verbose {
            0 => Verbosity::Normal,
            1 => Verbosity::Verbose,
            _ => Verbosity::Debug,
        }
    };

    let mut config = CliConfig::new()
        .with_verbosity(verbosity)
        .with_format(OutputFormat::from(cli.format));

    if let Some(path) = &cli.config {
        config = config.with_brain(load_brain_config(path)?);
    }

    Ok(config)
}
