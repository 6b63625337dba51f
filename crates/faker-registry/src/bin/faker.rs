//! Command-line front end for the faker registry.
//!
//! This binary delegates to `faker_registry::cli` for parsing and execution,
//! keeping the CLI behaviour testable without spawning a process.

use std::env;
use std::io::{self, Write};
use std::process::ExitCode;

use faker_registry::cli::{CliError, ParseOutcome, parse_args, run};
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

fn main() -> ExitCode {
    if let Err(err) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .try_init()
    {
        warn!(error = %err, "tracing init failed");
    }

    match execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if let Err(write_err) = writeln!(io::stderr().lock(), "{err}") {
                drop(write_err);
            }
            ExitCode::FAILURE
        }
    }
}

fn execute() -> Result<(), CliError> {
    let output = match parse_args(env::args_os().skip(1))? {
        ParseOutcome::Help(text) => text,
        ParseOutcome::Options(options) => run(&options)?,
    };
    write_output(output.trim_end());
    Ok(())
}

fn write_output(text: &str) {
    if let Err(err) = writeln!(io::stdout().lock(), "{text}") {
        drop(err);
    }
}
