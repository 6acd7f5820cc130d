//! Binary entry point for smart-newline.

#![allow(clippy::print_stdout, clippy::print_stderr)]

use clap::Parser;
use smart_newline::cli::output::{OutputFormat, format_error};
use smart_newline::cli::{Cli, execute};
use std::io::{self, Write};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn init_tracing(verbose: bool) {
    let default = if verbose {
        "smart_newline=debug"
    } else {
        "smart_newline=warn"
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(io::stderr)
        .compact()
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let format = OutputFormat::parse(&cli.format);

    match execute(&cli) {
        Ok(output) => {
            if !output.is_empty() {
                // Handle broken pipe gracefully (e.g., when piped to `head` or `jq`)
                if let Err(e) = write!(io::stdout(), "{output}")
                    && e.kind() != io::ErrorKind::BrokenPipe
                {
                    eprintln!("Error writing to stdout: {e}");
                    return ExitCode::FAILURE;
                }
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            let error_output = format_error(&e, format);
            match format {
                // JSON errors go to stdout for programmatic parsing
                OutputFormat::Json => print!("{error_output}"),
                OutputFormat::Text => eprintln!("Error: {error_output}"),
            }
            ExitCode::FAILURE
        }
    }
}
