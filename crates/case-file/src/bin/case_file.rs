//! Opens a case file and prints it as JSON.
//!
//! Parsing and generation live in `case_file::case_cli` so the behaviour is
//! testable without spawning a process.

use std::env;
use std::fmt::Display;
use std::io::{self, Write};
use std::process::ExitCode;

use case_file::case_cli::{CliError, ParseOutcome, execute, parse_args};
use case_file::settings::CaseFileSettings;
use tracing_subscriber::{EnvFilter, fmt};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if let Err(write_err) = writeln!(io::stderr().lock(), "{err}") {
                drop(write_err);
            }
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), CliError> {
    match parse_args(env::args().skip(1))? {
        ParseOutcome::Help => {
            print_usage(io::stdout().lock());
            Ok(())
        }
        ParseOutcome::Options(options) => {
            let settings = CaseFileSettings::from_environment()?;
            init_tracing(&settings);
            let output = execute(&options, &settings)?;
            write_output(&output);
            Ok(())
        }
    }
}

fn init_tracing(settings: &CaseFileSettings) {
    let builder = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr);
    let result = if settings.json_logs {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    if let Err(err) = result {
        report_tracing_failure(io::stderr().lock(), &err);
    }
}

/// Writes the failure straight to `out`; no subscriber is listening yet.
fn report_tracing_failure(mut out: impl Write, err: &impl Display) {
    if let Err(write_err) = writeln!(out, "tracing init failed: {err}") {
        drop(write_err);
    }
}

fn print_usage(mut out: impl Write) {
    let usage = concat!(
        "Usage: case-file [options]\n",
        "\n",
        "Options:\n",
        "  --id <identifier>    Case identifier (defaults to a fresh one)\n",
        "  --pool <path>        Template pool JSON file (overrides CASE_FILE_POOL_PATH)\n",
        "  --categories         List the categories in the pool\n",
        "  -h, --help           Print this help output\n",
        "\n",
        "Environment:\n",
        "  CASE_FILE_POOL_PATH  Template pool JSON file\n",
        "  CASE_FILE_JSON_LOGS  Emit logs as JSON lines\n",
        "  CASE_FILE_ENRICHMENT Run the enrichment chain before the static template\n",
    );
    if let Err(err) = out.write_all(usage.as_bytes()) {
        drop(err);
    }
}

fn write_output(output: &str) {
    if let Err(err) = writeln!(io::stdout().lock(), "{output}") {
        drop(err);
    }
}
