//! Prints generated campus energy records as JSON.
//!
//! This binary delegates to `energy_data::generate_cli` for parsing and
//! rendering, keeping the CLI behaviour testable without spawning a process.

use std::env;
use std::io::{self, Write};
use std::process::ExitCode;

use chrono::Local;
use energy_data::DateKey;
use energy_data::generate_cli::{CliError, ParseOutcome, parse_args, render};

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
            let today = DateKey::from_date(Local::now().date_naive());
            let json = render(&options, today)?;
            if let Err(err) = writeln!(io::stdout().lock(), "{json}") {
                drop(err);
            }
            Ok(())
        }
    }
}

fn print_usage(mut out: impl Write) {
    let usage = concat!(
        "Usage: energy-data-generate [options]\n",
        "\n",
        "Options:\n",
        "  --date <YYYY-MM-DD>        Generate a single day\n",
        "  --end <YYYY-MM-DD>         Last day of the history window (defaults to today)\n",
        "  --days <n>                 History window length (defaults to 30)\n",
        "  --seed <seed>              RNG seed value (defaults to random)\n",
        "  --event-probability <p>    Weekday EVENT probability in [0, 0.7] (defaults to 0)\n",
        "  -h, --help                 Print this help output\n",
    );
    if let Err(err) = out.write_all(usage.as_bytes()) {
        drop(err);
    }
}
