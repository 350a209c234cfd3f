//! CLI support for printing generated day records.
//!
//! The `energy-data-generate` binary delegates parsing and rendering to
//! this module so both can be exercised without spawning a process.

mod error;

use std::fmt;

use crate::date_key::DateKey;
use crate::generator::{DEFAULT_HISTORY_DAYS, DayGenerator};

pub use error::CliError;

/// Parsed options for the generator CLI.
#[derive(Debug, Clone, PartialEq)]
pub struct Options {
    date: Option<DateKey>,
    days: Option<usize>,
    end: Option<DateKey>,
    seed: Option<u64>,
    event_probability: Option<f64>,
}

/// Outcome of parsing CLI arguments.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseOutcome {
    /// Show help output and exit successfully.
    Help,
    /// Continue with the parsed options.
    Options(Options),
}

/// Parses CLI arguments.
///
/// # Errors
///
/// Returns [`CliError`] when a flag is unknown, a value is missing or
/// malformed, or `--date` is mixed with `--days` or `--end`.
///
/// # Example
///
/// ```
/// use energy_data::generate_cli::{ParseOutcome, parse_args};
///
/// let args = vec!["--date".to_owned(), "2026-10-19".to_owned()];
/// let outcome = parse_args(args.into_iter()).expect("parse");
///
/// assert!(matches!(outcome, ParseOutcome::Options(_)));
/// ```
pub fn parse_args<I>(mut args: I) -> Result<ParseOutcome, CliError>
where
    I: Iterator<Item = String>,
{
    let mut options = Options {
        date: None,
        days: None,
        end: None,
        seed: None,
        event_probability: None,
    };

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => return Ok(ParseOutcome::Help),
            "--date" => {
                let value = next_value(&mut args, "--date")?;
                options.date = Some(DateKey::parse(&value)?);
            }
            "--end" => {
                let value = next_value(&mut args, "--end")?;
                options.end = Some(DateKey::parse(&value)?);
            }
            "--days" => {
                let value = next_value(&mut args, "--days")?;
                options.days = Some(parse_number(&value, "--days")?);
            }
            "--seed" => {
                let value = next_value(&mut args, "--seed")?;
                options.seed = Some(parse_number(&value, "--seed")?);
            }
            "--event-probability" => {
                let value = next_value(&mut args, "--event-probability")?;
                options.event_probability = Some(parse_number(&value, "--event-probability")?);
            }
            _ => return Err(CliError::UnknownArgument { value: arg }),
        }
    }

    if options.date.is_some() {
        if options.days.is_some() {
            return Err(CliError::ConflictingFlags { flag: "--days" });
        }
        if options.end.is_some() {
            return Err(CliError::ConflictingFlags { flag: "--end" });
        }
    }

    Ok(ParseOutcome::Options(options))
}

/// Generates the requested records and renders them as pretty JSON.
///
/// A single `--date` renders one object; otherwise an array of the trailing
/// window ending at `--end` (or `today`), newest first.
///
/// # Errors
///
/// Returns [`CliError`] when the event probability is out of range or the
/// records cannot be serialized.
///
/// # Example
///
/// ```
/// use energy_data::DateKey;
/// use energy_data::generate_cli::{ParseOutcome, parse_args, render};
///
/// let args = ["--days", "2", "--seed", "7"].map(str::to_owned);
/// let ParseOutcome::Options(options) = parse_args(args.into_iter()).expect("parse") else {
///     panic!("expected options");
/// };
/// let today = DateKey::parse("2026-10-19").expect("valid date");
///
/// let json = render(&options, today).expect("render");
/// assert!(json.starts_with('['));
/// ```
pub fn render(options: &Options, today: DateKey) -> Result<String, CliError> {
    let generator = DayGenerator::with_optional_seed(options.seed)
        .with_event_probability(options.event_probability.unwrap_or(0.0))?;

    let rendered = if let Some(date) = options.date {
        serde_json::to_string_pretty(&generator.generate(&date))
    } else {
        let end = options.end.unwrap_or(today);
        let days = options.days.unwrap_or(DEFAULT_HISTORY_DAYS);
        serde_json::to_string_pretty(&generator.history(end, days))
    };

    rendered.map_err(|err| CliError::Render {
        message: err.to_string(),
    })
}

fn next_value<I>(args: &mut I, flag: &'static str) -> Result<String, CliError>
where
    I: Iterator<Item = String>,
{
    args.next().ok_or(CliError::MissingValue { flag })
}

fn parse_number<T>(value: &str, flag: &'static str) -> Result<T, CliError>
where
    T: std::str::FromStr,
    T::Err: fmt::Display,
{
    value.parse::<T>().map_err(|err| CliError::InvalidNumber {
        flag,
        value: value.to_owned(),
        message: err.to_string(),
    })
}
