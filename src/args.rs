//! Command-line argument parsing using clap.
//!
//! A single optional positional argument selects the view: none for the
//! current month, `YYYY-MM-DD` for that date's month, `YYYY` for a whole year.

use chrono::NaiveDate;
use clap::{Parser, ValueHint};

use crate::error::CalError;
use crate::types::{CalContext, DisplayMode};

#[derive(Parser, Debug)]
#[command(name = "termcal")]
#[command(about = "Displays calendar for the current month, a given month or a year", long_about = None)]
#[command(version)]
#[command(after_help = HELP_MESSAGE)]
pub struct Args {
    /// Date (YYYY-MM-DD) whose month is shown, or year (YYYY) to show in full.
    #[arg(index = 1, value_name = "date", value_hint = ValueHint::Other)]
    pub date_arg: Option<String>,

    /// Do not highlight today in the current month.
    #[arg(long = "no-color", help_heading = "Output options")]
    pub no_color: bool,
}

/// Help message displayed with --help.
const HELP_MESSAGE: &str = "Without any arguments, display the current month with today highlighted.

Examples:
  termcal               Display current month
  termcal 2024-02-15    Display February 2024
  termcal 2024          Display year 2024
  termcal --no-color    Display current month without highlighting";

impl Args {
    pub fn parse() -> Self {
        Parser::parse()
    }
}

impl CalContext {
    pub fn new(args: &Args) -> Self {
        CalContext {
            today: get_today_date(),
            color: !args.no_color,
        }
    }
}

/// Get today's date, respecting CAL_TEST_TIME environment variable for testing.
pub fn get_today_date() -> NaiveDate {
    if let Ok(test_time) = std::env::var("CAL_TEST_TIME")
        && let Ok(date) = NaiveDate::parse_from_str(&test_time, "%Y-%m-%d")
    {
        return date;
    }
    chrono::Local::now().date_naive()
}

/// Decide what to display from the positional argument.
///
/// Without an argument today's month is shown, highlighted when color is on.
/// An explicit date or year is never highlighted.
pub fn get_display_mode(args: &Args, ctx: &CalContext) -> Result<DisplayMode, CalError> {
    match args.date_arg.as_deref() {
        None => Ok(DisplayMode::Month {
            date: ctx.today.into(),
            highlight: ctx.color,
        }),
        Some(arg) => parse_date_argument(arg),
    }
}

/// Interpret a `YYYY-MM-DD` (10 characters) or `YYYY` (4 characters) argument.
pub fn parse_date_argument(arg: &str) -> Result<DisplayMode, CalError> {
    match arg.len() {
        10 => parse_date(arg).map(|date| DisplayMode::Month {
            date: date.into(),
            highlight: false,
        }),
        4 => parse_year(arg).map(DisplayMode::Year),
        _ => Err(CalError::UnsupportedArgument(arg.to_string())),
    }
}

/// Parse a strict `YYYY-MM-DD` date.
pub fn parse_date(s: &str) -> Result<NaiveDate, CalError> {
    let shaped = s.len() == 10
        && s.bytes().enumerate().all(|(i, b)| match i {
            4 | 7 => b == b'-',
            _ => b.is_ascii_digit(),
        });
    if !shaped {
        return Err(CalError::InvalidDate(s.to_string()));
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| CalError::InvalidDate(s.to_string()))
}

/// Parse a four-digit year.
pub fn parse_year(s: &str) -> Result<i32, CalError> {
    if s.len() != 4 || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CalError::InvalidYear(s.to_string()));
    }
    s.parse()
        .map_err(|_| CalError::InvalidYear(s.to_string()))
}
