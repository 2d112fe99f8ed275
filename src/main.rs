//! Calendar CLI application.
//!
//! # Usage
//! ```ignore
//! termcal              // Current month, today highlighted
//! termcal 2024-02-15   // February 2024
//! termcal 2024         // Year 2024
//! ```

use log::debug;

use termcal::args::{Args, get_display_mode};
use termcal::error::CalError;
use termcal::formatter::print_month;
use termcal::grid::print_year;
use termcal::types::{CalContext, DisplayMode};

fn main() {
    env_logger::init();
    let args = Args::parse();

    if let Err(e) = run(&args) {
        eprintln!("termcal: {}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), CalError> {
    let ctx = CalContext::new(args);
    let mode = get_display_mode(args, &ctx)?;
    debug!("display mode: {:?}", mode);

    match mode {
        DisplayMode::Month { date, highlight } => print_month(date, highlight),
        DisplayMode::Year(year) => print_year(year),
    }

    Ok(())
}
