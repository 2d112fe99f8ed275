//! Type definitions and constants for calendar formatting.

use crate::formatter::visible_width;

/// A validated (year, month, day) in the proleptic Gregorian calendar.
///
/// Weekday and month length are derived on demand, see `calendar.rs`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarDate {
    pub(crate) year: i32,
    pub(crate) month: u32,
    pub(crate) day: u32,
}

/// Rendered text of one month: header, weekday names, rule and six week rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthBlock {
    lines: Vec<String>,
}

impl MonthBlock {
    pub fn new(lines: Vec<String>) -> Self {
        MonthBlock { lines }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Visible width of the header line, used as the block's column width.
    pub fn width(&self) -> usize {
        self.lines.first().map_or(0, |line| visible_width(line))
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }
}

impl From<Vec<String>> for MonthBlock {
    fn from(lines: Vec<String>) -> Self {
        MonthBlock::new(lines)
    }
}

/// What the binary was asked to display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayMode {
    /// A single month, optionally with `date.day` highlighted.
    Month { date: CalendarDate, highlight: bool },
    /// All twelve months of a year laid out in a grid.
    Year(i32),
}

/// Resolved runtime settings.
#[derive(Clone, Debug)]
pub struct CalContext {
    /// Today's date, used for the default month and its highlight.
    pub today: chrono::NaiveDate,
    /// Whether the current day may be highlighted with ANSI color.
    pub color: bool,
}

// Constants for calendar formatting
pub const WEEKDAY_LINE: &str = "Su Mo Tu We Th Fr Sa";
pub const LINE_WIDTH: usize = WEEKDAY_LINE.len();
pub const CELL_WIDTH: usize = 3;
pub const DAYS_PER_WEEK: u32 = 7;
pub const WEEK_ROWS: usize = 6;
pub const MONTH_BLOCK_LINES: usize = 3 + WEEK_ROWS;

// Year grid layout
pub const GRID_COLS: usize = 4;
pub const GRID_ROWS: usize = 3;
pub const GRID_GUTTER: &str = "   ";
pub const FALLBACK_COLUMN_WIDTH: usize = LINE_WIDTH;

pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

// ANSI color codes
pub const COLOR_RESET: &str = "\x1b[0m";
pub const COLOR_RED: &str = "\x1b[31m";
