//! Proleptic Gregorian date arithmetic using Zeller's congruence.

use chrono::Datelike;

use crate::error::CalError;
use crate::types::{CalendarDate, MONTH_NAMES};

/// Check if a year is a Gregorian leap year.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}

/// Number of days in `month` (1-12). Out-of-range months yield 0.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

/// Weekday of an arbitrary date, 0=Sunday .. 6=Saturday.
pub fn weekday_of(year: i32, month: u32, day: u32) -> u32 {
    let m = (if month < 3 { month + 12 } else { month }) as i64;
    let y = if month < 3 { year as i64 - 1 } else { year as i64 };
    let q = day as i64;
    // Euclidean split keeps the century terms correct for negative years.
    let k = y.rem_euclid(100);
    let j = y.div_euclid(100);

    // h: 0=Sat, 1=Sun, .., 6=Fri
    let h = (q + (13 * (m + 1)) / 5 + k + k / 4 + j.div_euclid(4) + 5 * j).rem_euclid(7);
    ((h + 6) % 7) as u32
}

/// Weekday of the first day of the month, 0=Sunday .. 6=Saturday.
pub fn first_day_of_month(year: i32, month: u32) -> u32 {
    weekday_of(year, month, 1)
}

impl CalendarDate {
    /// Build a date, rejecting months outside 1-12 and days past the month's end.
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, CalError> {
        if !(1..=12).contains(&month) || day == 0 || day > days_in_month(year, month) {
            return Err(CalError::InvalidCalendarDate { year, month, day });
        }
        Ok(CalendarDate { year, month, day })
    }

    /// First day of the given month.
    pub fn first_of(year: i32, month: u32) -> Result<Self, CalError> {
        Self::new(year, month, 1)
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    pub fn weekday(&self) -> u32 {
        weekday_of(self.year, self.month, self.day)
    }

    pub fn first_weekday(&self) -> u32 {
        first_day_of_month(self.year, self.month)
    }

    pub fn days_in_month(&self) -> u32 {
        days_in_month(self.year, self.month)
    }

    pub fn month_name(&self) -> &'static str {
        MONTH_NAMES[(self.month - 1) as usize]
    }
}

impl From<chrono::NaiveDate> for CalendarDate {
    fn from(date: chrono::NaiveDate) -> Self {
        CalendarDate {
            year: date.year(),
            month: date.month(),
            day: date.day(),
        }
    }
}
