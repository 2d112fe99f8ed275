//! Terminal calendar rendering.
//!
//! Features:
//! - Single month view with the current day highlighted
//! - Whole-year view laid out as a 3x4 grid of months
//! - Width accounting that ignores ANSI color markup

pub mod args;
pub mod calendar;
pub mod error;
pub mod formatter;
pub mod grid;
pub mod types;
