//! Multi-month grid layout for the yearly view.

use log::{debug, trace};

use crate::formatter::{format_month, pad_to_width};
use crate::types::{
    CalendarDate, FALLBACK_COLUMN_WIDTH, GRID_COLS, GRID_GUTTER, GRID_ROWS, MonthBlock,
};

/// Lay out `blocks` row-major into a `rows` x `cols` grid.
///
/// Within each grid row every block is padded to its own header width and to
/// the tallest block's line count. Cells past the end of `blocks` are filled
/// with blanks as wide as the widest block in that row (or
/// `FALLBACK_COLUMN_WIDTH` if the row is empty). Each grid row is followed by
/// one empty line.
pub fn format_grid(blocks: &[MonthBlock], cols: usize, rows: usize) -> Vec<String> {
    let mut output = Vec::new();

    for row in 0..rows {
        let cells: Vec<Option<&MonthBlock>> =
            (0..cols).map(|col| blocks.get(row * cols + col)).collect();

        let max_lines = cells.iter().flatten().map(|b| b.len()).max().unwrap_or(0);
        let fallback_width = cells
            .iter()
            .flatten()
            .map(|b| b.width())
            .max()
            .unwrap_or(FALLBACK_COLUMN_WIDTH);
        trace!(
            "grid row {}: {} lines, blank cell width {}",
            row, max_lines, fallback_width
        );

        let columns: Vec<Vec<String>> = cells
            .iter()
            .map(|cell| match cell {
                Some(block) => pad_block(block, max_lines),
                None => vec![" ".repeat(fallback_width); max_lines],
            })
            .collect();

        for line in 0..max_lines {
            let joined: Vec<&str> = columns.iter().map(|c| c[line].as_str()).collect();
            output.push(joined.join(GRID_GUTTER));
        }
        output.push(String::new());
    }

    output
}

/// Pad every line of `block` to its header width and append blank lines up to `height`.
fn pad_block(block: &MonthBlock, height: usize) -> Vec<String> {
    let width = block.width();
    let mut lines: Vec<String> = block
        .lines()
        .iter()
        .map(|line| pad_to_width(line, width))
        .collect();
    if lines.len() < height {
        lines.resize(height, " ".repeat(width));
    }
    lines
}

/// Print blocks laid out in a grid.
pub fn print_grid(blocks: &[MonthBlock], cols: usize, rows: usize) {
    for line in format_grid(blocks, cols, rows) {
        println!("{}", line);
    }
}

/// Format January through December of `year` without highlighting.
pub fn format_year(year: i32) -> Vec<String> {
    let blocks: Vec<MonthBlock> = (1..=12)
        .filter_map(|month| CalendarDate::first_of(year, month).ok())
        .map(|date| format_month(date, false))
        .collect();
    debug!("formatting year {} as {}x{} grid", year, GRID_ROWS, GRID_COLS);
    format_grid(&blocks, GRID_COLS, GRID_ROWS)
}

/// Print all twelve months of a year.
pub fn print_year(year: i32) {
    for line in format_year(year) {
        println!("{}", line);
    }
}
