//! Month formatting with width accounting that ignores color markup.

use log::debug;
use unicode_width::UnicodeWidthStr;

use crate::types::{
    COLOR_RED, COLOR_RESET, CELL_WIDTH, CalendarDate, DAYS_PER_WEEK, LINE_WIDTH,
    MONTH_BLOCK_LINES, MonthBlock, WEEK_ROWS, WEEKDAY_LINE,
};

/// Display width of `text`, skipping ANSI CSI escape sequences.
pub fn visible_width(text: &str) -> usize {
    let mut width = 0;
    let mut rest = text;
    while let Some(start) = rest.find('\x1b') {
        width += rest[..start].width();
        rest = skip_escape(&rest[start + 1..]);
    }
    width + rest.width()
}

/// Skip the body of an escape sequence whose ESC byte was already consumed.
fn skip_escape(text: &str) -> &str {
    match text.strip_prefix('[') {
        // CSI ends at the first byte in 0x40..=0x7e
        Some(params) => match params.find(|c: char| ('\x40'..='\x7e').contains(&c)) {
            Some(end) => &params[end + 1..],
            None => "",
        },
        None => text,
    }
}

/// Pad `text` with trailing spaces up to `width` visible columns.
pub fn pad_to_width(text: &str, width: usize) -> String {
    let padding = width.saturating_sub(visible_width(text));
    format!("{}{}", text, " ".repeat(padding))
}

/// Center text within `width` columns.
///
/// The left side gets `(width - len) / 2` spaces and any odd remainder goes
/// to the right. Text wider than the field is returned unchanged.
pub fn center_text(text: &str, width: usize) -> String {
    let text_width = visible_width(text);
    if text_width >= width {
        return text.to_string();
    }
    let total_padding = width - text_width;
    let left_padding = total_padding / 2;
    let right_padding = total_padding - left_padding;
    format!(
        "{}{}{}",
        " ".repeat(left_padding),
        text,
        " ".repeat(right_padding)
    )
}

/// Format the "Month Year" header centered over the weekday line.
pub fn format_month_header(date: &CalendarDate) -> String {
    let header = format!("{} {}", date.month_name(), date.year());
    center_text(&header, LINE_WIDTH)
}

/// One 3-column day slot. `width` is the printable width, excluding markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayCell {
    text: String,
    width: usize,
}

impl DayCell {
    pub fn blank() -> Self {
        DayCell {
            text: " ".repeat(CELL_WIDTH),
            width: CELL_WIDTH,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn width(&self) -> usize {
        self.width
    }
}

/// Format a day number right-justified in two columns plus a trailing space.
pub fn format_day(day: u32, highlight: bool) -> DayCell {
    let text = if highlight {
        format!("{}{:>2}{} ", COLOR_RED, day, COLOR_RESET)
    } else {
        format!("{:>2} ", day)
    };
    DayCell {
        text,
        width: CELL_WIDTH,
    }
}

/// Collects day cells into week rows of exactly `LINE_WIDTH` visible columns.
#[derive(Debug, Default)]
struct WeekRows {
    current: String,
    current_width: usize,
    has_day: bool,
    rows: Vec<String>,
}

impl WeekRows {
    fn push_blank(&mut self) {
        self.push(DayCell::blank());
    }

    fn push_day(&mut self, cell: DayCell) {
        self.push(cell);
        self.has_day = true;
    }

    fn push(&mut self, cell: DayCell) {
        self.current.push_str(&cell.text);
        self.current_width += cell.width;
    }

    /// Trim trailing blanks, then pad back out so empty cells stay present.
    fn flush(&mut self) {
        let trimmed_len = self.current.trim_end_matches(' ').len();
        let width = self.current_width - (self.current.len() - trimmed_len);
        self.current.truncate(trimmed_len);

        let mut row = std::mem::take(&mut self.current);
        row.push_str(&" ".repeat(LINE_WIDTH.saturating_sub(width)));
        self.rows.push(row);

        self.current_width = 0;
        self.has_day = false;
    }

    fn finish(mut self) -> Vec<String> {
        if self.has_day {
            self.flush();
        }
        while self.rows.len() < WEEK_ROWS {
            self.rows.push(" ".repeat(LINE_WIDTH));
        }
        self.rows
    }
}

/// Format one month as a block of lines.
///
/// The block always holds the header, the weekday names, a rule and six week
/// rows, each `LINE_WIDTH` visible columns wide. When `highlight` is set the
/// cell for `date.day()` is wrapped in red.
pub fn format_month(date: CalendarDate, highlight: bool) -> MonthBlock {
    let first_weekday = date.first_weekday();
    let days_in_month = date.days_in_month();
    debug!(
        "formatting {:04}-{:02}: first weekday {}, {} days, highlight {}",
        date.year(),
        date.month(),
        first_weekday,
        days_in_month,
        highlight
    );

    let mut lines = Vec::with_capacity(MONTH_BLOCK_LINES);
    lines.push(format_month_header(&date));
    lines.push(WEEKDAY_LINE.to_string());
    lines.push("-".repeat(LINE_WIDTH));

    let mut weeks = WeekRows::default();
    for _ in 0..first_weekday {
        weeks.push_blank();
    }
    for day in 1..=days_in_month {
        weeks.push_day(format_day(day, highlight && day == date.day()));
        if (first_weekday + day) % DAYS_PER_WEEK == 0 {
            weeks.flush();
        }
    }
    lines.extend(weeks.finish());

    MonthBlock::new(lines)
}

/// Print a single month.
pub fn print_month(date: CalendarDate, highlight: bool) {
    for line in format_month(date, highlight).lines() {
        println!("{}", line);
    }
}
