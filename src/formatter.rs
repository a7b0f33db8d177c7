//! Text rendering of a calendar view with color support.

use unicode_width::UnicodeWidthStr;

use crate::types::{
    COLOR_DIM, COLOR_GRAY, COLOR_RESET, COLOR_REVERSE, COLOR_SAND_YELLOW, COLOR_TEAL,
    CalendarCell, CalendarDate, CalendarView, SelectableOption,
};

/// Width of one day column: a marker followed by a two-digit day.
pub const CELL_WIDTH: usize = 3;
pub const GRID_WIDTH: usize = CELL_WIDTH * 7;

pub const MARKER_TODAY: char = '*';
pub const MARKER_DISABLED: char = '-';

const MONTH_NAMES: [&str; 12] = [
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

/// Output switches for the text renderer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Whether to use ANSI color codes in output.
    pub color: bool,
    /// Whether to list selectable years and months.
    pub show_options: bool,
}

/// Parse month from string (numeric 1-12 or English name).
pub fn parse_month(s: &str) -> Option<u32> {
    if let Ok(n) = s.parse::<u32>()
        && (1..=12).contains(&n)
    {
        return Some(n);
    }

    let s_lower = s.to_lowercase();
    if s_lower.len() < 3 {
        return None;
    }
    MONTH_NAMES
        .iter()
        .position(|name| name.to_lowercase().starts_with(&s_lower))
        .map(|index| index as u32 + 1)
}

/// English name of a zero-based month.
pub fn month_name(month0: u32) -> &'static str {
    MONTH_NAMES.get(month0 as usize).copied().unwrap_or("?")
}

fn month_abbrev(month0: u32) -> &'static str {
    let name = month_name(month0);
    name.get(..3).unwrap_or(name)
}

/// Format month header centered over the grid.
pub fn format_month_header(year: i32, month0: u32, width: usize, color: bool) -> String {
    let header = format!("{} {}", month_name(month0), year);
    let centered = center_text(&header, width);
    if color {
        format!("{}{}{}", COLOR_TEAL, centered, COLOR_RESET)
    } else {
        centered
    }
}

/// Center text within a specified width, accounting for Unicode character widths.
fn center_text(text: &str, width: usize) -> String {
    let text_width = text.width();
    if text_width >= width {
        return text.to_string();
    }
    let total_padding = width - text_width;
    let left_padding = total_padding.div_ceil(2);
    let right_padding = total_padding - left_padding;
    format!(
        "{}{}{}",
        " ".repeat(left_padding),
        text,
        " ".repeat(right_padding)
    )
}

/// Right-align a label in a day column, truncating wide labels.
fn pad_label(label: &str) -> String {
    let mut fitted = String::new();
    for ch in label.chars() {
        let candidate = format!("{fitted}{ch}");
        if candidate.width() > CELL_WIDTH - 1 {
            break;
        }
        fitted = candidate;
    }
    format!("{}{}", " ".repeat(CELL_WIDTH - fitted.width()), fitted)
}

/// Format weekday header row, labels already ordered from the week start.
pub fn format_weekday_headers(labels: &[String], color: bool) -> String {
    let row: String = labels.iter().map(|label| pad_label(label)).collect();
    if color {
        format!("{}{}{}", COLOR_SAND_YELLOW, row, COLOR_RESET)
    } else {
        row
    }
}

/// Format one day cell.
///
/// Days from adjacent months are blank without color and gray with it.
/// Today is marked with `*` (reverse video in color), disabled days with `-`.
pub fn format_cell(cell: &CalendarCell, color: bool) -> String {
    if !cell.in_current_month && !color {
        return " ".repeat(CELL_WIDTH);
    }

    let marker = if cell.is_today {
        MARKER_TODAY
    } else if cell.is_disabled {
        MARKER_DISABLED
    } else {
        ' '
    };
    let day_str = format!("{:>2}", cell.date.day());

    if !color {
        return format!("{}{}", marker, day_str);
    }

    let style = if !cell.in_current_month {
        COLOR_GRAY
    } else if cell.is_today {
        COLOR_REVERSE
    } else if cell.is_disabled {
        COLOR_DIM
    } else {
        return format!("{}{}", marker, day_str);
    };
    format!("{}{}{}{}", marker, style, day_str, COLOR_RESET)
}

/// Format the displayed month as lines: header, weekday row, weeks.
pub fn format_month_grid(view: &CalendarView, color: bool) -> Vec<String> {
    let mut lines = Vec::with_capacity(2 + view.matrix.row_count());

    lines.push(format_month_header(
        view.reference.year(),
        view.reference.month0(),
        GRID_WIDTH,
        color,
    ));
    lines.push(format_weekday_headers(&view.weekday_labels, color));

    for week in view.matrix.weeks() {
        lines.push(week.iter().map(|cell| format_cell(cell, color)).collect());
    }

    lines
}

fn format_option_list<T>(
    options: &[SelectableOption<T>],
    label: impl Fn(&T) -> String,
) -> String {
    if options.is_empty() {
        return "(none)".to_string();
    }
    options
        .iter()
        .map(|option| {
            if option.current {
                format!("[{}]", label(&option.value))
            } else {
                label(&option.value)
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_nav(date: CalendarDate, allowed: bool) -> String {
    let target = format!("{} {}", month_abbrev(date.month0()), date.year());
    if allowed {
        target
    } else {
        format!("{} (disabled)", target)
    }
}

/// Format picker contents and navigation targets.
pub fn format_options(view: &CalendarView) -> Vec<String> {
    vec![
        format!("Range:  {} .. {}", view.range.min(), view.range.max()),
        format!(
            "Years:  {}",
            format_option_list(&view.years, |year| year.to_string())
        ),
        format!(
            "Months: {}",
            format_option_list(&view.months, |month0| month_abbrev(*month0).to_string())
        ),
        format!("Prev:   {}", format_nav(view.previous, view.previous_allowed)),
        format!("Next:   {}", format_nav(view.next, view.next_allowed)),
    ]
}

/// Print the view to stdout.
pub fn print_view(view: &CalendarView, options: &RenderOptions) {
    for line in format_month_grid(view, options.color) {
        println!("{}", line);
    }
    if options.show_options {
        println!();
        for line in format_options(view) {
            println!("{}", line);
        }
    }
}
