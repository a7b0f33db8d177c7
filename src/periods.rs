//! Year and month picker contents.

use crate::error::Result;
use crate::types::{CalendarDate, DateRange, MONTHS_PER_YEAR, SelectableOption};

/// All years touched by the range, ascending.
pub fn years(range: &DateRange) -> Vec<i32> {
    if range.is_empty() {
        return Vec::new();
    }
    (range.min().year()..=range.max().year()).collect()
}

/// Zero-based months of `year` that overlap the range, even partially.
pub fn months(year: i32, range: &DateRange) -> Vec<u32> {
    (0..MONTHS_PER_YEAR)
        .filter(|&month0| is_month_allowed(year, month0, range))
        .collect()
}

/// First and last day of a month.
pub fn month_bounds(year: i32, month0: u32) -> Result<(CalendarDate, CalendarDate)> {
    let first = CalendarDate::from_parts(year, month0, 1)?;
    Ok((first, first.last_of_month()?))
}

/// Whether any day of the month is inside the range.
pub fn is_month_allowed(year: i32, month0: u32, range: &DateRange) -> bool {
    month_bounds(year, month0)
        .map(|(first, last)| range.overlaps(first, last))
        .unwrap_or(false)
}

pub fn year_options(range: &DateRange, displayed_year: i32) -> Vec<SelectableOption<i32>> {
    let options: Vec<_> = years(range)
        .into_iter()
        .map(|year| SelectableOption::new(year, year == displayed_year))
        .collect();
    tracing::debug!(count = options.len(), "listed selectable years");
    options
}

pub fn month_options(
    displayed_year: i32,
    displayed_month0: u32,
    range: &DateRange,
) -> Vec<SelectableOption<u32>> {
    months(displayed_year, range)
        .into_iter()
        .map(|month0| SelectableOption::new(month0, month0 == displayed_month0))
        .collect()
}
