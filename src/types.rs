//! Type definitions and constants for the calendar engine.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, Weekday};

use crate::error::{CalendarError, Result};

/// A single calendar day.
///
/// Opaque wrapper over `chrono::NaiveDate`. Months are exposed zero-based
/// (0 = January) and weekdays as 0 = Sunday .. 6 = Saturday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate(pub(crate) NaiveDate);

/// Components of a [`CalendarDate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateFields {
    pub year: i32,
    /// Zero-based month (0-11).
    pub month0: u32,
    pub day: u32,
    /// 0 = Sunday .. 6 = Saturday.
    pub weekday: u8,
}

/// Fields to overwrite with [`CalendarDate::set_fields`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Fields {
    pub year: Option<i32>,
    pub month0: Option<u32>,
}

/// Unit for [`CalendarDate::add_units`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    Day,
    Month,
    Year,
}

/// A value that can be turned into a date.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DateLike {
    /// An already resolved date.
    Date(CalendarDate),
    /// Text such as `2024-06-01`, `2024-06` or `2024`.
    Text(String),
    /// Year, zero-based month and day of month.
    Parts { year: i32, month0: u32, day: u32 },
}

/// Raw configuration for one end of the allowed range.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RangeBound {
    Absolute(DateLike),
    /// Number of days relative to today.
    RelativeDays(i64),
}

/// Inclusive window of dates a user may select or navigate to.
///
/// `min > max` is a valid, empty range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateRange {
    pub(crate) min: CalendarDate,
    pub(crate) max: CalendarDate,
}

/// Week layout and weekday labels.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Locale {
    /// First day of the week.
    pub week_start: Weekday,
    /// Short weekday names, Sunday first.
    pub weekday_labels: [String; 7],
}

/// One day cell of the calendar grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CalendarCell {
    pub date: CalendarDate,
    pub in_current_month: bool,
    pub is_today: bool,
    pub is_disabled: bool,
}

/// Weeks of seven cells covering a whole month.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CalendarMatrix {
    pub(crate) weeks: Vec<[CalendarCell; DAYS_PER_WEEK]>,
}

/// Entry of a year or month picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SelectableOption<T> {
    pub value: T,
    /// Whether this is the displayed year/month.
    pub current: bool,
}

/// What the user asked to change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChangeKind {
    Year,
    Month,
    Day,
    Previous,
    Next,
}

/// A requested change of the displayed or selected date.
///
/// The engine never applies these; the host decides whether to accept the
/// date and re-render with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChangeEvent {
    pub kind: ChangeKind,
    pub date: CalendarDate,
}

/// Host-owned inputs of a calendar.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CalendarProps {
    pub year: i32,
    /// Zero-based displayed month (0-11).
    pub month0: u32,
    pub min: Option<RangeBound>,
    pub max: Option<RangeBound>,
    pub locale: Locale,
}

/// Everything a renderer needs for one displayed month.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CalendarView {
    /// First day of the displayed month.
    pub reference: CalendarDate,
    pub range: DateRange,
    /// Labels ordered from the week start.
    pub weekday_labels: Vec<String>,
    pub matrix: CalendarMatrix,
    pub years: Vec<SelectableOption<i32>>,
    pub months: Vec<SelectableOption<u32>>,
    pub previous: CalendarDate,
    pub next: CalendarDate,
    /// Whether the previous month has any selectable day.
    pub previous_allowed: bool,
    pub next_allowed: bool,
}

// Constants for grid layout
pub const DAYS_PER_WEEK: usize = 7;
pub const MAX_WEEKS_PER_MONTH: usize = 6;
pub const MONTHS_PER_YEAR: u32 = 12;

// Longest unsigned digit run read as a day offset; longer runs are years or
// compact dates
pub const MAX_UNSIGNED_OFFSET_DIGITS: usize = 3;

// Documented fallbacks for absent or broken range bounds
pub const DEFAULT_MIN_DATE: NaiveDate = match NaiveDate::from_ymd_opt(1980, 1, 1) {
    Some(date) => date,
    None => NaiveDate::MIN,
};
pub const DEFAULT_MAX_DATE: NaiveDate = match NaiveDate::from_ymd_opt(2050, 12, 31) {
    Some(date) => date,
    None => NaiveDate::MAX,
};

pub const DEFAULT_WEEKDAY_LABELS: [&str; 7] = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];

// ANSI color codes
pub const COLOR_RESET: &str = "\x1b[0m";
pub const COLOR_REVERSE: &str = "\x1b[7m";
pub const COLOR_DIM: &str = "\x1b[2m";
pub const COLOR_GRAY: &str = "\x1b[90m";
pub const COLOR_TEAL: &str = "\x1b[96m";
pub const COLOR_SAND_YELLOW: &str = "\x1b[93m";

impl Locale {
    /// Build a locale from a numeric week start (0 = Sunday .. 6 = Saturday).
    pub fn new(week_starts_on: u8, weekday_labels: [String; 7]) -> Result<Self> {
        Ok(Locale {
            week_start: weekday_from_index(week_starts_on)?,
            weekday_labels,
        })
    }

    /// Locale with default labels and the given week start.
    pub fn with_week_start(week_starts_on: u8) -> Result<Self> {
        Ok(Locale {
            week_start: weekday_from_index(week_starts_on)?,
            ..Locale::default()
        })
    }

    /// Numeric week start, 0 = Sunday.
    pub fn week_starts_on(&self) -> u8 {
        self.week_start.num_days_from_sunday() as u8
    }
}

impl Default for Locale {
    fn default() -> Self {
        Locale {
            week_start: Weekday::Sun,
            weekday_labels: DEFAULT_WEEKDAY_LABELS.map(String::from),
        }
    }
}

/// Map 0 = Sunday .. 6 = Saturday to a `Weekday`.
pub fn weekday_from_index(index: u8) -> Result<Weekday> {
    match index {
        0 => Ok(Weekday::Sun),
        1 => Ok(Weekday::Mon),
        2 => Ok(Weekday::Tue),
        3 => Ok(Weekday::Wed),
        4 => Ok(Weekday::Thu),
        5 => Ok(Weekday::Fri),
        6 => Ok(Weekday::Sat),
        _ => Err(CalendarError::InvalidWeekStart(index)),
    }
}

impl<T> SelectableOption<T> {
    pub fn new(value: T, current: bool) -> Self {
        SelectableOption { value, current }
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl fmt::Display for DateLike {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateLike::Date(date) => write!(f, "{date}"),
            DateLike::Text(text) => f.write_str(text),
            DateLike::Parts { year, month0, day } => write!(f, "[{year}, {month0}, {day}]"),
        }
    }
}

impl fmt::Display for RangeBound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RangeBound::Absolute(like) => write!(f, "{like}"),
            RangeBound::RelativeDays(days) => write!(f, "{days}"),
        }
    }
}

/// Signed integers and short unsigned integers become day offsets. Longer
/// digit runs such as `2024` or `20240601` are dates, as is anything else.
impl FromStr for RangeBound {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let s = s.trim();
        let signed = s.starts_with(['-', '+']);
        if (signed || s.len() <= MAX_UNSIGNED_OFFSET_DIGITS)
            && let Ok(days) = s.parse::<i64>()
        {
            return Ok(RangeBound::RelativeDays(days));
        }
        Ok(RangeBound::Absolute(DateLike::Text(s.to_string())))
    }
}

impl From<CalendarDate> for RangeBound {
    fn from(date: CalendarDate) -> Self {
        RangeBound::Absolute(DateLike::Date(date))
    }
}

impl From<i64> for RangeBound {
    fn from(days: i64) -> Self {
        RangeBound::RelativeDays(days)
    }
}

impl From<&str> for RangeBound {
    fn from(text: &str) -> Self {
        match text.parse() {
            Ok(bound) => bound,
            Err(never) => match never {},
        }
    }
}
