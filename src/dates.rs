//! Date arithmetic on top of chrono.
//!
//! Everything the engine knows about days, months and weekdays goes through
//! these methods; no day counts are hardcoded anywhere else.

use chrono::{DateTime, Datelike, Days, Local, Months, NaiveDate, NaiveDateTime, Weekday};

use crate::error::{CalendarError, Result};
use crate::types::{CalendarDate, DateFields, DateLike, Fields, MONTHS_PER_YEAR, Unit};

/// Full-date formats accepted by [`CalendarDate::parse`], tried in order.
const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%Y/%m/%d", "%Y%m%d"];
const DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"];

impl CalendarDate {
    pub fn from_naive(date: NaiveDate) -> Self {
        CalendarDate(date)
    }

    pub fn naive(self) -> NaiveDate {
        self.0
    }

    /// Today's date in the local timezone.
    pub fn now() -> Self {
        CalendarDate(Local::now().date_naive())
    }

    /// Build a date from a year, zero-based month and day of month.
    pub fn from_parts(year: i32, month0: u32, day: u32) -> Result<Self> {
        let month = month0.saturating_add(1);
        NaiveDate::from_ymd_opt(year, month, day)
            .map(CalendarDate)
            .ok_or_else(|| CalendarError::UnparseableDate(format!("{year}-{month:02}-{day:02}")))
    }

    /// Parse ISO-like date text.
    ///
    /// Accepts `YYYY-MM-DD`, `YYYY/MM/DD`, `YYYYMMDD`, RFC 3339 timestamps,
    /// `YYYY-MM-DDTHH:MM:SS`, `YYYY-MM` (first of month) and `YYYY`
    /// (January 1st). Time of day is discarded.
    pub fn parse(text: &str) -> Result<Self> {
        let s = text.trim();
        let unparseable = || CalendarError::UnparseableDate(text.to_string());

        for format in DATE_FORMATS {
            if let Ok(date) = NaiveDate::parse_from_str(s, format) {
                return Ok(CalendarDate(date));
            }
        }
        if let Ok(datetime) = DateTime::parse_from_rfc3339(s) {
            return Ok(CalendarDate(datetime.date_naive()));
        }
        for format in DATETIME_FORMATS {
            if let Ok(datetime) = NaiveDateTime::parse_from_str(s, format) {
                return Ok(CalendarDate(datetime.date()));
            }
        }

        match s.split('-').collect::<Vec<_>>().as_slice() {
            [year] if year.len() == 4 && year.bytes().all(|b| b.is_ascii_digit()) => {
                let year = year.parse::<i32>().map_err(|_| unparseable())?;
                Self::from_parts(year, 0, 1).map_err(|_| unparseable())
            }
            [year, month] if year.len() == 4 => {
                let year = year.parse::<i32>().map_err(|_| unparseable())?;
                let month = month.parse::<u32>().map_err(|_| unparseable())?;
                if !(1..=MONTHS_PER_YEAR).contains(&month) {
                    return Err(unparseable());
                }
                Self::from_parts(year, month - 1, 1).map_err(|_| unparseable())
            }
            _ => Err(unparseable()),
        }
    }

    /// Shift by a signed number of days, months or years.
    ///
    /// Month and year shifts keep the day of month, clamped to the length of
    /// the target month (January 31st plus one month is the last day of
    /// February).
    pub fn add_units(self, amount: i64, unit: Unit) -> Result<Self> {
        let shifted = match unit {
            Unit::Day => {
                let days = Days::new(amount.unsigned_abs());
                if amount < 0 {
                    self.0.checked_sub_days(days)
                } else {
                    self.0.checked_add_days(days)
                }
            }
            Unit::Month | Unit::Year => {
                let months = match unit {
                    Unit::Year => amount.checked_mul(i64::from(MONTHS_PER_YEAR)),
                    _ => Some(amount),
                }
                .and_then(|m| u32::try_from(m.unsigned_abs()).ok())
                .ok_or(CalendarError::OutOfRange)?;
                if amount < 0 {
                    self.0.checked_sub_months(Months::new(months))
                } else {
                    self.0.checked_add_months(Months::new(months))
                }
            }
        };
        shifted.map(CalendarDate).ok_or(CalendarError::OutOfRange)
    }

    /// Overwrite year and/or month, clamping the day to the new month.
    pub fn set_fields(self, fields: Fields) -> Result<Self> {
        let year = fields.year.unwrap_or(self.year());
        let month0 = fields.month0.unwrap_or(self.month0());
        let first = Self::from_parts(year, month0, 1)?;
        let last = first.last_of_month()?;
        let day = self.day().min(last.day());
        first.add_units(i64::from(day) - 1, Unit::Day)
    }

    pub fn fields_of(self) -> DateFields {
        DateFields {
            year: self.year(),
            month0: self.month0(),
            day: self.day(),
            weekday: self.weekday_index(),
        }
    }

    pub fn year(self) -> i32 {
        self.0.year()
    }

    /// Zero-based month (0 = January).
    pub fn month0(self) -> u32 {
        self.0.month0()
    }

    pub fn day(self) -> u32 {
        self.0.day()
    }

    pub fn weekday(self) -> Weekday {
        self.0.weekday()
    }

    /// 0 = Sunday .. 6 = Saturday.
    pub fn weekday_index(self) -> u8 {
        self.0.weekday().num_days_from_sunday() as u8
    }

    pub fn is_same_month(self, other: CalendarDate) -> bool {
        self.year() == other.year() && self.month0() == other.month0()
    }

    pub fn first_of_month(self) -> Result<Self> {
        self.add_units(1 - i64::from(self.day()), Unit::Day)
    }

    pub fn last_of_month(self) -> Result<Self> {
        self.first_of_month()?
            .add_units(1, Unit::Month)?
            .add_units(-1, Unit::Day)
    }
}

impl DateLike {
    /// Turn the value into a concrete date.
    pub fn resolve(&self) -> Result<CalendarDate> {
        match self {
            DateLike::Date(date) => Ok(*date),
            DateLike::Text(text) => CalendarDate::parse(text),
            DateLike::Parts { year, month0, day } => CalendarDate::from_parts(*year, *month0, *day),
        }
    }
}
