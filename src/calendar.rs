//! Calendar grid construction and weekday ordering.

use chrono::{Days, Weekday};

use crate::error::Result;
use crate::types::{
    CalendarCell, CalendarDate, CalendarMatrix, DAYS_PER_WEEK, DateRange, Locale,
    MAX_WEEKS_PER_MONTH, Unit,
};

impl CalendarMatrix {
    /// Build the grid for the month containing `displayed`.
    ///
    /// The first row starts on `locale.week_start` at or before the 1st, and
    /// rows are added until the last day of the month sits in a complete
    /// week. Cells start out enabled; see [`CalendarMatrix::with_disabled`].
    pub fn build(displayed: CalendarDate, locale: &Locale, today: CalendarDate) -> Result<Self> {
        let first = displayed.first_of_month()?;
        let last = displayed.last_of_month()?;
        let lead = leading_days(first.weekday(), locale.week_start);

        let mut cursor = first.add_units(-i64::from(lead), Unit::Day)?;
        let mut weeks = Vec::with_capacity(MAX_WEEKS_PER_MONTH);

        while cursor <= last {
            // Whole week must be representable before stepping through it
            cursor.add_units(DAYS_PER_WEEK as i64 - 1, Unit::Day)?;
            let start = cursor.naive();
            weeks.push(std::array::from_fn(|offset| {
                let date = CalendarDate::from_naive(start + Days::new(offset as u64));
                CalendarCell::new(date, displayed, today)
            }));
            cursor = cursor.add_units(DAYS_PER_WEEK as i64, Unit::Day)?;
        }

        tracing::debug!(
            month = %first,
            week_start = %locale.week_start,
            rows = weeks.len(),
            "built calendar matrix"
        );
        Ok(CalendarMatrix { weeks })
    }

    /// Mark every cell outside `range` as disabled.
    pub fn with_disabled(mut self, range: &DateRange) -> Self {
        for cell in self.weeks.iter_mut().flatten() {
            cell.is_disabled = !range.contains(cell.date);
        }
        self
    }

    pub fn weeks(&self) -> &[[CalendarCell; DAYS_PER_WEEK]] {
        &self.weeks
    }

    pub fn row_count(&self) -> usize {
        self.weeks.len()
    }

    pub fn cells(&self) -> impl Iterator<Item = &CalendarCell> {
        self.weeks.iter().flatten()
    }

    pub fn cell_count(&self) -> usize {
        self.weeks.len() * DAYS_PER_WEEK
    }

    /// Dates of the displayed month, in order.
    pub fn in_month_days(&self) -> impl Iterator<Item = CalendarDate> + '_ {
        self.cells()
            .filter(|cell| cell.in_current_month)
            .map(|cell| cell.date)
    }

    pub fn find(&self, date: CalendarDate) -> Option<&CalendarCell> {
        self.cells().find(|cell| cell.date == date)
    }
}

impl CalendarCell {
    fn new(date: CalendarDate, displayed: CalendarDate, today: CalendarDate) -> Self {
        CalendarCell {
            date,
            in_current_month: date.is_same_month(displayed),
            is_today: date == today,
            is_disabled: false,
        }
    }
}

/// Number of days from the week start back to `first_weekday`.
pub fn leading_days(first_weekday: Weekday, week_start: Weekday) -> u32 {
    (first_weekday.num_days_from_sunday() + 7 - week_start.num_days_from_sunday()) % 7
}

/// Get weekday order based on week start day.
pub fn weekday_order(week_start: Weekday) -> [Weekday; 7] {
    let mut order = [week_start; 7];
    for i in 1..order.len() {
        order[i] = order[i - 1].succ();
    }
    order
}

/// Weekday labels rotated so the first one is the locale's week start.
pub fn list_week_days(locale: &Locale) -> Vec<String> {
    weekday_order(locale.week_start)
        .iter()
        .map(|day| locale.weekday_labels[day.num_days_from_sunday() as usize].clone())
        .collect()
}
