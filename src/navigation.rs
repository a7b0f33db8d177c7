//! Displayed-month derivations and change requests.
//!
//! Nothing here stores state. The displayed year and month always come from
//! the host, and user actions are answered with a [`ChangeEvent`] describing
//! the date the host may switch to.

use crate::calendar::list_week_days;
use crate::error::Result;
use crate::periods::{is_month_allowed, month_options, year_options};
use crate::types::{
    CalendarDate, CalendarMatrix, CalendarProps, CalendarView, ChangeEvent, ChangeKind, DateRange,
    Locale, Unit,
};

/// First day of the displayed month.
pub fn reference_date(year: i32, month0: u32) -> Result<CalendarDate> {
    CalendarDate::from_parts(year, month0, 1)
}

pub fn previous_month(reference: CalendarDate) -> Result<CalendarDate> {
    reference.add_units(-1, Unit::Month)
}

pub fn next_month(reference: CalendarDate) -> Result<CalendarDate> {
    reference.add_units(1, Unit::Month)
}

pub fn request_year_change(new_year: i32, current_month0: u32) -> Result<ChangeEvent> {
    let date = reference_date(new_year, current_month0)?;
    Ok(ChangeEvent::new(ChangeKind::Year, date))
}

pub fn request_month_change(new_month0: u32, current_year: i32) -> Result<ChangeEvent> {
    let date = reference_date(current_year, new_month0)?;
    Ok(ChangeEvent::new(ChangeKind::Month, date))
}

pub fn request_day(date: CalendarDate) -> ChangeEvent {
    ChangeEvent::new(ChangeKind::Day, date)
}

pub fn request_previous(reference: CalendarDate) -> Result<ChangeEvent> {
    Ok(ChangeEvent::new(ChangeKind::Previous, previous_month(reference)?))
}

pub fn request_next(reference: CalendarDate) -> Result<ChangeEvent> {
    Ok(ChangeEvent::new(ChangeKind::Next, next_month(reference)?))
}

impl ChangeEvent {
    pub fn new(kind: ChangeKind, date: CalendarDate) -> Self {
        ChangeEvent { kind, date }
    }

    /// Displayed year/month the host would switch to on acceptance.
    pub fn displayed(&self) -> (i32, u32) {
        (self.date.year(), self.date.month0())
    }
}

impl CalendarProps {
    /// Props for a month with the default range and locale.
    pub fn new(year: i32, month0: u32) -> Self {
        CalendarProps {
            year,
            month0,
            min: None,
            max: None,
            locale: Locale::default(),
        }
    }

    /// Props showing the month that contains `today`.
    pub fn for_today(today: CalendarDate) -> Self {
        CalendarProps::new(today.year(), today.month0())
    }

    pub fn reference_date(&self) -> Result<CalendarDate> {
        reference_date(self.year, self.month0)
    }

    pub fn range(&self, today: CalendarDate) -> DateRange {
        DateRange::resolve_or_default(self.min.as_ref(), self.max.as_ref(), today)
    }

    /// Compute the whole view for the displayed month.
    pub fn render(&self, today: CalendarDate) -> Result<CalendarView> {
        let reference = self.reference_date()?;
        let range = self.range(today);
        let matrix = CalendarMatrix::build(reference, &self.locale, today)?.with_disabled(&range);
        let previous = previous_month(reference)?;
        let next = next_month(reference)?;

        Ok(CalendarView {
            reference,
            range,
            weekday_labels: list_week_days(&self.locale),
            matrix,
            years: year_options(&range, self.year),
            months: month_options(self.year, self.month0, &range),
            previous,
            next,
            previous_allowed: is_month_allowed(previous.year(), previous.month0(), &range),
            next_allowed: is_month_allowed(next.year(), next.month0(), &range),
        })
    }

    pub fn select_year(&self, year: i32) -> Result<ChangeEvent> {
        request_year_change(year, self.month0)
    }

    pub fn select_month(&self, month0: u32) -> Result<ChangeEvent> {
        request_month_change(month0, self.year)
    }

    pub fn select_day(&self, date: CalendarDate) -> ChangeEvent {
        request_day(date)
    }

    pub fn go_previous(&self) -> Result<ChangeEvent> {
        request_previous(self.reference_date()?)
    }

    pub fn go_next(&self) -> Result<ChangeEvent> {
        request_next(self.reference_date()?)
    }

    /// Props displaying the month of an accepted change.
    pub fn apply(&self, event: &ChangeEvent) -> Self {
        CalendarProps {
            year: event.date.year(),
            month0: event.date.month0(),
            ..self.clone()
        }
    }
}

impl CalendarView {
    pub fn is_in_current_month(&self, date: CalendarDate) -> bool {
        date.is_same_month(self.reference)
    }

    pub fn is_displayable(&self, date: CalendarDate) -> bool {
        self.range.contains(date)
    }
}
