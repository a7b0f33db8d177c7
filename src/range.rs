//! Allowed date range: resolving raw min/max configuration and range checks.

use crate::error::{BoundKind, CalendarError, Result};
use crate::types::{
    CalendarDate, DEFAULT_MAX_DATE, DEFAULT_MIN_DATE, DateLike, DateRange, RangeBound, Unit,
};

impl DateRange {
    pub fn new(min: CalendarDate, max: CalendarDate) -> Self {
        DateRange { min, max }
    }

    /// Range used when neither bound is configured: 1980-01-01 to 2050-12-31.
    pub fn default_range() -> Self {
        DateRange {
            min: default_bound(BoundKind::Min),
            max: default_bound(BoundKind::Max),
        }
    }

    /// Resolve raw min/max configuration against `today`.
    ///
    /// Day offsets count from `today`. A min offset of `n` reaches back
    /// `|n| + 1` days whichever sign it carries, while a max offset of `n`
    /// moves `n` days forward (backwards when negative). Absent bounds and
    /// blank text use the defaults.
    pub fn resolve(
        raw_min: Option<&RangeBound>,
        raw_max: Option<&RangeBound>,
        today: CalendarDate,
    ) -> Result<Self> {
        Ok(DateRange {
            min: resolve_bound(BoundKind::Min, raw_min, today)?,
            max: resolve_bound(BoundKind::Max, raw_max, today)?,
        })
    }

    /// Like [`DateRange::resolve`], but a bound that cannot be resolved
    /// falls back to its default instead of failing.
    pub fn resolve_or_default(
        raw_min: Option<&RangeBound>,
        raw_max: Option<&RangeBound>,
        today: CalendarDate,
    ) -> Self {
        let recover = |kind: BoundKind, raw: Option<&RangeBound>| {
            resolve_bound(kind, raw, today).unwrap_or_else(|err| {
                let fallback = default_bound(kind);
                tracing::warn!(%err, %fallback, "falling back to default {kind} bound");
                fallback
            })
        };
        DateRange {
            min: recover(BoundKind::Min, raw_min),
            max: recover(BoundKind::Max, raw_max),
        }
    }

    pub fn min(&self) -> CalendarDate {
        self.min
    }

    pub fn max(&self) -> CalendarDate {
        self.max
    }

    /// True when min is after max; nothing is selectable then.
    pub fn is_empty(&self) -> bool {
        self.min > self.max
    }

    /// Inclusive day-granularity membership test.
    pub fn contains(&self, date: CalendarDate) -> bool {
        self.min <= date && date <= self.max
    }

    /// Whether `[first, last]` shares at least one day with the range.
    pub fn overlaps(&self, first: CalendarDate, last: CalendarDate) -> bool {
        !self.is_empty() && first <= self.max && last >= self.min
    }

    /// Pull `date` into the range. An empty range returns it unchanged.
    pub fn clamp(&self, date: CalendarDate) -> CalendarDate {
        if self.is_empty() {
            return date;
        }
        date.clamp(self.min, self.max)
    }
}

impl Default for DateRange {
    fn default() -> Self {
        DateRange::default_range()
    }
}

fn default_bound(kind: BoundKind) -> CalendarDate {
    match kind {
        BoundKind::Min => CalendarDate::from_naive(DEFAULT_MIN_DATE),
        BoundKind::Max => CalendarDate::from_naive(DEFAULT_MAX_DATE),
    }
}

fn resolve_bound(
    kind: BoundKind,
    raw: Option<&RangeBound>,
    today: CalendarDate,
) -> Result<CalendarDate> {
    let invalid = || CalendarError::InvalidRangeConfig {
        bound: kind,
        value: raw.map(ToString::to_string).unwrap_or_default(),
    };

    match raw {
        None => Ok(default_bound(kind)),
        Some(RangeBound::Absolute(DateLike::Text(text))) if text.trim().is_empty() => {
            Ok(default_bound(kind))
        }
        Some(RangeBound::Absolute(like)) => like.resolve().map_err(|_| invalid()),
        Some(RangeBound::RelativeDays(days)) => {
            let offset = match kind {
                // One extra day back on the min side
                BoundKind::Min => days
                    .checked_abs()
                    .and_then(|back| back.checked_add(1))
                    .map(|back| -back),
                BoundKind::Max => Some(*days),
            }
            .ok_or_else(invalid)?;
            today.add_units(offset, Unit::Day).map_err(|_| invalid())
        }
    }
}
