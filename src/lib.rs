//! Calendar grid engine for date pickers.
//!
//! Features:
//! - Month grids with leading/trailing days from adjacent months
//! - Any week start day
//! - Allowed date range from absolute dates or day offsets from today
//! - Selectable year/month lists and prev/next navigation requests
//!
//! The engine is a pure function of the host's inputs: it never stores the
//! displayed month, it only reports the month a user action would lead to.

pub mod args;
pub mod calendar;
pub mod dates;
pub mod error;
pub mod formatter;
pub mod navigation;
pub mod periods;
pub mod range;
pub mod types;

pub use error::{BoundKind, CalendarError};
pub use types::{
    CalendarCell, CalendarDate, CalendarMatrix, CalendarProps, CalendarView, ChangeEvent,
    ChangeKind, DateLike, DateRange, Locale, RangeBound, SelectableOption, Unit,
};
