//! Error type shared by the calendar engine.

use std::fmt;

/// Which end of the allowed range a configuration value belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoundKind {
    Min,
    Max,
}

impl fmt::Display for BoundKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundKind::Min => f.write_str("min"),
            BoundKind::Max => f.write_str("max"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    /// A raw min/max value is neither a date nor a usable day offset.
    #[error("Invalid {bound} bound: {value}")]
    InvalidRangeConfig { bound: BoundKind, value: String },

    /// The date library could not make a date out of the input.
    #[error("Unparseable date: {0}")]
    UnparseableDate(String),

    #[error("Invalid week start: {0} (must be 0-6)")]
    InvalidWeekStart(u8),

    /// Arithmetic left the range of representable dates.
    #[error("Date out of supported range")]
    OutOfRange,
}

pub type Result<T> = std::result::Result<T, CalendarError>;
