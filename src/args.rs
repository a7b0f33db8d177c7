//! Command-line argument parsing using clap.
//!
//! Arguments follow cal convention: `[month] [year]`

use clap::{Parser, ValueHint};
use std::io::IsTerminal;

use crate::formatter::{RenderOptions, parse_month};
use crate::types::{CalendarDate, CalendarProps, DEFAULT_WEEKDAY_LABELS, Locale, RangeBound};

#[derive(Parser, Debug)]
#[command(name = "calgrid")]
#[command(about = "Displays a date-picker calendar grid for a month", long_about = None)]
#[command(version)]
#[command(after_help = HELP_MESSAGE)]
pub struct Args {
    /// Week starts on Sunday (default).
    #[arg(short = 's', long, help_heading = "Calendar options")]
    pub sunday: bool,

    /// Week starts on Monday.
    #[arg(short = 'm', long, help_heading = "Calendar options", conflicts_with = "sunday")]
    pub monday: bool,

    /// First day of the week, 0 = Sunday .. 6 = Saturday.
    #[arg(
        short = 'w',
        long,
        help_heading = "Calendar options",
        value_name = "0-6",
        conflicts_with_all = ["sunday", "monday"]
    )]
    pub week_start: Option<u8>,

    /// Comma-separated weekday labels, Sunday first.
    #[arg(long, help_heading = "Calendar options", value_name = "list")]
    pub labels: Option<String>,

    /// Earliest selectable date, or days back from today.
    #[arg(long, help_heading = "Range options", value_name = "date|days", allow_hyphen_values = true)]
    pub min: Option<RangeBound>,

    /// Latest selectable date, or days forward from today.
    #[arg(long, help_heading = "Range options", value_name = "date|days", allow_hyphen_values = true)]
    pub max: Option<RangeBound>,

    /// Navigate to the previous month before displaying.
    #[arg(short = 'p', long = "prev", help_heading = "Navigation")]
    pub previous: bool,

    /// Navigate to the next month before displaying.
    #[arg(short = 'n', long, help_heading = "Navigation", conflicts_with = "previous")]
    pub next: bool,

    /// Month (1-12 or name) or year (4 digits).
    #[arg(index = 1, default_value = None, value_name = "month", value_hint = ValueHint::Other)]
    pub month_arg: Option<String>,

    /// Year (1-9999).
    #[arg(index = 2, default_value = None, value_name = "year", value_hint = ValueHint::Other)]
    pub year_arg: Option<String>,

    /// Disable colorized output.
    #[arg(long, help_heading = "Output options")]
    pub no_color: bool,

    /// Show selectable years and months below the grid.
    #[arg(short = 'o', long, help_heading = "Output options")]
    pub options: bool,
}

/// Help message displayed with --help.
const HELP_MESSAGE: &str = "Display a month grid as a date picker would lay it out.

Without any arguments, display the current month.

Examples:
  calgrid                      Display current month
  calgrid 2 2024               Display February 2024
  calgrid -m feb 2024          Weeks start on Monday
  calgrid --min -7 --max 30    Allow a week back and a month ahead
  calgrid --min 2024-03-15 -o  Also list selectable years and months
  calgrid --next               Show next month (if it has selectable days)

Set CALGRID_LOG=debug to trace grid construction.";

impl Args {
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Numeric week start selected by -s, -m or -w.
    pub fn week_starts_on(&self) -> u8 {
        match (self.week_start, self.monday) {
            (Some(day), _) => day,
            (None, true) => 1,
            (None, false) => 0,
        }
    }
}

impl CalendarProps {
    pub fn from_args(args: &Args, today: CalendarDate) -> Result<Self, String> {
        let (year, month0) = get_display_date(args, today)?;

        let labels = match &args.labels {
            Some(list) => parse_labels(list)?,
            None => DEFAULT_WEEKDAY_LABELS.map(String::from),
        };
        let locale = Locale::new(args.week_starts_on(), labels).map_err(|e| e.to_string())?;

        Ok(CalendarProps {
            year,
            month0,
            min: args.min.clone(),
            max: args.max.clone(),
            locale,
        })
    }
}

impl RenderOptions {
    pub fn new(args: &Args) -> Self {
        RenderOptions {
            color: !args.no_color && std::io::stdout().is_terminal(),
            show_options: args.options,
        }
    }
}

fn parse_labels(list: &str) -> Result<[String; 7], String> {
    let labels: Vec<String> = list.split(',').map(|s| s.trim().to_string()).collect();
    <[String; 7]>::try_from(labels)
        .map_err(|labels| format!("Expected 7 weekday labels, got {}", labels.len()))
}

/// Get today's date, respecting CALGRID_TEST_TIME environment variable for testing.
pub fn get_today_date() -> CalendarDate {
    if let Ok(test_time) = std::env::var("CALGRID_TEST_TIME")
        && let Ok(date) = CalendarDate::parse(&test_time)
    {
        return date;
    }
    CalendarDate::now()
}

/// Calculate displayed year and zero-based month from positional arguments.
///
/// Argument patterns:
/// - 1 arg: year (4 digits) or month (1-2 digits or name)
/// - 2 args: month year
pub fn get_display_date(args: &Args, today: CalendarDate) -> Result<(i32, u32), String> {
    match (args.month_arg.as_deref(), args.year_arg.as_deref()) {
        (None, _) => Ok((today.year(), today.month0())),
        (Some(val), None) => {
            if let Ok(num) = val.parse::<i32>()
                && (1000..=9999).contains(&num)
            {
                return Ok((num, today.month0()));
            }
            let month = parse_month(val).ok_or_else(|| format!("Invalid argument: {}", val))?;
            Ok((today.year(), month - 1))
        }
        (Some(month), Some(year)) => {
            let month = parse_month(month).ok_or_else(|| format!("Invalid month: {}", month))?;
            let year = year
                .parse::<i32>()
                .map_err(|_| format!("Invalid year: {}", year))?;
            if !(1..=9999).contains(&year) {
                return Err(format!("Invalid year: {} (must be 1-9999)", year));
            }
            Ok((year, month - 1))
        }
    }
}
