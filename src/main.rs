//! Calendar grid CLI application.
//!
//! # Usage
//! ```ignore
//! calgrid                    // Current month
//! calgrid 2 2024             // February 2024
//! calgrid --min -7 --max 30  // Range relative to today
//! calgrid -o                 // With year/month picker contents
//! ```

use calgrid::args::{Args, get_today_date};
use calgrid::formatter::{RenderOptions, print_view};
use calgrid::types::{CalendarProps, ChangeEvent};
use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("CALGRID_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .init();

    let args = Args::parse();

    if let Err(e) = run(&args) {
        eprintln!("calgrid: {}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), String> {
    let today = get_today_date();
    let mut props = CalendarProps::from_args(args, today)?;

    let request = if args.previous {
        Some(props.go_previous())
    } else if args.next {
        Some(props.go_next())
    } else {
        None
    };

    // Accept navigation only within the allowed range
    if let Some(request) = request {
        let event = request.map_err(|e| e.to_string())?;
        let range = props.range(today);
        let accepted = ChangeEvent {
            date: range.clamp(event.date),
            ..event
        };
        tracing::info!(
            kind = ?event.kind,
            requested = %event.date,
            accepted = %accepted.date,
            "navigation request"
        );
        props = props.apply(&accepted);
    }

    let view = props.render(today).map_err(|e| e.to_string())?;
    print_view(&view, &RenderOptions::new(args));

    Ok(())
}
