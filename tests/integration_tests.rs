//! Integration tests for the calgrid binary.

use assert_cmd::Command;
use predicates::prelude::*;

fn calgrid() -> Command {
    let mut cmd = Command::cargo_bin("calgrid").unwrap();
    cmd.env("CALGRID_TEST_TIME", "2024-06-15")
        .env_remove("CALGRID_LOG");
    cmd
}

mod display {
    use super::*;

    #[test]
    fn current_month_by_default() {
        calgrid()
            .arg("--no-color")
            .assert()
            .success()
            .stdout(predicate::str::contains("June 2024"))
            .stdout(predicate::str::contains(" Su Mo Tu We Th Fr Sa"))
            .stdout(predicate::str::contains("  9 10 11 12 13 14*15"));
    }

    #[test]
    fn explicit_month_and_year() {
        calgrid()
            .args(["--no-color", "2", "2024"])
            .assert()
            .success()
            .stdout(predicate::str::contains("February 2024"))
            .stdout(predicate::str::contains(" 25 26 27 28 29"));
    }

    #[test]
    fn four_row_february() {
        let output = calgrid().args(["--no-color", "feb", "2015"]).output().unwrap();
        assert!(output.status.success());
        let stdout = String::from_utf8(output.stdout).unwrap();
        assert_eq!(stdout.lines().count(), 2 + 4);
        assert_eq!(stdout.lines().nth(2).unwrap(), "  1  2  3  4  5  6  7");
    }

    #[test]
    fn monday_start() {
        calgrid()
            .args(["--no-color", "-m", "6", "2024"])
            .assert()
            .success()
            .stdout(predicate::str::contains(" Mo Tu We Th Fr Sa Su"))
            .stdout(predicate::str::contains(format!("{}  1  2", " ".repeat(15))));
    }

    #[test]
    fn custom_labels() {
        calgrid()
            .args(["--no-color", "-w", "1", "--labels", "Вс,Пн,Вт,Ср,Чт,Пт,Сб"])
            .assert()
            .success()
            .stdout(predicate::str::contains(" Пн Вт Ср Чт Пт Сб Вс"));
    }
}

mod range {
    use super::*;

    #[test]
    fn relative_range_marks_disabled_days() {
        calgrid()
            .args(["--no-color", "--min", "-7", "--max", "30", "-o"])
            .assert()
            .success()
            .stdout(predicate::str::contains("- 2- 3- 4- 5- 6  7  8"))
            .stdout(predicate::str::contains("Range:  2024-06-07 .. 2024-07-15"))
            .stdout(predicate::str::contains("Months: [Jun] Jul"))
            .stdout(predicate::str::contains("Prev:   May 2024 (disabled)"));
    }

    #[test]
    fn compact_dates_are_absolute_bounds() {
        calgrid()
            .args(["--no-color", "--min", "20240601", "--max", "2024", "-o"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Range:  2024-06-01 .. 2024-01-01"))
            .stdout(predicate::str::contains("Years:  (none)"));
    }

    #[test]
    fn empty_range_lists_nothing() {
        calgrid()
            .args(["--no-color", "--min", "2024-06-01", "--max", "2024-05-01", "-o"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Years:  (none)"))
            .stdout(predicate::str::contains("Months: (none)"));
    }

    #[test]
    fn unparseable_bound_falls_back() {
        calgrid()
            .args(["--no-color", "--min", "someday", "-o"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Range:  1980-01-01 .. 2050-12-31"));
    }

    #[test]
    fn fallback_is_logged() {
        calgrid()
            .env("CALGRID_LOG", "warn")
            .args(["--no-color", "--min", "someday"])
            .assert()
            .success()
            .stderr(predicate::str::contains("falling back to default min bound"));
    }
}

mod navigation {
    use super::*;

    #[test]
    fn next_month() {
        calgrid()
            .args(["--no-color", "--next"])
            .assert()
            .success()
            .stdout(predicate::str::contains("July 2024"));
    }

    #[test]
    fn previous_month_across_year() {
        calgrid()
            .args(["--no-color", "--prev", "1", "2024"])
            .assert()
            .success()
            .stdout(predicate::str::contains("December 2023"));
    }

    #[test]
    fn navigation_is_clamped_to_range() {
        calgrid()
            .args(["--no-color", "--min", "-7", "--prev"])
            .assert()
            .success()
            .stdout(predicate::str::contains("June 2024"));
    }
}

mod errors {
    use super::*;

    #[test]
    fn invalid_month() {
        calgrid()
            .args(["13", "2024"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("calgrid: Invalid month: 13"));
    }

    #[test]
    fn invalid_week_start() {
        calgrid()
            .args(["-w", "9"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Invalid week start: 9 (must be 0-6)"));
    }

    #[test]
    fn conflicting_navigation() {
        calgrid().args(["--prev", "--next"]).assert().failure();
    }
}
