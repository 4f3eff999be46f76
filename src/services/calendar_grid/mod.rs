//! Month grid layout for the calendar view.
//!
//! Rows always hold seven consecutive days. The first row starts on the
//! configured week start on or before the 1st; the last row is the one that
//! contains the final day of the month, so a month spans four to six rows.

use chrono::{Datelike, Duration, NaiveDate, Weekday};

/// One cell of the month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridDay {
    pub date: NaiveDate,
    /// Belongs to the previous or next month.
    pub outside: bool,
    pub today: bool,
    pub selected: bool,
}

/// Build the weeks covering `month`'s month.
pub fn month_grid(
    month: NaiveDate,
    week_start: Weekday,
    today: NaiveDate,
    selected: Option<NaiveDate>,
) -> Vec<[GridDay; 7]> {
    let first_of_month = month - Duration::days(i64::from(month.day0()));
    let lead = i64::from(days_between(week_start, first_of_month.weekday()));
    let mut current = first_of_month - Duration::days(lead);

    let mut weeks = Vec::with_capacity(6);
    loop {
        let mut week = [GridDay {
            date: current,
            outside: false,
            today: false,
            selected: false,
        }; 7];
        for cell in week.iter_mut() {
            *cell = GridDay {
                date: current,
                outside: current.month() != month.month() || current.year() != month.year(),
                today: current == today,
                selected: selected == Some(current),
            };
            current += Duration::days(1);
        }
        weeks.push(week);

        // The day after this row is past the month, or is the 1st of the next one.
        if current.month() != month.month() || current.year() != month.year() {
            break;
        }
    }

    weeks
}

/// Weekday headers in grid order, two-letter English abbreviations.
pub fn weekday_headers(week_start: Weekday) -> [&'static str; 7] {
    let mut headers = [""; 7];
    let mut day = week_start;
    for header in headers.iter_mut() {
        *header = weekday_abbrev(day);
        day = day.succ();
    }
    headers
}

fn weekday_abbrev(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Mo",
        Weekday::Tue => "Tu",
        Weekday::Wed => "We",
        Weekday::Thu => "Th",
        Weekday::Fri => "Fr",
        Weekday::Sat => "Sa",
        Weekday::Sun => "Su",
    }
}

/// Days from `from` forward to `to` (0..=6).
fn days_between(from: Weekday, to: Weekday) -> u32 {
    (7 + to.num_days_from_monday() - from.num_days_from_monday()) % 7
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    // Feb 2026 starts on a Sunday and has 28 days.
    #[test_case(date(2026, 2, 10), Weekday::Sun, 4 ; "four rows")]
    #[test_case(date(2026, 2, 10), Weekday::Mon, 5 ; "shifted week start")]
    // Aug 2026 starts on a Saturday and has 31 days.
    #[test_case(date(2026, 8, 1), Weekday::Sun, 6 ; "six rows")]
    fn test_row_count(month: NaiveDate, week_start: Weekday, rows: usize) {
        let grid = month_grid(month, week_start, date(2000, 1, 1), None);
        assert_eq!(grid.len(), rows);
    }

    #[test]
    fn test_rows_start_on_week_start_and_are_consecutive() {
        let grid = month_grid(date(2026, 10, 19), Weekday::Mon, date(2026, 10, 19), None);
        let mut expected = grid[0][0].date;
        assert_eq!(expected.weekday(), Weekday::Mon);
        for week in &grid {
            for cell in week {
                assert_eq!(cell.date, expected);
                expected += Duration::days(1);
            }
        }
    }

    #[test]
    fn test_flags_outside_today_selected() {
        let today = date(2026, 10, 19);
        let selected = date(2026, 10, 3);
        let grid = month_grid(today, Weekday::Sun, today, Some(selected));

        // Oct 2026 starts on a Thursday, so the first row begins Sep 27.
        assert_eq!(grid[0][0].date, date(2026, 9, 27));
        assert!(grid[0][0].outside);
        assert!(!grid[0][4].outside);

        let cells: Vec<&GridDay> = grid.iter().flatten().collect();
        assert_eq!(cells.iter().filter(|c| c.today).count(), 1);
        assert_eq!(cells.iter().filter(|c| c.selected).count(), 1);
        assert!(cells.iter().any(|c| c.date == date(2026, 10, 31) && !c.outside));
    }

    #[test]
    fn test_weekday_headers_follow_week_start() {
        assert_eq!(weekday_headers(Weekday::Sun)[0], "Su");
        assert_eq!(weekday_headers(Weekday::Mon)[6], "Su");
    }
}
