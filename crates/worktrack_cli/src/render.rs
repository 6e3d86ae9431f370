//! Plain-text rendering of tracker views.

use worktrack_core::{DayStatus, MonthView, StatusRecord, WorkStatus, WEEKDAY_LABELS};

const CELL_WIDTH: usize = 16;

/// Renders the month as Monday-first weeks.
///
/// Each day's column holds its number, then a `WFO` and a `WFH` block with one
/// member per line; a week gets as many lines as its fullest day needs.
pub fn month_grid(view: &MonthView) -> String {
    let calendar = &view.calendar;
    let mut out = format!("{} {}\n", calendar.month_name(), calendar.year);
    out.push_str(&row(WEEKDAY_LABELS.iter().map(|label| label.to_string())));
    out.push_str(&"-".repeat(CELL_WIDTH * 7));
    out.push('\n');

    for week in calendar.weeks() {
        let columns: Vec<Vec<String>> = week
            .iter()
            .map(|cell| {
                cell.and_then(|day| view.day(day).map(|status| day_lines(day, status)))
                    .unwrap_or_default()
            })
            .collect();
        let height = columns.iter().map(Vec::len).max().unwrap_or(0);

        for line in 0..height {
            let cells = columns
                .iter()
                .map(|column| column.get(line).cloned().unwrap_or_default());
            out.push_str(&row(cells));
        }
        out.push_str(&"-".repeat(CELL_WIDTH * 7));
        out.push('\n');
    }
    out
}

/// Renders records as a `Date Name Status` table.
pub fn raw_log(records: &[&StatusRecord]) -> String {
    let mut out = String::from("Date       Name             Status\n");
    for record in records {
        out.push_str(&format!(
            "{} {:<16} {}\n",
            record.date,
            record.person.as_str(),
            record.status
        ));
    }
    out
}

fn day_lines(day: u32, status: &DayStatus) -> Vec<String> {
    let mut lines = vec![day.to_string()];
    for work_status in WorkStatus::ALL {
        let people = status.members(work_status);
        if people.is_empty() {
            continue;
        }
        lines.push(work_status.to_string());
        lines.extend(people.iter().map(|person| format!("- {person}")));
    }
    lines
}

fn row(cells: impl Iterator<Item = String>) -> String {
    let mut line: String = cells.map(|cell| fit(&cell)).collect();
    let trimmed = line.trim_end().len();
    line.truncate(trimmed);
    line.push('\n');
    line
}

fn fit(cell: &str) -> String {
    let mut text: String = cell.chars().take(CELL_WIDTH - 1).collect();
    if cell.chars().count() > CELL_WIDTH - 1 {
        text.pop();
        text.push('~');
    }
    format!("{text:<width$}", width = CELL_WIDTH)
}

#[cfg(test)]
mod tests {
    use super::{fit, month_grid, raw_log, CELL_WIDTH};
    use chrono::NaiveDate;
    use worktrack_core::{project, Roster, StatusRecord, WorkStatus};

    #[test]
    fn grid_lists_names_under_their_day() {
        let roster = Roster::new(["Alice", "Bob"]).unwrap();
        let records = vec![
            StatusRecord::new(
                NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
                roster.resolve("Alice").unwrap(),
                WorkStatus::Home,
            ),
            StatusRecord::new(
                NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
                roster.resolve("Bob").unwrap(),
                WorkStatus::Office,
            ),
        ];
        let grid = month_grid(&project(&records, 2024, 3).unwrap());
        let lines: Vec<&str> = grid.lines().collect();

        assert_eq!(lines[0], "March 2024");
        assert!(lines[1].starts_with("Mon"));
        // 2024-03-01 is a Friday, the fifth column.
        assert_eq!(lines[3].trim_start(), "1               2               3");
        assert_eq!(lines[3].find('1'), Some(CELL_WIDTH * 4));
        assert_eq!(lines[4].trim(), "WFO");
        assert_eq!(lines[5].trim(), "- Bob");
        assert_eq!(lines[6].trim(), "WFH");
        assert_eq!(lines[7].trim(), "- Alice");
        assert_eq!(lines[5].find('-'), Some(CELL_WIDTH * 4));
        assert!(lines[8].starts_with("---"));
        assert!(grid.contains("31"));
    }

    #[test]
    fn grid_shows_every_member_on_a_full_day() {
        let roster = Roster::default();
        let day = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        let records: Vec<StatusRecord> = roster
            .members()
            .iter()
            .map(|person| StatusRecord::new(day, person.clone(), WorkStatus::Office))
            .collect();

        let grid = month_grid(&project(&records, 2024, 3).unwrap());

        for person in roster.members() {
            assert!(
                grid.contains(&format!("- {person}")),
                "{person} missing from grid:\n{grid}"
            );
        }
    }

    #[test]
    fn fit_truncates_long_cells() {
        let cell = fit("- Bartholomew-Longname");
        assert_eq!(cell.chars().count(), CELL_WIDTH);
        assert!(cell.trim_end().ends_with('~'));
    }

    #[test]
    fn raw_log_prints_one_line_per_record() {
        let roster = Roster::default();
        let record = StatusRecord::new(
            NaiveDate::from_ymd_opt(2024, 3, 5).unwrap(),
            roster.resolve("Pond").unwrap(),
            WorkStatus::Office,
        );
        let out = raw_log(&[&record]);
        assert_eq!(out.lines().count(), 2);
        assert!(out.lines().nth(1).unwrap().starts_with("2024-03-05 Pond"));
        assert!(out.ends_with("WFO\n"));
    }
}
