use chrono::{Datelike, Month, NaiveDate};
use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Short weekday headers in Monday-first order.
pub const WEEKDAY_LABELS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// Rejected calendar coordinates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CalendarError {
    InvalidMonth(u32),
    YearOutOfRange(i32),
}

impl Display for CalendarError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidMonth(month) => write!(f, "month must be 1..=12, got {month}"),
            Self::YearOutOfRange(year) => write!(f, "year {year} is out of supported range"),
        }
    }
}

impl Error for CalendarError {}

/// Returns the number of days in `month` of `year`, leap years included.
pub fn days_in_month(year: i32, month: u32) -> Result<u32, CalendarError> {
    let first = first_of_month(year, month)?;
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    }
    .ok_or(CalendarError::YearOutOfRange(year))?;

    Ok(next.signed_duration_since(first).num_days() as u32)
}

/// Returns the weekday of day 1, Monday = 0 through Sunday = 6.
pub fn first_weekday(year: i32, month: u32) -> Result<u32, CalendarError> {
    Ok(first_of_month(year, month)?
        .weekday()
        .num_days_from_monday())
}

fn first_of_month(year: i32, month: u32) -> Result<NaiveDate, CalendarError> {
    if !(1..=12).contains(&month) {
        return Err(CalendarError::InvalidMonth(month));
    }
    NaiveDate::from_ymd_opt(year, month, 1).ok_or(CalendarError::YearOutOfRange(year))
}

/// Geometry of one calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MonthCalendar {
    pub year: i32,
    pub month: u32,
    pub days_in_month: u32,
    /// Weekday of day 1, Monday = 0.
    pub first_weekday: u32,
}

impl MonthCalendar {
    pub fn new(year: i32, month: u32) -> Result<Self, CalendarError> {
        Ok(Self {
            year,
            month,
            days_in_month: days_in_month(year, month)?,
            first_weekday: first_weekday(year, month)?,
        })
    }

    /// English month name, e.g. `March`.
    pub fn month_name(&self) -> &'static str {
        u8::try_from(self.month)
            .ok()
            .and_then(|month| Month::try_from(month).ok())
            .map(|month| month.name())
            .unwrap_or("")
    }

    /// Returns whether `date` falls inside this month.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    /// Lays the month out as Monday-first weeks.
    ///
    /// Cells before day 1 and after the last day are `None`; every week has
    /// exactly seven cells.
    pub fn weeks(&self) -> Vec<[Option<u32>; 7]> {
        let mut weeks = Vec::new();
        let mut week = [None; 7];
        let mut column = self.first_weekday as usize;

        for day in 1..=self.days_in_month {
            week[column] = Some(day);
            column += 1;
            if column == 7 {
                weeks.push(week);
                week = [None; 7];
                column = 0;
            }
        }
        if column != 0 {
            weeks.push(week);
        }
        weeks
    }
}

#[cfg(test)]
mod tests {
    use super::{days_in_month, first_weekday, CalendarError, MonthCalendar};

    #[test]
    fn days_in_month_handles_leap_years() {
        assert_eq!(days_in_month(2024, 2).unwrap(), 29);
        assert_eq!(days_in_month(2023, 2).unwrap(), 28);
        assert_eq!(days_in_month(1900, 2).unwrap(), 28);
        assert_eq!(days_in_month(2000, 2).unwrap(), 29);
        assert_eq!(days_in_month(2024, 12).unwrap(), 31);
        assert_eq!(days_in_month(2024, 4).unwrap(), 30);
    }

    #[test]
    fn invalid_month_is_rejected() {
        assert_eq!(days_in_month(2024, 0), Err(CalendarError::InvalidMonth(0)));
        assert_eq!(first_weekday(2024, 13), Err(CalendarError::InvalidMonth(13)));
    }

    #[test]
    fn first_weekday_is_monday_based() {
        // 2024-03-01 was a Friday, 2024-04-01 a Monday, 2024-09-01 a Sunday.
        assert_eq!(first_weekday(2024, 3).unwrap(), 4);
        assert_eq!(first_weekday(2024, 4).unwrap(), 0);
        assert_eq!(first_weekday(2024, 9).unwrap(), 6);
    }

    #[test]
    fn weeks_pad_leading_and_trailing_cells() {
        let calendar = MonthCalendar::new(2024, 3).unwrap();
        let weeks = calendar.weeks();

        assert_eq!(weeks.len(), 5);
        assert_eq!(weeks[0], [None, None, None, None, Some(1), Some(2), Some(3)]);
        assert_eq!(
            weeks[4],
            [Some(25), Some(26), Some(27), Some(28), Some(29), Some(30), Some(31)]
        );
        let cells: Vec<u32> = weeks.iter().flatten().flatten().copied().collect();
        assert_eq!(cells, (1..=31).collect::<Vec<_>>());
    }

    #[test]
    fn month_name_is_english() {
        assert_eq!(MonthCalendar::new(2024, 3).unwrap().month_name(), "March");
        assert_eq!(MonthCalendar::new(2023, 12).unwrap().month_name(), "December");
    }
}
