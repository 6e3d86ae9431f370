use super::month::{CalendarError, MonthCalendar};
use crate::model::record::{StatusRecord, WorkStatus};
use crate::model::roster::Person;
use chrono::Datelike;
use serde::Serialize;
use std::collections::BTreeMap;

/// Who is where on one day.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DayStatus {
    pub office: Vec<Person>,
    pub home: Vec<Person>,
}

impl DayStatus {
    pub fn is_empty(&self) -> bool {
        self.office.is_empty() && self.home.is_empty()
    }

    /// Members with `status`, in record order.
    pub fn members(&self, status: WorkStatus) -> &[Person] {
        match status {
            WorkStatus::Office => &self.office,
            WorkStatus::Home => &self.home,
        }
    }
}

/// Day-by-day status grid for one month.
///
/// Holds an entry for every day `1..=days_in_month`, including empty days.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthView {
    pub calendar: MonthCalendar,
    pub days: BTreeMap<u32, DayStatus>,
}

impl MonthView {
    pub fn day(&self, day: u32) -> Option<&DayStatus> {
        self.days.get(&day)
    }
}

/// Projects `records` onto the grid of (`year`, `month`).
///
/// Only records dated inside the month are considered; within each day the
/// office and home lists keep the order of `records`.
pub fn project(
    records: &[StatusRecord],
    year: i32,
    month: u32,
) -> Result<MonthView, CalendarError> {
    let calendar = MonthCalendar::new(year, month)?;
    let mut days: BTreeMap<u32, DayStatus> = (1..=calendar.days_in_month)
        .map(|day| (day, DayStatus::default()))
        .collect();

    for record in records.iter().filter(|record| calendar.contains(record.date)) {
        if let Some(slot) = days.get_mut(&record.date.day()) {
            match record.status {
                WorkStatus::Office => slot.office.push(record.person.clone()),
                WorkStatus::Home => slot.home.push(record.person.clone()),
            }
        }
    }

    Ok(MonthView { calendar, days })
}
