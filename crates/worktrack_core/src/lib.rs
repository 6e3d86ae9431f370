//! Core domain logic for the team work-location tracker.
//! This crate owns the record store, the upsert engine and the month
//! projection; presenters only call into it.

pub mod calendar;
pub mod config;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use calendar::{
    days_in_month, first_weekday, project, CalendarError, DayStatus, MonthCalendar, MonthView,
    WEEKDAY_LABELS,
};
pub use config::{TrackerConfig, DEFAULT_DATA_FILE};
pub use logging::{init_logging, logging_status, LogLevel};
pub use model::record::{StatusRecord, ValidationError, WorkStatus};
pub use model::roster::{Person, Roster, DEFAULT_MEMBERS};
pub use repo::status_repo::{
    CsvStatusRepository, InMemoryStatusRepository, StatusRepository, StoreError, StoreResult,
    CSV_HEADER,
};
pub use service::session::{SessionError, SessionResult, Submission, TrackerSession};
pub use service::upsert::{upsert, UpsertOutcome};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
