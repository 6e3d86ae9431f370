//! Session-scoped tracker state.
//!
//! # Responsibility
//! - Own the loaded record list, the roster and the repository handle.
//! - Sequence submissions as validate, upsert on a working copy, save, commit.
//! - Serve month projections and the raw log from committed state.
//!
//! # Invariants
//! - Invalid names or statuses are rejected before any record is touched.
//! - The in-memory list changes only after `save` succeeds, so it always
//!   equals the last durable state.

use crate::calendar::{project, CalendarError, MonthView};
use crate::config::TrackerConfig;
use crate::model::record::{StatusRecord, ValidationError, WorkStatus};
use crate::model::roster::Roster;
use crate::repo::status_repo::{CsvStatusRepository, StatusRepository, StoreError};
use crate::service::upsert::{upsert, UpsertOutcome};
use chrono::{Datelike, NaiveDate};
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type SessionResult<T> = Result<T, SessionError>;

/// Session error for tracker use-cases.
#[derive(Debug)]
pub enum SessionError {
    /// Submission rejected before mutation.
    Validation(ValidationError),
    /// Load or save failure.
    Store(StoreError),
    /// Requested month does not exist.
    Calendar(CalendarError),
}

impl Display for SessionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Store(err) => write!(f, "{err}"),
            Self::Calendar(err) => write!(f, "{err}"),
        }
    }
}

impl Error for SessionError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Store(err) => Some(err),
            Self::Calendar(err) => Some(err),
        }
    }
}

impl From<ValidationError> for SessionError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<StoreError> for SessionError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

impl From<CalendarError> for SessionError {
    fn from(value: CalendarError) -> Self {
        Self::Calendar(value)
    }
}

/// Committed result of one submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub record: StatusRecord,
    pub outcome: UpsertOutcome,
}

impl Submission {
    /// User-facing acknowledgement line.
    pub fn message(&self) -> String {
        let StatusRecord {
            date,
            person,
            status,
        } = &self.record;
        match self.outcome {
            UpsertOutcome::Updated { .. } => {
                format!("Updated status for {person} on {date} to {status}.")
            }
            UpsertOutcome::Inserted => {
                format!("Logged status for {person} on {date} as {status}.")
            }
        }
    }
}

/// Tracker session over one repository.
pub struct TrackerSession<R: StatusRepository> {
    repo: R,
    roster: Roster,
    records: Vec<StatusRecord>,
}

impl TrackerSession<CsvStatusRepository> {
    /// Opens a CSV-backed session described by `config`.
    pub fn open(config: &TrackerConfig) -> SessionResult<Self> {
        let repo = CsvStatusRepository::new(config.data_file.clone(), config.roster.clone());
        Self::with_repository(repo, config.roster.clone())
    }
}

impl<R: StatusRepository> TrackerSession<R> {
    /// Creates a session and loads the full record list from `repo`.
    pub fn with_repository(repo: R, roster: Roster) -> SessionResult<Self> {
        let records = repo.load()?;
        info!(
            "event=session_open module=service status=ok rows={} members={}",
            records.len(),
            roster.members().len()
        );
        Ok(Self {
            repo,
            roster,
            records,
        })
    }

    /// Discards in-memory state and re-reads the repository.
    pub fn reload(&mut self) -> SessionResult<()> {
        self.records = self.repo.load()?;
        Ok(())
    }

    /// Validates text input and records it.
    ///
    /// # Errors
    /// - `Validation` when `name` is not in the roster or `status` is not a
    ///   wire code; records are unchanged.
    /// - `Store` when saving fails; records are unchanged.
    pub fn submit(
        &mut self,
        name: &str,
        date: NaiveDate,
        status: &str,
    ) -> SessionResult<Submission> {
        let status = match status.parse::<WorkStatus>() {
            Ok(status) => status,
            Err(err) => {
                warn!("event=status_submit module=service status=rejected reason=unknown_status");
                return Err(err.into());
            }
        };
        self.submit_status(name, date, status)
    }

    /// Records an already-typed status for `name` on `date`.
    pub fn submit_status(
        &mut self,
        name: &str,
        date: NaiveDate,
        status: WorkStatus,
    ) -> SessionResult<Submission> {
        let person = match self.roster.resolve(name) {
            Ok(person) => person,
            Err(err) => {
                warn!("event=status_submit module=service status=rejected reason=unknown_person");
                return Err(err.into());
            }
        };

        let mut working = self.records.clone();
        let outcome = upsert(&mut working, &person, date, status);
        self.repo.save(&working)?;
        self.records = working;

        info!(
            "event=status_submit module=service status=ok update={} date={} code={}",
            outcome.was_update(),
            date,
            status
        );
        Ok(Submission {
            record: StatusRecord::new(date, person, status),
            outcome,
        })
    }

    /// Projects committed records onto (`year`, `month`).
    pub fn month_view(&self, year: i32, month: u32) -> SessionResult<MonthView> {
        Ok(project(&self.records, year, month)?)
    }

    /// Projects committed records onto the month containing `today`.
    pub fn current_month_view(&self, today: NaiveDate) -> SessionResult<MonthView> {
        self.month_view(today.year(), today.month())
    }

    /// All records, newest date first; equal dates keep stored order.
    pub fn raw_log(&self) -> Vec<&StatusRecord> {
        let mut log: Vec<&StatusRecord> = self.records.iter().collect();
        log.sort_by(|a, b| b.date.cmp(&a.date));
        log
    }

    pub fn records(&self) -> &[StatusRecord] {
        &self.records
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }
}
