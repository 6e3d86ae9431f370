//! Status record repository contracts and CSV implementation.
//!
//! # Responsibility
//! - Load every persisted record into memory, normalized to date-only values.
//! - Persist the complete record list as a flat `Date,Name,Status` table.
//!
//! # Invariants
//! - A missing data file is an empty initial state, and is created with just
//!   the header row on first load.
//! - Every save is a full rewrite through a sibling temp file; a failed save
//!   leaves the previous file in place.
//! - Invalid rows are reported with their 1-based file line.

use crate::model::record::{StatusRecord, WorkStatus};
use crate::model::roster::Roster;
use chrono::NaiveDate;
use log::{error, info, warn};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;
use std::cell::RefCell;
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tempfile::NamedTempFile;

/// Header row of the persisted table, in write order.
pub const CSV_HEADER: [&str; 3] = ["Date", "Name", "Status"];

static DATE_CELL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([0-9]{4}-[0-9]{2}-[0-9]{2})(?:[T ]\S.*)?$").expect("valid date cell regex")
});

pub type StoreResult<T> = Result<T, StoreError>;

/// Persistence error for status record storage.
#[derive(Debug)]
pub enum StoreError {
    Io { path: PathBuf, source: std::io::Error },
    Csv(csv::Error),
    MissingColumn(&'static str),
    InvalidRow { line: u64, message: String },
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "{}: {source}", path.display()),
            Self::Csv(err) => write!(f, "{err}"),
            Self::MissingColumn(column) => {
                write!(f, "status file is missing the `{column}` column")
            }
            Self::InvalidRow { line, message } => {
                write!(f, "invalid status row at line {line}: {message}")
            }
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Csv(err) => Some(err),
            Self::MissingColumn(_) => None,
            Self::InvalidRow { .. } => None,
        }
    }
}

impl From<csv::Error> for StoreError {
    fn from(value: csv::Error) -> Self {
        Self::Csv(value)
    }
}

/// Repository interface over the complete status record list.
pub trait StatusRepository {
    /// Reads every persisted record.
    fn load(&self) -> StoreResult<Vec<StatusRecord>>;
    /// Replaces the persisted state with exactly `records`.
    fn save(&self, records: &[StatusRecord]) -> StoreResult<()>;
}

impl<R: StatusRepository + ?Sized> StatusRepository for &R {
    fn load(&self) -> StoreResult<Vec<StatusRecord>> {
        (**self).load()
    }

    fn save(&self, records: &[StatusRecord]) -> StoreResult<()> {
        (**self).save(records)
    }
}

#[derive(Debug, Deserialize)]
struct CsvRow {
    #[serde(rename = "Date")]
    date: String,
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "Status")]
    status: String,
}

/// CSV-file-backed status repository.
#[derive(Debug, Clone)]
pub struct CsvStatusRepository {
    path: PathBuf,
    roster: Roster,
}

impl CsvStatusRepository {
    /// Creates a repository for `path`; names read back are resolved against
    /// `roster`.
    pub fn new(path: impl Into<PathBuf>, roster: Roster) -> Self {
        Self {
            path: path.into(),
            roster,
        }
    }

    fn io_error(&self, source: std::io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }

    fn create_with_header(&self) -> StoreResult<()> {
        if let Some(parent) = non_empty_parent(&self.path) {
            std::fs::create_dir_all(parent).map_err(|err| self.io_error(err))?;
        }
        self.write_all(&[])
    }

    fn read_all(&self) -> StoreResult<Vec<StatusRecord>> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_path(&self.path)?;

        let headers = reader.headers()?.clone();
        if headers.is_empty() {
            return Ok(Vec::new());
        }
        for column in CSV_HEADER {
            if !headers.iter().any(|header| header == column) {
                return Err(StoreError::MissingColumn(column));
            }
        }

        let mut records = Vec::new();
        let mut seen = HashSet::new();
        for row in reader.records() {
            let row = row?;
            let line = row.position().map(|pos| pos.line()).unwrap_or(0);
            let parsed: CsvRow = row
                .deserialize(Some(&headers))
                .map_err(|err| StoreError::InvalidRow {
                    line,
                    message: err.to_string(),
                })?;
            let record = self.parse_row(&parsed).map_err(|message| StoreError::InvalidRow {
                line,
                message,
            })?;

            if !seen.insert((record.date, record.person.clone())) {
                warn!(
                    "event=store_load module=repo status=warn duplicate_key=true line={} date={}",
                    line, record.date
                );
            }
            records.push(record);
        }

        Ok(records)
    }

    fn parse_row(&self, row: &CsvRow) -> Result<StatusRecord, String> {
        let date = parse_date_cell(&row.date)?;
        let person = self.roster.resolve(&row.name).map_err(|err| err.to_string())?;
        let status = row
            .status
            .parse::<WorkStatus>()
            .map_err(|err| err.to_string())?;
        Ok(StatusRecord::new(date, person, status))
    }

    fn write_all(&self, records: &[StatusRecord]) -> StoreResult<()> {
        let dir = non_empty_parent(&self.path).unwrap_or_else(|| Path::new("."));
        let mut temp = NamedTempFile::new_in(dir).map_err(|err| self.io_error(err))?;

        {
            let mut writer = csv::WriterBuilder::new()
                .has_headers(false)
                .terminator(csv::Terminator::Any(b'\n'))
                .from_writer(temp.as_file_mut());
            writer.write_record(CSV_HEADER)?;
            for record in records {
                let date = record.date.format("%Y-%m-%d").to_string();
                writer.write_record([
                    date.as_str(),
                    record.person.as_str(),
                    record.status.code(),
                ])?;
            }
            writer.flush().map_err(|err| self.io_error(err))?;
        }
        temp.as_file_mut()
            .sync_all()
            .map_err(|err| self.io_error(err))?;

        // Keep the existing file's mode; the temp file starts out owner-only.
        if let Ok(existing) = std::fs::metadata(&self.path) {
            temp.as_file()
                .set_permissions(existing.permissions())
                .map_err(|err| self.io_error(err))?;
        }

        temp.persist(&self.path)
            .map_err(|err| self.io_error(err.error))?;
        Ok(())
    }
}

impl StatusRepository for CsvStatusRepository {
    fn load(&self) -> StoreResult<Vec<StatusRecord>> {
        let started_at = Instant::now();
        info!(
            "event=store_load module=repo status=start path={}",
            self.path.display()
        );

        if !self.path.exists() {
            self.create_with_header().inspect_err(|err| {
                error!(
                    "event=store_load module=repo status=error duration_ms={} error_code=store_create_failed error={}",
                    started_at.elapsed().as_millis(),
                    err
                );
            })?;
            info!(
                "event=store_load module=repo status=ok created=true rows=0 duration_ms={}",
                started_at.elapsed().as_millis()
            );
            return Ok(Vec::new());
        }

        match self.read_all() {
            Ok(records) => {
                info!(
                    "event=store_load module=repo status=ok rows={} duration_ms={}",
                    records.len(),
                    started_at.elapsed().as_millis()
                );
                Ok(records)
            }
            Err(err) => {
                error!(
                    "event=store_load module=repo status=error duration_ms={} error_code=store_read_failed error={}",
                    started_at.elapsed().as_millis(),
                    err
                );
                Err(err)
            }
        }
    }

    fn save(&self, records: &[StatusRecord]) -> StoreResult<()> {
        let started_at = Instant::now();
        match self.write_all(records) {
            Ok(()) => {
                info!(
                    "event=store_save module=repo status=ok rows={} duration_ms={}",
                    records.len(),
                    started_at.elapsed().as_millis()
                );
                Ok(())
            }
            Err(err) => {
                error!(
                    "event=store_save module=repo status=error rows={} duration_ms={} error_code=store_write_failed error={}",
                    records.len(),
                    started_at.elapsed().as_millis(),
                    err
                );
                Err(err)
            }
        }
    }
}

/// Volatile repository holding records in memory.
#[derive(Debug, Default)]
pub struct InMemoryStatusRepository {
    records: RefCell<Vec<StatusRecord>>,
}

impl InMemoryStatusRepository {
    pub fn new(records: Vec<StatusRecord>) -> Self {
        Self {
            records: RefCell::new(records),
        }
    }

    /// Returns a copy of the currently stored records.
    pub fn snapshot(&self) -> Vec<StatusRecord> {
        self.records.borrow().clone()
    }
}

impl StatusRepository for InMemoryStatusRepository {
    fn load(&self) -> StoreResult<Vec<StatusRecord>> {
        Ok(self.snapshot())
    }

    fn save(&self, records: &[StatusRecord]) -> StoreResult<()> {
        *self.records.borrow_mut() = records.to_vec();
        Ok(())
    }
}

/// Parses a persisted `Date` cell, dropping any time-of-day suffix.
pub fn parse_date_cell(value: &str) -> Result<NaiveDate, String> {
    let trimmed = value.trim();
    let caps = DATE_CELL_RE
        .captures(trimmed)
        .ok_or_else(|| format!("invalid date `{trimmed}`; expected YYYY-MM-DD"))?;
    NaiveDate::parse_from_str(&caps[1], "%Y-%m-%d")
        .map_err(|err| format!("invalid date `{trimmed}`: {err}"))
}

fn non_empty_parent(path: &Path) -> Option<&Path> {
    path.parent().filter(|parent| !parent.as_os_str().is_empty())
}
