//! Status record model.
//!
//! # Responsibility
//! - Define `StatusRecord` and the `WorkStatus` enumeration.
//! - Map statuses to and from their persisted wire codes.
//!
//! # Invariants
//! - Wire codes are exactly `WFO` and `WFH`; nothing else parses.
//! - Records are never deleted, only created or overwritten.

use crate::model::roster::Person;
use chrono::NaiveDate;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Where a team member works on a given day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WorkStatus {
    /// Working from the office (`WFO`).
    Office,
    /// Working from home (`WFH`).
    Home,
}

impl WorkStatus {
    /// All statuses in presentation order.
    pub const ALL: [WorkStatus; 2] = [WorkStatus::Office, WorkStatus::Home];

    /// Returns the persisted wire code.
    pub fn code(self) -> &'static str {
        match self {
            Self::Office => "WFO",
            Self::Home => "WFH",
        }
    }
}

impl Display for WorkStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for WorkStatus {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "WFO" => Ok(Self::Office),
            "WFH" => Ok(Self::Home),
            other => Err(ValidationError::UnknownStatus(other.to_string())),
        }
    }
}

/// One member's work location for one calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StatusRecord {
    pub date: NaiveDate,
    pub person: Person,
    pub status: WorkStatus,
}

impl StatusRecord {
    pub fn new(date: NaiveDate, person: Person, status: WorkStatus) -> Self {
        Self {
            date,
            person,
            status,
        }
    }

    /// Returns whether this record is keyed by `(person, date)`.
    pub fn is_keyed_by(&self, person: &Person, date: NaiveDate) -> bool {
        self.date == date && &self.person == person
    }
}

/// Rejected roster or status input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Name is not a member of the configured roster.
    UnknownPerson(String),
    /// Status text is not one of the wire codes.
    UnknownStatus(String),
    /// Roster was built without any member.
    EmptyRoster,
    /// Roster member name is blank after trimming.
    BlankMemberName,
    /// Roster lists the same member twice.
    DuplicateMember(String),
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownPerson(name) => write!(f, "`{name}` is not a roster member"),
            Self::UnknownStatus(value) => {
                write!(f, "unknown status `{value}`; expected WFO|WFH")
            }
            Self::EmptyRoster => write!(f, "roster must contain at least one member"),
            Self::BlankMemberName => write!(f, "roster member names cannot be blank"),
            Self::DuplicateMember(name) => write!(f, "roster lists `{name}` more than once"),
        }
    }
}

impl Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::{ValidationError, WorkStatus};

    #[test]
    fn status_parses_only_wire_codes() {
        assert_eq!("WFO".parse::<WorkStatus>().unwrap(), WorkStatus::Office);
        assert_eq!(" WFH ".parse::<WorkStatus>().unwrap(), WorkStatus::Home);

        let err = "office".parse::<WorkStatus>().unwrap_err();
        assert_eq!(err, ValidationError::UnknownStatus("office".to_string()));
        assert!("wfo".parse::<WorkStatus>().is_err());
    }

    #[test]
    fn status_display_matches_code() {
        for status in WorkStatus::ALL {
            assert_eq!(status.to_string(), status.code());
        }
    }
}
