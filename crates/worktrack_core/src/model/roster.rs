//! Closed team roster.
//!
//! # Responsibility
//! - Hold the ordered, fixed set of valid member names.
//! - Resolve free-form names into `Person` values.
//!
//! # Invariants
//! - Member names are trimmed, non-empty and unique.
//! - `Person` has no public constructor; `Roster::resolve` is the only way in.

use crate::model::record::ValidationError;
use serde::Serialize;
use std::fmt::{Display, Formatter};

/// Members used when no roster is configured.
pub const DEFAULT_MEMBERS: [&str; 3] = ["Pond", "Bank", "Pang"];

/// A roster member.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Person(String);

impl Person {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for Person {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Ordered set of team members allowed to log a status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roster {
    members: Vec<Person>,
}

impl Roster {
    /// Builds a roster from member names, preserving the given order.
    ///
    /// # Errors
    /// - `EmptyRoster` when no names are given.
    /// - `BlankMemberName` when a name is blank after trimming.
    /// - `DuplicateMember` when a trimmed name repeats.
    pub fn new<I, S>(names: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut members: Vec<Person> = Vec::new();
        for name in names {
            let trimmed = name.as_ref().trim();
            if trimmed.is_empty() {
                return Err(ValidationError::BlankMemberName);
            }
            if members.iter().any(|member| member.as_str() == trimmed) {
                return Err(ValidationError::DuplicateMember(trimmed.to_string()));
            }
            members.push(Person(trimmed.to_string()));
        }

        if members.is_empty() {
            return Err(ValidationError::EmptyRoster);
        }
        Ok(Self { members })
    }

    /// Resolves `name` to a roster member.
    ///
    /// Matching is exact (case-sensitive) after trimming surrounding
    /// whitespace.
    pub fn resolve(&self, name: &str) -> Result<Person, ValidationError> {
        let trimmed = name.trim();
        self.members
            .iter()
            .find(|member| member.as_str() == trimmed)
            .cloned()
            .ok_or_else(|| ValidationError::UnknownPerson(trimmed.to_string()))
    }

    pub fn contains(&self, person: &Person) -> bool {
        self.members.contains(person)
    }

    pub fn members(&self) -> &[Person] {
        &self.members
    }
}

impl Default for Roster {
    fn default() -> Self {
        Self {
            members: DEFAULT_MEMBERS
                .iter()
                .map(|name| Person((*name).to_string()))
                .collect(),
        }
    }
}
