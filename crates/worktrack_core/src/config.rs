//! Tracker configuration.
//!
//! # Responsibility
//! - Name the data file and roster a session runs against.
//!
//! # Invariants
//! - Defaults reproduce the stock deployment: `wfh_wfo_status.csv` in the
//!   working directory and the default three-member roster.

use crate::model::roster::Roster;
use std::path::PathBuf;

/// Data file used when none is configured.
pub const DEFAULT_DATA_FILE: &str = "wfh_wfo_status.csv";

/// Session configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackerConfig {
    pub data_file: PathBuf,
    pub roster: Roster,
}

impl TrackerConfig {
    pub fn with_data_file(mut self, data_file: impl Into<PathBuf>) -> Self {
        self.data_file = data_file.into();
        self
    }

    pub fn with_roster(mut self, roster: Roster) -> Self {
        self.roster = roster;
        self
    }
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            roster: Roster::default(),
        }
    }
}
