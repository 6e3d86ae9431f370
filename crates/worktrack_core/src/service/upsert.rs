//! Upsert engine keyed by `(person, date)`.
//!
//! # Responsibility
//! - Insert a record for a new key or overwrite the status of an existing one.
//! - Report which of the two happened, with the replaced status.
//!
//! # Invariants
//! - Inputs are already validated: `Person` comes from the roster and
//!   `WorkStatus` is a closed enum.
//! - Existing records are overwritten in place, never removed or reordered.

use crate::model::record::{StatusRecord, WorkStatus};
use crate::model::roster::Person;
use chrono::NaiveDate;

/// What an upsert did to the record list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    /// A new record was appended.
    Inserted,
    /// An existing record was overwritten.
    Updated { previous: WorkStatus },
}

impl UpsertOutcome {
    pub fn was_update(self) -> bool {
        matches!(self, Self::Updated { .. })
    }
}

/// Inserts or overwrites the record for (`person`, `date`).
///
/// If persisted data already holds duplicate rows for the key, all of them
/// are overwritten so the key reads consistently afterwards.
pub fn upsert(
    records: &mut Vec<StatusRecord>,
    person: &Person,
    date: NaiveDate,
    status: WorkStatus,
) -> UpsertOutcome {
    let mut previous = None;
    for record in records
        .iter_mut()
        .filter(|record| record.is_keyed_by(person, date))
    {
        previous.get_or_insert(record.status);
        record.status = status;
    }

    match previous {
        Some(previous) => UpsertOutcome::Updated { previous },
        None => {
            records.push(StatusRecord::new(date, person.clone(), status));
            UpsertOutcome::Inserted
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{upsert, UpsertOutcome};
    use crate::model::record::{StatusRecord, WorkStatus};
    use crate::model::roster::Roster;
    use chrono::NaiveDate;

    #[test]
    fn upsert_inserts_then_overwrites_in_place() {
        let roster = Roster::new(["Alice", "Bob"]).unwrap();
        let alice = roster.resolve("Alice").unwrap();
        let bob = roster.resolve("Bob").unwrap();
        let day = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        let mut records = Vec::new();

        assert_eq!(
            upsert(&mut records, &alice, day, WorkStatus::Office),
            UpsertOutcome::Inserted
        );
        assert_eq!(
            upsert(&mut records, &bob, day, WorkStatus::Home),
            UpsertOutcome::Inserted
        );
        let outcome = upsert(&mut records, &alice, day, WorkStatus::Home);

        assert_eq!(
            outcome,
            UpsertOutcome::Updated {
                previous: WorkStatus::Office
            }
        );
        assert!(outcome.was_update());
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].person, alice);
        assert_eq!(records[0].status, WorkStatus::Home);
        assert_eq!(records[1].person, bob);
    }

    #[test]
    fn upsert_overwrites_every_duplicate_row_for_the_key() {
        let roster = Roster::default();
        let pond = roster.resolve("Pond").unwrap();
        let bank = roster.resolve("Bank").unwrap();
        let day = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        let mut records = vec![
            StatusRecord::new(day, pond.clone(), WorkStatus::Home),
            StatusRecord::new(day, bank.clone(), WorkStatus::Home),
            StatusRecord::new(day, pond.clone(), WorkStatus::Office),
        ];

        let outcome = upsert(&mut records, &pond, day, WorkStatus::Office);

        assert_eq!(
            outcome,
            UpsertOutcome::Updated {
                previous: WorkStatus::Home
            }
        );
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].status, WorkStatus::Office);
        assert_eq!(records[1].status, WorkStatus::Home);
        assert_eq!(records[2].status, WorkStatus::Office);
    }

    #[test]
    fn same_person_on_another_day_is_a_new_record() {
        let roster = Roster::default();
        let pond = roster.resolve("Pond").unwrap();
        let mut records = Vec::new();

        upsert(
            &mut records,
            &pond,
            NaiveDate::from_ymd_opt(2024, 3, 5).unwrap(),
            WorkStatus::Office,
        );
        let outcome = upsert(
            &mut records,
            &pond,
            NaiveDate::from_ymd_opt(2024, 3, 6).unwrap(),
            WorkStatus::Office,
        );

        assert_eq!(outcome, UpsertOutcome::Inserted);
        assert_eq!(records.len(), 2);
    }
}
