//! Domain model for daily work-location records.
//!
//! # Responsibility
//! - Define the record shape shared by storage, upsert and projection.
//! - Own the closed roster and status enumerations.
//!
//! # Invariants
//! - A `Person` can only be obtained by resolving a name against a `Roster`.
//! - At most one record exists per `(date, person)`; the upsert engine, not
//!   the record type, enforces this.

pub mod record;
pub mod roster;
