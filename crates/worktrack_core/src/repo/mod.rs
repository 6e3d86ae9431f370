//! Repository layer for status records.
//!
//! # Responsibility
//! - Define the load/save contract over the complete record list.
//! - Keep CSV details inside the persistence boundary.
//!
//! # Invariants
//! - `save` always rewrites the full record list; there are no partial or
//!   append writes.
//! - Read paths reject invalid persisted rows instead of masking them.

pub mod status_repo;
