//! Core use-case services.
//!
//! # Responsibility
//! - Apply submissions to the in-memory record list (upsert engine).
//! - Own session state and sequence validate, upsert, save and commit.
//!
//! # Invariants
//! - The upsert engine never persists; the session saves before committing.

pub mod session;
pub mod upsert;
