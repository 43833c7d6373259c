//! Domain model for developers and their profiles.
//!
//! # Invariants
//! - Identifiers are assigned by the store and never rewritten by core.
//! - Passwords are write-only: no read model carries a password field.

pub mod developer;
pub mod profile;
