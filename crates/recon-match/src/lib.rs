#![deny(unsafe_code)]

//! `recon-match` — candidate matching for talk reconciliation.
//!
//! Pure matching crate: no IO, no error paths. Given one harvested record
//! and the authoritative candidates for its conference, returns at most one
//! confident match.

pub mod matcher;

pub use matcher::{MatchOutcome, match_record};
