#![deny(unsafe_code)]

//! Data model for conference talk reconciliation.
//!
//! Pure types, no IO: the fixed-field [`TalkRecord`], the canonical
//! [`ConferenceIndex`] override table, and the exported column order.

pub mod conference;
pub mod record;

pub use conference::{ConferenceIndex, ConferenceInfo};
pub use record::{OUTPUT_COLUMNS, TalkRecord};
