#![deny(unsafe_code)]

//! `recon-engine` — the talk reconciliation engine.
//!
//! Pure engine crate: receives fully materialized record collections and the
//! canonical conference table, returns the merged and unmatched collections.
//! No CLI or IO dependencies.

pub mod driver;
pub mod error;
pub mod merge;
pub mod normalize;
pub mod partition;

pub use driver::{ReconOptions, ReconOutput, reconcile, reconcile_groups};
pub use error::ReconError;
pub use merge::{merge, merge_single};
pub use partition::{Partition, partition};
