#![deny(unsafe_code)]

//! `recon-cli` — command line frontend for the talk reconciler.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod summary;
pub mod types;
