#![deny(clippy::pedantic, unsafe_code)]
#![allow(clippy::module_name_repetitions)]

//! Shared type definitions for the inst installer

pub mod reports;

pub use reports::{CopyStats, InstallReport, ManifestOutcome};
