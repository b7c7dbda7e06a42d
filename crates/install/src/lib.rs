#![warn(clippy::pedantic)]
#![deny(clippy::all)]

//! Installation driver for the inst bootstrap installer
//!
//! Runs the two installation steps in order: copy the package tree into the
//! target directory, then create or merge the root manifest there.

mod installer;

pub use installer::Installer;
