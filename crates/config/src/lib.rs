#![deny(clippy::pedantic, unsafe_code)]
#![allow(clippy::module_name_repetitions)]

//! Configuration for the inst installer
//!
//! The installer takes no configuration file. Its only inputs are two paths:
//! the package root it copies from and the directory it installs into. Both
//! are derived once at startup and passed explicitly to each step.

pub mod constants;

use inst_errors::{ConfigError, Error};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Source and target locations for one installer run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InstallPaths {
    /// Root of the installer's own package (read-only)
    pub source_root: PathBuf,
    /// Installation directory (read-write)
    pub target_dir: PathBuf,
}

impl InstallPaths {
    #[must_use]
    pub fn new(source_root: impl Into<PathBuf>, target_dir: impl Into<PathBuf>) -> Self {
        Self {
            source_root: source_root.into(),
            target_dir: target_dir.into(),
        }
    }

    /// Derive paths from the running process
    ///
    /// The source root is the parent of the directory holding the executable,
    /// the target is the current working directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the executable path or the current directory cannot
    /// be determined, or if the executable has no grandparent directory.
    pub fn discover() -> Result<Self, Error> {
        let exe = std::env::current_exe().map_err(|e| ConfigError::ExecutableUnavailable {
            message: e.to_string(),
        })?;
        let source_root = package_root_for(&exe)?;
        let target_dir =
            std::env::current_dir().map_err(|e| ConfigError::CurrentDirUnavailable {
                message: e.to_string(),
            })?;

        tracing::debug!(
            source_root = %source_root.display(),
            target_dir = %target_dir.display(),
            "Discovered install paths"
        );
        Ok(Self {
            source_root,
            target_dir,
        })
    }

    /// Apply explicit overrides on top of the current values
    #[must_use]
    pub fn with_overrides(
        mut self,
        source_root: Option<PathBuf>,
        target_dir: Option<PathBuf>,
    ) -> Self {
        if let Some(source_root) = source_root {
            self.source_root = source_root;
        }
        if let Some(target_dir) = target_dir {
            self.target_dir = target_dir;
        }
        self
    }
}

/// Package root for an executable living in `<root>/lib-npx/<exe>`
///
/// # Errors
///
/// Returns `ConfigError::NoPackageRoot` when `exe` has fewer than two parent
/// directories.
pub fn package_root_for(exe: &Path) -> Result<PathBuf, Error> {
    exe.parent()
        .and_then(Path::parent)
        .filter(|root| !root.as_os_str().is_empty())
        .map(Path::to_path_buf)
        .ok_or_else(|| {
            ConfigError::NoPackageRoot {
                path: exe.display().to_string(),
            }
            .into()
        })
}
