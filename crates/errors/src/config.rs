//! Configuration error types

use std::borrow::Cow;

use crate::UserFacingError;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("current directory is unavailable: {message}")]
    CurrentDirUnavailable { message: String },

    #[error("cannot locate the running executable: {message}")]
    ExecutableUnavailable { message: String },

    #[error("no package root above {path}")]
    NoPackageRoot { path: String },
}

impl UserFacingError for ConfigError {
    fn user_message(&self) -> Cow<'_, str> {
        Cow::Owned(self.to_string())
    }

    fn user_hint(&self) -> Option<&'static str> {
        match self {
            Self::CurrentDirUnavailable { .. } => {
                Some("Run the installer from an existing, accessible directory.")
            }
            Self::ExecutableUnavailable { .. } | Self::NoPackageRoot { .. } => {
                Some("Pass --source-root to point at the installer package.")
            }
        }
    }

    fn user_code(&self) -> Option<&'static str> {
        let code = match self {
            Self::CurrentDirUnavailable { .. } => "config.current_dir_unavailable",
            Self::ExecutableUnavailable { .. } => "config.executable_unavailable",
            Self::NoPackageRoot { .. } => "config.no_package_root",
        };
        Some(code)
    }
}
