//! Manifest (package.json) error types

use std::borrow::Cow;

use crate::UserFacingError;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
#[non_exhaustive]
pub enum ManifestError {
    #[error("cannot read installer manifest {path}: {message}")]
    OwnManifestUnreadable { path: String, message: String },

    #[error("failed to read manifest {path}: {message}")]
    ReadFailed { path: String, message: String },

    #[error("failed to parse manifest {path}: {message}")]
    ParseFailed { path: String, message: String },

    #[error("invalid field `{field}` in {path}: {message}")]
    InvalidField {
        path: String,
        field: String,
        message: String,
    },

    #[error("failed to serialize manifest: {message}")]
    SerializeFailed { message: String },

    #[error("failed to write manifest {path}: {message}")]
    WriteFailed { path: String, message: String },
}

impl UserFacingError for ManifestError {
    fn user_message(&self) -> Cow<'_, str> {
        Cow::Owned(self.to_string())
    }

    fn user_hint(&self) -> Option<&'static str> {
        match self {
            Self::ParseFailed { .. } | Self::InvalidField { .. } => Some(
                "Fix or remove the existing package.json in the installation directory and retry.",
            ),
            Self::OwnManifestUnreadable { .. } => {
                Some("The installer package is incomplete; reinstall it and retry.")
            }
            Self::WriteFailed { .. } => {
                Some("Make sure package.json in the installation directory is writable.")
            }
            _ => None,
        }
    }

    fn user_code(&self) -> Option<&'static str> {
        let code = match self {
            Self::OwnManifestUnreadable { .. } => "manifest.own_manifest_unreadable",
            Self::ReadFailed { .. } => "manifest.read_failed",
            Self::ParseFailed { .. } => "manifest.parse_failed",
            Self::InvalidField { .. } => "manifest.invalid_field",
            Self::SerializeFailed { .. } => "manifest.serialize_failed",
            Self::WriteFailed { .. } => "manifest.write_failed",
        };
        Some(code)
    }
}
