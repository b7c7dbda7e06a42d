//! Filesystem error types for the copy step

use std::borrow::Cow;
use std::path::Path;

use crate::UserFacingError;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
#[non_exhaustive]
pub enum FsError {
    #[error("source directory not found: {path}")]
    SourceNotFound { path: String },

    #[error("failed to read directory {path}: {message}")]
    ReadDirFailed { path: String, message: String },

    #[error("failed to read metadata for {path}: {message}")]
    MetadataFailed { path: String, message: String },

    #[error("failed to create directory {path}: {message}")]
    CreateDirFailed { path: String, message: String },

    #[error("failed to copy {from} to {to}: {message}")]
    CopyFailed {
        from: String,
        to: String,
        message: String,
    },

    #[error("permission denied: {path}")]
    PermissionDenied { path: String },

    #[error("source and target are the same directory: {path}")]
    SameSourceAndTarget { path: String },

    #[error("cannot copy {source_root} into its own subdirectory {target_dir}")]
    TargetInsideSource {
        source_root: String,
        target_dir: String,
    },

    #[error("symlink loop at {path} pointing back to {ancestor}")]
    SymlinkLoop { path: String, ancestor: String },
}

impl FsError {
    /// Map an `io::Error` raised while reading `path` to a path-carrying error
    #[must_use]
    pub fn read_dir(err: &std::io::Error, path: &Path) -> Self {
        if err.kind() == std::io::ErrorKind::PermissionDenied {
            return Self::PermissionDenied {
                path: path.display().to_string(),
            };
        }
        Self::ReadDirFailed {
            path: path.display().to_string(),
            message: err.to_string(),
        }
    }

    #[must_use]
    pub fn metadata(err: &std::io::Error, path: &Path) -> Self {
        Self::MetadataFailed {
            path: path.display().to_string(),
            message: err.to_string(),
        }
    }

    #[must_use]
    pub fn create_dir(err: &std::io::Error, path: &Path) -> Self {
        if err.kind() == std::io::ErrorKind::PermissionDenied {
            return Self::PermissionDenied {
                path: path.display().to_string(),
            };
        }
        Self::CreateDirFailed {
            path: path.display().to_string(),
            message: err.to_string(),
        }
    }

    #[must_use]
    pub fn copy(err: &std::io::Error, from: &Path, to: &Path) -> Self {
        Self::CopyFailed {
            from: from.display().to_string(),
            to: to.display().to_string(),
            message: err.to_string(),
        }
    }
}

impl UserFacingError for FsError {
    fn user_message(&self) -> Cow<'_, str> {
        Cow::Owned(self.to_string())
    }

    fn user_hint(&self) -> Option<&'static str> {
        match self {
            Self::SourceNotFound { .. } => {
                Some("Run the installer from its own package so the package root can be found.")
            }
            Self::PermissionDenied { .. } | Self::CreateDirFailed { .. } => {
                Some("Make sure the installation directory is writable by the current user.")
            }
            Self::SameSourceAndTarget { .. } | Self::TargetInsideSource { .. } => Some(
                "Run the installer from the installation directory, not from inside its own package.",
            ),
            Self::SymlinkLoop { .. } => {
                Some("Remove the symlink that points back into the package and retry.")
            }
            _ => None,
        }
    }

    fn user_code(&self) -> Option<&'static str> {
        let code = match self {
            Self::SourceNotFound { .. } => "fs.source_not_found",
            Self::ReadDirFailed { .. } => "fs.read_dir_failed",
            Self::MetadataFailed { .. } => "fs.metadata_failed",
            Self::CreateDirFailed { .. } => "fs.create_dir_failed",
            Self::CopyFailed { .. } => "fs.copy_failed",
            Self::PermissionDenied { .. } => "fs.permission_denied",
            Self::SameSourceAndTarget { .. } => "fs.same_source_and_target",
            Self::TargetInsideSource { .. } => "fs.target_inside_source",
            Self::SymlinkLoop { .. } => "fs.symlink_loop",
        };
        Some(code)
    }
}
