//! Report type definitions for the installer steps

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Counters collected while copying the package tree
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CopyStats {
    /// Regular files written to the target
    pub files_copied: u64,
    /// Directories created (or reused) in the target
    pub dirs_created: u64,
    /// Entries pruned by the copy predicate, subtrees counted once
    pub entries_skipped: u64,
}

/// Terminal state of the manifest step
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ManifestOutcome {
    /// No manifest existed; a fresh one was written
    Created,
    /// An existing manifest was merged and rewritten
    Merged,
}

impl std::fmt::Display for ManifestOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Created => write!(f, "created"),
            Self::Merged => write!(f, "merged"),
        }
    }
}

/// Installation report
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct InstallReport {
    /// Directory the package was copied from
    pub source_root: PathBuf,
    /// Directory the package was installed into
    pub target_dir: PathBuf,
    pub copy: CopyStats,
    pub manifest: ManifestOutcome,
    /// Version recorded in the root manifest, if the installer declares one
    pub version: Option<String>,
    /// Total execution time
    pub duration_ms: u64,
}
