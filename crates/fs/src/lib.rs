#![deny(clippy::pedantic, unsafe_code)]
#![allow(clippy::module_name_repetitions)]

//! Filesystem operations for the inst installer
//!
//! Copies the installer package tree into the installation directory. The
//! walk is depth-first and synchronous; an entry rejected by the predicate is
//! pruned together with its whole subtree. Symlinks are followed, and a link
//! pointing back at one of its ancestors aborts the copy.

mod predicate;

pub use predicate::should_copy;

use inst_errors::{FsError, Result};
use inst_types::CopyStats;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, trace};
use walkdir::WalkDir;

/// Copy the package tree at `src` into `dst` using the default predicate
///
/// # Errors
///
/// See [`copy_filtered`].
pub fn copy_package_tree(src: &Path, dst: &Path) -> Result<CopyStats> {
    copy_filtered(src, dst, should_copy)
}

/// Recursively copy `src` into `dst`, keeping only entries accepted by
/// `predicate`
///
/// The predicate sees the entry's base name only. Existing destination files
/// are overwritten and missing directories are created.
///
/// # Errors
///
/// Returns an error if:
/// - `src` does not exist or is not a directory
/// - `dst` is `src` itself or lies inside it
/// - Reading a source directory fails or a symlink loop is found
/// - Creating a destination directory or copying a file fails
pub fn copy_filtered<F>(src: &Path, dst: &Path, predicate: F) -> Result<CopyStats>
where
    F: Fn(&str) -> bool,
{
    if !src.is_dir() {
        return Err(FsError::SourceNotFound {
            path: src.display().to_string(),
        }
        .into());
    }
    check_overlap(src, dst)?;

    fs::create_dir_all(dst).map_err(|e| FsError::create_dir(&e, dst))?;

    let mut stats = CopyStats::default();
    let mut skipped = 0;
    let walker = WalkDir::new(src)
        .follow_links(true)
        .sort_by_file_name()
        .min_depth(1)
        .into_iter()
        .filter_entry(|entry| {
            // The root itself is not subject to the predicate
            if entry.depth() == 0 || predicate(&*entry.file_name().to_string_lossy()) {
                return true;
            }
            debug!(path = %entry.path().display(), "Skipping excluded entry");
            skipped += 1;
            false
        });

    for entry in walker {
        let entry = entry.map_err(|e| walk_error(&e, src))?;
        let Ok(relative) = entry.path().strip_prefix(src) else {
            continue;
        };
        let dst_path = dst.join(relative);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&dst_path).map_err(|e| FsError::create_dir(&e, &dst_path))?;
            stats.dirs_created += 1;
        } else {
            fs::copy(entry.path(), &dst_path)
                .map_err(|e| FsError::copy(&e, entry.path(), &dst_path))?;
            trace!(from = %entry.path().display(), to = %dst_path.display(), "Copied file");
            stats.files_copied += 1;
        }
    }
    stats.entries_skipped = skipped;

    debug!(
        source = %src.display(),
        target = %dst.display(),
        files = stats.files_copied,
        dirs = stats.dirs_created,
        skipped = stats.entries_skipped,
        "Package tree copied"
    );
    Ok(stats)
}

/// Reject a target that is the source itself or one of its descendants
fn check_overlap(src: &Path, dst: &Path) -> Result<()> {
    let source = src
        .canonicalize()
        .map_err(|e| FsError::metadata(&e, src))?;
    let target = canonicalize_lenient(dst).map_err(|e| FsError::metadata(&e, dst))?;

    if target == source {
        return Err(FsError::SameSourceAndTarget {
            path: source.display().to_string(),
        }
        .into());
    }
    if target.starts_with(&source) {
        return Err(FsError::TargetInsideSource {
            source_root: source.display().to_string(),
            target_dir: target.display().to_string(),
        }
        .into());
    }
    Ok(())
}

/// Canonicalize `path`, allowing trailing components that do not exist yet
fn canonicalize_lenient(path: &Path) -> std::io::Result<PathBuf> {
    let mut missing = Vec::new();
    let mut current = path;
    loop {
        match current.canonicalize() {
            Ok(base) => {
                return Ok(missing
                    .iter()
                    .rev()
                    .fold(base, |acc: PathBuf, name| acc.join(name)));
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                let (Some(parent), Some(name)) = (current.parent(), current.file_name()) else {
                    return Err(e);
                };
                missing.push(name.to_os_string());
                current = if parent.as_os_str().is_empty() {
                    Path::new(".")
                } else {
                    parent
                };
            }
            Err(e) => return Err(e),
        }
    }
}

fn walk_error(err: &walkdir::Error, src: &Path) -> FsError {
    let path = err.path().unwrap_or(src);
    if let Some(ancestor) = err.loop_ancestor() {
        return FsError::SymlinkLoop {
            path: path.display().to_string(),
            ancestor: ancestor.display().to_string(),
        };
    }
    match err.io_error() {
        Some(io) => FsError::read_dir(io, path),
        None => FsError::ReadDirFailed {
            path: path.display().to_string(),
            message: err.to_string(),
        },
    }
}
