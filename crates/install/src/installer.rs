//! Main installer implementation

use inst_config::InstallPaths;
use inst_errors::Error;
use inst_manifest::{write_manifest, OwnManifest};
use inst_types::InstallReport;
use std::time::Instant;
use tracing::info;

/// Runs one installation into a target directory
#[derive(Clone, Debug)]
pub struct Installer {
    paths: InstallPaths,
}

impl Installer {
    #[must_use]
    pub fn new(paths: InstallPaths) -> Self {
        Self { paths }
    }

    /// Copy the package files, then write the root manifest
    ///
    /// The manifest step only starts once the copy has finished. A failure in
    /// either step aborts the run; files already copied stay in place.
    ///
    /// # Errors
    ///
    /// Returns the first filesystem, parse or write error encountered.
    pub fn run(&self) -> Result<InstallReport, Error> {
        let started = Instant::now();
        let InstallPaths {
            source_root,
            target_dir,
        } = &self.paths;

        info!(
            source = %source_root.display(),
            target = %target_dir.display(),
            "Copying package files"
        );
        let copy = inst_fs::copy_package_tree(source_root, target_dir)?;
        info!(
            files = copy.files_copied,
            dirs = copy.dirs_created,
            skipped = copy.entries_skipped,
            "Package files copied"
        );

        let own = OwnManifest::load(source_root)?;
        let manifest = write_manifest(target_dir, &own)?;

        let duration_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
        info!(outcome = %manifest, duration_ms, "Installation completed");

        Ok(InstallReport {
            source_root: source_root.clone(),
            target_dir: target_dir.clone(),
            copy,
            manifest,
            version: own.version_label(),
            duration_ms,
        })
    }
}
