//! Copy predicate deciding which package entries reach the installation

use inst_config::constants::{MANIFEST_FILES, NO_COPY_DIRS};

/// Whether an entry with base name `name` is copied into the target
///
/// Rules are checked in order and the first match excludes the entry:
/// reserved directory names, hidden names (leading `.`), then the package
/// manifest and lockfile. Everything else is copied.
#[must_use]
pub fn should_copy(name: &str) -> bool {
    if NO_COPY_DIRS.contains(&name) {
        return false;
    }
    if name.starts_with('.') {
        return false;
    }
    if MANIFEST_FILES.contains(&name) {
        return false;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reserved_dirs_excluded() {
        assert!(!should_copy("img"));
        assert!(!should_copy("node_modules"));
        assert!(!should_copy("lib-npx"));
    }

    #[test]
    fn test_hidden_excluded() {
        assert!(!should_copy(".git"));
        assert!(!should_copy(".npmignore"));
        assert!(!should_copy("."));
    }

    #[test]
    fn test_manifest_files_excluded_exactly() {
        assert!(!should_copy("package.json"));
        assert!(!should_copy("package-lock.json"));
        assert!(should_copy("Package.json"));
        assert!(should_copy("package.json5"));
        assert!(should_copy("io-package.json"));
    }

    #[test]
    fn test_regular_entries_included() {
        assert!(should_copy("install.js"));
        assert!(should_copy("lib"));
        assert!(should_copy("images"));
        assert!(should_copy("README.md"));
    }
}
