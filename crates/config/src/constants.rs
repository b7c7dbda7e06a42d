//! Fixed, non-configurable values baked into every installation
//!
//! These describe the platform bundle the installer sets up. They are not
//! exposed as flags so every installation declares the same root manifest.

/// Directory names that are never copied, at any depth
pub const NO_COPY_DIRS: [&str; 3] = ["img", "node_modules", "lib-npx"];

/// Manifest file names that the copy step must not overwrite
pub const MANIFEST_FILES: [&str; 2] = ["package.json", "package-lock.json"];

/// Name of the manifest file in both the source root and the target directory
pub const MANIFEST_FILE: &str = "package.json";

pub const ROOT_PACKAGE_NAME: &str = "iobroker.inst";
pub const ROOT_PACKAGE_DESCRIPTION: &str = "Automation platform in node.js";

/// Scripts every root manifest declares, in declaration order
pub const ROOT_SCRIPTS: [(&str, &str); 2] = [
    ("install-service", "node install.js"),
    ("uninstall-service", "node uninstall.js"),
];

/// Dist-tag that platform sibling packages are pinned to
pub const PLATFORM_TAG: &str = "stable";

/// Sibling packages of the platform that the root manifest always depends on
pub const PLATFORM_PACKAGES: [&str; 4] = [
    "iobroker.js-controller",
    "iobroker.admin",
    "iobroker.discovery",
    "iobroker.info",
];
