#![deny(clippy::pedantic, unsafe_code)]
#![allow(clippy::module_name_repetitions)]

//! Root manifest handling for the inst installer
//!
//! Writes the `package.json` of the installation directory. A missing file is
//! created from the template; an existing one is patched in place so that
//! user-added scripts and dependencies survive reinstallation.

pub mod merge;
mod own;
mod template;

pub use own::OwnManifest;
pub use template::RootManifest;

use inst_config::constants::MANIFEST_FILE;
use inst_errors::{Error, ManifestError};
use inst_types::ManifestOutcome;
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Create or update `<target_dir>/package.json` from `own`
///
/// Exactly one write happens. If the existing manifest cannot be parsed or
/// has a malformed field, nothing is written.
///
/// # Errors
///
/// Returns an error if:
/// - The existing manifest cannot be read or is not valid JSON
/// - The existing manifest is not an object, or a merged field is neither an
///   object nor `null`
/// - Serializing or writing the manifest fails
pub fn write_manifest(target_dir: &Path, own: &OwnManifest) -> Result<ManifestOutcome, Error> {
    let path = target_dir.join(MANIFEST_FILE);
    let template = RootManifest::from_own(own);

    let exists = path.try_exists().map_err(|e| ManifestError::ReadFailed {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    let (content, outcome) = if exists {
        let raw = fs::read_to_string(&path).map_err(|e| ManifestError::ReadFailed {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        let existing: Value =
            serde_json::from_str(&raw).map_err(|e| ManifestError::ParseFailed {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;
        let merged = merge_into_existing(existing, &template, &path)?;
        (to_pretty_json(&merged)?, ManifestOutcome::Merged)
    } else {
        (to_pretty_json(&template)?, ManifestOutcome::Created)
    };

    fs::write(&path, content).map_err(|e| ManifestError::WriteFailed {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    info!(path = %path.display(), outcome = %outcome, "Root manifest written");
    Ok(outcome)
}

/// Patch an existing root manifest with the template
///
/// `private` is forced to `true`; `scripts`, `dependencies` and
/// `optionalDependencies` gain the template keys they lack (existing keys
/// win); `engine` is replaced by the template's, or removed when the template
/// has none.
///
/// # Errors
///
/// Returns `ManifestError::InvalidField` if `existing` is not an object or a
/// merged field holds something other than an object or `null`.
pub fn merge_into_existing(
    existing: Value,
    template: &RootManifest,
    path: &Path,
) -> Result<Value, Error> {
    let Value::Object(mut manifest) = existing else {
        return Err(invalid_field(path, "<root>", "expected a JSON object").into());
    };

    manifest.insert("private".to_string(), Value::Bool(true));

    let merged_fields = [
        ("scripts", Some(&template.scripts)),
        ("dependencies", Some(&template.dependencies)),
        ("optionalDependencies", template.optional_dependencies.as_ref()),
    ];
    for (field, defaults) in merged_fields {
        merge_field(&mut manifest, field, defaults, path)?;
    }

    match &template.engine {
        Some(engine) => {
            manifest.insert("engine".to_string(), engine.clone());
        }
        None => {
            manifest.shift_remove("engine");
        }
    }

    Ok(Value::Object(manifest))
}

fn merge_field(
    manifest: &mut Map<String, Value>,
    field: &str,
    defaults: Option<&Map<String, Value>>,
    path: &Path,
) -> Result<(), ManifestError> {
    match manifest.get_mut(field) {
        Some(Value::Object(existing)) => {
            let added = merge::fill_missing(existing, defaults);
            debug!(field, added, "Merged manifest field");
        }
        None | Some(Value::Null) => match defaults {
            Some(defaults) => {
                manifest.insert(field.to_string(), Value::Object(defaults.clone()));
            }
            None => {
                manifest.shift_remove(field);
            }
        },
        Some(_) => return Err(invalid_field(path, field, "expected an object")),
    }
    Ok(())
}

fn invalid_field(path: &Path, field: &str, message: &str) -> ManifestError {
    ManifestError::InvalidField {
        path: path.display().to_string(),
        field: field.to_string(),
        message: message.to_string(),
    }
}

fn to_pretty_json<T: serde::Serialize>(value: &T) -> Result<String, ManifestError> {
    serde_json::to_string_pretty(value).map_err(|e| ManifestError::SerializeFailed {
        message: e.to_string(),
    })
}
