//! The installer's own package.json

use inst_config::constants::MANIFEST_FILE;
use inst_errors::{Error, ManifestError};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::path::Path;

/// Fields of the installer package manifest that seed the root manifest
///
/// Every field is optional; an absent mapping behaves like an empty one when
/// merged. `version` and `engine` are passed through as written, so a `null`
/// is kept and distinguished from a missing key.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnManifest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub version: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dependencies: Option<Map<String, Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub optional_dependencies: Option<Map<String, Value>>,
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub engine: Option<Value>,
}

/// Wrap any value that is present, including `null`
fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

impl OwnManifest {
    /// Load `package.json` from the installer's package root
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a valid manifest.
    pub fn load(source_root: &Path) -> Result<Self, Error> {
        let path = source_root.join(MANIFEST_FILE);
        let content =
            std::fs::read_to_string(&path).map_err(|e| ManifestError::OwnManifestUnreadable {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;
        let manifest = Self::from_json(&content).map_err(|e| ManifestError::ParseFailed {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        tracing::debug!(
            path = %path.display(),
            version = ?manifest.version,
            "Loaded installer manifest"
        );
        Ok(manifest)
    }

    /// Version as recorded in reports, rendered as text for non-string values
    #[must_use]
    pub fn version_label(&self) -> Option<String> {
        self.version.as_ref().map(|version| match version {
            Value::String(text) => text.clone(),
            other => other.to_string(),
        })
    }

    /// Parse a manifest from JSON text
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or a known field has the
    /// wrong shape.
    pub fn from_json(content: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }
}
