//! Root manifest template built from the installer's own manifest

use crate::merge::overlay;
use crate::own::OwnManifest;
use inst_config::constants::{
    PLATFORM_PACKAGES, PLATFORM_TAG, ROOT_PACKAGE_DESCRIPTION, ROOT_PACKAGE_NAME, ROOT_SCRIPTS,
};
use serde::Serialize;
use serde_json::{Map, Value};

/// The package.json written into a fresh installation directory
///
/// Field order matches the serialized key order. Fields whose source is
/// missing from the own manifest are left out of the output.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RootManifest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<Value>,
    pub private: bool,
    pub description: String,
    pub scripts: Map<String, Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engine: Option<Value>,
    pub dependencies: Map<String, Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub optional_dependencies: Option<Map<String, Value>>,
}

impl RootManifest {
    /// Build the template for `own`
    ///
    /// Dependencies are the own manifest's dependencies with every platform
    /// package pinned to the `stable` tag, the pins winning on conflicts.
    #[must_use]
    pub fn from_own(own: &OwnManifest) -> Self {
        let scripts = ROOT_SCRIPTS
            .iter()
            .map(|(name, command)| ((*name).to_string(), Value::String((*command).to_string())))
            .collect();
        let dependencies = overlay(
            own.dependencies.as_ref(),
            PLATFORM_PACKAGES.iter().map(|name| (*name, PLATFORM_TAG)),
        );

        Self {
            name: ROOT_PACKAGE_NAME.to_string(),
            version: own.version.clone(),
            private: true,
            description: ROOT_PACKAGE_DESCRIPTION.to_string(),
            scripts,
            engine: own.engine.clone(),
            dependencies,
            optional_dependencies: own.optional_dependencies.clone(),
        }
    }
}
