//! Missing npm dependency detection against `package.json`.

use serde::Deserialize;
use std::collections::{BTreeSet, HashMap};
use tracing::warn;

use crate::constants::PACKAGE_MANIFEST;
use crate::core::Result;
use crate::project::ProjectFiles;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PackageManifest {
    #[serde(default)]
    dependencies: HashMap<String, serde_json::Value>,
    #[serde(default)]
    dev_dependencies: HashMap<String, serde_json::Value>,
    #[serde(default)]
    peer_dependencies: HashMap<String, serde_json::Value>,
}

impl PackageManifest {
    fn declares(&self, package: &str) -> bool {
        self.dependencies.contains_key(package)
            || self.dev_dependencies.contains_key(package)
            || self.peer_dependencies.contains_key(package)
    }
}

/// Package name without a version suffix: `@radix-ui/react-slot@^1.0` -> `@radix-ui/react-slot`.
#[must_use]
pub fn package_name(spec: &str) -> &str {
    let search_from = usize::from(spec.starts_with('@'));
    match spec[search_from..].find('@') {
        Some(index) => &spec[..search_from + index],
        None => spec,
    }
}

/// Required packages not declared in the project's manifest, sorted and deduplicated.
///
/// A missing manifest declares nothing. An unreadable one is logged and treated
/// the same way, since detection never blocks an install.
pub fn missing_dependencies<'a>(
    project: &dyn ProjectFiles,
    required: impl IntoIterator<Item = &'a String>,
) -> Result<Vec<String>> {
    let manifest = match project.read_file(PACKAGE_MANIFEST)? {
        Some(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
            warn!("Ignoring unreadable {PACKAGE_MANIFEST}: {e}");
            PackageManifest::default()
        }),
        None => PackageManifest::default(),
    };

    let missing: BTreeSet<String> = required
        .into_iter()
        .map(|spec| package_name(spec))
        .filter(|name| !manifest.declares(name))
        .map(str::to_string)
        .collect();

    Ok(missing.into_iter().collect())
}
