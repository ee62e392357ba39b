//! Typed records decoded from registry JSON.

use serde::Deserialize;
use std::collections::BTreeMap;

/// Identity record of a registry component.
///
/// Decoded from both the component index and the per-component documents.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Component {
    pub name: String,
    /// npm packages the component imports
    #[serde(default, rename = "dependencies")]
    pub npm_dependencies: Vec<String>,
    /// Other registry components this one builds on
    #[serde(default)]
    pub registry_dependencies: Vec<String>,
    /// Raw type tag such as `components:ui` or `registry:ui`
    #[serde(rename = "type")]
    pub kind: String,
}

impl Component {
    /// Directory segment for the component kind (`components:ui` -> `ui`).
    #[must_use]
    pub fn kind_dir(&self) -> &str {
        self.kind.rsplit(':').next().unwrap_or(&self.kind)
    }
}

/// One source file of a component, as served by the registry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ComponentFile {
    /// File name or registry path; newer registries call it `path`
    #[serde(alias = "path")]
    pub name: String,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    /// Raw upstream source text
    pub content: String,
}

impl ComponentFile {
    /// Last path segment of the file name.
    #[must_use]
    pub fn file_name(&self) -> &str {
        self.name.rsplit('/').next().unwrap_or(&self.name)
    }
}

/// A component together with its file contents; the unit of installation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ComponentWithContents {
    #[serde(flatten)]
    pub component: Component,
    #[serde(default)]
    pub files: Vec<ComponentFile>,
}

impl ComponentWithContents {
    #[must_use]
    pub fn name(&self) -> &str {
        &self.component.name
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Style {
    pub name: String,
    #[serde(default)]
    pub label: String,
}

/// Light and dark static color values keyed by CSS-variable utility name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColorPalette {
    pub light: BTreeMap<String, String>,
    pub dark: BTreeMap<String, String>,
}

impl ColorPalette {
    /// Both values for a utility name, if the palette defines it in both modes.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<(&str, &str)> {
        match (self.light.get(name), self.dark.get(name)) {
            (Some(light), Some(dark)) => Some((light, dark)),
            _ => None,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct BaseColorDocument {
    pub inline_colors: InlineColors,
}

#[derive(Debug, Deserialize)]
pub(crate) struct InlineColors {
    #[serde(default)]
    pub light: BTreeMap<String, String>,
    #[serde(default)]
    pub dark: BTreeMap<String, String>,
}

impl From<BaseColorDocument> for ColorPalette {
    fn from(document: BaseColorDocument) -> Self {
        Self {
            light: document.inline_colors.light,
            dark: document.inline_colors.dark,
        }
    }
}
