//! Configuration management for compsync
//!
//! Two configuration sources exist:
//!
//! 1. **Project configuration** (`components.json`) - the per-framework
//!    [`LocalConfig`], parsed fresh on every operation and never cached. It is the
//!    ground truth for style, language mode, Tailwind options and aliases.
//! 2. **Tool settings** (`config.toml`) - optional user-wide [`Settings`] such as
//!    registry overrides and the operation timeout.
//!
//! # Project Configuration Example
//!
//! ```json
//! {
//!   "$schema": "https://ui.shadcn.com/schema.json",
//!   "style": "new-york",
//!   "rsc": false,
//!   "tsx": true,
//!   "tailwind": {
//!     "config": "tailwind.config.js",
//!     "css": "src/index.css",
//!     "baseColor": "slate",
//!     "cssVariables": false,
//!     "prefix": "tw-"
//!   },
//!   "aliases": {
//!     "components": "@/components",
//!     "utils": "@/lib/utils"
//!   }
//! }
//! ```
//!
//! The `$schema` URL decides the framework variant, see [`detect_framework`].

pub mod framework;
pub mod settings;

pub use framework::{
    DETECTION_RULES, Framework, PathMappingStrategy, RegistryImports, detect_framework,
};
pub use settings::Settings;

use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::constants::CONFIG_FILE_NAME;
use crate::core::{Result, SyncError};

const fn default_true() -> bool {
    true
}

fn default_style() -> String {
    "default".to_string()
}

/// Tailwind settings shared by every framework variant.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TailwindConfig {
    /// Path of the Tailwind config file
    #[serde(default)]
    pub config: Option<String>,
    /// Path of the global stylesheet
    #[serde(default)]
    pub css: Option<String>,
    /// Palette name used when CSS variables are disabled
    pub base_color: String,
    /// Whether components use CSS-variable utilities (`bg-primary`)
    #[serde(default = "default_true")]
    pub css_variables: bool,
    /// Class prefix prepended to every utility
    #[serde(default)]
    pub prefix: String,
}

/// Import aliases configured for the project.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Aliases {
    pub components: String,
    pub utils: String,
    /// Dedicated alias for the UI subtree. Only honored when present.
    #[serde(default)]
    pub ui: Option<String>,
    #[serde(default)]
    pub lib: Option<String>,
    #[serde(default)]
    pub hooks: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReactConfig {
    #[serde(rename = "$schema", default)]
    pub schema: Option<String>,
    pub style: String,
    /// React Server Components support
    #[serde(default)]
    pub rsc: bool,
    #[serde(default = "default_true")]
    pub tsx: bool,
    pub tailwind: TailwindConfig,
    pub aliases: Aliases,
    #[serde(default)]
    pub icon_library: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VueConfig {
    #[serde(rename = "$schema", default)]
    pub schema: Option<String>,
    pub style: String,
    #[serde(default = "default_true")]
    pub typescript: bool,
    #[serde(default)]
    pub ts_config_path: Option<String>,
    /// Host framework: `vite`, `nuxt`, `laravel`, `astro`
    #[serde(default)]
    pub framework: Option<String>,
    pub tailwind: TailwindConfig,
    pub aliases: Aliases,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SvelteConfig {
    #[serde(rename = "$schema", default)]
    pub schema: Option<String>,
    pub style: String,
    #[serde(default = "default_true")]
    pub typescript: bool,
    pub tailwind: TailwindConfig,
    pub aliases: Aliases,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SolidConfig {
    #[serde(rename = "$schema", default)]
    pub schema: Option<String>,
    #[serde(default = "default_style")]
    pub style: String,
    #[serde(default = "default_true")]
    pub tsx: bool,
    /// UnoCSS instead of Tailwind
    #[serde(default)]
    pub uno: bool,
    pub tailwind: TailwindConfig,
    pub aliases: Aliases,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SolidUiConfig {
    #[serde(rename = "$schema", default)]
    pub schema: Option<String>,
    #[serde(default = "default_style")]
    pub style: String,
    #[serde(default = "default_true")]
    pub tsx: bool,
    pub tailwind: TailwindConfig,
    pub aliases: Aliases,
}

/// The project's `components.json`, one variant per framework.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocalConfig {
    React(ReactConfig),
    Vue(VueConfig),
    Svelte(SvelteConfig),
    Solid(SolidConfig),
    SolidUi(SolidUiConfig),
}

impl LocalConfig {
    /// Parses a raw configuration text, detecting the framework from its schema marker.
    ///
    /// # Errors
    ///
    /// [`SyncError::UnknownFramework`] when no detection rule matches, and
    /// [`SyncError::UnparseableConfig`] for invalid JSON or missing fields.
    pub fn parse(raw: &str) -> Result<Self> {
        let framework = detect_framework(raw).ok_or_else(|| SyncError::UnknownFramework {
            file: CONFIG_FILE_NAME.to_string(),
        })?;
        Self::parse_as(framework, raw)
    }

    /// Parses a raw configuration text as the given framework's variant.
    pub fn parse_as(framework: Framework, raw: &str) -> Result<Self> {
        let config = match framework {
            Framework::React => LocalConfig::React(decode(raw)?),
            Framework::Vue => LocalConfig::Vue(decode(raw)?),
            Framework::Svelte => LocalConfig::Svelte(decode(raw)?),
            Framework::Solid => LocalConfig::Solid(decode(raw)?),
            Framework::SolidUi => LocalConfig::SolidUi(decode(raw)?),
        };
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        let required = [
            ("style", self.style()),
            ("tailwind.baseColor", self.tailwind().base_color.as_str()),
            ("aliases.components", self.aliases().components.as_str()),
            ("aliases.utils", self.aliases().utils.as_str()),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(SyncError::UnparseableConfig {
                    file: CONFIG_FILE_NAME.to_string(),
                    reason: format!("'{field}' must not be empty"),
                });
            }
        }
        Ok(())
    }

    #[must_use]
    pub const fn framework(&self) -> Framework {
        match self {
            LocalConfig::React(_) => Framework::React,
            LocalConfig::Vue(_) => Framework::Vue,
            LocalConfig::Svelte(_) => Framework::Svelte,
            LocalConfig::Solid(_) => Framework::Solid,
            LocalConfig::SolidUi(_) => Framework::SolidUi,
        }
    }

    #[must_use]
    pub fn style(&self) -> &str {
        match self {
            LocalConfig::React(c) => &c.style,
            LocalConfig::Vue(c) => &c.style,
            LocalConfig::Svelte(c) => &c.style,
            LocalConfig::Solid(c) => &c.style,
            LocalConfig::SolidUi(c) => &c.style,
        }
    }

    #[must_use]
    pub const fn tailwind(&self) -> &TailwindConfig {
        match self {
            LocalConfig::React(c) => &c.tailwind,
            LocalConfig::Vue(c) => &c.tailwind,
            LocalConfig::Svelte(c) => &c.tailwind,
            LocalConfig::Solid(c) => &c.tailwind,
            LocalConfig::SolidUi(c) => &c.tailwind,
        }
    }

    #[must_use]
    pub const fn aliases(&self) -> &Aliases {
        match self {
            LocalConfig::React(c) => &c.aliases,
            LocalConfig::Vue(c) => &c.aliases,
            LocalConfig::Svelte(c) => &c.aliases,
            LocalConfig::Solid(c) => &c.aliases,
            LocalConfig::SolidUi(c) => &c.aliases,
        }
    }

    /// The language flag: `tsx` for React and Solid, `typescript` for Vue and Svelte.
    #[must_use]
    pub const fn is_typescript(&self) -> bool {
        match self {
            LocalConfig::React(c) => c.tsx,
            LocalConfig::Vue(c) => c.typescript,
            LocalConfig::Svelte(c) => c.typescript,
            LocalConfig::Solid(c) => c.tsx,
            LocalConfig::SolidUi(c) => c.tsx,
        }
    }

    /// Server-component support; only React projects can enable it.
    #[must_use]
    pub const fn rsc(&self) -> bool {
        match self {
            LocalConfig::React(c) => c.rsc,
            _ => false,
        }
    }

    /// Path-mapping lookup strategy for this project.
    #[must_use]
    pub fn path_mapping_strategy(&self) -> PathMappingStrategy {
        match self {
            LocalConfig::Vue(c) => self.framework().path_mapping_strategy(
                c.typescript,
                c.ts_config_path.as_deref(),
                c.framework.as_deref(),
            ),
            _ => self.framework().path_mapping_strategy(self.is_typescript(), None, None),
        }
    }
}

fn decode<T: DeserializeOwned>(raw: &str) -> Result<T> {
    serde_json::from_str(raw).map_err(|e| SyncError::UnparseableConfig {
        file: CONFIG_FILE_NAME.to_string(),
        reason: e.to_string(),
    })
}
