//! Rewrites registry-internal import specifiers to the project's aliases.
//!
//! Registry sources import each other through a registry root such as
//! `@/registry/new-york/ui/button` and import the shared helpers from
//! `@/lib/utils`. In the project those modules live under the configured
//! `aliases.components` (or `aliases.ui`) and `aliases.utils`.
//!
//! Only specifiers in import position are touched: `from "…"`, bare
//! `import "…"` and dynamic `import("…")`.

use regex::Regex;

use crate::config::LocalConfig;
use crate::core::{Result, SyncError};

/// Specifier rewrite rules derived from one project configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportRules {
    pub registry_root: String,
    pub has_style_segment: bool,
    pub components_alias: String,
    /// When set, only the registry's `ui` subtree is rewritten, to this alias.
    pub ui_alias: Option<String>,
    pub utils_import: String,
    pub utils_alias: String,
}

impl ImportRules {
    #[must_use]
    pub fn from_config(config: &LocalConfig) -> Self {
        let imports = config.framework().registry_imports();
        let aliases = config.aliases();
        Self {
            registry_root: imports.registry_root.to_string(),
            has_style_segment: imports.has_style_segment,
            components_alias: aliases.components.trim_end_matches('/').to_string(),
            ui_alias: aliases.ui.as_ref().map(|ui| ui.trim_end_matches('/').to_string()),
            utils_import: imports.utils.to_string(),
            utils_alias: aliases.utils.trim_end_matches('/').to_string(),
        }
    }

    /// The rewritten form of one specifier, or `None` to leave it alone.
    #[must_use]
    pub fn rewrite_specifier(&self, specifier: &str) -> Option<String> {
        if let Some(suffix) = specifier.strip_prefix(self.utils_import.as_str()) {
            if suffix.is_empty() || suffix.starts_with('.') || suffix.starts_with('/') {
                return Some(format!("{}{suffix}", self.utils_alias));
            }
        }

        let tail = specifier.strip_prefix(self.registry_root.as_str())?;
        if !tail.is_empty() && !tail.starts_with('/') {
            return None;
        }
        let tail = tail.trim_start_matches('/');
        let remainder = if self.has_style_segment {
            // Drop the style segment: `new-york/ui/button` -> `ui/button`
            tail.split_once('/').map_or("", |(_, rest)| rest)
        } else {
            tail
        };

        match &self.ui_alias {
            Some(ui_alias) => {
                let ui_rest = remainder.strip_prefix("ui")?;
                if !ui_rest.is_empty() && !ui_rest.starts_with('/') {
                    return None;
                }
                Some(format!("{ui_alias}{ui_rest}"))
            }
            None if remainder.is_empty() => Some(self.components_alias.clone()),
            None => Some(format!("{}/{remainder}", self.components_alias)),
        }
    }
}

/// Applies [`ImportRules`] to every import specifier of a source text.
pub struct ImportRewriter {
    rules: ImportRules,
    pattern: Regex,
}

impl ImportRewriter {
    pub fn new(rules: ImportRules) -> Result<Self> {
        let pattern = Regex::new(r#"\b(?:from|import)\s*\(?\s*["']([^"'\n]+)["']"#).map_err(|e| {
            SyncError::Other {
                message: format!("Invalid import pattern: {e}"),
            }
        })?;
        Ok(Self { rules, pattern })
    }

    #[must_use]
    pub fn rules(&self) -> &ImportRules {
        &self.rules
    }

    #[must_use]
    pub fn rewrite(&self, source: &str) -> String {
        let mut output = String::with_capacity(source.len());
        let mut last = 0;

        for captures in self.pattern.captures_iter(source) {
            let Some(specifier) = captures.get(1) else {
                continue;
            };
            if let Some(replacement) = self.rules.rewrite_specifier(specifier.as_str()) {
                output.push_str(&source[last..specifier.start()]);
                output.push_str(&replacement);
                last = specifier.end();
            }
        }

        output.push_str(&source[last..]);
        output
    }
}
