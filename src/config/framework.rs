//! Framework variants and the rules that pick one for a project.
//!
//! Every supported registry ecosystem is a [`Framework`] tag. The tag carries the
//! strategy data that differs between ecosystems (registry domain, path-mapping
//! lookup, component layout, registry import paths) so the rest of the crate can
//! stay framework-agnostic.

use std::fmt;

/// One registry ecosystem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Framework {
    React,
    Vue,
    Svelte,
    Solid,
    SolidUi,
}

/// Ordered `(marker, framework)` detection rules.
///
/// Evaluated top to bottom against the raw configuration text; the first marker
/// found as a substring wins. When none matches the framework is unknown.
pub const DETECTION_RULES: &[(&str, Framework)] = &[
    ("shadcn-svelte.com", Framework::Svelte),
    ("shadcn-vue.com", Framework::Vue),
    ("shadcn-solid.com", Framework::Solid),
    ("solid-ui.com", Framework::SolidUi),
    ("ui.shadcn.com", Framework::React),
];

/// Picks the framework for a raw configuration text, if any rule matches.
#[must_use]
pub fn detect_framework(raw_config: &str) -> Option<Framework> {
    DETECTION_RULES
        .iter()
        .find(|(marker, _)| raw_config.contains(marker))
        .map(|(_, framework)| *framework)
}

/// How a framework looks up aliases in its path-mapping file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathMappingStrategy {
    /// Candidate mapping files, tried in order; the first existing one is used.
    pub candidates: Vec<String>,
    /// Whether alias keys carry a `/*` suffix (`@/*`) or not (`$lib`).
    pub wildcard_keys: bool,
    /// Command that regenerates a missing mapping file.
    pub sync_command: Option<Vec<String>>,
}

/// Import specifiers that registry sources use internally.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegistryImports {
    /// Root of registry-internal imports, without trailing slash.
    pub registry_root: &'static str,
    /// Whether a style segment follows the root (`@/registry/new-york/ui`).
    pub has_style_segment: bool,
    /// The shared utility module import.
    pub utils: &'static str,
}

impl Framework {
    pub const ALL: [Framework; 5] =
        [Framework::React, Framework::Vue, Framework::Svelte, Framework::Solid, Framework::SolidUi];

    /// Stable key used in settings files and logs.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Framework::React => "react",
            Framework::Vue => "vue",
            Framework::Svelte => "svelte",
            Framework::Solid => "solid",
            Framework::SolidUi => "solid-ui",
        }
    }

    #[must_use]
    pub const fn default_domain(self) -> &'static str {
        match self {
            Framework::React => "https://ui.shadcn.com",
            Framework::Vue => "https://www.shadcn-vue.com",
            Framework::Svelte => "https://shadcn-svelte.com",
            Framework::Solid => "https://shadcn-solid.com",
            Framework::SolidUi => "https://www.solid-ui.com",
        }
    }

    /// Whether each component is installed into its own directory
    /// (`ui/button/Button.vue`) rather than as flat files (`ui/button.tsx`).
    #[must_use]
    pub const fn uses_directories_for_components(self) -> bool {
        matches!(self, Framework::Vue | Framework::Svelte)
    }

    /// Only React sources carry `"use client"` directives.
    #[must_use]
    pub const fn supports_directives(self) -> bool {
        matches!(self, Framework::React)
    }

    #[must_use]
    pub const fn registry_imports(self) -> RegistryImports {
        match self {
            Framework::React => RegistryImports {
                registry_root: "@/registry",
                has_style_segment: true,
                utils: "@/lib/utils",
            },
            Framework::Vue => RegistryImports {
                registry_root: "@/lib/registry",
                has_style_segment: true,
                utils: "@/lib/utils",
            },
            Framework::Svelte => RegistryImports {
                registry_root: "$lib/registry",
                has_style_segment: true,
                utils: "$lib/utils",
            },
            Framework::Solid | Framework::SolidUi => RegistryImports {
                registry_root: "~/registry",
                has_style_segment: false,
                utils: "~/lib/utils",
            },
        }
    }

    /// Path-mapping lookup for this framework.
    ///
    /// `typescript` is the project's language flag; `ts_config_path` and `host`
    /// are the Vue-only `tsConfigPath` and `framework` settings.
    #[must_use]
    pub fn path_mapping_strategy(
        self,
        typescript: bool,
        ts_config_path: Option<&str>,
        host: Option<&str>,
    ) -> PathMappingStrategy {
        match self {
            Framework::React => {
                let candidates = if typescript {
                    vec!["tsconfig.json".to_string(), "jsconfig.json".to_string()]
                } else {
                    vec!["jsconfig.json".to_string(), "tsconfig.json".to_string()]
                };
                PathMappingStrategy {
                    candidates,
                    wildcard_keys: true,
                    sync_command: None,
                }
            }
            Framework::Vue => {
                if host == Some("nuxt") {
                    PathMappingStrategy {
                        candidates: vec![".nuxt/tsconfig.json".to_string()],
                        wildcard_keys: true,
                        sync_command: Some(vec![
                            "npx".to_string(),
                            "nuxi".to_string(),
                            "prepare".to_string(),
                        ]),
                    }
                } else {
                    let path = ts_config_path
                        .map(|p| p.trim_start_matches("./").to_string())
                        .unwrap_or_else(|| "tsconfig.json".to_string());
                    PathMappingStrategy {
                        candidates: vec![path],
                        wildcard_keys: true,
                        sync_command: None,
                    }
                }
            }
            Framework::Svelte => PathMappingStrategy {
                candidates: vec![".svelte-kit/tsconfig.json".to_string()],
                wildcard_keys: false,
                sync_command: Some(vec![
                    "npx".to_string(),
                    "svelte-kit".to_string(),
                    "sync".to_string(),
                ]),
            },
            Framework::Solid | Framework::SolidUi => PathMappingStrategy {
                candidates: vec!["tsconfig.json".to_string()],
                wildcard_keys: true,
                sync_command: None,
            },
        }
    }

    /// Adapts a registry file name to the project's language mode.
    ///
    /// Only the extension changes; file contents are not de-typed.
    #[must_use]
    pub fn adapt_file_name(self, file_name: &str, typescript: bool) -> String {
        if typescript {
            return file_name.to_string();
        }
        let replacements: &[(&str, &str)] = match self {
            Framework::React | Framework::Solid | Framework::SolidUi => {
                &[(".tsx", ".ts"), (".jsx", ".js")]
            }
            Framework::Vue | Framework::Svelte => &[(".ts", ".js")],
        };
        for (from, to) in replacements {
            if let Some(stem) = file_name.strip_suffix(from) {
                return format!("{stem}{to}");
            }
        }
        file_name.to_string()
    }
}

impl fmt::Display for Framework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
