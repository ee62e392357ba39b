//! Alias resolution against the project's path-mapping file.
//!
//! An alias such as `@/components` or `$lib/components` is a symbolic import
//! prefix. The project's `tsconfig.json` (or the framework-generated equivalent)
//! maps it to a real directory through `compilerOptions.paths`:
//!
//! ```json
//! { "compilerOptions": { "paths": { "@/*": ["./src/*"] } } }
//! ```
//!
//! Resolving `@/components/button` against that mapping yields
//! `src/components/button`. Aliases that do not start with a sigil (`$`, `@`, `~`)
//! are already paths and are returned untouched without reading anything.
//!
//! When the mapping file is missing and the framework generates it (SvelteKit,
//! Nuxt), the resolver runs the framework's sync command once and retries once.

use serde::Deserialize;
use std::collections::BTreeMap;
use tracing::{debug, warn};

use crate::config::PathMappingStrategy;
use crate::constants::ALIAS_SIGILS;
use crate::core::{Result, SyncError};
use crate::project::{CommandRunner, ProjectFiles};
use crate::utils::fs::join_relative;
use crate::utils::jsonc::from_jsonc_str;

/// Decoded `compilerOptions.paths` table of one mapping file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathMapping {
    /// Project-relative path of the mapping file
    pub file: String,
    /// Directory targets are relative to: the file's directory plus `baseUrl`
    pub base: String,
    pub paths: BTreeMap<String, Vec<String>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TsConfig {
    #[serde(default)]
    compiler_options: CompilerOptions,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CompilerOptions {
    #[serde(default)]
    base_url: Option<String>,
    #[serde(default)]
    paths: BTreeMap<String, Vec<String>>,
}

impl PathMapping {
    /// Parses a tsconfig-style document located at project-relative `file`.
    pub fn parse(file: &str, content: &str) -> Result<Self> {
        let tsconfig: TsConfig =
            from_jsonc_str(content).map_err(|e| SyncError::UnparseableConfig {
                file: file.to_string(),
                reason: e.to_string(),
            })?;

        let directory = file.rsplit_once('/').map_or("", |(dir, _)| dir);
        let base_url = tsconfig.compiler_options.base_url.unwrap_or_default();

        Ok(Self {
            file: file.to_string(),
            base: join_relative(&[directory, &base_url]),
            paths: tsconfig.compiler_options.paths,
        })
    }
}

/// Whether a string starts with one of the alias sigils.
#[must_use]
pub fn is_alias(value: &str) -> bool {
    value.starts_with(ALIAS_SIGILS)
}

/// Resolves an alias against an already loaded mapping.
///
/// `wildcard_keys` selects between `@/*`-style and `$lib`-style lookup keys.
pub fn resolve_with_mapping(alias: &str, mapping: &PathMapping, wildcard_keys: bool) -> Result<String> {
    if !is_alias(alias) {
        return Ok(alias.to_string());
    }

    let (prefix, rest) = alias.split_once('/').unwrap_or((alias, ""));
    let key = if wildcard_keys {
        format!("{prefix}/*")
    } else {
        prefix.to_string()
    };

    let target = mapping.paths.get(&key).and_then(|targets| targets.first()).ok_or_else(|| {
        SyncError::AliasNotFound {
            alias: alias.to_string(),
            mapping_file: mapping.file.clone(),
        }
    })?;
    let target = target.trim_end_matches('*').trim_end_matches('/');

    let resolved = join_relative(&[&mapping.base, target, rest]);
    debug!("Resolved alias {alias} -> {resolved} via {}", mapping.file);
    Ok(resolved)
}

/// Resolves aliases for one project, loading the mapping file on every call.
pub struct AliasResolver<'a> {
    project: &'a dyn ProjectFiles,
    runner: &'a dyn CommandRunner,
    strategy: PathMappingStrategy,
}

impl<'a> AliasResolver<'a> {
    pub fn new(
        project: &'a dyn ProjectFiles,
        runner: &'a dyn CommandRunner,
        strategy: PathMappingStrategy,
    ) -> Self {
        Self {
            project,
            runner,
            strategy,
        }
    }

    /// Resolves `alias` to a project-relative path.
    ///
    /// # Errors
    ///
    /// [`SyncError::FileNotFound`] when no mapping file exists even after the
    /// one-shot regeneration, [`SyncError::AliasNotFound`] when the key is absent.
    pub fn resolve(&self, alias: &str) -> Result<String> {
        if !is_alias(alias) {
            return Ok(alias.to_string());
        }
        let mapping = self.load_mapping()?;
        resolve_with_mapping(alias, &mapping, self.strategy.wildcard_keys)
    }

    fn load_mapping(&self) -> Result<PathMapping> {
        if let Some(mapping) = self.try_load()? {
            return Ok(mapping);
        }

        if let Some(command) = &self.strategy.sync_command {
            warn!("Path mapping file missing, running '{}' to generate it", command.join(" "));
            if let Err(e) = self.runner.run(command) {
                warn!("Path mapping generation failed: {e}");
            }
            if let Some(mapping) = self.try_load()? {
                return Ok(mapping);
            }
        }

        Err(SyncError::FileNotFound {
            path: self.strategy.candidates.first().cloned().unwrap_or_default(),
        })
    }

    fn try_load(&self) -> Result<Option<PathMapping>> {
        for candidate in &self.strategy.candidates {
            if let Some(content) = self.project.read_file(candidate)? {
                return PathMapping::parse(candidate, &content).map(Some);
            }
        }
        Ok(None)
    }
}
