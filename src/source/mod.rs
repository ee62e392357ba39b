//! Per-framework source adapter.
//!
//! A [`Source`] ties the pieces together for one project: it reads the
//! project configuration, talks to the framework's registry, resolves aliases
//! and install sets, runs the transformation pipeline and hands the results to
//! the [`ProjectFiles`] collaborator.
//!
//! The adapter is tagged by a [`Framework`] rather than specialized through
//! separate types; every framework difference is strategy data on the tag.
//!
//! # Per-component lifecycle
//!
//! ```text
//! NotInstalled --add--> Installed --check--> UpToDate | OutOfDate
//!      ^                                         |
//!      +-----------------remove------------------+
//! ```
//!
//! `add_component` fetches and transforms the whole install set before it
//! writes the first file, so a failing fetch or transform never leaves a
//! partially installed component behind.
//!
//! # Configuration freshness
//!
//! `components.json` is parsed again at the start of every operation and never
//! cached. Two concurrent operations may observe different snapshots, but each
//! one is internally consistent.

pub mod dependencies;

pub use dependencies::{missing_dependencies, package_name};

use std::collections::{BTreeSet, HashSet};
use std::sync::Arc;
use strsim::levenshtein;
use tracing::{debug, info, warn};

use crate::alias::AliasResolver;
use crate::config::{Framework, LocalConfig, Settings, detect_framework};
use crate::constants::CONFIG_FILE_NAME;
use crate::core::{Result, SyncError};
use crate::project::{CommandRunner, ProjectFiles};
use crate::registry::{Component, ComponentWithContents, RegistryClient, Style, Transport};
use crate::resolver::resolve_install_set;
use crate::transform::{TransformOptions, Transformer};
use crate::utils::fs::join_relative;

/// Maximum edit distance for name suggestions, as a percentage of the name length.
const SIMILARITY_THRESHOLD_PERCENT: usize = 50;

/// Outcome of one `add_component` call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstallReport {
    /// Components written, root first
    pub components: Vec<String>,
    /// Project-relative paths written, in write order
    pub files: Vec<String>,
    /// npm packages the components need that `package.json` does not declare
    pub missing_dependencies: Vec<String>,
}

/// Source adapter for one project and framework.
#[derive(Clone)]
pub struct Source {
    framework: Framework,
    project: Arc<dyn ProjectFiles>,
    runner: Arc<dyn CommandRunner>,
    transport: Arc<dyn Transport>,
    settings: Settings,
}

/// Per-operation state: one configuration snapshot and the clients built from it.
struct Operation<'s> {
    config: LocalConfig,
    registry: RegistryClient,
    aliases: AliasResolver<'s>,
}

impl Operation<'_> {
    fn transformer(&self) -> Result<Transformer<'_>> {
        let base_color = self.config.tailwind().base_color.as_str();
        Transformer::new(TransformOptions::from_config(&self.config), move || {
            self.registry.fetch_base_color_palette(base_color)
        })
    }

    /// Fetches `name`, rejecting names and file names that would escape their directory.
    fn fetch(&self, name: &str) -> Result<ComponentWithContents> {
        check_path_segment(name, name)?;
        let component = self.registry.fetch_component(name, self.config.style())?;
        check_path_segment(component.name(), component.name())?;
        for file in &component.files {
            check_path_segment(file.file_name(), &file.name)?;
        }
        Ok(component)
    }

    /// Resolved directory that holds the component kinds (`ui`, ...).
    fn components_dir(&self) -> Result<String> {
        self.aliases.resolve(&self.config.aliases().components)
    }
}

impl Source {
    pub fn new(
        framework: Framework,
        project: Arc<dyn ProjectFiles>,
        runner: Arc<dyn CommandRunner>,
        transport: Arc<dyn Transport>,
        settings: Settings,
    ) -> Self {
        Self {
            framework,
            project,
            runner,
            transport,
            settings,
        }
    }

    /// Detects the framework from the project's configuration and builds the adapter.
    ///
    /// # Errors
    ///
    /// [`SyncError::ConfigNotFound`] without a `components.json`, and
    /// [`SyncError::UnknownFramework`] when no detection rule matches it.
    pub fn open(
        project: Arc<dyn ProjectFiles>,
        runner: Arc<dyn CommandRunner>,
        transport: Arc<dyn Transport>,
        settings: Settings,
    ) -> Result<Self> {
        let raw = read_config(project.as_ref())?;
        let framework = detect_framework(&raw).ok_or_else(|| SyncError::UnknownFramework {
            file: CONFIG_FILE_NAME.to_string(),
        })?;
        debug!("Detected {framework} project");
        Ok(Self::new(framework, project, runner, transport, settings))
    }

    #[must_use]
    pub const fn framework(&self) -> Framework {
        self.framework
    }

    fn registry(&self) -> RegistryClient {
        RegistryClient::new(self.settings.registry_domain(self.framework), Arc::clone(&self.transport))
    }

    fn begin(&self) -> Result<Operation<'_>> {
        let raw = read_config(self.project.as_ref())?;
        let config = LocalConfig::parse_as(self.framework, &raw)?;
        let aliases = AliasResolver::new(
            self.project.as_ref(),
            self.runner.as_ref(),
            config.path_mapping_strategy(),
        );
        Ok(Operation {
            config,
            registry: self.registry(),
            aliases,
        })
    }

    /// The registry's current component index; empty when it cannot be fetched.
    pub fn list_available_components(&self) -> Vec<Component> {
        match self.registry().fetch_component_index() {
            Ok(components) => components,
            Err(e) => {
                warn!("Could not fetch the component index: {e}");
                Vec::new()
            }
        }
    }

    /// Sorted names of the components present in the project's UI directory.
    pub fn list_installed_components(&self) -> Result<Vec<String>> {
        let operation = self.begin()?;
        self.installed_names(&operation)
    }

    fn installed_names(&self, operation: &Operation<'_>) -> Result<Vec<String>> {
        let ui_dir = join_relative(&[&operation.components_dir()?, "ui"]);
        let entries = self.project.list_files(&ui_dir)?;

        let names: BTreeSet<String> = entries
            .iter()
            .filter(|entry| !entry.starts_with('.'))
            .map(|entry| {
                if self.framework.uses_directories_for_components() {
                    entry.clone()
                } else {
                    entry.split('.').next().unwrap_or(entry).to_string()
                }
            })
            .collect();

        Ok(names.into_iter().collect())
    }

    /// Installs `name` and every registry dependency the project lacks.
    ///
    /// Components are written root first, then dependencies in resolution order.
    pub fn add_component(&self, name: &str) -> Result<InstallReport> {
        let operation = self.begin()?;
        let installed: HashSet<String> = self.installed_names(&operation)?.into_iter().collect();

        let install_set = resolve_install_set(name, &installed, |n| operation.fetch(n))?;
        let components_dir = operation.components_dir()?;
        let transformer = operation.transformer()?;

        let mut planned = Vec::new();
        for component in &install_set {
            for file in &component.files {
                let transformed = transformer.transform_file(file)?;
                let path = self.destination(&components_dir, component, &transformed.file_name);
                planned.push((path, transformed.content));
            }
        }

        let mut report = InstallReport::default();
        for (path, content) in &planned {
            self.project.write_file(path, content)?;
            report.files.push(path.clone());
        }
        report.components = install_set.iter().map(|c| c.name().to_string()).collect();

        let required = install_set.iter().flat_map(|c| c.component.npm_dependencies.iter());
        report.missing_dependencies = missing_dependencies(self.project.as_ref(), required)?;
        if !report.missing_dependencies.is_empty() {
            warn!(
                "Missing npm dependencies for '{name}': {}",
                report.missing_dependencies.join(", ")
            );
        }

        info!("Installed {} ({} files)", report.components.join(", "), report.files.len());
        Ok(report)
    }

    /// Whether every file of `name` matches what `add_component` would write now.
    ///
    /// A missing local file counts as out of date.
    pub fn is_component_up_to_date(&self, name: &str) -> Result<bool> {
        let operation = self.begin()?;
        let component = operation.fetch(name)?;
        let components_dir = operation.components_dir()?;
        let transformer = operation.transformer()?;

        for file in &component.files {
            let transformed = transformer.transform_file(file)?;
            let path = self.destination(&components_dir, &component, &transformed.file_name);
            match self.project.read_file(&path)? {
                Some(local) if local == transformed.content => {}
                Some(_) => {
                    debug!("{path} differs from the registry");
                    return Ok(false);
                }
                None => {
                    debug!("{path} is missing");
                    return Ok(false);
                }
            }
        }
        Ok(true)
    }

    /// Deletes the local files of `name` and returns the paths that existed.
    ///
    /// The registry is consulted for the component's kind and file layout, so
    /// removal needs the registry to be reachable.
    pub fn remove_component(&self, name: &str) -> Result<Vec<String>> {
        let operation = self.begin()?;
        let component = operation.fetch(name)?;
        let components_dir = operation.components_dir()?;
        let typescript = operation.config.is_typescript();

        let targets: Vec<String> = if self.framework.uses_directories_for_components() {
            vec![join_relative(&[&components_dir, component.component.kind_dir(), name])]
        } else {
            component
                .files
                .iter()
                .map(|file| {
                    let file_name = self.framework.adapt_file_name(file.file_name(), typescript);
                    self.destination(&components_dir, &component, &file_name)
                })
                .collect()
        };

        let mut removed = Vec::new();
        for target in targets {
            if self.project.exists(&target) {
                self.project.delete_at_path(&target)?;
                removed.push(target);
            }
        }

        info!("Removed {name} ({} paths)", removed.len());
        Ok(removed)
    }

    /// Installed components whose local files differ from the registry.
    ///
    /// A component that cannot be checked is reported as outdated.
    pub fn list_outdated(&self) -> Result<Vec<String>> {
        let mut outdated = Vec::new();
        for name in self.list_installed_components()? {
            match self.is_component_up_to_date(&name) {
                Ok(true) => {}
                Ok(false) => outdated.push(name),
                Err(e) => {
                    warn!("Could not check '{name}': {e}");
                    outdated.push(name);
                }
            }
        }
        Ok(outdated)
    }

    pub fn fetch_styles(&self) -> Result<Vec<Style>> {
        self.registry().fetch_styles()
    }

    /// Up to three registry component names close to a misspelled `name`.
    pub fn suggest_components(&self, name: &str) -> Vec<String> {
        let available: Vec<String> =
            self.list_available_components().into_iter().map(|c| c.name).collect();
        find_similar_names(name, &available)
    }

    fn destination(
        &self,
        components_dir: &str,
        component: &ComponentWithContents,
        file_name: &str,
    ) -> String {
        if self.framework.uses_directories_for_components() {
            join_relative(&[components_dir, component.component.kind_dir(), component.name(), file_name])
        } else {
            join_relative(&[components_dir, component.component.kind_dir(), file_name])
        }
    }
}

/// `segment` must be usable as a single path component; `name` is reported on failure.
fn check_path_segment(segment: &str, name: &str) -> Result<()> {
    if segment.is_empty() || segment == "." || segment == ".." || segment.contains(['/', '\\']) {
        return Err(SyncError::InvalidComponentName {
            name: name.to_string(),
        });
    }
    Ok(())
}

fn read_config(project: &dyn ProjectFiles) -> Result<String> {
    project.read_file(CONFIG_FILE_NAME)?.ok_or_else(|| SyncError::ConfigNotFound {
        path: CONFIG_FILE_NAME.to_string(),
    })
}

fn find_similar_names(target: &str, available: &[String]) -> Vec<String> {
    let mut scored: Vec<(&String, usize)> =
        available.iter().map(|name| (name, levenshtein(target, name))).collect();
    scored.sort_by_key(|(_, distance)| *distance);

    scored
        .into_iter()
        .filter(|(_, distance)| *distance > 0 && *distance <= target.len() * SIMILARITY_THRESHOLD_PERCENT / 100)
        .take(3)
        .map(|(name, _)| name.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::fixtures::{self, ConfigFixture};
    use crate::test_utils::{FakeRunner, FakeTransport, MemoryProject};
    use serde_json::json;

    fn memory_source(config: &ConfigFixture) -> (Source, Arc<MemoryProject>, Arc<FakeTransport>) {
        let project = Arc::new(MemoryProject::with_files(&[
            (CONFIG_FILE_NAME, &config.render()),
            ("tsconfig.json", &fixtures::react_tsconfig()),
        ]));
        let transport = Arc::new(FakeTransport::new(Framework::React.default_domain()));
        transport.set_component(
            "new-york",
            &fixtures::component("button", &[], &[], &[("ui/button.tsx", fixtures::REACT_BUTTON)]),
        );
        let source = Source::open(
            project.clone(),
            Arc::new(FakeRunner::new()),
            transport.clone(),
            Settings::default(),
        )
        .unwrap();
        (source, project, transport)
    }

    #[test]
    fn test_configuration_is_read_per_operation() {
        let (source, project, _) = memory_source(&ConfigFixture::react());
        source.add_component("button").unwrap();
        assert!(project.files().contains_key("src/components/ui/button.tsx"));

        let moved = ConfigFixture::react()
            .set("aliases", json!({ "components": "@/widgets", "utils": "@/lib/utils" }));
        project.insert(CONFIG_FILE_NAME, &moved.render());

        let report = source.add_component("button").unwrap();
        assert_eq!(report.files, vec!["src/widgets/ui/button.tsx"]);
        assert_eq!(source.list_installed_components().unwrap(), vec!["button"]);
    }

    #[test]
    fn test_traversing_names_are_rejected_before_fetching() {
        let (source, project, transport) = memory_source(&ConfigFixture::react());
        project.insert("src/lib/utils.ts", "keep");
        let requests = transport.requests().len();

        for name in ["../lib/utils", "ui/button", "..", ""] {
            let err = source.add_component(name).unwrap_err();
            assert!(matches!(err, SyncError::InvalidComponentName { .. }), "{name}: {err}");
            assert!(matches!(
                source.remove_component(name),
                Err(SyncError::InvalidComponentName { .. })
            ));
        }

        assert_eq!(transport.requests().len(), requests);
        assert_eq!(project.files().get("src/lib/utils.ts").map(String::as_str), Some("keep"));
    }

    #[test]
    fn test_registry_file_names_cannot_escape() {
        let (source, project, transport) = memory_source(&ConfigFixture::react());
        transport.set_component(
            "new-york",
            &fixtures::component("sneaky", &[], &[], &[("ui/..", "x")]),
        );

        let err = source.add_component("sneaky").unwrap_err();

        assert!(matches!(err, SyncError::InvalidComponentName { ref name } if name == "ui/.."));
        assert!(!project.files().keys().any(|path| path.contains("sneaky")));
    }

    #[test]
    fn test_registry_override_from_settings() {
        let project = Arc::new(MemoryProject::with_files(&[(
            CONFIG_FILE_NAME,
            &ConfigFixture::react().render(),
        )]));
        let transport = Arc::new(FakeTransport::new("https://mirror.test"));
        let mut settings = Settings::default();
        settings.registries.insert("react".to_string(), "https://mirror.test".to_string());

        let source =
            Source::open(project, Arc::new(FakeRunner::new()), transport.clone(), settings).unwrap();
        assert!(source.list_available_components().is_empty());
        assert_eq!(transport.requests(), vec!["https://mirror.test/registry/index.json"]);
    }

    #[test]
    fn test_find_similar_names() {
        let available: Vec<String> =
            ["button", "badge", "card", "toggle", "tooltip"].iter().map(|s| (*s).to_string()).collect();

        assert_eq!(find_similar_names("buton", &available), vec!["button"]);
        assert!(find_similar_names("xyz", &available).is_empty());
        assert!(find_similar_names("button", &available).is_empty());
    }
}
