//! Test environment setup and management
//!
//! A [`TestEnvironment`] is a temporary project directory on disk plus an
//! in-memory registry, wired into a [`Source`] the same way the CLI wires the
//! real collaborators.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tempfile::TempDir;

use super::fakes::{FakeRunner, FakeTransport};
use super::fixtures::ConfigFixture;
use crate::config::{Framework, Settings};
use crate::project::{LocalProject, ProjectFiles};
use crate::source::Source;

/// Test environment helper that sets up a project and a fake registry
pub struct TestEnvironment {
    pub temp_dir: TempDir,
    pub project_dir: PathBuf,
    pub registry: Arc<FakeTransport>,
    pub runner: Arc<FakeRunner>,
}

impl TestEnvironment {
    /// Empty project served by a fake registry for `framework`'s default domain
    pub fn new(framework: Framework) -> Result<Self> {
        super::init_test_logging(None);

        let temp_dir = TempDir::new()?;
        let project_dir = temp_dir.path().join("project");
        fs::create_dir_all(&project_dir)?;

        Ok(Self {
            temp_dir,
            project_dir,
            registry: Arc::new(FakeTransport::new(framework.default_domain())),
            runner: Arc::new(FakeRunner::new()),
        })
    }

    /// Project with the given `components.json` and path-mapping file
    pub fn with_project(
        framework: Framework,
        config: &ConfigFixture,
        mapping: Option<(&str, &str)>,
    ) -> Result<Self> {
        let env = Self::new(framework)?;
        env.create_file("components.json", &config.render())?;
        if let Some((path, content)) = mapping {
            env.create_file(path, content)?;
        }
        Ok(env)
    }

    /// Replaces the command runner, e.g. with one that generates a mapping file
    #[must_use]
    pub fn with_runner(mut self, runner: FakeRunner) -> Self {
        self.runner = Arc::new(runner);
        self
    }

    /// The on-disk project collaborator for this environment
    pub fn project(&self) -> Arc<dyn ProjectFiles> {
        Arc::new(LocalProject::new(&self.project_dir))
    }

    /// A source adapter detected from the project's configuration
    pub fn source(&self) -> Result<Source> {
        Source::open(self.project(), self.runner.clone(), self.registry.clone(), Settings::default())
            .context("Failed to open project")
    }

    pub fn project_path(&self) -> &Path {
        &self.project_dir
    }

    pub fn create_file(&self, path: impl AsRef<Path>, content: &str) -> Result<PathBuf> {
        let full = self.project_dir.join(path);
        if let Some(parent) = full.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&full, content).with_context(|| format!("Failed to write {}", full.display()))?;
        Ok(full)
    }

    pub fn read_file(&self, path: impl AsRef<Path>) -> Result<String> {
        let full = self.project_dir.join(path);
        fs::read_to_string(&full).with_context(|| format!("Failed to read {}", full.display()))
    }

    pub fn file_exists(&self, path: impl AsRef<Path>) -> bool {
        self.project_dir.join(path).exists()
    }
}
