//! In-memory collaborators: registry transport, project tree and command runner.

use serde_json::Value;
use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, Mutex};
use std::sync::atomic::{AtomicBool, Ordering};

use crate::core::Result;
use crate::project::{CommandRunner, ProjectFiles};
use crate::registry::{HttpResponse, Transport};

/// A registry served from memory.
///
/// Every request is recorded so tests can assert how often a resource was
/// fetched. Unknown URLs answer 404; [`FakeTransport::set_offline`] makes
/// every request fail before a status is produced.
pub struct FakeTransport {
    domain: String,
    responses: Mutex<HashMap<String, HttpResponse>>,
    requests: Mutex<Vec<String>>,
    offline: AtomicBool,
}

impl FakeTransport {
    pub fn new(domain: &str) -> Self {
        Self {
            domain: domain.trim_end_matches('/').to_string(),
            responses: Mutex::new(HashMap::new()),
            requests: Mutex::new(Vec::new()),
            offline: AtomicBool::new(false),
        }
    }

    #[must_use]
    pub fn domain(&self) -> &str {
        &self.domain
    }

    /// Serves `body` with `status` at `{domain}{path}`.
    pub fn respond(&self, path: &str, status: u16, body: &str) {
        let response = HttpResponse {
            status,
            body: body.to_string(),
        };
        self.lock_responses().insert(format!("{}{path}", self.domain), response);
    }

    pub fn respond_json(&self, path: &str, value: &Value) {
        self.respond(path, 200, &value.to_string());
    }

    pub fn set_index(&self, index: &Value) {
        self.respond_json("/registry/index.json", index);
    }

    pub fn set_styles(&self, styles: &Value) {
        self.respond_json("/registry/styles/index.json", styles);
    }

    /// Registers a component document; its name is read from the `name` field.
    pub fn set_component(&self, style: &str, component: &Value) {
        let name = component["name"].as_str().unwrap_or_default();
        self.respond_json(&format!("/registry/styles/{style}/{name}.json"), component);
    }

    pub fn set_palette(&self, base_color: &str, palette: &Value) {
        self.respond_json(&format!("/registry/colors/{base_color}.json"), palette);
    }

    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    /// Every URL requested so far, in order.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().map(|r| r.clone()).unwrap_or_default()
    }

    /// How many requests ended with `suffix`.
    pub fn request_count(&self, suffix: &str) -> usize {
        self.requests().iter().filter(|url| url.ends_with(suffix)).count()
    }

    fn lock_responses(&self) -> std::sync::MutexGuard<'_, HashMap<String, HttpResponse>> {
        self.responses.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl Transport for FakeTransport {
    fn get(&self, url: &str) -> std::result::Result<HttpResponse, String> {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(url.to_string());
        }
        if self.offline.load(Ordering::SeqCst) {
            return Err("network is unreachable".to_string());
        }
        Ok(self.lock_responses().get(url).cloned().unwrap_or(HttpResponse {
            status: 404,
            body: "Not Found".to_string(),
        }))
    }
}

/// A project file tree held in memory, keyed by project-relative path.
#[derive(Default)]
pub struct MemoryProject {
    files: Mutex<BTreeMap<String, String>>,
}

impl MemoryProject {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the tree with `(path, content)` pairs.
    pub fn with_files(files: &[(&str, &str)]) -> Self {
        let project = Self::new();
        for (path, content) in files {
            project.insert(path, content);
        }
        project
    }

    pub fn insert(&self, path: &str, content: &str) {
        self.lock().insert(path.to_string(), content.to_string());
    }

    /// Snapshot of every file in the tree.
    pub fn files(&self) -> BTreeMap<String, String> {
        self.lock().clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, BTreeMap<String, String>> {
        self.files.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

fn directory_prefix(path: &str) -> String {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("{trimmed}/")
    }
}

impl ProjectFiles for MemoryProject {
    fn read_file(&self, path: &str) -> Result<Option<String>> {
        Ok(self.lock().get(path).cloned())
    }

    fn write_file(&self, path: &str, content: &str) -> Result<()> {
        self.insert(path, content);
        Ok(())
    }

    fn delete_at_path(&self, path: &str) -> Result<()> {
        let prefix = directory_prefix(path);
        self.lock().retain(|key, _| key != path && !key.starts_with(&prefix));
        Ok(())
    }

    fn list_files(&self, path: &str) -> Result<Vec<String>> {
        let prefix = directory_prefix(path);
        let mut names: Vec<String> = self
            .lock()
            .keys()
            .filter_map(|key| key.strip_prefix(&prefix))
            .filter_map(|rest| rest.split('/').next())
            .map(str::to_string)
            .collect();
        names.sort();
        names.dedup();
        Ok(names)
    }

    fn exists(&self, path: &str) -> bool {
        let prefix = directory_prefix(path);
        self.lock().keys().any(|key| key == path || key.starts_with(&prefix))
    }
}

/// Command runner that records invocations.
///
/// Optionally writes one file into a project on every run, standing in for a
/// framework command that generates its path-mapping file.
#[derive(Default)]
pub struct FakeRunner {
    calls: Mutex<Vec<Vec<String>>>,
    effect: Option<(Arc<dyn ProjectFiles>, String, String)>,
}

impl FakeRunner {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn creating(mut self, project: Arc<dyn ProjectFiles>, path: &str, content: &str) -> Self {
        self.effect = Some((project, path.to_string(), content.to_string()));
        self
    }

    pub fn calls(&self) -> Vec<Vec<String>> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }
}

impl CommandRunner for FakeRunner {
    fn run(&self, args: &[String]) -> Result<Option<String>> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(args.to_vec());
        }
        if let Some((project, path, content)) = &self.effect {
            project.write_file(path, content)?;
        }
        Ok(None)
    }
}
