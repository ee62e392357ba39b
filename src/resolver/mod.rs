//! Dependency graph resolution for component installs.
//!
//! A component names other registry components in `registryDependencies`.
//! Installing it means installing the transitive closure of those names minus
//! whatever the project already has. The registry promises a DAG, but diamonds
//! are common (`form` and `dialog` both pull in `button`), so every name is
//! fetched at most once per resolution pass. Cycles are tolerated the same way.
//!
//! The walk is breadth-first from the root, which makes the result order
//! deterministic: the root first, then its dependencies level by level in
//! declaration order. Files are later written in this order.

use std::collections::{HashSet, VecDeque};
use tracing::debug;

use crate::core::Result;
use crate::registry::ComponentWithContents;

/// Resolves the install set for `root`.
///
/// `fetch` is called once per distinct component name. The root is always
/// fetched, even if already installed, so its files can be refreshed. A
/// dependency listed in `installed` is neither fetched nor expanded.
///
/// # Errors
///
/// The first fetch error aborts the whole resolution and is returned as is.
pub fn resolve_install_set<F>(
    root: &str,
    installed: &HashSet<String>,
    mut fetch: F,
) -> Result<Vec<ComponentWithContents>>
where
    F: FnMut(&str) -> Result<ComponentWithContents>,
{
    let mut visited: HashSet<String> = HashSet::new();
    let mut queue: VecDeque<String> = VecDeque::new();
    let mut resolved = Vec::new();

    visited.insert(root.to_string());
    queue.push_back(root.to_string());

    while let Some(name) = queue.pop_front() {
        let component = fetch(&name)?;

        for dependency in &component.component.registry_dependencies {
            if installed.contains(dependency) {
                debug!("Skipping '{dependency}' required by '{name}': already installed");
                continue;
            }
            if visited.insert(dependency.clone()) {
                debug!("Queueing '{dependency}' required by '{name}'");
                queue.push_back(dependency.clone());
            }
        }

        resolved.push(component);
    }

    debug!(
        "Resolved install set for '{root}': {}",
        resolved.iter().map(ComponentWithContents::name).collect::<Vec<_>>().join(", ")
    );
    Ok(resolved)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SyncError;
    use crate::registry::{Component, ComponentFile};
    use std::collections::HashMap;

    fn component(name: &str, deps: &[&str]) -> ComponentWithContents {
        ComponentWithContents {
            component: Component {
                name: name.to_string(),
                npm_dependencies: Vec::new(),
                registry_dependencies: deps.iter().map(|d| (*d).to_string()).collect(),
                kind: "components:ui".to_string(),
            },
            files: vec![ComponentFile {
                name: format!("{name}.tsx"),
                kind: None,
                content: String::new(),
            }],
        }
    }

    fn registry(entries: &[(&str, &[&str])]) -> HashMap<String, ComponentWithContents> {
        entries
            .iter()
            .map(|(name, deps)| ((*name).to_string(), component(name, deps)))
            .collect()
    }

    fn names(set: &[ComponentWithContents]) -> Vec<&str> {
        set.iter().map(ComponentWithContents::name).collect()
    }

    #[test]
    fn test_diamond_fetches_shared_dependency_once() {
        let registry = registry(&[("a", &["b", "c"]), ("b", &["d"]), ("c", &["d"]), ("d", &[])]);
        let mut fetched: Vec<String> = Vec::new();

        let set = resolve_install_set("a", &HashSet::new(), |name| {
            fetched.push(name.to_string());
            Ok(registry[name].clone())
        })
        .unwrap();

        assert_eq!(names(&set), vec!["a", "b", "c", "d"]);
        assert_eq!(fetched.iter().filter(|n| *n == "d").count(), 1);
        assert_eq!(fetched.len(), 4);
    }

    #[test]
    fn test_installed_dependencies_are_skipped() {
        let registry = registry(&[("a", &["b", "c"]), ("b", &["d"]), ("c", &[]), ("d", &[])]);
        let installed: HashSet<String> = ["b".to_string()].into_iter().collect();

        let set = resolve_install_set("a", &installed, |name| Ok(registry[name].clone())).unwrap();

        // b is installed, so neither b nor its dependency d is pulled in.
        assert_eq!(names(&set), vec!["a", "c"]);
    }

    #[test]
    fn test_root_is_fetched_even_when_installed() {
        let registry = registry(&[("a", &[])]);
        let installed: HashSet<String> = ["a".to_string()].into_iter().collect();

        let set = resolve_install_set("a", &installed, |name| Ok(registry[name].clone())).unwrap();
        assert_eq!(names(&set), vec!["a"]);
    }

    #[test]
    fn test_cycles_terminate() {
        let registry = registry(&[("a", &["b"]), ("b", &["a"])]);
        let set = resolve_install_set("a", &HashSet::new(), |name| Ok(registry[name].clone()))
            .unwrap();
        assert_eq!(names(&set), vec!["a", "b"]);
    }

    #[test]
    fn test_fetch_failure_aborts_resolution() {
        let registry = registry(&[("a", &["b", "missing"]), ("b", &[])]);

        let err = resolve_install_set("a", &HashSet::new(), |name| {
            registry.get(name).cloned().ok_or_else(|| SyncError::ComponentNotFound {
                name: name.to_string(),
                url: format!("https://reg.test/{name}.json"),
            })
        })
        .unwrap_err();

        assert!(matches!(err, SyncError::ComponentNotFound { name, .. } if name == "missing"));
    }
}
