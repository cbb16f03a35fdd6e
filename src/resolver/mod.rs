//! Dependency resolution for installer sets.
//!
//! [`DependencyResolver`] expands a list of requested keys into an install
//! order in which every installer appears once and after everything it
//! depends on. Roots are expanded in the order given; a depth-first
//! post-order walk emits dependencies before their dependents.
//!
//! Resolution fails as a whole: a cycle yields `CircularDependency` naming
//! the edge that closes it, and a missing installer yields the registry's
//! `NotFound`.

use std::collections::HashSet;

use crate::error::{OutfitterError, Result};
use crate::installer::{InstallerDescriptor, InstallerKey};
use crate::registry::InstallerRegistry;

/// Computes install orders against a registry.
///
/// The resolver holds no state between calls; every [`resolve`](Self::resolve)
/// starts from a fresh walk.
#[derive(Debug)]
pub struct DependencyResolver<'a, R: ?Sized> {
    registry: &'a R,
}

impl<'a, R: InstallerRegistry + ?Sized> DependencyResolver<'a, R> {
    /// Create a resolver reading from `registry`.
    pub fn new(registry: &'a R) -> Self {
        Self { registry }
    }

    /// Expand `keys` into a duplicate-free, dependency-first install order.
    pub fn resolve<S: AsRef<str>>(&self, keys: &[S]) -> Result<Vec<InstallerDescriptor>> {
        let mut walk = Walk::default();

        for key in keys {
            let key = InstallerKey::parse(key.as_ref())?;
            self.visit(&key, &mut walk)?;
        }

        tracing::debug!(
            "Resolved {} requested installers into {}",
            keys.len(),
            walk.result.len()
        );
        Ok(walk.result)
    }

    fn visit(&self, key: &InstallerKey, walk: &mut Walk) -> Result<()> {
        if walk.visited.contains(key) {
            return Ok(());
        }
        if walk.path.contains(key) {
            return Err(walk.cycle(key));
        }

        let installer = self.registry.get_installer(&key.to_string())?;

        // `id:latest` may resolve to a concrete version seen under another name
        let resolved = installer.key();
        if resolved != *key {
            if walk.visited.contains(&resolved) {
                walk.visited.insert(key.clone());
                return Ok(());
            }
            if walk.path.contains(&resolved) {
                return Err(walk.cycle(&resolved));
            }
        }

        let mut names = vec![key.clone()];
        if resolved != *key {
            names.push(resolved);
        }
        walk.path.extend(names.iter().cloned());

        for dependency in installer.dependency_keys()? {
            self.visit(&dependency, walk)?;
        }

        walk.path.truncate(walk.path.len() - names.len());
        walk.visited.extend(names);
        walk.result.push(installer);
        Ok(())
    }
}

/// Per-call traversal state.
#[derive(Debug, Default)]
struct Walk {
    /// Keys currently being expanded, outermost first.
    path: Vec<InstallerKey>,
    /// Keys already emitted.
    visited: HashSet<InstallerKey>,
    /// Emitted installers in install order.
    result: Vec<InstallerDescriptor>,
}

impl Walk {
    /// Error for reaching `key` again while it is still being expanded.
    fn cycle(&self, key: &InstallerKey) -> OutfitterError {
        let dependent = self
            .path
            .last()
            .map(ToString::to_string)
            .unwrap_or_default();

        OutfitterError::CircularDependency {
            key: key.to_string(),
            dependent,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::LocalRegistry;

    fn installer(id: &str, deps: &[&str]) -> InstallerDescriptor {
        deps.iter().fold(InstallerDescriptor::new(id, "1"), |d, dep| {
            d.with_dependency(*dep)
        })
    }

    fn registry(installers: Vec<InstallerDescriptor>) -> LocalRegistry {
        LocalRegistry::in_memory(installers).unwrap()
    }

    fn ids(installers: &[InstallerDescriptor]) -> Vec<&str> {
        installers.iter().map(|i| i.id.as_str()).collect()
    }

    #[test]
    fn shared_dependency_comes_first_once() {
        let registry = registry(vec![
            installer("a", &[]),
            installer("b", &["a:1"]),
            installer("c", &["a:1"]),
        ]);

        let ordered = DependencyResolver::new(&registry)
            .resolve(&["b:1", "c:1", "a:1"])
            .unwrap();
        assert_eq!(ids(&ordered), vec!["a", "b", "c"]);
    }

    #[test]
    fn roots_keep_requested_order() {
        let registry = registry(vec![installer("x", &[]), installer("y", &[])]);

        let ordered = DependencyResolver::new(&registry)
            .resolve(&["y:1", "x:1"])
            .unwrap();
        assert_eq!(ids(&ordered), vec!["y", "x"]);
    }

    #[test]
    fn dependencies_follow_declared_order() {
        let registry = registry(vec![
            installer("a", &[]),
            installer("b", &[]),
            installer("top", &["b:1", "a:1"]),
        ]);

        let ordered = DependencyResolver::new(&registry).resolve(&["top:1"]).unwrap();
        assert_eq!(ids(&ordered), vec!["b", "a", "top"]);
    }

    #[test]
    fn diamond_is_flattened() {
        let registry = registry(vec![
            installer("base", &[]),
            installer("left", &["base:1"]),
            installer("right", &["base:1"]),
            installer("top", &["left:1", "right:1"]),
        ]);

        let ordered = DependencyResolver::new(&registry).resolve(&["top:1"]).unwrap();
        assert_eq!(ids(&ordered), vec!["base", "left", "right", "top"]);
    }

    #[test]
    fn duplicate_roots_are_emitted_once() {
        let registry = registry(vec![installer("a", &[])]);

        let ordered = DependencyResolver::new(&registry)
            .resolve(&["a:1", "a:1"])
            .unwrap();
        assert_eq!(ordered.len(), 1);
    }

    #[test]
    fn empty_request_is_empty_order() {
        let registry = registry(vec![]);
        let keys: [&str; 0] = [];
        assert!(DependencyResolver::new(&registry).resolve(&keys).unwrap().is_empty());
    }

    #[test]
    fn two_node_cycle_names_both_keys() {
        let registry = registry(vec![installer("a", &["b:1"]), installer("b", &["a:1"])]);

        let err = DependencyResolver::new(&registry)
            .resolve(&["a:1", "b:1"])
            .unwrap_err();
        match &err {
            OutfitterError::CircularDependency { key, dependent } => {
                assert_eq!(key, "a:1");
                assert_eq!(dependent, "b:1");
            }
            other => panic!("unexpected error: {other:?}"),
        }
        let message = err.to_string();
        assert!(message.contains("a:1") && message.contains("b:1"));
    }

    #[test]
    fn self_dependency_is_a_cycle() {
        let registry = registry(vec![installer("a", &["a:1"])]);
        assert!(matches!(
            DependencyResolver::new(&registry).resolve(&["a:1"]),
            Err(OutfitterError::CircularDependency { .. })
        ));
    }

    #[test]
    fn missing_dependency_is_not_found() {
        let registry = registry(vec![installer("a", &["x"])]);

        let err = DependencyResolver::new(&registry)
            .resolve(&["a:1"])
            .unwrap_err();
        assert!(matches!(err, OutfitterError::NotFound { ref key } if key.starts_with("x")));
    }

    #[test]
    fn illegal_dependency_key_is_reported() {
        let registry = registry(vec![installer("a", &["x:1:2"])]);
        assert!(matches!(
            DependencyResolver::new(&registry).resolve(&["a:1"]),
            Err(OutfitterError::IllegalKey { .. })
        ));
    }

    #[test]
    fn latest_and_exact_keys_are_one_installer() {
        let registry = registry(vec![
            installer("exec", &[]),
            installer("tool", &["exec"]),
        ]);

        let ordered = DependencyResolver::new(&registry)
            .resolve(&["exec:1", "tool:1"])
            .unwrap();
        assert_eq!(ids(&ordered), vec!["exec", "tool"]);
    }

    #[test]
    fn resolver_is_reusable() {
        let registry = registry(vec![installer("a", &[]), installer("b", &["a:1"])]);
        let resolver = DependencyResolver::new(&registry);

        let first = resolver.resolve(&["b:1"]).unwrap();
        let second = resolver.resolve(&["b:1"]).unwrap();
        assert_eq!(first, second);
    }
}
