// src/repo.rs

//! Mock repository handles and the per-host repository set
//!
//! A `Repository` is the lightweight handle a test names into existence:
//! a string id, an enabled flag, and the directory its package artifacts
//! live in. The `RepoSet` owns every repository a host knows about and
//! rejects duplicate ids outright.

use crate::error::{Error, Result};
use std::path::{Path, PathBuf};
use tracing::debug;

/// A single mock repository
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Repository {
    id: String,
    enabled: bool,
    pkgdir: PathBuf,
}

impl Repository {
    /// Create a disabled repository rooted at the given package directory
    pub fn new(id: impl Into<String>, pkgdir: impl Into<PathBuf>) -> Self {
        Self {
            id: id.into(),
            enabled: false,
            pkgdir: pkgdir.into(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn enable(&mut self) {
        self.enabled = true;
    }

    pub fn disable(&mut self) {
        self.enabled = false;
    }

    /// Directory holding this repository's package artifacts
    pub fn pkgdir(&self) -> &Path {
        &self.pkgdir
    }
}

/// The set of repositories owned by one mock host
///
/// Insertion order is preserved; it determines the order repositories are
/// loaded into the sack.
#[derive(Debug, Default)]
pub struct RepoSet {
    repos: Vec<Repository>,
}

impl RepoSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a repository, rejecting duplicate ids
    pub fn add(&mut self, repo: Repository) -> Result<()> {
        if self.repos.iter().any(|r| r.id() == repo.id()) {
            return Err(Error::AlreadyExists(format!(
                "repository '{}' is already registered",
                repo.id()
            )));
        }
        debug!("registering repository '{}'", repo.id());
        self.repos.push(repo);
        Ok(())
    }

    pub fn get(&self, id: &str) -> Option<&Repository> {
        self.repos.iter().find(|r| r.id() == id)
    }

    /// Iterate enabled repositories in registration order
    pub fn iter_enabled(&self) -> impl Iterator<Item = &Repository> {
        self.repos.iter().filter(|r| r.is_enabled())
    }

    pub fn len(&self) -> usize {
        self.repos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.repos.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_repository() {
        let mut set = RepoSet::new();
        let mut repo = Repository::new("main", "/tmp/pkgs");
        repo.enable();
        set.add(repo).unwrap();

        assert_eq!(set.len(), 1);
        assert!(set.get("main").unwrap().is_enabled());
    }

    #[test]
    fn test_add_duplicate_repository() {
        let mut set = RepoSet::new();
        set.add(Repository::new("main", "/tmp/pkgs")).unwrap();

        let result = set.add(Repository::new("main", "/tmp/other"));
        assert!(result.is_err());
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_iter_enabled_skips_disabled() {
        let mut set = RepoSet::new();
        let mut main = Repository::new("main", "/tmp/pkgs");
        main.enable();
        set.add(main).unwrap();
        set.add(Repository::new("extras", "/tmp/pkgs")).unwrap();

        let enabled: Vec<&str> = set.iter_enabled().map(|r| r.id()).collect();
        assert_eq!(enabled, vec!["main"]);
    }
}
