// src/sack.rs

//! Synthetic package universe and its query surface
//!
//! A `TestSack` aggregates one installed-system snapshot and any number of
//! named repositories of available packages, all loaded from fixture
//! descriptor files. Queries over the sack are pure and composable: each
//! filter consumes the query and returns a narrower one, never touching
//! the sack itself.

use crate::error::{Error, Result};
use crate::fixture::{FixtureConfig, RepoDescriptor, SYSTEM_DESCRIPTOR, SYSTEM_REPO_NAME};
use crate::nevra::Evr;
use crate::package::MockPackage;
use crate::repo::Repository;
use std::collections::HashMap;
use tracing::debug;

/// One package in the sack together with the partition it was loaded into
#[derive(Debug, Clone)]
struct SackEntry {
    reponame: String,
    package: MockPackage,
}

/// In-memory package universe built from fixture files
#[derive(Debug)]
pub struct TestSack {
    fixture: FixtureConfig,
    entries: Vec<SackEntry>,
    loaded: Vec<String>,
    system_checksum: Option<String>,
    installonly: Vec<String>,
}

impl TestSack {
    /// Create an empty sack rooted at the given fixture tree
    pub fn new(fixture: FixtureConfig) -> Self {
        Self {
            fixture,
            entries: Vec::new(),
            loaded: Vec::new(),
            system_checksum: None,
            installonly: Vec::new(),
        }
    }

    /// Load the installed-system snapshot from the fixture root
    ///
    /// May be called once per sack; a second call is a lifecycle error.
    /// System packages carry no owning repository.
    pub fn load_system_repo(&mut self) -> Result<()> {
        if self.loaded.iter().any(|id| id == SYSTEM_REPO_NAME) {
            return Err(Error::InitError(
                "system repository is already loaded".to_string(),
            ));
        }

        let path = self.fixture.descriptor_path(SYSTEM_DESCRIPTOR);
        let descriptor = RepoDescriptor::load(&path)?;
        debug!(
            "loading system snapshot from {} ({} packages)",
            path.display(),
            descriptor.packages.len()
        );

        // Parse everything before touching sack state, so a bad descriptor
        // leaves no partial partition behind
        let packages = descriptor
            .packages
            .iter()
            .map(|nevra| MockPackage::new(nevra))
            .collect::<Result<Vec<_>>>()?;
        self.entries.extend(packages.into_iter().map(|package| SackEntry {
            reponame: SYSTEM_REPO_NAME.to_string(),
            package,
        }));
        self.system_checksum = descriptor.meta.checksum;
        self.loaded.push(SYSTEM_REPO_NAME.to_string());
        Ok(())
    }

    /// Load an available repository from the named descriptor file
    ///
    /// Repositories accumulate across calls; loading the same id twice is
    /// an error rather than a silent overwrite.
    pub fn load_repo(&mut self, repo_id: &str, descriptor_filename: &str) -> Result<()> {
        if self.loaded.iter().any(|id| id == repo_id) {
            return Err(Error::AlreadyExists(format!(
                "repository '{}' is already loaded",
                repo_id
            )));
        }

        let path = self.fixture.descriptor_path(descriptor_filename);
        let descriptor = RepoDescriptor::load(&path)?;
        debug!(
            "loading repository '{}' from {} ({} packages)",
            repo_id,
            path.display(),
            descriptor.packages.len()
        );

        let mut repo = Repository::new(repo_id, self.fixture.packages_dir());
        repo.enable();
        let packages = descriptor
            .packages
            .iter()
            .map(|nevra| MockPackage::with_repo(nevra, &repo))
            .collect::<Result<Vec<_>>>()?;
        self.entries.extend(packages.into_iter().map(|package| SackEntry {
            reponame: repo_id.to_string(),
            package,
        }));
        self.loaded.push(repo_id.to_string());
        Ok(())
    }

    /// Apply post-load policy: the install-only package name list
    pub fn configure(&mut self, installonly: &[String]) {
        self.installonly = installonly.to_vec();
    }

    /// Names of the partitions loaded so far, in load order
    pub fn loaded_repos(&self) -> &[String] {
        &self.loaded
    }

    /// Checksum recorded in the system snapshot descriptor, if any
    pub fn system_checksum(&self) -> Option<&str> {
        self.system_checksum.as_deref()
    }

    /// Package names exempt from the single-version-per-name constraint
    pub fn installonly(&self) -> &[String] {
        &self.installonly
    }

    /// Total number of packages across all partitions
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Start a query over the whole sack
    pub fn query(&self) -> Query<'_> {
        Query {
            entries: self.entries.iter().collect(),
        }
    }
}

/// A filterable view over sack contents
///
/// Filters compose by chaining and are pure: each consumes the query and
/// returns the matching subset without mutating the sack.
#[derive(Debug, Clone)]
pub struct Query<'a> {
    entries: Vec<&'a SackEntry>,
}

impl<'a> Query<'a> {
    /// Keep packages loaded from the named partition
    pub fn reponame_eq(self, reponame: &str) -> Self {
        self.retain(|e| e.reponame == reponame)
    }

    /// Drop packages loaded from the named partition
    pub fn reponame_neq(self, reponame: &str) -> Self {
        self.retain(|e| e.reponame != reponame)
    }

    /// Keep packages with the given name
    pub fn name_eq(self, name: &str) -> Self {
        self.retain(|e| e.package.name() == name)
    }

    /// Drop packages with the given name
    pub fn name_neq(self, name: &str) -> Self {
        self.retain(|e| e.package.name() != name)
    }

    /// Keep packages with the given architecture
    pub fn arch_eq(self, arch: &str) -> Self {
        self.retain(|e| e.package.arch() == arch)
    }

    /// Keep packages whose epoch:version-release equals the given one
    pub fn evr_eq(self, evr: &Evr) -> Self {
        self.retain(|e| &e.package.evr() == evr)
    }

    /// Shorthand for the installed-system partition
    pub fn installed(self) -> Self {
        self.reponame_eq(SYSTEM_REPO_NAME)
    }

    /// Keep only the highest EVR per (name, arch)
    pub fn latest(self) -> Self {
        let mut best: HashMap<(String, String), &'a SackEntry> = HashMap::new();
        for &entry in &self.entries {
            let key = (
                entry.package.name().to_string(),
                entry.package.arch().to_string(),
            );
            let replace = match best.get(&key) {
                Some(current) => entry.package.evr() > current.package.evr(),
                None => true,
            };
            if replace {
                best.insert(key, entry);
            }
        }
        let mut entries: Vec<&'a SackEntry> = best.into_values().collect();
        // Deterministic output order regardless of map iteration
        entries.sort_by(|a, b| {
            a.package
                .name()
                .cmp(b.package.name())
                .then_with(|| a.package.arch().cmp(b.package.arch()))
        });
        Self { entries }
    }

    /// Materialize the matching packages
    pub fn collect(self) -> Vec<MockPackage> {
        self.entries.into_iter().map(|e| e.package.clone()).collect()
    }

    /// Number of matching packages
    pub fn count(self) -> usize {
        self.entries.len()
    }

    fn retain(mut self, keep: impl Fn(&SackEntry) -> bool) -> Self {
        self.entries.retain(|e| keep(e));
        self
    }
}
