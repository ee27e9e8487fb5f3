// src/package.rs

//! Synthetic in-memory package records
//!
//! A `MockPackage` stands in for a real package wherever the engine or the
//! assertion helpers expect one. It is built from a NEVRA string, optionally
//! owned by a repository, and keeps its original string form so it prints
//! back exactly as it was written.

use crate::error::{Error, Result};
use crate::nevra::{Evr, Nevra};
use crate::repo::Repository;
use std::ffi::OsStr;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::path::{Path, PathBuf};

/// An in-memory stand-in for a real package record
///
/// Equality and hashing follow package identity: all five NEVRA fields, and
/// nothing else. The owning repository does not participate, so an installed
/// copy and an available copy of the same NEVRA compare equal.
#[derive(Debug, Clone)]
pub struct MockPackage {
    nevra: Nevra,
    source: String,
    location: String,
    repo: Option<Repository>,
}

impl MockPackage {
    /// Build a repository-less package (a system package) from a NEVRA string
    pub fn new(nevra: &str) -> Result<Self> {
        Self::build(nevra, None)
    }

    /// Build a package owned by the given repository
    pub fn with_repo(nevra: &str, repo: &Repository) -> Result<Self> {
        Self::build(nevra, Some(repo.clone()))
    }

    fn build(nevra: &str, repo: Option<Repository>) -> Result<Self> {
        let parsed = Nevra::parse(nevra)?;
        Ok(Self {
            nevra: parsed,
            source: nevra.to_string(),
            location: format!("{}.rpm", nevra),
            repo,
        })
    }

    pub fn name(&self) -> &str {
        &self.nevra.name
    }

    pub fn epoch(&self) -> u64 {
        self.nevra.epoch
    }

    pub fn version(&self) -> &str {
        &self.nevra.version
    }

    pub fn release(&self) -> &str {
        &self.nevra.release
    }

    pub fn arch(&self) -> &str {
        &self.nevra.arch
    }

    pub fn nevra(&self) -> &Nevra {
        &self.nevra
    }

    /// The epoch:version-release view of this package
    pub fn evr(&self) -> Evr {
        self.nevra.evr()
    }

    /// Package tuple view: (name, arch, epoch, version, release)
    pub fn pkgtup(&self) -> (&str, &str, u64, &str, &str) {
        (
            &self.nevra.name,
            &self.nevra.arch,
            self.nevra.epoch,
            &self.nevra.version,
            &self.nevra.release,
        )
    }

    /// Id of the owning repository, or None for system packages
    pub fn reponame(&self) -> Option<&str> {
        self.repo.as_ref().map(|r| r.id())
    }

    /// Synthesized relative artifact path within the repository
    pub fn location(&self) -> &str {
        &self.location
    }

    /// Local artifact path: the owning repository's package directory joined
    /// with the basename of the synthesized location
    ///
    /// System packages have no owning repository and therefore no local
    /// artifact.
    pub fn local_path(&self) -> Result<PathBuf> {
        let repo = self.repo.as_ref().ok_or_else(|| {
            Error::InitError(format!("package '{}' has no owning repository", self))
        })?;
        let basename = Path::new(&self.location)
            .file_name()
            .unwrap_or_else(|| OsStr::new(&self.location));
        Ok(repo.pkgdir().join(basename))
    }
}

impl fmt::Display for MockPackage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.source)
    }
}

impl PartialEq for MockPackage {
    fn eq(&self, other: &Self) -> bool {
        self.nevra == other.nevra
    }
}

impl Eq for MockPackage {}

impl Hash for MockPackage {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.nevra.hash(state);
    }
}
