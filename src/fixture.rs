// src/fixture.rs

//! Fixture layout, repository descriptors, and scratch fixture trees
//!
//! A fixture root is a directory holding one TOML descriptor per mock
//! repository (named `<repo-id>.repo`, plus `system.repo` for the
//! installed-system snapshot) and a `packages/` directory of artifact
//! placeholder files. The root is always passed in explicitly through
//! `FixtureConfig`; nothing in the harness derives it from the caller's
//! own location.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Partition name of the installed-system snapshot
pub const SYSTEM_REPO_NAME: &str = "@System";

/// Descriptor filename for the installed-system snapshot
pub const SYSTEM_DESCRIPTOR: &str = "system.repo";

/// Checksum pinned in the shipped system snapshot descriptor
pub const SYSTEM_REPO_CHECKSUM: &str = "acf1e4377b5d4428f8a17a3c4b9f21d2c7e05a91";

/// Package counts in the shipped fixture tree
pub const SYSTEM_PACKAGE_COUNT: usize = 5;
pub const MAIN_PACKAGE_COUNT: usize = 8;
pub const UPDATES_PACKAGE_COUNT: usize = 4;
pub const AVAILABLE_PACKAGE_COUNT: usize = MAIN_PACKAGE_COUNT + UPDATES_PACKAGE_COUNT;
pub const TOTAL_PACKAGE_COUNT: usize = SYSTEM_PACKAGE_COUNT + AVAILABLE_PACKAGE_COUNT;

/// Explicit fixture root handed into the harness
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixtureConfig {
    root: PathBuf,
}

impl FixtureConfig {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory of package artifact files
    pub fn packages_dir(&self) -> PathBuf {
        self.root.join("packages")
    }

    /// Path of a repository descriptor by filename
    pub fn descriptor_path(&self, filename: &str) -> PathBuf {
        self.root.join(filename)
    }
}

/// On-disk repository descriptor
///
/// ```toml
/// packages = [
///     "saffron-3.6-1.x86_64",
/// ]
///
/// [meta]
/// checksum = "..."
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepoDescriptor {
    /// NEVRA strings of the packages this repository serves
    pub packages: Vec<String>,

    #[serde(default)]
    pub meta: DescriptorMeta,
}

/// Optional descriptor metadata
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DescriptorMeta {
    /// Snapshot checksum; only the system descriptor carries one
    pub checksum: Option<String>,
}

impl RepoDescriptor {
    /// Read and parse a descriptor file
    ///
    /// A missing file is an I/O error, not an empty repository; malformed
    /// TOML is a parse error.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let descriptor: RepoDescriptor = toml::from_str(&contents)?;
        Ok(descriptor)
    }
}

/// Scratch fixture tree builder for tests that need their own layout
///
/// Writes descriptors and artifact placeholders into a temp directory that
/// lives as long as the builder; drop tears the tree down.
#[derive(Debug)]
pub struct FixtureBuilder {
    dir: TempDir,
}

impl FixtureBuilder {
    pub fn new() -> Result<Self> {
        let dir = tempfile::tempdir()?;
        fs::create_dir(dir.path().join("packages"))?;
        Ok(Self { dir })
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn config(&self) -> FixtureConfig {
        FixtureConfig::new(self.dir.path())
    }

    /// Write a repository descriptor and its artifact placeholders
    pub fn write_repo(&self, id: &str, packages: &[&str]) -> Result<()> {
        self.write_descriptor(&format!("{}.repo", id), packages, None)
    }

    /// Write the installed-system snapshot descriptor
    pub fn write_system(&self, packages: &[&str], checksum: &str) -> Result<()> {
        self.write_descriptor(SYSTEM_DESCRIPTOR, packages, Some(checksum.to_string()))
    }

    /// Write raw descriptor contents, for malformed-input tests
    pub fn write_raw(&self, filename: &str, contents: &str) -> Result<()> {
        fs::write(self.dir.path().join(filename), contents)?;
        Ok(())
    }

    fn write_descriptor(
        &self,
        filename: &str,
        packages: &[&str],
        checksum: Option<String>,
    ) -> Result<()> {
        let descriptor = RepoDescriptor {
            packages: packages.iter().map(|p| p.to_string()).collect(),
            meta: DescriptorMeta { checksum },
        };
        let contents = toml::to_string(&descriptor)?;
        fs::write(self.dir.path().join(filename), contents)?;

        for nevra in packages {
            fs::write(
                self.dir.path().join("packages").join(format!("{}.rpm", nevra)),
                b"",
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_writes_loadable_descriptor() {
        let builder = FixtureBuilder::new().unwrap();
        builder
            .write_repo("scratch", &["saffron-3.6-1.x86_64", "cumin-2:1.0-2.x86_64"])
            .unwrap();

        let config = builder.config();
        let descriptor = RepoDescriptor::load(&config.descriptor_path("scratch.repo")).unwrap();
        assert_eq!(descriptor.packages.len(), 2);
        assert!(descriptor.meta.checksum.is_none());
        assert!(config.packages_dir().join("saffron-3.6-1.x86_64.rpm").is_file());
    }

    #[test]
    fn test_builder_system_descriptor_carries_checksum() {
        let builder = FixtureBuilder::new().unwrap();
        builder
            .write_system(&["saffron-3.6-1.x86_64"], "deadbeef")
            .unwrap();

        let descriptor =
            RepoDescriptor::load(&builder.config().descriptor_path(SYSTEM_DESCRIPTOR)).unwrap();
        assert_eq!(descriptor.meta.checksum.as_deref(), Some("deadbeef"));
    }

    #[test]
    fn test_load_missing_descriptor_is_io_error() {
        let builder = FixtureBuilder::new().unwrap();
        let err = RepoDescriptor::load(&builder.config().descriptor_path("ghost.repo"))
            .unwrap_err();
        assert!(matches!(err, crate::Error::IoError(_)));
    }

    #[test]
    fn test_load_malformed_descriptor_is_parse_error() {
        let builder = FixtureBuilder::new().unwrap();
        builder.write_raw("bad.repo", "packages = \"not an array\"").unwrap();
        let err = RepoDescriptor::load(&builder.config().descriptor_path("bad.repo"))
            .unwrap_err();
        assert!(matches!(err, crate::Error::ParseError(_)));
    }
}
