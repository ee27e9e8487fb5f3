// src/host.rs

//! Mock transaction host
//!
//! `MockHost` composes everything the real front end would hand to the
//! transaction engine: the enabled repository set, a fixed configuration,
//! a per-package metadata store, stubbed callbacks, and a lazily-built
//! sack. Each host exclusively owns its state; nothing crosses hosts and
//! everything is torn down when the host drops.

use crate::config::FakeConfig;
use crate::error::{Error, Result};
use crate::fixture::FixtureConfig;
use crate::pkgdb::MockPackageDb;
use crate::progress::{ProgressSink, RecordingProgress};
use crate::repo::{RepoSet, Repository};
use crate::sack::TestSack;
use crate::transaction::{BuildResult, ScriptedEngine, TransactionBuilder, TransactionData};
use tracing::debug;

/// Composes mock repositories, configuration, and metadata into something
/// presentable to the transaction-building logic
pub struct MockHost {
    fixture: FixtureConfig,
    repos: RepoSet,
    conf: FakeConfig,
    pkgdb: MockPackageDb,
    tx: TransactionData,
    engine: Box<dyn TransactionBuilder>,
    progress: RecordingProgress,
    sack: Option<TestSack>,
    sack_builds: u32,
    system_repo_reads: u32,
}

impl MockHost {
    /// Host with no extra repositories; only the system snapshot loads
    pub fn new(fixture: FixtureConfig) -> Self {
        Self {
            fixture,
            repos: RepoSet::new(),
            conf: FakeConfig::new(),
            pkgdb: MockPackageDb::new(),
            tx: TransactionData::new(),
            engine: Box::new(ScriptedEngine::new()),
            progress: RecordingProgress::new(),
            sack: None,
            sack_builds: 0,
            system_repo_reads: 0,
        }
    }

    /// Host with the named extra repositories, each wrapped and enabled
    pub fn with_repos(fixture: FixtureConfig, repo_ids: &[&str]) -> Result<Self> {
        let mut host = Self::new(fixture);
        for id in repo_ids {
            host.add_repo(id)?;
        }
        Ok(host)
    }

    /// Swap in a different engine behind the builder seam
    pub fn with_engine(mut self, engine: Box<dyn TransactionBuilder>) -> Self {
        self.engine = engine;
        self
    }

    /// Register and enable one more repository
    ///
    /// Its package directory is the fixture tree's `packages/` directory;
    /// its descriptor is expected at `<id>.repo` under the fixture root.
    pub fn add_repo(&mut self, id: &str) -> Result<()> {
        let mut repo = Repository::new(id, self.fixture.packages_dir());
        repo.enable();
        self.repos.add(repo)
    }

    pub fn repos(&self) -> &RepoSet {
        &self.repos
    }

    /// Read-only configuration handed to the engine
    pub fn conf(&self) -> &FakeConfig {
        &self.conf
    }

    /// Mutable configuration access for test setup, before the sack builds
    pub fn conf_mut(&mut self) -> &mut FakeConfig {
        &mut self.conf
    }

    pub fn pkgdb(&mut self) -> &mut MockPackageDb {
        &mut self.pkgdb
    }

    pub fn tx(&self) -> &TransactionData {
        &self.tx
    }

    pub fn tx_mut(&mut self) -> &mut TransactionData {
        &mut self.tx
    }

    pub fn progress(&self) -> &RecordingProgress {
        &self.progress
    }

    /// The sack, built on first access and cached for the host's lifetime
    ///
    /// Construction loads the system snapshot, then every enabled
    /// repository from its `<id>.repo` descriptor, then applies the
    /// install-only package list from the configuration. Later calls
    /// return the cached instance; construction happens at most once.
    pub fn sack(&mut self) -> Result<&TestSack> {
        if self.sack.is_none() {
            debug!("building sack from {}", self.fixture.root().display());
            let mut sack = TestSack::new(self.fixture.clone());
            sack.load_system_repo()?;
            for repo in self.repos.iter_enabled() {
                let descriptor = format!("{}.repo", repo.id());
                sack.load_repo(repo.id(), &descriptor)?;
            }
            sack.configure(&self.conf.installonlypkgs);
            self.sack = Some(sack);
            self.sack_builds += 1;
        }
        self.sack
            .as_ref()
            .ok_or_else(|| Error::InitError("sack construction failed".to_string()))
    }

    /// How many times the sack has been constructed; stays at one
    pub fn sack_builds(&self) -> u32 {
        self.sack_builds
    }

    /// No-op stand-in for system repository discovery
    ///
    /// The host must never consult real system repository configuration;
    /// this records the call and does nothing.
    pub fn read_system_repos(&mut self) {
        self.system_repo_reads += 1;
    }

    pub fn system_repo_reads(&self) -> u32 {
        self.system_repo_reads
    }

    /// Build the transaction through the engine seam
    ///
    /// Ensures the sack exists, then hands the sack, the configuration,
    /// and the member list to the engine.
    pub fn build_transaction(&mut self) -> Result<BuildResult> {
        self.sack()?;
        self.progress.set_message("building transaction");
        let sack = self
            .sack
            .as_ref()
            .ok_or_else(|| Error::InitError("sack construction failed".to_string()))?;
        let result = self.engine.build(sack, &self.conf, &mut self.tx)?;
        debug!(
            "transaction build finished: code {} ({})",
            result.code.code(),
            result.message
        );
        Ok(result)
    }

    /// Consume the host and return its built sack
    pub fn into_sack(mut self) -> Result<TestSack> {
        self.sack()?;
        self.sack
            .take()
            .ok_or_else(|| Error::InitError("sack construction failed".to_string()))
    }
}

impl std::fmt::Debug for MockHost {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MockHost")
            .field("fixture", &self.fixture)
            .field("repos", &self.repos)
            .field("sack_builds", &self.sack_builds)
            .finish_non_exhaustive()
    }
}
