// src/lib.rs

//! Quern Test Harness
//!
//! Test infrastructure for exercising Quern's dependency-resolution and
//! transaction-building paths in isolation from a real system:
//!
//! - Synthetic packages: in-memory package records built from NEVRA strings
//! - Fixture-backed sacks: an installed-system snapshot plus named
//!   repositories loaded from on-disk descriptor files
//! - Mock transaction hosts: repositories, configuration, and metadata
//!   store wired up the way the real front end presents them to the engine
//! - Assertion helpers: validate a resolved transaction against an
//!   expected installed set
//!
//! The resolver and transaction solver themselves live elsewhere; the
//! harness reaches them only through the `TransactionBuilder` seam and
//! ships a scripted stand-in for exercising itself.

pub mod assert;
pub mod config;
mod error;
pub mod fixture;
pub mod host;
pub mod nevra;
pub mod package;
pub mod pkgdb;
pub mod progress;
pub mod repo;
pub mod sack;
pub mod transaction;

pub use assert::{
    assert_is_file, assert_length, assert_result, installed_but, installed_removed, mock_sack,
};
pub use config::{FakeConfig, MultilibPolicy};
pub use error::{Error, Result};
pub use fixture::{
    AVAILABLE_PACKAGE_COUNT, DescriptorMeta, FixtureBuilder, FixtureConfig, MAIN_PACKAGE_COUNT,
    RepoDescriptor, SYSTEM_DESCRIPTOR, SYSTEM_PACKAGE_COUNT, SYSTEM_REPO_CHECKSUM,
    SYSTEM_REPO_NAME, TOTAL_PACKAGE_COUNT, UPDATES_PACKAGE_COUNT,
};
pub use host::MockHost;
pub use nevra::{Evr, Nevra};
pub use package::MockPackage;
pub use pkgdb::{MockPackageDb, PkgRecord};
pub use progress::{ProgressSink, RecordingProgress};
pub use repo::{RepoSet, Repository};
pub use sack::{Query, TestSack};
pub use transaction::{
    BuildResult, INSTALL_STATES, REMOVE_STATES, ResultCode, ScriptedEngine, TransactionBuilder,
    TransactionData, TransactionOutput, TxMember,
};
