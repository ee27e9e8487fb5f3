// src/assert.rs

//! Transaction result assertions and query shorthands
//!
//! These helpers drive a host's transaction build and validate the outcome
//! against an expected installed set. A build that reports the
//! unresolvable result code is a hard test failure here; the harness's job
//! is to make resolution failures visible, never to mask them.

use crate::error::Result;
use crate::host::MockHost;
use crate::nevra::Nevra;
use crate::package::MockPackage;
use crate::sack::{Query, TestSack};
use crate::transaction::{INSTALL_STATES, REMOVE_STATES, ResultCode};
use std::collections::{BTreeSet, HashMap};
use std::path::Path;

/// Build the host's transaction and assert the resulting installed set
///
/// The resulting set starts from the packages currently installed in the
/// sack, drops every member with a removal-class state, and adds every
/// member with an install-class state. It must equal `expected` regardless
/// of order. Panics on build errors, on the unresolvable result code, and
/// on set mismatch.
pub fn assert_result(host: &mut MockHost, expected: &[MockPackage]) {
    let result = match host.build_transaction() {
        Ok(result) => result,
        Err(e) => panic!("transaction build failed: {}", e),
    };
    if result.code == ResultCode::Unresolvable {
        panic!("transaction unresolvable: {}", result.message);
    }

    let installed = match host.sack() {
        Ok(sack) => sack.query().installed().collect(),
        Err(e) => panic!("sack unavailable: {}", e),
    };
    let mut actual: HashMap<Nevra, MockPackage> = installed
        .into_iter()
        .map(|p| (p.nevra().clone(), p))
        .collect();

    for member in host.tx().members_with_state(REMOVE_STATES) {
        actual.remove(member.package.nevra());
    }
    for member in host.tx().members_with_state(INSTALL_STATES) {
        actual.insert(member.package.nevra().clone(), member.package.clone());
    }

    let actual_ids: BTreeSet<String> = actual.keys().map(|n| n.to_string()).collect();
    let expected_ids: BTreeSet<String> =
        expected.iter().map(|p| p.nevra().to_string()).collect();
    assert_eq!(
        actual_ids, expected_ids,
        "resulting installed set does not match"
    );
}

/// Build the host's transaction and partition its members
///
/// Returns the packages with an install-class final state and those with a
/// removal-class final state, as two sequences in member order. Panics on
/// the unresolvable result code; other build errors propagate.
pub fn installed_removed(host: &mut MockHost) -> Result<(Vec<MockPackage>, Vec<MockPackage>)> {
    let result = host.build_transaction()?;
    if result.code == ResultCode::Unresolvable {
        panic!("transaction unresolvable: {}", result.message);
    }

    let installed = host
        .tx()
        .members_with_state(INSTALL_STATES)
        .into_iter()
        .map(|m| m.package.clone())
        .collect();
    let removed = host
        .tx()
        .members_with_state(REMOVE_STATES)
        .into_iter()
        .map(|m| m.package.clone())
        .collect();
    Ok((installed, removed))
}

/// Installed packages except the given names
pub fn installed_but<'a>(sack: &'a TestSack, names: &[&str]) -> Query<'a> {
    names
        .iter()
        .fold(sack.query().installed(), |query, name| query.name_neq(name))
}

/// Build a sack the way a host with the given extra repositories would
pub fn mock_sack(fixture: crate::fixture::FixtureConfig, extra_repos: &[&str]) -> Result<TestSack> {
    MockHost::with_repos(fixture, extra_repos)?.into_sack()
}

/// Assert a collection's length
pub fn assert_length<T>(collection: &[T], expected: usize) {
    assert_eq!(
        collection.len(),
        expected,
        "expected {} elements, got {}",
        expected,
        collection.len()
    );
}

/// Assert the given path is a file
pub fn assert_is_file(path: &Path) {
    assert!(path.is_file(), "{} is not a file", path.display());
}
