// src/pkgdb.rs

//! Mock per-package metadata store
//!
//! The engine records arbitrary side data about packages as it processes a
//! transaction. `MockPackageDb` gives it a get-or-create keyed store with a
//! declared capability set instead of an open-ended attribute stub: records
//! hold typed JSON attribute values and count how often they were fetched.

use crate::package::MockPackage;
use serde_json::Value;
use std::collections::{BTreeMap, HashMap};

/// Opaque per-package record
#[derive(Debug, Default, Clone, PartialEq)]
pub struct PkgRecord {
    attrs: BTreeMap<String, Value>,
    touched: u64,
}

impl PkgRecord {
    /// Set an attribute value
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.attrs.insert(key.into(), value.into());
    }

    /// Look up an attribute value
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.attrs.get(key)
    }

    /// Number of times this record was fetched from the store
    pub fn touched(&self) -> u64 {
        self.touched
    }

    pub fn is_empty(&self) -> bool {
        self.attrs.is_empty()
    }
}

/// Associative store keyed by package identity string
///
/// Created empty per host and never shared across hosts. The tracked size
/// equals the number of distinct packages ever looked up.
#[derive(Debug, Default)]
pub struct MockPackageDb {
    db: HashMap<String, PkgRecord>,
}

impl MockPackageDb {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch the record for a package, creating an empty one on first lookup
    ///
    /// Repeat lookups for the same identity return the same record.
    pub fn get_or_create(&mut self, pkg: &MockPackage) -> &mut PkgRecord {
        let record = self.db.entry(pkg.to_string()).or_default();
        record.touched += 1;
        record
    }

    /// Read-only lookup; None if the package was never fetched
    pub fn get(&self, pkg: &MockPackage) -> Option<&PkgRecord> {
        self.db.get(&pkg.to_string())
    }

    /// Number of distinct packages ever looked up
    pub fn len(&self) -> usize {
        self.db.len()
    }

    pub fn is_empty(&self) -> bool {
        self.db.is_empty()
    }
}
