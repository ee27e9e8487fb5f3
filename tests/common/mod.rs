// tests/common/mod.rs

//! Shared helpers for integration tests.

// Not every suite uses every helper.
#![allow(dead_code)]

use quern_harness::{FixtureConfig, MockPackage};
use std::path::PathBuf;
use std::sync::Once;

static INIT: Once = Once::new();

/// Initialize test logging once per binary; honors RUST_LOG.
pub fn init_logging() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// Root of the fixture tree shipped with the crate.
pub fn fixture_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("fixtures")
}

pub fn fixture_config() -> FixtureConfig {
    FixtureConfig::new(fixture_root())
}

/// Parse a NEVRA into a repository-less package, panicking on bad input.
pub fn pkg(nevra: &str) -> MockPackage {
    MockPackage::new(nevra).unwrap()
}

/// The five packages in the shipped system snapshot.
pub fn system_packages() -> Vec<MockPackage> {
    [
        "saffron-3.6-1.x86_64",
        "cumin-2:1.0-2.x86_64",
        "tarragon-1.2-4.noarch",
        "galangal-0.5-3.x86_64",
        "lovage-4.1-1.x86_64",
    ]
    .iter()
    .map(|n| pkg(n))
    .collect()
}
