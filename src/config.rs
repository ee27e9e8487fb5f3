// src/config.rs

//! Static fake configuration consumed by the engine under test
//!
//! `FakeConfig` is a read-only value bag of the resolver and transaction
//! behavior toggles a real front end would load from configuration files.
//! Every field carries a fixed default chosen so that tests behave the same
//! on every machine; the cache and persist directories deliberately point
//! at paths that must never exist.

use std::collections::HashMap;
use std::fmt;

/// Multilib resolution policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MultilibPolicy {
    /// Install only the best architecture for the system
    #[default]
    Best,
    /// Install all available architectures
    All,
}

impl MultilibPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            MultilibPolicy::Best => "best",
            MultilibPolicy::All => "all",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "best" => Some(MultilibPolicy::Best),
            "all" => Some(MultilibPolicy::All),
            _ => None,
        }
    }
}

impl fmt::Display for MultilibPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Fixed configuration handed to the engine as read-only input
#[derive(Debug, Clone)]
pub struct FakeConfig {
    /// Assume "yes" to prompts; None leaves the decision to the caller
    pub assumeyes: Option<bool>,
    /// Default answer for prompts when not assuming yes
    pub defaultyes: bool,
    /// Prefer the best available version over the smallest change
    pub best: bool,
    /// Terminal color mode; tests never want color codes in output
    pub color: String,
    /// Commands queued by the front end
    pub commands: Vec<String>,
    /// Package names exempt from the single-version-per-name constraint
    pub installonlypkgs: Vec<String>,
    /// Package name patterns excluded from resolution
    pub exclude: Vec<String>,
    /// Dump solver interaction for debugging
    pub debug_solver: bool,
    /// Verbosity of engine debug output
    pub debuglevel: u32,
    /// Process obsoletes during updates
    pub obsoletes: bool,
    /// Require exact architecture matches on updates
    pub exactarch: bool,
    /// Names the exactarch rule applies to
    pub exactarchlist: Vec<String>,
    /// Root of the filesystem tree operated on
    pub installroot: String,
    /// Transaction flags passed through to the backend
    pub tsflags: Vec<String>,
    /// Maximum concurrently installed versions of install-only packages;
    /// 0 means unlimited
    pub installonly_limit: u32,
    /// Exclude lists to ignore
    pub disable_excludes: Vec<String>,
    /// Multilib resolution policy
    pub multilib_policy: MultilibPolicy,
    /// Metadata cache directory; points at a path that must not exist so a
    /// test that accidentally touches it fails loudly
    pub cachedir: String,
    /// Persistent state directory; same must-not-exist convention
    pub persistdir: String,
    /// Show duplicate packages from different repositories
    pub showdupesfromrepos: bool,
    /// Uid presented to the engine
    pub uid: u32,
    /// Remove only leaf packages on group removal
    pub groupremove_leaf_only: bool,
    /// Packages the engine must refuse to remove
    pub protected_packages: Vec<String>,
    /// Protect multilib pairs from partial removal
    pub protected_multilib: bool,
    /// Remove no-longer-needed requirements alongside a package
    pub clean_requirements_on_remove: bool,
    /// Upgrade requirements when installing over an older version
    pub upgrade_requirements_on_install: bool,
    /// Substitution variables visible to repository configuration
    pub yumvar: HashMap<String, String>,
    /// Record transactions in history
    pub history_record: bool,
}

impl Default for FakeConfig {
    fn default() -> Self {
        Self {
            assumeyes: None,
            defaultyes: false,
            best: false,
            color: "never".to_string(),
            commands: Vec::new(),
            installonlypkgs: vec!["kernel".to_string()],
            exclude: Vec::new(),
            debug_solver: false,
            debuglevel: 8,
            obsoletes: true,
            exactarch: false,
            exactarchlist: Vec::new(),
            installroot: "/".to_string(),
            tsflags: Vec::new(),
            installonly_limit: 0,
            disable_excludes: Vec::new(),
            multilib_policy: MultilibPolicy::Best,
            cachedir: "/should-not-exist-bad-test/cache".to_string(),
            persistdir: "/should-not-exist-bad-test/persist".to_string(),
            showdupesfromrepos: false,
            uid: 0,
            groupremove_leaf_only: false,
            protected_packages: Vec::new(),
            protected_multilib: false,
            clean_requirements_on_remove: false,
            upgrade_requirements_on_install: false,
            yumvar: HashMap::from([("releasever".to_string(), "Quern69".to_string())]),
            history_record: false,
        }
    }
}

impl FakeConfig {
    pub fn new() -> Self {
        Self::default()
    }
}
