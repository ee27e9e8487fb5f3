// src/transaction.rs

//! Transaction result surface consumed by the assertion helpers
//!
//! The real engine resolves a request into a set of transaction members,
//! each carrying a package and exactly one terminal output state. The
//! harness defines that surface here: the state enum with its fixed
//! install-class and removal-class partitions, the member list, the result
//! codes, and the `TransactionBuilder` seam the engine is reached through.
//! `ScriptedEngine` is the in-crate stand-in used to exercise the harness
//! itself.

use crate::config::FakeConfig;
use crate::error::Result;
use crate::package::MockPackage;
use crate::sack::TestSack;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Terminal output state of one transaction member
///
/// A package identity under consideration resolves to exactly one of these
/// per resolution pass. Compound operations produce paired members: an
/// update emits `Update` for the incoming package and `Updated` for the
/// outgoing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransactionOutput {
    /// Fresh install requested as a dependency or side effect
    Install,
    /// Fresh install explicitly requested
    TrueInstall,
    /// Incoming half of an update
    Update,
    /// Incoming package that obsoletes another
    Obsoleting,
    /// Incoming half of a downgrade
    Downgrade,
    /// Reinstall of the already-installed version
    Reinstall,
    /// Plain removal
    Erase,
    /// Outgoing half of an update
    Updated,
    /// Package displaced by an obsoleting one
    Obsoleted,
    /// Outgoing half of a downgrade
    Downgraded,
}

/// States that add a package to the installed set
pub const INSTALL_STATES: &[TransactionOutput] = &[
    TransactionOutput::Install,
    TransactionOutput::TrueInstall,
    TransactionOutput::Update,
    TransactionOutput::Obsoleting,
    TransactionOutput::Downgrade,
    TransactionOutput::Reinstall,
];

/// States that remove a package from the installed set
pub const REMOVE_STATES: &[TransactionOutput] = &[
    TransactionOutput::Erase,
    TransactionOutput::Updated,
    TransactionOutput::Obsoleted,
    TransactionOutput::Downgraded,
];

impl TransactionOutput {
    /// True if this state adds its package to the installed set
    pub fn is_install_class(&self) -> bool {
        INSTALL_STATES.contains(self)
    }

    /// True if this state removes its package from the installed set
    pub fn is_remove_class(&self) -> bool {
        REMOVE_STATES.contains(self)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionOutput::Install => "install",
            TransactionOutput::TrueInstall => "true-install",
            TransactionOutput::Update => "update",
            TransactionOutput::Obsoleting => "obsoleting",
            TransactionOutput::Downgrade => "downgrade",
            TransactionOutput::Reinstall => "reinstall",
            TransactionOutput::Erase => "erase",
            TransactionOutput::Updated => "updated",
            TransactionOutput::Obsoleted => "obsoleted",
            TransactionOutput::Downgraded => "downgraded",
        }
    }
}

/// One package's resolved action within a transaction result
#[derive(Debug, Clone, PartialEq)]
pub struct TxMember {
    pub package: MockPackage,
    pub output: TransactionOutput,
}

impl TxMember {
    pub fn new(package: MockPackage, output: TransactionOutput) -> Self {
        Self { package, output }
    }
}

/// Ordered list of resolved transaction members
///
/// The engine fills this during a build. Each package identity is expected
/// to appear with exactly one terminal state per resolution pass.
#[derive(Debug, Default)]
pub struct TransactionData {
    members: Vec<TxMember>,
}

impl TransactionData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, member: TxMember) {
        self.members.push(member);
    }

    pub fn add_install(&mut self, package: MockPackage) {
        self.add(TxMember::new(package, TransactionOutput::Install));
    }

    pub fn add_true_install(&mut self, package: MockPackage) {
        self.add(TxMember::new(package, TransactionOutput::TrueInstall));
    }

    pub fn add_erase(&mut self, package: MockPackage) {
        self.add(TxMember::new(package, TransactionOutput::Erase));
    }

    pub fn add_reinstall(&mut self, package: MockPackage) {
        self.add(TxMember::new(package, TransactionOutput::Reinstall));
    }

    /// Record an update: the incoming package plus the outgoing one
    pub fn add_update(&mut self, incoming: MockPackage, outgoing: MockPackage) {
        self.add(TxMember::new(incoming, TransactionOutput::Update));
        self.add(TxMember::new(outgoing, TransactionOutput::Updated));
    }

    /// Record an obsoletion: the obsoleting package plus the displaced one
    pub fn add_obsolete(&mut self, incoming: MockPackage, displaced: MockPackage) {
        self.add(TxMember::new(incoming, TransactionOutput::Obsoleting));
        self.add(TxMember::new(displaced, TransactionOutput::Obsoleted));
    }

    /// Record a downgrade: the incoming package plus the outgoing one
    pub fn add_downgrade(&mut self, incoming: MockPackage, outgoing: MockPackage) {
        self.add(TxMember::new(incoming, TransactionOutput::Downgrade));
        self.add(TxMember::new(outgoing, TransactionOutput::Downgraded));
    }

    pub fn members(&self) -> &[TxMember] {
        &self.members
    }

    /// Members whose output state is in the given set
    pub fn members_with_state(&self, states: &[TransactionOutput]) -> Vec<&TxMember> {
        self.members
            .iter()
            .filter(|m| states.contains(&m.output))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn clear(&mut self) {
        self.members.clear();
    }
}

/// Result code of a transaction build
///
/// Numeric values follow the engine's wire contract: 0 for an empty
/// transaction, 1 for unresolvable, 2 for a runnable transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultCode {
    Empty,
    Unresolvable,
    Success,
}

impl ResultCode {
    pub fn code(&self) -> u8 {
        match self {
            ResultCode::Empty => 0,
            ResultCode::Unresolvable => 1,
            ResultCode::Success => 2,
        }
    }
}

/// Outcome of a transaction build: result code plus human-readable message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildResult {
    pub code: ResultCode,
    pub message: String,
}

impl BuildResult {
    pub fn new(code: ResultCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

/// The seam the transaction engine is reached through
///
/// The real resolver lives elsewhere; the harness only requires that
/// something can turn a sack and a configuration into transaction members
/// and a result code.
pub trait TransactionBuilder {
    fn build(
        &mut self,
        sack: &TestSack,
        conf: &FakeConfig,
        tx: &mut TransactionData,
    ) -> Result<BuildResult>;
}

/// Scripted engine stand-in
///
/// Replays a fixed member list (or a forced outcome) into the transaction
/// data and records how many times it was invoked. An empty script builds
/// an empty, successful transaction.
#[derive(Debug, Default)]
pub struct ScriptedEngine {
    script: Vec<TxMember>,
    forced: Option<BuildResult>,
    builds: u64,
}

impl ScriptedEngine {
    /// Engine that resolves to an empty transaction
    pub fn new() -> Self {
        Self::default()
    }

    /// Engine that replays the given members on every build
    pub fn with_members(script: Vec<TxMember>) -> Self {
        Self {
            script,
            ..Self::default()
        }
    }

    /// Engine that reports the unresolvable result code
    pub fn unresolvable(message: impl Into<String>) -> Self {
        Self {
            forced: Some(BuildResult::new(ResultCode::Unresolvable, message)),
            ..Self::default()
        }
    }

    pub fn push(&mut self, member: TxMember) {
        self.script.push(member);
    }

    /// Number of builds this engine has run
    pub fn builds(&self) -> u64 {
        self.builds
    }
}

impl TransactionBuilder for ScriptedEngine {
    fn build(
        &mut self,
        _sack: &TestSack,
        _conf: &FakeConfig,
        tx: &mut TransactionData,
    ) -> Result<BuildResult> {
        self.builds += 1;

        if let Some(forced) = &self.forced {
            debug!("scripted build forcing outcome: {:?}", forced.code);
            return Ok(forced.clone());
        }

        tx.clear();
        for member in &self.script {
            tx.add(member.clone());
        }

        let result = if tx.is_empty() {
            BuildResult::new(ResultCode::Empty, "nothing to do")
        } else {
            BuildResult::new(ResultCode::Success, "transaction resolved")
        };
        debug!(
            "scripted build produced {} members, code {}",
            tx.len(),
            result.code.code()
        );
        Ok(result)
    }
}
