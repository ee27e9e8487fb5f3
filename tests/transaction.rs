// tests/transaction.rs

//! Transaction assertion tests: result-set algebra, install/removal
//! partitions, and unresolvable-build handling.

mod common;

use common::{fixture_config, pkg, system_packages};
use quern_harness::{
    MockHost, ScriptedEngine, TransactionData, TxMember, TransactionOutput, assert_length,
    assert_result, installed_removed,
};
use std::collections::HashSet;

fn scripted_host(script: fn(&mut TransactionData)) -> MockHost {
    let mut tx = TransactionData::new();
    script(&mut tx);
    let engine = ScriptedEngine::with_members(tx.members().to_vec());
    MockHost::with_repos(fixture_config(), &["main", "updates"])
        .unwrap()
        .with_engine(Box::new(engine))
}

#[test]
fn test_noop_transaction_preserves_installed_set() {
    // no commands queued: the installed set must come through unchanged
    let mut host = MockHost::new(fixture_config());
    assert_result(&mut host, &system_packages());
}

#[test]
fn test_install_adds_to_installed_set() {
    let mut host = scripted_host(|tx| {
        tx.add_true_install(pkg("sumac-1.0-1.noarch"));
    });

    let mut expected = system_packages();
    expected.push(pkg("sumac-1.0-1.noarch"));
    assert_result(&mut host, &expected);
}

#[test]
fn test_erase_removes_from_installed_set() {
    let mut host = scripted_host(|tx| {
        tx.add_erase(pkg("lovage-4.1-1.x86_64"));
    });

    let expected: Vec<_> = system_packages()
        .into_iter()
        .filter(|p| p.name() != "lovage")
        .collect();
    assert_result(&mut host, &expected);
}

#[test]
fn test_update_swaps_versions() {
    let mut host = scripted_host(|tx| {
        tx.add_update(pkg("saffron-3.9-1.x86_64"), pkg("saffron-3.6-1.x86_64"));
    });

    let mut expected: Vec<_> = system_packages()
        .into_iter()
        .filter(|p| p.name() != "saffron")
        .collect();
    expected.push(pkg("saffron-3.9-1.x86_64"));
    assert_result(&mut host, &expected);
}

#[test]
fn test_obsolete_swaps_packages() {
    let mut host = scripted_host(|tx| {
        tx.add_obsolete(pkg("fenugreek-7.0-4.x86_64"), pkg("galangal-0.5-3.x86_64"));
    });

    let mut expected: Vec<_> = system_packages()
        .into_iter()
        .filter(|p| p.name() != "galangal")
        .collect();
    expected.push(pkg("fenugreek-7.0-4.x86_64"));
    assert_result(&mut host, &expected);
}

#[test]
#[should_panic(expected = "does not match")]
fn test_assert_result_catches_wrong_expectation() {
    let mut host = MockHost::new(fixture_config());
    assert_result(&mut host, &[pkg("sumac-1.0-1.noarch")]);
}

#[test]
#[should_panic(expected = "transaction unresolvable")]
fn test_assert_result_fails_hard_on_unresolvable() {
    let mut host = MockHost::new(fixture_config())
        .with_engine(Box::new(ScriptedEngine::unresolvable("nothing provides mortar")));
    assert_result(&mut host, &system_packages());
}

#[test]
#[should_panic(expected = "transaction unresolvable")]
fn test_installed_removed_fails_hard_on_unresolvable() {
    let mut host = MockHost::new(fixture_config())
        .with_engine(Box::new(ScriptedEngine::unresolvable("nothing provides mortar")));
    let _ = installed_removed(&mut host);
}

#[test]
fn test_installed_removed_partitions_members() -> anyhow::Result<()> {
    let mut host = scripted_host(|tx| {
        tx.add_update(pkg("saffron-3.9-1.x86_64"), pkg("saffron-3.6-1.x86_64"));
        tx.add_true_install(pkg("sumac-1.0-1.noarch"));
        tx.add_erase(pkg("lovage-4.1-1.x86_64"));
    });

    let (installed, removed) = installed_removed(&mut host)?;
    assert_length(&installed, 2);
    assert_length(&removed, 2);
    assert_eq!(installed[0].name(), "saffron");
    assert_eq!(installed[1].name(), "sumac");
    assert_eq!(removed[0].version(), "3.6");
    assert_eq!(removed[1].name(), "lovage");
    Ok(())
}

#[test]
fn test_installed_removed_partitions_are_disjoint() -> anyhow::Result<()> {
    let mut host = scripted_host(|tx| {
        tx.add_update(pkg("saffron-3.9-1.x86_64"), pkg("saffron-3.6-1.x86_64"));
        tx.add_downgrade(pkg("lovage-4.0-1.x86_64"), pkg("lovage-4.1-1.x86_64"));
        tx.add_erase(pkg("tarragon-1.2-4.noarch"));
    });

    let (installed, removed) = installed_removed(&mut host)?;
    let installed_ids: HashSet<String> = installed.iter().map(|p| p.nevra().to_string()).collect();
    let removed_ids: HashSet<String> = removed.iter().map(|p| p.nevra().to_string()).collect();
    assert!(installed_ids.is_disjoint(&removed_ids));
    Ok(())
}

#[test]
fn test_reinstall_keeps_installed_set_stable() {
    let mut host = scripted_host(|tx| {
        tx.add_reinstall(pkg("tarragon-1.2-4.noarch"));
    });

    // same identity lands back in the set
    assert_result(&mut host, &system_packages());
}

#[test]
fn test_members_survive_for_inspection_after_assert() {
    let mut host = scripted_host(|tx| {
        tx.add_erase(pkg("lovage-4.1-1.x86_64"));
    });

    let expected: Vec<_> = system_packages()
        .into_iter()
        .filter(|p| p.name() != "lovage")
        .collect();
    assert_result(&mut host, &expected);

    let erased = host.tx().members_with_state(&[TransactionOutput::Erase]);
    assert_eq!(erased.len(), 1);
    assert!(matches!(
        erased[0],
        TxMember {
            output: TransactionOutput::Erase,
            ..
        }
    ));
}
