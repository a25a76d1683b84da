//! Recycling verification contract behavior through the call boundary.

use recycle_runtime::{CallResult, ChainConfig, ContractHost, ErrorKind, HostConfig};
use serde_json::json;

const OWNER: &str = "CONTRACT_OWNER";

fn host() -> ContractHost {
    ContractHost::new(&HostConfig {
        chain: ChainConfig {
            initial_block_height: 100,
        },
        ..HostConfig::with_owner(OWNER)
    })
}

#[test]
fn should_add_a_verifier() {
    let mut host = host();
    let result = host.invoke("add-verifier", vec![json!("verifier1")], OWNER);
    assert_eq!(result, CallResult::ok());
}

#[test]
fn should_remove_a_verifier() {
    let mut host = host();
    host.invoke("add-verifier", vec![json!("verifier1")], OWNER);
    let result = host.invoke("remove-verifier", vec![json!("verifier1")], OWNER);
    assert!(result.success);

    let active = host.invoke("is-active-verifier", vec![json!("verifier1")], "anyone");
    assert_eq!(active.value, Some(json!(false)));
}

#[test]
fn only_owner_manages_verifiers() {
    let mut host = host();
    let result = host.invoke("add-verifier", vec![json!("verifier1")], "verifier1");
    assert_eq!(result, CallResult::err(ErrorKind::Unauthorized));
}

#[test]
fn should_verify_recycling() {
    let mut host = host();
    host.invoke("add-verifier", vec![json!("verifier1")], OWNER);
    let result = host.invoke("verify-recycling", vec![json!("user1"), json!(100)], "verifier1");
    assert!(result.success);
}

#[test]
fn should_not_allow_unauthorized_verification() {
    let mut host = host();
    let result = host.invoke("verify-recycling", vec![json!("user1"), json!(100)], "unauthorized");
    assert_eq!(result, CallResult::err(ErrorKind::Unauthorized));

    let record = host.invoke("get-recycling-record", vec![json!("user1")], "anyone");
    assert_eq!(record.value, Some(json!({"total-recycled": 0, "last-verification": 0})));
}

#[test]
fn should_get_recycling_record() {
    let mut host = host();
    host.invoke("add-verifier", vec![json!("verifier1")], OWNER);
    host.invoke("verify-recycling", vec![json!("user1"), json!(100)], "verifier1");

    let result = host.invoke("get-recycling-record", vec![json!("user1")], "anyone");
    assert!(result.success);
    assert_eq!(
        result.value,
        Some(json!({"total-recycled": 100, "last-verification": 100}))
    );
}

#[test]
fn should_check_if_a_verifier_is_active() {
    let mut host = host();
    host.invoke("add-verifier", vec![json!("verifier1")], OWNER);
    let result = host.invoke("is-active-verifier", vec![json!("verifier1")], "anyone");
    assert!(result.success);
    assert_eq!(result.value, Some(json!(true)));
}

#[test]
fn verifier_and_minter_registries_are_independent() {
    let mut host = host();
    host.invoke("add-verifier", vec![json!("verifier1")], OWNER);

    let minted = host.invoke("mint-tokens", vec![json!("user1"), json!(5)], "verifier1");
    assert_eq!(minted, CallResult::err(ErrorKind::Unauthorized));

    host.invoke("authorize-contract", vec![json!("contract1")], OWNER);
    let verified = host.invoke("verify-recycling", vec![json!("user1"), json!(5)], "contract1");
    assert_eq!(verified, CallResult::err(ErrorKind::Unauthorized));
}
