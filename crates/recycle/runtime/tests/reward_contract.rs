//! Reward contract behavior through the method/argument/sender boundary.

use recycle_runtime::{CallResult, ContractHost, ErrorKind};
use serde_json::json;

const OWNER: &str = "CONTRACT_OWNER";

fn host() -> ContractHost {
    ContractHost::with_owner(OWNER)
}

fn balance(host: &mut ContractHost, account: &str) -> serde_json::Value {
    let result = host.invoke("get-balance", vec![json!(account)], "anyone");
    assert!(result.success);
    result.value.expect("balance value")
}

#[test]
fn should_authorize_a_contract() {
    let mut host = host();
    let result = host.invoke("authorize-contract", vec![json!("contract1")], OWNER);
    assert_eq!(result, CallResult::ok());
}

#[test]
fn non_owner_cannot_authorize() {
    let mut host = host();
    let result = host.invoke("authorize-contract", vec![json!("contract1")], "contract1");
    assert_eq!(result, CallResult::err(ErrorKind::Unauthorized));

    let check = host.invoke("is-contract-authorized", vec![json!("contract1")], "anyone");
    assert_eq!(check.value, Some(json!(false)));
}

#[test]
fn should_revoke_contract_authorization() {
    let mut host = host();
    host.invoke("authorize-contract", vec![json!("contract1")], OWNER);
    let result = host.invoke("revoke-contract-authorization", vec![json!("contract1")], OWNER);
    assert!(result.success);

    let check = host.invoke("is-contract-authorized", vec![json!("contract1")], "anyone");
    assert_eq!(check.value, Some(json!(false)));
}

#[test]
fn revoking_never_authorized_contract_succeeds() {
    let mut host = host();
    let result = host.invoke("revoke-contract-authorization", vec![json!("ghost")], OWNER);
    assert!(result.success);

    let check = host.invoke("is-contract-authorized", vec![json!("ghost")], "anyone");
    assert_eq!(check.value, Some(json!(false)));
}

#[test]
fn should_mint_tokens() {
    let mut host = host();
    host.invoke("authorize-contract", vec![json!("contract1")], OWNER);
    let result = host.invoke("mint-tokens", vec![json!("user1"), json!(100)], "contract1");
    assert!(result.success);
    assert_eq!(balance(&mut host, "user1"), json!(100));
}

#[test]
fn unauthorized_mint_leaves_balances_empty() {
    let mut host = host();
    let result = host.invoke("mint-tokens", vec![json!("user1"), json!(100)], "unauthorized");

    assert_eq!(result, CallResult::err(ErrorKind::Unauthorized));
    assert!(host.ledger().accounts().is_empty());
    assert_eq!(host.ledger().total_supply(), 0);
}

#[test]
fn should_transfer_tokens() {
    let mut host = host();
    host.invoke("authorize-contract", vec![json!("contract1")], OWNER);
    host.invoke("mint-tokens", vec![json!("user1"), json!(100)], "contract1");

    let result = host.invoke(
        "transfer-tokens",
        vec![json!(50), json!("user1"), json!("user2")],
        "user1",
    );
    assert!(result.success);
    assert_eq!(balance(&mut host, "user1"), json!(50));
    assert_eq!(balance(&mut host, "user2"), json!(50));
}

#[test]
fn overdrawn_transfer_fails_and_leaves_balances() {
    let mut host = host();
    host.invoke("authorize-contract", vec![json!("contract1")], OWNER);
    host.invoke("mint-tokens", vec![json!("user1"), json!(100)], "contract1");
    host.invoke(
        "transfer-tokens",
        vec![json!(50), json!("user1"), json!("user2")],
        "user1",
    );

    let result = host.invoke(
        "transfer-tokens",
        vec![json!(1000), json!("user2"), json!("user1")],
        "user2",
    );
    assert_eq!(result, CallResult::err(ErrorKind::InsufficientBalance));
    assert_eq!(balance(&mut host, "user1"), json!(50));
    assert_eq!(balance(&mut host, "user2"), json!(50));
}

#[test]
fn transfer_on_behalf_of_another_account_fails() {
    let mut host = host();
    host.invoke("authorize-contract", vec![json!("contract1")], OWNER);
    host.invoke("mint-tokens", vec![json!("user1"), json!(100)], "contract1");

    let result = host.invoke(
        "transfer-tokens",
        vec![json!(10), json!("user1"), json!("user2")],
        "user2",
    );
    assert_eq!(result, CallResult::err(ErrorKind::Unauthorized));
    assert_eq!(balance(&mut host, "user1"), json!(100));
}

#[test]
fn should_get_balance_of_unknown_account_as_zero() {
    let mut host = host();
    assert_eq!(balance(&mut host, "nobody"), json!(0));
}

#[test]
fn should_check_if_a_contract_is_authorized() {
    let mut host = host();
    host.invoke("authorize-contract", vec![json!("contract1")], OWNER);
    let result = host.invoke("is-contract-authorized", vec![json!("contract1")], "anyone");
    assert!(result.success);
    assert_eq!(result.value, Some(json!(true)));
}

#[test]
fn malformed_arguments_are_rejected() {
    let mut host = host();
    host.invoke("authorize-contract", vec![json!("contract1")], OWNER);

    let missing = host.invoke("mint-tokens", vec![json!("user1")], "contract1");
    assert_eq!(missing, CallResult::err(ErrorKind::InvalidArguments));

    let negative = host.invoke("mint-tokens", vec![json!("user1"), json!(-1)], "contract1");
    assert_eq!(negative, CallResult::err(ErrorKind::InvalidAmount));

    let bad_principal = host.invoke("get-balance", vec![json!(17)], "anyone");
    assert_eq!(bad_principal, CallResult::err(ErrorKind::InvalidArguments));

    assert_eq!(host.ledger().total_supply(), 0);
}

#[test]
fn unknown_method_is_method_not_found() {
    let mut host = host();
    let result = host.invoke("set-max-supply", vec![json!(1)], OWNER);
    assert_eq!(result, CallResult::err(ErrorKind::MethodNotFound));
}

#[test]
fn every_call_is_journaled_and_chain_verifies() {
    let mut host = host();
    host.invoke("authorize-contract", vec![json!("contract1")], OWNER);
    host.invoke("mint-tokens", vec![json!("user1"), json!(100)], "contract1");
    host.invoke("mint-tokens", vec![json!("user1"), json!(100)], "intruder");
    host.invoke("get-balance", vec![json!("user1")], "anyone");

    let receipts: Vec<_> = host.journal().receipts().collect();
    assert_eq!(receipts.len(), 4);
    assert_eq!(receipts[2].error, Some(ErrorKind::Unauthorized));
    assert!(receipts[3].success);
    assert!(host.journal().verify_chain().is_ok());
}
