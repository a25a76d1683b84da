//! Method-level adapters binding the component crates to [`Contract`].

use recycle_ledger::TokenLedger;
use recycle_types::{ErrorKind, Principal};
use recycle_verifier::RecyclingVerifier;
use recycle_waste::WasteTracker;
use serde::Serialize;
use serde_json::Value;

use crate::call::{Arguments, CallContext, CallOutcome};
use crate::contract::Contract;

pub const AUTHORIZE_CONTRACT: &str = "authorize-contract";
pub const REVOKE_CONTRACT_AUTHORIZATION: &str = "revoke-contract-authorization";
pub const MINT_TOKENS: &str = "mint-tokens";
pub const TRANSFER_TOKENS: &str = "transfer-tokens";
pub const GET_BALANCE: &str = "get-balance";
pub const IS_CONTRACT_AUTHORIZED: &str = "is-contract-authorized";

pub const RECORD_WASTE: &str = "record-waste";
pub const REDUCE_WASTE: &str = "reduce-waste";
pub const GET_WASTE_RECORD: &str = "get-waste-record";

pub const ADD_VERIFIER: &str = "add-verifier";
pub const REMOVE_VERIFIER: &str = "remove-verifier";
pub const VERIFY_RECYCLING: &str = "verify-recycling";
pub const GET_RECYCLING_RECORD: &str = "get-recycling-record";
pub const IS_ACTIVE_VERIFIER: &str = "is-active-verifier";

fn record_value<T: Serialize>(record: &T) -> Value {
    serde_json::to_value(record).unwrap_or_default()
}

/// Minter registry and token ledger.
#[derive(Clone, Debug)]
pub struct RewardContract {
    ledger: TokenLedger,
}

impl RewardContract {
    pub fn new(owner: Principal) -> Self {
        Self {
            ledger: TokenLedger::new(owner),
        }
    }

    pub fn from_ledger(ledger: TokenLedger) -> Self {
        Self { ledger }
    }

    pub fn ledger(&self) -> &TokenLedger {
        &self.ledger
    }
}

impl Contract for RewardContract {
    fn name(&self) -> &'static str {
        "reward"
    }

    fn methods(&self) -> &'static [&'static str] {
        &[
            AUTHORIZE_CONTRACT,
            REVOKE_CONTRACT_AUTHORIZATION,
            MINT_TOKENS,
            TRANSFER_TOKENS,
            GET_BALANCE,
            IS_CONTRACT_AUTHORIZED,
        ]
    }

    fn invoke(&mut self, ctx: &CallContext, method: &str, args: Arguments<'_>) -> CallOutcome {
        match method {
            AUTHORIZE_CONTRACT => {
                args.expect_len(1)?;
                let target = args.principal(0)?;
                self.ledger
                    .authorize(&ctx.sender, &target)
                    .map_err(|e| e.kind())?;
                Ok(None)
            }
            REVOKE_CONTRACT_AUTHORIZATION => {
                args.expect_len(1)?;
                let target = args.principal(0)?;
                self.ledger.revoke(&ctx.sender, &target).map_err(|e| e.kind())?;
                Ok(None)
            }
            MINT_TOKENS => {
                args.expect_len(2)?;
                let recipient = args.principal(0)?;
                let amount = args.amount(1)?;
                self.ledger
                    .mint(&ctx.sender, &recipient, amount)
                    .map_err(|e| e.kind())?;
                Ok(None)
            }
            TRANSFER_TOKENS => {
                args.expect_len(3)?;
                let sender = args.principal(1)?;
                let recipient = args.principal(2)?;
                if ctx.sender != sender {
                    return Err(ErrorKind::Unauthorized);
                }
                let amount = args.amount(0)?;
                self.ledger
                    .transfer(&ctx.sender, &sender, &recipient, amount)
                    .map_err(|e| e.kind())?;
                Ok(None)
            }
            GET_BALANCE => {
                args.expect_len(1)?;
                let account = args.principal(0)?;
                Ok(Some(Value::from(self.ledger.balance(&account))))
            }
            IS_CONTRACT_AUTHORIZED => {
                args.expect_len(1)?;
                let target = args.principal(0)?;
                Ok(Some(Value::Bool(self.ledger.is_authorized(&target))))
            }
            _ => Err(ErrorKind::MethodNotFound),
        }
    }
}

/// Per-account waste accrual.
#[derive(Clone, Debug, Default)]
pub struct WasteContract {
    tracker: WasteTracker,
}

impl WasteContract {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_tracker(tracker: WasteTracker) -> Self {
        Self { tracker }
    }

    pub fn tracker(&self) -> &WasteTracker {
        &self.tracker
    }
}

impl Contract for WasteContract {
    fn name(&self) -> &'static str {
        "waste-tracking"
    }

    fn methods(&self) -> &'static [&'static str] {
        &[RECORD_WASTE, REDUCE_WASTE, GET_WASTE_RECORD]
    }

    fn invoke(&mut self, ctx: &CallContext, method: &str, args: Arguments<'_>) -> CallOutcome {
        match method {
            RECORD_WASTE => {
                args.expect_len(1)?;
                let amount = args.amount(0)?;
                self.tracker
                    .record_waste(&ctx.sender, amount, ctx.block_height)
                    .map_err(|e| e.kind())?;
                Ok(None)
            }
            REDUCE_WASTE => {
                args.expect_len(1)?;
                let amount = args.amount(0)?;
                self.tracker
                    .reduce_waste(&ctx.sender, amount, ctx.block_height)
                    .map_err(|e| e.kind())?;
                Ok(None)
            }
            GET_WASTE_RECORD => {
                args.expect_len(1)?;
                let account = args.principal(0)?;
                Ok(Some(record_value(&self.tracker.waste_record(&account))))
            }
            _ => Err(ErrorKind::MethodNotFound),
        }
    }
}

/// Verifier registry and recycling credit.
#[derive(Clone, Debug)]
pub struct VerificationContract {
    verifier: RecyclingVerifier,
}

impl VerificationContract {
    pub fn new(owner: Principal) -> Self {
        Self {
            verifier: RecyclingVerifier::new(owner),
        }
    }

    pub fn from_verifier(verifier: RecyclingVerifier) -> Self {
        Self { verifier }
    }

    pub fn verifier(&self) -> &RecyclingVerifier {
        &self.verifier
    }
}

impl Contract for VerificationContract {
    fn name(&self) -> &'static str {
        "recycling-verification"
    }

    fn methods(&self) -> &'static [&'static str] {
        &[
            ADD_VERIFIER,
            REMOVE_VERIFIER,
            VERIFY_RECYCLING,
            GET_RECYCLING_RECORD,
            IS_ACTIVE_VERIFIER,
        ]
    }

    fn invoke(&mut self, ctx: &CallContext, method: &str, args: Arguments<'_>) -> CallOutcome {
        match method {
            ADD_VERIFIER => {
                args.expect_len(1)?;
                let target = args.principal(0)?;
                self.verifier
                    .add_verifier(&ctx.sender, &target)
                    .map_err(|e| e.kind())?;
                Ok(None)
            }
            REMOVE_VERIFIER => {
                args.expect_len(1)?;
                let target = args.principal(0)?;
                self.verifier
                    .remove_verifier(&ctx.sender, &target)
                    .map_err(|e| e.kind())?;
                Ok(None)
            }
            VERIFY_RECYCLING => {
                args.expect_len(2)?;
                let user = args.principal(0)?;
                let amount = args.amount(1)?;
                self.verifier
                    .verify_recycling(&ctx.sender, &user, amount, ctx.block_height)
                    .map_err(|e| e.kind())?;
                Ok(None)
            }
            GET_RECYCLING_RECORD => {
                args.expect_len(1)?;
                let account = args.principal(0)?;
                Ok(Some(record_value(&self.verifier.recycling_record(&account))))
            }
            IS_ACTIVE_VERIFIER => {
                args.expect_len(1)?;
                let account = args.principal(0)?;
                Ok(Some(Value::Bool(self.verifier.is_active_verifier(&account))))
            }
            _ => Err(ErrorKind::MethodNotFound),
        }
    }
}
