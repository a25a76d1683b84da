//! The contract host: routes calls to the owning contract, stamps them with
//! the current block height and journals the outcome.

use recycle_ledger::TokenLedger;
use recycle_types::{BlockHeight, ErrorKind, Principal};
use recycle_verifier::RecyclingVerifier;
use recycle_waste::WasteTracker;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::call::{Arguments, CallContext, CallOutcome, CallResult, ContractCall};
use crate::clock::BlockClock;
use crate::config::HostConfig;
use crate::contract::Contract;
use crate::contracts::{RewardContract, VerificationContract, WasteContract};
use crate::journal::Journal;

/// Serializable copy of every contract's state plus the clock.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HostSnapshot {
    pub block_height: BlockHeight,
    pub ledger: TokenLedger,
    pub waste: WasteTracker,
    pub verifier: RecyclingVerifier,
}

/// Executes one call at a time against the reward, waste-tracking and
/// recycling-verification contracts.
pub struct ContractHost {
    reward: RewardContract,
    waste: WasteContract,
    verification: VerificationContract,
    clock: BlockClock,
    journal: Journal,
}

impl ContractHost {
    pub fn new(config: &HostConfig) -> Self {
        info!(
            owner = %config.owner,
            block = config.chain.initial_block_height,
            journal = config.journal.enabled,
            "Contract host created"
        );
        Self {
            reward: RewardContract::new(config.owner.clone()),
            waste: WasteContract::new(),
            verification: VerificationContract::new(config.owner.clone()),
            clock: BlockClock::starting_at(BlockHeight(config.chain.initial_block_height)),
            journal: Journal::new(&config.journal),
        }
    }

    /// Host with default settings and the given owner.
    pub fn with_owner(owner: impl Into<String>) -> Self {
        Self::new(&HostConfig::with_owner(owner))
    }

    /// Rebuild a host from a snapshot. The journal starts empty.
    ///
    /// Only `config.journal` is applied. The owner and block height come from
    /// the snapshot; `config.owner` and `config.chain` are ignored, with a
    /// warning when the configured owner differs.
    pub fn restore(snapshot: HostSnapshot, config: &HostConfig) -> Self {
        if snapshot.ledger.owner() != &config.owner {
            warn!(
                configured = %config.owner,
                restored = %snapshot.ledger.owner(),
                "Configured owner ignored: snapshot owner kept"
            );
        }
        info!(block = %snapshot.block_height, "Contract host restored from snapshot");
        Self {
            reward: RewardContract::from_ledger(snapshot.ledger),
            waste: WasteContract::from_tracker(snapshot.waste),
            verification: VerificationContract::from_verifier(snapshot.verifier),
            clock: BlockClock::starting_at(snapshot.block_height),
            journal: Journal::new(&config.journal),
        }
    }

    /// Apply `call` atomically and journal its outcome.
    pub fn call(&mut self, call: &ContractCall) -> CallResult {
        let ctx = CallContext {
            sender: call.sender.clone(),
            block_height: self.clock.height(),
        };

        let result = CallResult::from(self.dispatch(&ctx, &call.method, call.arguments()));

        debug!(
            method = %call.method,
            sender = %call.sender,
            block = %ctx.block_height,
            success = result.success,
            error = ?result.error,
            "Call applied"
        );

        self.journal.append(call, ctx.block_height, &result);
        result
    }

    /// Shorthand for [`ContractHost::call`].
    pub fn invoke(&mut self, method: &str, arguments: Vec<Value>, sender: &str) -> CallResult {
        self.call(&ContractCall::new(method, arguments, sender))
    }

    fn dispatch(&mut self, ctx: &CallContext, method: &str, args: Arguments<'_>) -> CallOutcome {
        let contracts: [&mut dyn Contract; 3] =
            [&mut self.reward, &mut self.waste, &mut self.verification];
        for contract in contracts {
            if contract.owns(method) {
                return contract.invoke(ctx, method, args);
            }
        }
        Err(ErrorKind::MethodNotFound)
    }

    pub fn block_height(&self) -> BlockHeight {
        self.clock.height()
    }

    pub fn advance_block(&mut self) -> BlockHeight {
        self.clock.advance()
    }

    pub fn advance_to(&mut self, height: BlockHeight) -> BlockHeight {
        self.clock.advance_to(height)
    }

    pub fn owner(&self) -> &Principal {
        self.reward.ledger().owner()
    }

    pub fn ledger(&self) -> &TokenLedger {
        self.reward.ledger()
    }

    pub fn waste_tracker(&self) -> &WasteTracker {
        self.waste.tracker()
    }

    pub fn verifier(&self) -> &RecyclingVerifier {
        self.verification.verifier()
    }

    pub fn journal(&self) -> &Journal {
        &self.journal
    }

    pub fn snapshot(&self) -> HostSnapshot {
        HostSnapshot {
            block_height: self.clock.height(),
            ledger: self.reward.ledger().clone(),
            waste: self.waste.tracker().clone(),
            verifier: self.verification.verifier().clone(),
        }
    }
}

impl Default for ContractHost {
    fn default() -> Self {
        Self::new(&HostConfig::default())
    }
}
