use std::collections::HashMap;

use recycle_authority::AuthorizationRegistry;
use recycle_types::{Amount, Principal, Role};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::LedgerError;

/// Balances plus the minter allow-list that gates supply growth.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TokenLedger {
    minters: AuthorizationRegistry,
    balances: HashMap<Principal, Amount>,
    total_supply: Amount,
}

impl TokenLedger {
    /// Create an empty ledger whose minter registry is controlled by `owner`.
    pub fn new(owner: Principal) -> Self {
        Self {
            minters: AuthorizationRegistry::new(owner, Role::Minter),
            balances: HashMap::new(),
            total_supply: 0,
        }
    }

    pub fn owner(&self) -> &Principal {
        self.minters.owner()
    }

    pub fn minters(&self) -> &AuthorizationRegistry {
        &self.minters
    }

    /// Allow `target` to mint. Owner only, idempotent.
    pub fn authorize(&mut self, caller: &Principal, target: &Principal) -> Result<(), LedgerError> {
        self.minters.authorize(caller, target).map_err(LedgerError::from)
    }

    /// Stop `target` from minting. Owner only, idempotent, and succeeds for a
    /// principal that was never authorized.
    pub fn revoke(&mut self, caller: &Principal, target: &Principal) -> Result<(), LedgerError> {
        self.minters.revoke(caller, target).map_err(LedgerError::from)
    }

    pub fn is_authorized(&self, target: &Principal) -> bool {
        self.minters.is_authorized(target)
    }

    /// Credit `amount` to `recipient`. The caller must be an authorized minter.
    pub fn mint(
        &mut self,
        caller: &Principal,
        recipient: &Principal,
        amount: Amount,
    ) -> Result<(), LedgerError> {
        if let Err(err) = self.minters.ensure_authorized(caller) {
            debug!(caller = %caller, recipient = %recipient, amount, "Mint rejected: caller is not a minter");
            return Err(err.into());
        }

        let total_supply = self
            .total_supply
            .checked_add(amount)
            .ok_or_else(|| LedgerError::InvalidAmount {
                amount,
                reason: "total supply would overflow".to_string(),
            })?;
        let balance = self
            .balance(recipient)
            .checked_add(amount)
            .ok_or_else(|| LedgerError::InvalidAmount {
                amount,
                reason: format!("balance of {} would overflow", recipient),
            })?;

        self.balances.insert(recipient.clone(), balance);
        self.total_supply = total_supply;

        debug!(
            caller = %caller,
            recipient = %recipient,
            amount,
            balance,
            total_supply,
            "Tokens minted"
        );
        Ok(())
    }

    /// Move `amount` from `sender` to `recipient`.
    ///
    /// `caller` must equal `sender`: only the holder of the funds may move
    /// them. Moving funds to oneself leaves the balance unchanged.
    pub fn transfer(
        &mut self,
        caller: &Principal,
        sender: &Principal,
        recipient: &Principal,
        amount: Amount,
    ) -> Result<(), LedgerError> {
        if caller != sender {
            debug!(caller = %caller, sender = %sender, "Transfer rejected: caller does not own the funds");
            return Err(LedgerError::Unauthorized {
                caller: caller.clone(),
                required: Role::FundsOwner,
            });
        }

        let sender_balance = self.balance(sender);
        if sender_balance < amount {
            debug!(
                sender = %sender,
                have = sender_balance,
                need = amount,
                "Transfer rejected: insufficient balance"
            );
            return Err(LedgerError::InsufficientBalance {
                account: sender.clone(),
                have: sender_balance,
                need: amount,
            });
        }

        self.balances.insert(sender.clone(), sender_balance - amount);
        // Any two balances together are bounded by total_supply, so this cannot overflow.
        let recipient_balance = self.balance(recipient) + amount;
        self.balances.insert(recipient.clone(), recipient_balance);

        debug!(
            sender = %sender,
            recipient = %recipient,
            amount,
            "Tokens transferred"
        );
        Ok(())
    }

    /// Balance of `account`; zero for an account never credited.
    pub fn balance(&self, account: &Principal) -> Amount {
        match self.balances.get(account) {
            Some(balance) => *balance,
            None => 0,
        }
    }

    /// Sum of every amount ever minted.
    pub fn total_supply(&self) -> Amount {
        self.total_supply
    }

    /// Recomputed sum of all balances. Always equals [`Self::total_supply`].
    pub fn balances_total(&self) -> u128 {
        self.balances.values().map(|b| u128::from(*b)).sum()
    }

    /// Accounts holding a non-zero balance, sorted.
    pub fn accounts(&self) -> Vec<(Principal, Amount)> {
        let mut accounts: Vec<(Principal, Amount)> = self
            .balances
            .iter()
            .filter(|(_, balance)| **balance > 0)
            .map(|(account, balance)| (account.clone(), *balance))
            .collect();
        accounts.sort_by(|a, b| a.0.cmp(&b.0));
        accounts
    }
}
