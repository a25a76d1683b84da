//! Recycle Verifier - verifier-gated recycling credit.
//!
//! The owner maintains a registry of active verifiers. Only an active verifier
//! may credit recycled material to a user, and credit only ever accumulates.

#![deny(unsafe_code)]

use std::collections::HashMap;

use recycle_authority::{AuthorityError, AuthorizationRegistry};
use recycle_types::{Amount, BlockHeight, ErrorKind, Principal, RecyclingRecord, Role};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Errors from the recycling verifier.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VerifierError {
    #[error("principal {caller} is not authorized: requires {required}")]
    Unauthorized { caller: Principal, required: Role },

    #[error("crediting {amount} to {user} would overflow the recycled total")]
    Overflow { user: Principal, amount: Amount },
}

impl VerifierError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            VerifierError::Unauthorized { .. } => ErrorKind::Unauthorized,
            VerifierError::Overflow { .. } => ErrorKind::InvalidAmount,
        }
    }
}

impl From<AuthorityError> for VerifierError {
    fn from(value: AuthorityError) -> Self {
        match value {
            AuthorityError::Unauthorized { caller, required } => {
                VerifierError::Unauthorized { caller, required }
            }
        }
    }
}

/// Recycling records plus the verifier allow-list gating them.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RecyclingVerifier {
    verifiers: AuthorizationRegistry,
    records: HashMap<Principal, RecyclingRecord>,
}

impl RecyclingVerifier {
    pub fn new(owner: Principal) -> Self {
        Self {
            verifiers: AuthorizationRegistry::new(owner, Role::Verifier),
            records: HashMap::new(),
        }
    }

    pub fn verifiers(&self) -> &AuthorizationRegistry {
        &self.verifiers
    }

    pub fn add_verifier(&mut self, caller: &Principal, target: &Principal) -> Result<(), VerifierError> {
        self.verifiers.authorize(caller, target).map_err(VerifierError::from)
    }

    pub fn remove_verifier(&mut self, caller: &Principal, target: &Principal) -> Result<(), VerifierError> {
        self.verifiers.revoke(caller, target).map_err(VerifierError::from)
    }

    pub fn is_active_verifier(&self, account: &Principal) -> bool {
        self.verifiers.is_authorized(account)
    }

    /// Credit `amount` of recycled material to `user`, stamped with `at`.
    pub fn verify_recycling(
        &mut self,
        caller: &Principal,
        user: &Principal,
        amount: Amount,
        at: BlockHeight,
    ) -> Result<RecyclingRecord, VerifierError> {
        if let Err(err) = self.verifiers.ensure_authorized(caller) {
            debug!(caller = %caller, user = %user, amount, "Verification rejected: caller is not an active verifier");
            return Err(err.into());
        }

        let current = self.recycling_record(user);
        let total_recycled = current
            .total_recycled
            .checked_add(amount)
            .ok_or_else(|| VerifierError::Overflow {
                user: user.clone(),
                amount,
            })?;

        let record = RecyclingRecord {
            total_recycled,
            last_verification: at,
        };
        self.records.insert(user.clone(), record);

        debug!(
            verifier = %caller,
            user = %user,
            amount,
            total_recycled,
            block = %at,
            "Recycling verified"
        );
        Ok(record)
    }

    pub fn recycling_record(&self, account: &Principal) -> RecyclingRecord {
        match self.records.get(account) {
            Some(record) => *record,
            None => RecyclingRecord::ZERO,
        }
    }
}
