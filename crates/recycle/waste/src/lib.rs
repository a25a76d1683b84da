//! Recycle Waste - per-account waste accrual.
//!
//! Any principal may record waste against itself and reduce it again, but a
//! reduction may never take the recorded total below zero.

#![deny(unsafe_code)]

use std::collections::HashMap;

use recycle_types::{Amount, BlockHeight, ErrorKind, Principal, WasteRecord};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Errors from the waste tracker.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WasteError {
    #[error("cannot reduce waste of {account} by {requested}: only {recorded} recorded")]
    ExceedsRecorded {
        account: Principal,
        recorded: Amount,
        requested: Amount,
    },

    #[error("recording {amount} for {account} would overflow the waste total")]
    Overflow { account: Principal, amount: Amount },
}

impl WasteError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            WasteError::ExceedsRecorded { .. } | WasteError::Overflow { .. } => {
                ErrorKind::InvalidAmount
            }
        }
    }
}

/// Waste records keyed by the account that reported them.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct WasteTracker {
    records: HashMap<Principal, WasteRecord>,
}

impl WasteTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `amount` to the caller's total and stamp `at`. No authorization guard.
    pub fn record_waste(
        &mut self,
        caller: &Principal,
        amount: Amount,
        at: BlockHeight,
    ) -> Result<WasteRecord, WasteError> {
        let current = self.waste_record(caller);
        let total_waste = current
            .total_waste
            .checked_add(amount)
            .ok_or_else(|| WasteError::Overflow {
                account: caller.clone(),
                amount,
            })?;

        let record = WasteRecord {
            total_waste,
            last_update: at,
        };
        self.records.insert(caller.clone(), record);

        debug!(account = %caller, amount, total_waste, block = %at, "Waste recorded");
        Ok(record)
    }

    /// Subtract `amount` from the caller's total and stamp `at`.
    pub fn reduce_waste(
        &mut self,
        caller: &Principal,
        amount: Amount,
        at: BlockHeight,
    ) -> Result<WasteRecord, WasteError> {
        let current = self.waste_record(caller);
        if amount > current.total_waste {
            debug!(
                account = %caller,
                recorded = current.total_waste,
                requested = amount,
                "Waste reduction rejected"
            );
            return Err(WasteError::ExceedsRecorded {
                account: caller.clone(),
                recorded: current.total_waste,
                requested: amount,
            });
        }

        let record = WasteRecord {
            total_waste: current.total_waste - amount,
            last_update: at,
        };
        self.records.insert(caller.clone(), record);

        debug!(account = %caller, amount, total_waste = record.total_waste, block = %at, "Waste reduced");
        Ok(record)
    }

    /// Record for `account`, zero-valued when nothing was ever reported.
    pub fn waste_record(&self, account: &Principal) -> WasteRecord {
        match self.records.get(account) {
            Some(record) => *record,
            None => WasteRecord::ZERO,
        }
    }

    /// Number of accounts that have reported at least once.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
