//! Append-only receipt journal with blake3 hash chaining.
//!
//! Every call applied through the host leaves a receipt, whether it succeeded
//! or not. Each receipt commits to the hash of the one before it, so any edit
//! to a retained receipt is detected by [`Journal::verify_chain`].

use std::collections::VecDeque;

use chrono::{DateTime, Utc};
use recycle_types::{BlockHeight, ErrorKind, Principal};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::call::{CallResult, ContractCall};
use crate::config::JournalConfig;
use crate::error::{RuntimeError, RuntimeResult};

/// Hash preceding the first receipt.
pub const GENESIS_HASH: &str = "0000000000000000000000000000000000000000000000000000000000000000";

/// Record of one applied call.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Receipt {
    pub sequence: u64,
    pub receipt_id: String,
    pub block_height: BlockHeight,
    pub method: String,
    pub sender: Principal,
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorKind>,
    pub recorded_at: DateTime<Utc>,
    pub previous_hash: String,
    pub hash: String,
}

impl Receipt {
    /// Recompute the hash this receipt should carry.
    pub fn compute_hash(&self) -> String {
        let mut hasher = blake3::Hasher::new();
        hasher.update(self.previous_hash.as_bytes());
        hasher.update(&self.sequence.to_le_bytes());
        hasher.update(self.receipt_id.as_bytes());
        hasher.update(&self.block_height.0.to_le_bytes());
        hasher.update(self.method.as_bytes());
        hasher.update(&[0]);
        hasher.update(self.sender.as_str().as_bytes());
        hasher.update(&[0]);
        hasher.update(&[u8::from(self.success)]);
        if let Some(error) = self.error {
            hasher.update(format!("{:?}", error).as_bytes());
        }
        hasher.update(self.recorded_at.to_rfc3339().as_bytes());
        hasher.finalize().to_hex().to_string()
    }
}

/// Bounded or unbounded sequence of receipts.
#[derive(Clone, Debug)]
pub struct Journal {
    enabled: bool,
    capacity: usize,
    receipts: VecDeque<Receipt>,
    next_sequence: u64,
    last_hash: String,
}

impl Journal {
    pub fn new(config: &JournalConfig) -> Self {
        Self {
            enabled: config.enabled,
            capacity: config.capacity,
            receipts: VecDeque::new(),
            next_sequence: 0,
            last_hash: GENESIS_HASH.to_string(),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Append a receipt for `call`. Returns `None` when journaling is off.
    pub fn append(
        &mut self,
        call: &ContractCall,
        block_height: BlockHeight,
        result: &CallResult,
    ) -> Option<&Receipt> {
        if !self.enabled {
            return None;
        }

        let mut receipt = Receipt {
            sequence: self.next_sequence,
            receipt_id: uuid::Uuid::new_v4().to_string(),
            block_height,
            method: call.method.clone(),
            sender: call.sender.clone(),
            success: result.success,
            error: result.error,
            recorded_at: Utc::now(),
            previous_hash: self.last_hash.clone(),
            hash: String::new(),
        };
        receipt.hash = receipt.compute_hash();

        self.next_sequence += 1;
        self.last_hash = receipt.hash.clone();
        self.receipts.push_back(receipt);

        if self.capacity > 0 {
            while self.receipts.len() > self.capacity {
                if let Some(evicted) = self.receipts.pop_front() {
                    debug!(sequence = evicted.sequence, "Receipt evicted from journal");
                }
            }
        }

        self.receipts.back()
    }

    pub fn receipts(&self) -> impl Iterator<Item = &Receipt> {
        self.receipts.iter()
    }

    pub fn last(&self) -> Option<&Receipt> {
        self.receipts.back()
    }

    /// Receipts currently retained.
    pub fn len(&self) -> usize {
        self.receipts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.receipts.is_empty()
    }

    /// Receipts ever appended, including evicted ones.
    pub fn total_appended(&self) -> u64 {
        self.next_sequence
    }

    /// Recompute every retained hash and check each link to its predecessor.
    pub fn verify_chain(&self) -> RuntimeResult<()> {
        let mut previous: Option<&Receipt> = None;
        for receipt in &self.receipts {
            if receipt.compute_hash() != receipt.hash {
                return Err(RuntimeError::ReceiptHashMismatch {
                    sequence: receipt.sequence,
                });
            }
            let expected_previous = match previous {
                Some(prev) => prev.hash.as_str(),
                None if receipt.sequence == 0 => GENESIS_HASH,
                // Predecessor was evicted; the retained suffix starts here.
                None => receipt.previous_hash.as_str(),
            };
            if receipt.previous_hash != expected_previous {
                return Err(RuntimeError::ReceiptChainBroken {
                    sequence: receipt.sequence,
                });
            }
            previous = Some(receipt);
        }
        Ok(())
    }
}
