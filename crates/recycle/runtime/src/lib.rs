//! # recycle-runtime
//!
//! The boundary through which an execution environment drives the recycling
//! contracts. A call names a `method`, carries ordered `arguments`, and is
//! attributed to a `sender` the runtime vouches for. Every call returns
//! `{success: true, value?}` or `{success: false, error}`.
//!
//! ## Components
//!
//! - **ContractHost**: routes each call to the contract owning the method
//!   (reward, waste tracking or recycling verification), stamps it with the
//!   current block height, and journals a receipt
//! - **SharedHost**: `Arc<Mutex<_>>` handle serializing calls from many threads
//! - **Journal**: blake3-chained receipts of every applied call
//! - **HostConfig**: owner, initial block height, journal and logging
//!   settings, loaded through the `config` crate
//!
//! Calls are synchronous and atomic: a failed call changes no contract state.

#![deny(unsafe_code)]

pub mod call;
pub mod clock;
pub mod config;
pub mod contract;
pub mod contracts;
pub mod error;
pub mod host;
pub mod journal;
pub mod shared;
pub mod telemetry;

pub use call::{Arguments, CallContext, CallOutcome, CallResult, ContractCall};
pub use clock::BlockClock;
pub use crate::config::{ChainConfig, HostConfig, JournalConfig, LoggingConfig};
pub use contract::Contract;
pub use contracts::{RewardContract, VerificationContract, WasteContract};
pub use error::{RuntimeError, RuntimeResult};
pub use host::{ContractHost, HostSnapshot};
pub use journal::{Journal, Receipt};
pub use shared::SharedHost;
pub use telemetry::init_tracing;

pub use recycle_types::{
    Amount, AuthorizationStatus, BlockHeight, ErrorKind, Principal, RecyclingRecord, WasteRecord,
};
