//! # recycle-ledger
//!
//! The reward token ledger: a mapping from principal to non-negative balance
//! with two ways to change it.
//!
//! - **mint** credits a recipient and is the only path that increases total
//!   supply. The caller must be an authorized minter.
//! - **transfer** moves funds between two accounts and conserves total supply.
//!   The caller must be the sender, and the sender must hold enough funds.
//!
//! ## Invariants
//!
//! - Every balance is non-negative (balances are unsigned).
//! - The sum of all balances equals the total minted supply.
//! - A rejected call leaves every balance and the minter registry unchanged.
//!
//! There is no supply cap and no pause switch.

#![deny(unsafe_code)]

pub mod error;
pub mod token;

pub use error::LedgerError;
pub use token::TokenLedger;
