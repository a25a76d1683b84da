//! Recycle Types - shared vocabulary for the recycling incentive ledger.
//!
//! Every component speaks in terms of an opaque [`Principal`], a
//! non-negative [`Amount`] and an externally supplied [`BlockHeight`].
//! Failures collapse to the closed [`ErrorKind`] set at the call boundary.
//!
//! ## Read-default
//!
//! An absent map entry reads as a canonical zero-valued record, never as an
//! error. Components implement this as an explicit `None` branch on lookup
//! that returns [`Amount`] `0`, [`WasteRecord::ZERO`], [`RecyclingRecord::ZERO`]
//! or [`AuthorizationStatus::Unauthorized`].

#![deny(unsafe_code)]

pub mod records;

pub use records::{RecyclingRecord, WasteRecord};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Token and waste quantities. Non-negative by construction.
pub type Amount = u64;

/// Opaque caller identity (account or contract).
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Principal(pub String);

impl Principal {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Principal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Principal {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Height of the hosting chain, stamped onto records as an opaque timestamp.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct BlockHeight(pub u64);

impl BlockHeight {
    pub const GENESIS: BlockHeight = BlockHeight(0);

    /// The following height, saturating at `u64::MAX`.
    pub fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

impl std::fmt::Display for BlockHeight {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Per-principal flag held by an authorization registry.
///
/// Absent entries read as `Unauthorized`; an explicit `Unauthorized` entry is
/// what a revoke leaves behind, even for a principal that was never authorized.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AuthorizationStatus {
    Authorized,
    #[default]
    Unauthorized,
}

impl AuthorizationStatus {
    pub fn is_authorized(&self) -> bool {
        matches!(self, AuthorizationStatus::Authorized)
    }
}

impl From<bool> for AuthorizationStatus {
    fn from(value: bool) -> Self {
        if value {
            AuthorizationStatus::Authorized
        } else {
            AuthorizationStatus::Unauthorized
        }
    }
}

/// The closed set of failures a caller can observe.
///
/// `MethodNotFound` and `InvalidArguments` are produced only by the dispatch
/// boundary; the core components never return them.
#[derive(Error, Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    #[error("Not authorized")]
    Unauthorized,

    #[error("Insufficient balance")]
    InsufficientBalance,

    #[error("Invalid amount")]
    InvalidAmount,

    #[error("Method not found")]
    MethodNotFound,

    #[error("Invalid arguments")]
    InvalidArguments,
}

impl ErrorKind {
    /// Whether the failure belongs to the call boundary rather than a component.
    pub fn is_boundary(&self) -> bool {
        matches!(self, ErrorKind::MethodNotFound | ErrorKind::InvalidArguments)
    }
}

/// The role a caller was required to hold when a guard rejected it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// The fixed owner of a gated component.
    Owner,
    /// A principal authorized to mint tokens.
    Minter,
    /// A principal allowed to attest recycling.
    Verifier,
    /// The holder of the funds being moved.
    FundsOwner,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Role::Owner => "owner",
            Role::Minter => "minter",
            Role::Verifier => "verifier",
            Role::FundsOwner => "funds owner",
        };
        f.write_str(label)
    }
}
