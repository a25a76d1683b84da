use recycle_authority::AuthorityError;
use recycle_types::{Amount, ErrorKind, Principal, Role};
use thiserror::Error;

/// Errors from the token ledger.
///
/// Every variant is a caller-correctable precondition failure; the ledger is
/// unchanged whenever one is returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    #[error("principal {caller} is not authorized: requires {required}")]
    Unauthorized { caller: Principal, required: Role },

    #[error("insufficient balance for {account}: have {have}, need {need}")]
    InsufficientBalance {
        account: Principal,
        have: Amount,
        need: Amount,
    },

    #[error("invalid amount {amount}: {reason}")]
    InvalidAmount { amount: Amount, reason: String },
}

impl LedgerError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            LedgerError::Unauthorized { .. } => ErrorKind::Unauthorized,
            LedgerError::InsufficientBalance { .. } => ErrorKind::InsufficientBalance,
            LedgerError::InvalidAmount { .. } => ErrorKind::InvalidAmount,
        }
    }
}

impl From<AuthorityError> for LedgerError {
    fn from(value: AuthorityError) -> Self {
        match value {
            AuthorityError::Unauthorized { caller, required } => {
                LedgerError::Unauthorized { caller, required }
            }
        }
    }
}
