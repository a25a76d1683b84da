use recycle_types::{ErrorKind, Principal, Role};
use thiserror::Error;

/// Errors from an authorization registry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthorityError {
    #[error("principal {caller} is not authorized: requires {required}")]
    Unauthorized { caller: Principal, required: Role },
}

impl AuthorityError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthorityError::Unauthorized { .. } => ErrorKind::Unauthorized,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unauthorized_display_names_caller_and_role() {
        let err = AuthorityError::Unauthorized {
            caller: Principal::new("mallory"),
            required: Role::Owner,
        };
        let s = err.to_string();
        assert!(s.contains("mallory"));
        assert!(s.contains("owner"));
        assert_eq!(err.kind(), ErrorKind::Unauthorized);
    }
}
