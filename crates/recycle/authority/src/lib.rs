//! Recycle Authority - owner-controlled allow-lists.
//!
//! An [`AuthorizationRegistry`] maps principals to an [`AuthorizationStatus`].
//! Only the owner fixed at construction may change an entry. The token ledger
//! uses one registry for minters; the recycling verifier uses another for
//! verifiers.
//!
//! Both `authorize` and `revoke` are idempotent. Revoking a principal that was
//! never authorized succeeds and leaves it unauthorized.

#![deny(unsafe_code)]

pub mod error;

pub use error::AuthorityError;

use recycle_types::{AuthorizationStatus, Principal, Role};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

/// Owner-gated allow-list of principals holding a single role.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AuthorizationRegistry {
    owner: Principal,
    role: Role,
    entries: HashMap<Principal, AuthorizationStatus>,
}

impl AuthorizationRegistry {
    /// Create an empty registry controlled by `owner`, granting `role`.
    pub fn new(owner: Principal, role: Role) -> Self {
        Self {
            owner,
            role,
            entries: HashMap::new(),
        }
    }

    pub fn owner(&self) -> &Principal {
        &self.owner
    }

    /// The role this registry grants.
    pub fn role(&self) -> Role {
        self.role
    }

    /// Mark `target` as authorized. Owner only.
    pub fn authorize(&mut self, caller: &Principal, target: &Principal) -> Result<(), AuthorityError> {
        self.set(caller, target, AuthorizationStatus::Authorized)
    }

    /// Mark `target` as unauthorized. Owner only.
    pub fn revoke(&mut self, caller: &Principal, target: &Principal) -> Result<(), AuthorityError> {
        self.set(caller, target, AuthorizationStatus::Unauthorized)
    }

    /// Current status of `target`. Unknown principals are unauthorized.
    pub fn status(&self, target: &Principal) -> AuthorizationStatus {
        match self.entries.get(target) {
            Some(status) => *status,
            None => AuthorizationStatus::Unauthorized,
        }
    }

    pub fn is_authorized(&self, target: &Principal) -> bool {
        self.status(target).is_authorized()
    }

    /// Fail with `Unauthorized` unless `caller` currently holds the role.
    pub fn ensure_authorized(&self, caller: &Principal) -> Result<(), AuthorityError> {
        if self.is_authorized(caller) {
            Ok(())
        } else {
            Err(AuthorityError::Unauthorized {
                caller: caller.clone(),
                required: self.role,
            })
        }
    }

    /// Principals currently authorized, sorted.
    pub fn authorized(&self) -> Vec<Principal> {
        let mut principals: Vec<Principal> = self
            .entries
            .iter()
            .filter(|(_, status)| status.is_authorized())
            .map(|(principal, _)| principal.clone())
            .collect();
        principals.sort();
        principals
    }

    fn ensure_owner(&self, caller: &Principal) -> Result<(), AuthorityError> {
        if *caller == self.owner {
            Ok(())
        } else {
            Err(AuthorityError::Unauthorized {
                caller: caller.clone(),
                required: Role::Owner,
            })
        }
    }

    fn set(
        &mut self,
        caller: &Principal,
        target: &Principal,
        status: AuthorizationStatus,
    ) -> Result<(), AuthorityError> {
        if let Err(err) = self.ensure_owner(caller) {
            debug!(
                caller = %caller,
                target = %target,
                role = %self.role,
                "Registry change rejected: caller is not the owner"
            );
            return Err(err);
        }

        let previous = self.entries.insert(target.clone(), status);
        debug!(
            target = %target,
            role = %self.role,
            status = ?status,
            changed = previous != Some(status),
            "Registry entry set"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn owner() -> Principal {
        Principal::new("CONTRACT_OWNER")
    }

    fn registry() -> AuthorizationRegistry {
        AuthorizationRegistry::new(owner(), Role::Minter)
    }

    #[test]
    fn owner_can_authorize_and_revoke() {
        let mut reg = registry();
        let contract = Principal::new("contract1");

        reg.authorize(&owner(), &contract).unwrap();
        assert!(reg.is_authorized(&contract));

        reg.revoke(&owner(), &contract).unwrap();
        assert!(!reg.is_authorized(&contract));
        assert_eq!(reg.status(&contract), AuthorizationStatus::Unauthorized);
    }

    #[test]
    fn non_owner_cannot_change_entries() {
        let mut reg = registry();
        let intruder = Principal::new("intruder");
        let contract = Principal::new("contract1");

        let err = reg.authorize(&intruder, &contract).unwrap_err();
        assert_eq!(
            err,
            AuthorityError::Unauthorized {
                caller: intruder.clone(),
                required: Role::Owner,
            }
        );
        assert!(!reg.is_authorized(&contract));

        reg.authorize(&owner(), &contract).unwrap();
        assert!(reg.revoke(&intruder, &contract).is_err());
        assert!(reg.is_authorized(&contract));
    }

    #[test]
    fn revoking_unknown_principal_succeeds() {
        let mut reg = registry();
        let stranger = Principal::new("never-seen");

        reg.revoke(&owner(), &stranger).unwrap();
        assert!(!reg.is_authorized(&stranger));
        assert!(reg.authorized().is_empty());
    }

    #[test]
    fn authorize_is_idempotent() {
        let mut reg = registry();
        let contract = Principal::new("contract1");

        reg.authorize(&owner(), &contract).unwrap();
        reg.authorize(&owner(), &contract).unwrap();
        assert_eq!(reg.authorized(), vec![contract]);
    }

    #[test]
    fn ensure_authorized_reports_registry_role() {
        let reg = AuthorizationRegistry::new(owner(), Role::Verifier);
        let err = reg.ensure_authorized(&Principal::new("v1")).unwrap_err();
        assert!(matches!(
            err,
            AuthorityError::Unauthorized {
                required: Role::Verifier,
                ..
            }
        ));
    }

    #[test]
    fn owner_is_not_implicitly_authorized() {
        let reg = registry();
        assert!(!reg.is_authorized(&owner()));
    }

    proptest! {
        #[test]
        fn property_last_owner_write_wins(ops in proptest::collection::vec(any::<bool>(), 0..16)) {
            let mut reg = registry();
            let target = Principal::new("target");
            for grant in &ops {
                if *grant {
                    reg.authorize(&owner(), &target).unwrap();
                } else {
                    reg.revoke(&owner(), &target).unwrap();
                }
            }
            let expected = ops.last().copied().unwrap_or(false);
            prop_assert_eq!(reg.is_authorized(&target), expected);
        }
    }
}
