//! Ownership decisions for owner-scoped resources.
//!
//! `AuthorizationGuard` is a pure function of two owner ids. It performs no
//! I/O and never loads anything; the caller resolves existence first and
//! hands over the resource it found.
//!
//! ```text
//! handler: find_by_id ──► None  ──► NotFound
//!                     └─► Some ──► AuthorizationGuard::is_owner ──► false ──► Forbidden
//! ```

use super::{DomainError, ErrorCode, OwnedBy, OwnerId};

/// Pure allow/deny decision on resource ownership.
#[derive(Debug, Clone, Copy, Default)]
pub struct AuthorizationGuard;

impl AuthorizationGuard {
    /// Returns whether `caller` is the recorded owner of `resource`.
    ///
    /// # Errors
    ///
    /// - `InvalidArgument` if `resource` is absent. Absence is a "not found"
    ///   condition the caller must have handled; it is never read as "not owner".
    pub fn is_owner<T>(caller: OwnerId, resource: Option<&T>) -> Result<bool, DomainError>
    where
        T: OwnedBy + ?Sized,
    {
        match resource {
            Some(resource) => Ok(resource.is_owned_by(caller)),
            None => Err(DomainError::new(
                ErrorCode::InvalidArgument,
                "Ownership check requires an existing resource",
            )
            .with_detail("caller", caller.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    struct TestResource {
        owner: OwnerId,
    }

    impl OwnedBy for TestResource {
        fn owner_id(&self) -> OwnerId {
            self.owner
        }
    }

    fn owner(raw: i64) -> OwnerId {
        OwnerId::new(raw).unwrap()
    }

    #[test]
    fn grants_recorded_owner() {
        let resource = TestResource { owner: owner(10) };
        assert_eq!(AuthorizationGuard::is_owner(owner(10), Some(&resource)).unwrap(), true);
    }

    #[test]
    fn denies_other_identity() {
        let resource = TestResource { owner: owner(10) };
        assert_eq!(AuthorizationGuard::is_owner(owner(11), Some(&resource)).unwrap(), false);
    }

    #[test]
    fn absent_resource_is_invalid_argument_not_denial() {
        let err = AuthorizationGuard::is_owner::<TestResource>(owner(10), None).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidArgument);
        assert_eq!(err.details.get("caller"), Some(&"10".to_string()));
    }

    proptest! {
        #[test]
        fn decision_is_id_equality(recorded in 1i64..10_000, caller in 1i64..10_000) {
            let resource = TestResource { owner: owner(recorded) };
            let decision = AuthorizationGuard::is_owner(owner(caller), Some(&resource)).unwrap();
            prop_assert_eq!(decision, recorded == caller);
        }
    }
}
