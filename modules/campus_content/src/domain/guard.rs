//! Authorization guard: the single choke point every privileged operation
//! passes through. Pure decision logic; the service layer supplies any
//! facts that require a repository lookup (e.g. school ownership).

use uuid::Uuid;

use crate::contract::model::{Role, UserProfile};
use crate::domain::error::DomainError;

/// Privileged action a caller asks the guard to authorize.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Moderate,
    ViewPendingQueue,
    DeleteContent,
    /// Assign this role to some target user.
    AssignRole(Role),
    /// Create a school; `already_owns` is looked up by the service before
    /// asking the guard so the guard itself stays side-effect free.
    CreateSchool { already_owns: bool },
}

impl Action {
    fn name(self) -> &'static str {
        match self {
            Action::Moderate => "moderate",
            Action::ViewPendingQueue => "view_pending_queue",
            Action::DeleteContent => "delete_content",
            Action::AssignRole(_) => "assign_role",
            Action::CreateSchool { .. } => "create_school",
        }
    }
}

/// Query restriction attached to an authorized action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScopeFilter {
    /// Unrestricted; only super admins get this.
    Global,
    /// Bound to one tenant.
    Tenant(Uuid),
}

impl ScopeFilter {
    /// Whether an item with the given tenant snapshot falls inside this
    /// scope. Tenantless items (schools before approval) are only visible
    /// through the global scope.
    pub fn permits(self, university_id: Option<Uuid>) -> bool {
        match self {
            ScopeFilter::Global => true,
            ScopeFilter::Tenant(tenant) => university_id == Some(tenant),
        }
    }

    pub fn tenant(self) -> Option<Uuid> {
        match self {
            ScopeFilter::Global => None,
            ScopeFilter::Tenant(tenant) => Some(tenant),
        }
    }
}

/// Decide whether `profile` may perform `action`, and under which scope.
///
/// An admin without an assigned tenant is refused moderation outright:
/// there is no tenant to scope their queue to until provisioning completes.
pub fn authorize(profile: &UserProfile, action: Action) -> Result<ScopeFilter, DomainError> {
    if !profile.role.is_moderator() {
        return Err(DomainError::unauthorized(action.name()));
    }

    match action {
        Action::Moderate | Action::ViewPendingQueue | Action::DeleteContent => {
            scope_for(profile, action)
        }
        Action::AssignRole(target_role) => {
            if profile.role == Role::Admin && target_role != Role::Student {
                return Err(DomainError::unauthorized(action.name()));
            }
            scope_for(profile, action)
        }
        Action::CreateSchool { already_owns } => {
            if profile.role == Role::Admin && already_owns {
                return Err(DomainError::already_owns_tenant(profile.id));
            }
            // Creating a school is not tenant-bound; schools carry no
            // tenant until approval.
            Ok(ScopeFilter::Global)
        }
    }
}

fn scope_for(profile: &UserProfile, action: Action) -> Result<ScopeFilter, DomainError> {
    match profile.role {
        Role::SuperAdmin => Ok(ScopeFilter::Global),
        Role::Admin => profile
            .university_id
            .map(ScopeFilter::Tenant)
            .ok_or_else(|| DomainError::unauthorized(action.name())),
        Role::Student => Err(DomainError::unauthorized(action.name())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(role: Role, university_id: Option<Uuid>) -> UserProfile {
        UserProfile {
            id: Uuid::new_v4(),
            full_name: "Test User".to_string(),
            email: "test@example.com".to_string(),
            role,
            university_id,
            onboarding_completed: true,
        }
    }

    #[test]
    fn student_cannot_moderate() {
        let p = profile(Role::Student, Some(Uuid::new_v4()));
        assert!(authorize(&p, Action::Moderate).is_err());
        assert!(authorize(&p, Action::ViewPendingQueue).is_err());
        assert!(authorize(&p, Action::DeleteContent).is_err());
    }

    #[test]
    fn admin_gets_tenant_scope() {
        let uni = Uuid::new_v4();
        let p = profile(Role::Admin, Some(uni));
        let scope = authorize(&p, Action::Moderate).unwrap();
        assert_eq!(scope, ScopeFilter::Tenant(uni));
        assert!(scope.permits(Some(uni)));
        assert!(!scope.permits(Some(Uuid::new_v4())));
        assert!(!scope.permits(None));
    }

    #[test]
    fn admin_without_tenant_is_refused() {
        let p = profile(Role::Admin, None);
        assert!(matches!(
            authorize(&p, Action::Moderate),
            Err(DomainError::Unauthorized { .. })
        ));
    }

    #[test]
    fn super_admin_gets_global_scope() {
        let p = profile(Role::SuperAdmin, None);
        let scope = authorize(&p, Action::DeleteContent).unwrap();
        assert_eq!(scope, ScopeFilter::Global);
        assert!(scope.permits(Some(Uuid::new_v4())));
        assert!(scope.permits(None));
    }

    #[test]
    fn admin_may_only_assign_student() {
        let p = profile(Role::Admin, Some(Uuid::new_v4()));
        assert!(authorize(&p, Action::AssignRole(Role::Student)).is_ok());
        assert!(authorize(&p, Action::AssignRole(Role::Admin)).is_err());
        assert!(authorize(&p, Action::AssignRole(Role::SuperAdmin)).is_err());
    }

    #[test]
    fn super_admin_may_assign_any_role() {
        let p = profile(Role::SuperAdmin, None);
        assert!(authorize(&p, Action::AssignRole(Role::Student)).is_ok());
        assert!(authorize(&p, Action::AssignRole(Role::Admin)).is_ok());
        assert!(authorize(&p, Action::AssignRole(Role::SuperAdmin)).is_ok());
    }

    #[test]
    fn admin_owning_school_cannot_create_second() {
        let p = profile(Role::Admin, Some(Uuid::new_v4()));
        assert!(matches!(
            authorize(&p, Action::CreateSchool { already_owns: true }),
            Err(DomainError::AlreadyOwnsTenant { .. })
        ));
        assert!(authorize(&p, Action::CreateSchool { already_owns: false }).is_ok());
    }

    #[test]
    fn super_admin_school_creation_ignores_ownership() {
        let p = profile(Role::SuperAdmin, None);
        assert!(authorize(&p, Action::CreateSchool { already_owns: true }).is_ok());
    }
}
