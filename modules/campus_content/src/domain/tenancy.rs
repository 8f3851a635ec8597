//! Tenant assignment: privileged mutation of a profile's tenant/role pair.

use tracing::{info, instrument};
use uuid::Uuid;

use crate::contract::model::{Role, UserProfile};
use crate::domain::error::DomainError;
use crate::domain::guard::{authorize, Action};
use crate::domain::service::Service;

impl Service {
    /// Assign a tenant and role to a user. Escalation is guarded: an admin
    /// may only hand out the student role, a super admin any role. Content
    /// the target already submitted keeps its snapshotted tenant.
    #[instrument(
        name = "campus_content.service.assign_university_and_role",
        skip(self, caller),
        fields(caller_id = %caller.id, target = %target_user_id, role = ?role)
    )]
    pub async fn assign_university_and_role(
        &self,
        caller: &UserProfile,
        target_user_id: Uuid,
        university_id: Option<Uuid>,
        role: Role,
    ) -> Result<(), DomainError> {
        info!("Assigning university and role");

        authorize(caller, Action::AssignRole(role))?;

        let updated = self
            .profiles
            .set_university_and_role(target_user_id, university_id, role)
            .await
            .map_err(|e| DomainError::database(e.to_string()))?;
        if !updated {
            return Err(DomainError::profile_not_found(target_user_id));
        }

        info!("Successfully assigned university and role");
        Ok(())
    }
}
