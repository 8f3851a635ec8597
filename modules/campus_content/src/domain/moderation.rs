//! Moderation state machine: `Pending -> Approved | Rejected | Deleted`,
//! with `Deleted` also reachable from the other terminal states. Nothing
//! ever re-enters `Pending`.

use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::contract::model::{ContentItem, ContentStatus, UserProfile};
use crate::domain::error::DomainError;
use crate::domain::events::ContentDomainEvent;
use crate::domain::guard::{authorize, Action, ScopeFilter};
use crate::domain::repo::{Decision, DecisionOutcome};
use crate::domain::service::Service;

impl Service {
    /// Approve a pending item. Re-approval is an error, not a no-op; a
    /// moderator double-submitting should hear about it.
    #[instrument(
        name = "campus_content.service.approve",
        skip(self, caller),
        fields(caller_id = %caller.id, content_id = %content_id)
    )]
    pub async fn approve(
        &self,
        caller: &UserProfile,
        content_id: Uuid,
    ) -> Result<ContentItem, DomainError> {
        info!("Approving content");

        let scope = authorize(caller, Action::Moderate)?;
        let item = self.scoped_item(content_id, scope).await?;
        require_status(&item, ContentStatus::Pending, "approve")?;

        let decided_at = self.now();
        let decision = Decision {
            status: ContentStatus::Approved,
            decided_by: Some(caller.id),
            decided_at,
            rejection_reason: None,
        };
        let item = self
            .commit_decision(item, ContentStatus::Pending, decision, "approve")
            .await?;

        self.events.publish(&ContentDomainEvent::Approved {
            id: item.id,
            by: caller.id,
            at: decided_at,
        });
        info!("Successfully approved content");
        Ok(item)
    }

    /// Reject a pending item, optionally recording a reason for the owner.
    #[instrument(
        name = "campus_content.service.reject",
        skip(self, caller, reason),
        fields(caller_id = %caller.id, content_id = %content_id)
    )]
    pub async fn reject(
        &self,
        caller: &UserProfile,
        content_id: Uuid,
        reason: Option<String>,
    ) -> Result<ContentItem, DomainError> {
        info!("Rejecting content");

        let scope = authorize(caller, Action::Moderate)?;
        let item = self.scoped_item(content_id, scope).await?;
        require_status(&item, ContentStatus::Pending, "reject")?;

        let decided_at = self.now();
        let decision = Decision {
            status: ContentStatus::Rejected,
            decided_by: Some(caller.id),
            decided_at,
            rejection_reason: reason,
        };
        let item = self
            .commit_decision(item, ContentStatus::Pending, decision, "reject")
            .await?;

        self.events.publish(&ContentDomainEvent::Rejected {
            id: item.id,
            by: caller.id,
            at: decided_at,
        });
        info!("Successfully rejected content");
        Ok(item)
    }

    /// Soft-delete an item from any non-deleted state. The record stays in
    /// the store for the audit trail and is filtered from default listings.
    #[instrument(
        name = "campus_content.service.delete",
        skip(self, caller),
        fields(caller_id = %caller.id, content_id = %content_id)
    )]
    pub async fn delete(
        &self,
        caller: &UserProfile,
        content_id: Uuid,
    ) -> Result<ContentItem, DomainError> {
        info!("Deleting content");

        let scope = authorize(caller, Action::DeleteContent)?;
        let item = self.scoped_item(content_id, scope).await?;
        if item.status == ContentStatus::Deleted {
            return Err(DomainError::invalid_transition(item.status, "delete"));
        }

        let decided_at = self.now();
        let decision = Decision {
            status: ContentStatus::Deleted,
            // Only the timestamp is stamped on deletion; an earlier
            // approve/reject decision keeps its author.
            decided_by: None,
            decided_at,
            rejection_reason: None,
        };
        let expected = item.status;
        let item = self
            .commit_decision(item, expected, decision, "delete")
            .await?;

        self.events.publish(&ContentDomainEvent::Deleted {
            id: item.id,
            by: caller.id,
            at: decided_at,
        });
        info!("Successfully deleted content");
        Ok(item)
    }

    /// Load an item and check it against the caller's scope. An item the
    /// scope does not permit fails `Unauthorized` even though it exists.
    async fn scoped_item(
        &self,
        content_id: Uuid,
        scope: ScopeFilter,
    ) -> Result<ContentItem, DomainError> {
        let item = self
            .content
            .find_by_id(content_id)
            .await
            .map_err(|e| DomainError::database(e.to_string()))?
            .ok_or_else(|| DomainError::content_not_found(content_id))?;

        if !scope.permits(item.university_id) {
            warn!(
                "Scope {:?} does not permit content {} of tenant {:?}",
                scope, content_id, item.university_id
            );
            return Err(DomainError::unauthorized("moderate foreign tenant"));
        }
        Ok(item)
    }

    /// Persist the decision with a status compare-and-swap; a racing
    /// moderator losing the write sees the same `InvalidTransition` they
    /// would have seen arriving a moment later.
    async fn commit_decision(
        &self,
        item: ContentItem,
        expected: ContentStatus,
        decision: Decision,
        event: &'static str,
    ) -> Result<ContentItem, DomainError> {
        let outcome = self
            .content
            .apply_decision(item.id, expected, decision.clone())
            .await
            .map_err(|e| DomainError::database(e.to_string()))?;

        match outcome {
            DecisionOutcome::Applied => {
                let mut updated = item;
                updated.status = decision.status;
                if decision.decided_by.is_some() {
                    updated.decided_by = decision.decided_by;
                }
                updated.decided_at = Some(decision.decided_at);
                if decision.rejection_reason.is_some() {
                    updated.rejection_reason = decision.rejection_reason;
                }
                Ok(updated)
            }
            DecisionOutcome::StatusMismatch(actual) => {
                warn!("Lost decision race: content {} is now {:?}", item.id, actual);
                Err(DomainError::invalid_transition(actual, event))
            }
            DecisionOutcome::NotFound => Err(DomainError::content_not_found(item.id)),
        }
    }
}

fn require_status(
    item: &ContentItem,
    expected: ContentStatus,
    event: &'static str,
) -> Result<(), DomainError> {
    if item.status != expected {
        return Err(DomainError::invalid_transition(item.status, event));
    }
    Ok(())
}
