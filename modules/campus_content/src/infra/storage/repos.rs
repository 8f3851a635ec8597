//! Document-store adapters for the domain's repository ports.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use uuid::Uuid;

use docstore::{ConditionalOutcome, DocumentStore, Filter, StoreError};

use crate::contract::model::{
    ApprovedFilter, ContentItem, ContentKind, ContentStatus, Rating, Report, Role, UserProfile,
};
use crate::domain::guard::ScopeFilter;
use crate::domain::repo::{
    ContentRepository, Decision, DecisionOutcome, ProfileRepository, RatingRepository,
    ReportRepository,
};
use crate::infra::storage::entity::{self, ContentDoc, ProfileDoc, RatingDoc};
use crate::infra::storage::mapper;

fn json<T: serde::Serialize>(value: &T) -> anyhow::Result<Value> {
    Ok(serde_json::to_value(value)?)
}

pub struct DocStoreProfiles {
    store: Arc<dyn DocumentStore>,
}

impl DocStoreProfiles {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl ProfileRepository for DocStoreProfiles {
    async fn find_by_id(&self, id: Uuid) -> anyhow::Result<Option<UserProfile>> {
        let Some(value) = self.store.get(entity::USERS, id).await? else {
            return Ok(None);
        };
        let doc: ProfileDoc = serde_json::from_value(value)?;
        Ok(Some(mapper::doc_to_profile(id, doc)))
    }

    async fn insert(&self, profile: UserProfile) -> anyhow::Result<()> {
        let doc = json(&mapper::profile_to_doc(&profile))?;
        self.store.set(entity::USERS, profile.id, doc).await?;
        Ok(())
    }

    async fn set_university_and_role(
        &self,
        id: Uuid,
        university_id: Option<Uuid>,
        role: Role,
    ) -> anyhow::Result<bool> {
        let fields = vec![
            ("university_id".to_string(), json(&university_id)?),
            ("role".to_string(), json(&role)?),
        ];
        match self.store.update_fields(entity::USERS, id, fields).await {
            Ok(()) => Ok(true),
            Err(StoreError::NotFound { .. }) => Ok(false),
            Err(e) => Err(e.into()),
        }
    }
}

pub struct DocStoreContent {
    store: Arc<dyn DocumentStore>,
}

impl DocStoreContent {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    async fn find_docs(&self, filter: Filter) -> anyhow::Result<Vec<ContentItem>> {
        let docs = self.store.find(entity::CONTENT, &filter).await?;
        docs.into_iter()
            .map(|(id, value)| {
                let doc: ContentDoc = serde_json::from_value(value)?;
                mapper::doc_to_content(id, doc)
            })
            .collect()
    }
}

#[async_trait]
impl ContentRepository for DocStoreContent {
    async fn insert(&self, item: ContentItem) -> anyhow::Result<()> {
        let doc = json(&mapper::content_to_doc(&item))?;
        self.store.set(entity::CONTENT, item.id, doc).await?;
        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> anyhow::Result<Option<ContentItem>> {
        let Some(value) = self.store.get(entity::CONTENT, id).await? else {
            return Ok(None);
        };
        let doc: ContentDoc = serde_json::from_value(value)?;
        Ok(Some(mapper::doc_to_content(id, doc)?))
    }

    async fn list_pending(
        &self,
        kind: ContentKind,
        scope: ScopeFilter,
    ) -> anyhow::Result<Vec<ContentItem>> {
        let mut filter = Filter::new()
            .eq("kind", json(&kind)?)
            .eq("status", json(&ContentStatus::Pending)?);
        if let Some(tenant) = scope.tenant() {
            filter = filter.eq("university_id", tenant.to_string());
        }
        self.find_docs(filter).await
    }

    async fn list_approved_notes(
        &self,
        filter: &ApprovedFilter,
    ) -> anyhow::Result<Vec<ContentItem>> {
        let mut f = Filter::new()
            .eq("kind", json(&ContentKind::Note)?)
            .eq("status", json(&ContentStatus::Approved)?);
        if let Some(university_id) = filter.university_id {
            f = f.eq("university_id", university_id.to_string());
        }
        if let Some(course_id) = filter.course_id {
            f = f.eq("course_id", course_id.to_string());
        }
        if let Some(department_id) = filter.department_id {
            f = f.eq("department_id", department_id.to_string());
        }
        self.find_docs(f).await
    }

    async fn list_approved_events(
        &self,
        university_id: Uuid,
    ) -> anyhow::Result<Vec<ContentItem>> {
        let filter = Filter::new()
            .eq("kind", json(&ContentKind::Event)?)
            .eq("status", json(&ContentStatus::Approved)?)
            .eq("university_id", university_id.to_string());
        let mut items = self.find_docs(filter).await?;
        items.sort_by_key(|item| item.created_at);
        Ok(items)
    }

    async fn list_by_owner(
        &self,
        kind: ContentKind,
        owner_id: Uuid,
    ) -> anyhow::Result<Vec<ContentItem>> {
        let filter = Filter::new()
            .eq("kind", json(&kind)?)
            .eq("owner_id", owner_id.to_string());
        let mut items = self.find_docs(filter).await?;
        items.retain(|item| item.status != ContentStatus::Deleted);
        Ok(items)
    }

    async fn apply_decision(
        &self,
        id: Uuid,
        expected: ContentStatus,
        decision: Decision,
    ) -> anyhow::Result<DecisionOutcome> {
        let mut fields = vec![
            ("status".to_string(), json(&decision.status)?),
            ("decided_at".to_string(), json(&decision.decided_at)?),
        ];
        if let Some(decided_by) = decision.decided_by {
            fields.push(("decided_by".to_string(), decided_by.to_string().into()));
        }
        if let Some(reason) = decision.rejection_reason {
            fields.push(("rejection_reason".to_string(), reason.into()));
        }

        let outcome = self
            .store
            .update_fields_if(entity::CONTENT, id, "status", json(&expected)?, fields)
            .await;
        match outcome {
            Ok(ConditionalOutcome::Applied) => Ok(DecisionOutcome::Applied),
            Ok(ConditionalOutcome::GuardFailed(actual)) => {
                let actual: ContentStatus = serde_json::from_value(actual)?;
                Ok(DecisionOutcome::StatusMismatch(actual))
            }
            Err(StoreError::NotFound { .. }) => Ok(DecisionOutcome::NotFound),
            Err(e) => Err(e.into()),
        }
    }

    async fn increment_download_count(&self, id: Uuid) -> anyhow::Result<()> {
        self.store
            .increment(entity::CONTENT, id, "download_count", 1)
            .await?;
        Ok(())
    }

    async fn admin_owns_school(&self, admin_id: Uuid) -> anyhow::Result<bool> {
        let filter = Filter::new()
            .eq("kind", json(&ContentKind::School)?)
            .eq("admin_uid", admin_id.to_string());
        let owned = self.store.find(entity::CONTENT, &filter).await?;
        Ok(!owned.is_empty())
    }
}

pub struct DocStoreRatings {
    store: Arc<dyn DocumentStore>,
}

impl DocStoreRatings {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl RatingRepository for DocStoreRatings {
    async fn find(&self, note_id: Uuid, user_id: Uuid) -> anyhow::Result<Option<Rating>> {
        let filter = Filter::new()
            .eq("note_id", note_id.to_string())
            .eq("user_id", user_id.to_string());
        let mut docs = self.store.find(entity::RATINGS, &filter).await?;
        let Some((_, value)) = docs.pop() else {
            return Ok(None);
        };
        let doc: RatingDoc = serde_json::from_value(value)?;
        Ok(Some(mapper::doc_to_rating(doc)?))
    }

    async fn insert(&self, rating: Rating) -> anyhow::Result<()> {
        let doc = json(&mapper::rating_to_doc(&rating))?;
        self.store.insert(entity::RATINGS, doc).await?;
        Ok(())
    }

    async fn list_for_note(&self, note_id: Uuid) -> anyhow::Result<Vec<Rating>> {
        let filter = Filter::new().eq("note_id", note_id.to_string());
        let docs = self.store.find(entity::RATINGS, &filter).await?;
        docs.into_iter()
            .map(|(_, value)| {
                let doc: RatingDoc = serde_json::from_value(value)?;
                mapper::doc_to_rating(doc)
            })
            .collect()
    }
}

pub struct DocStoreReports {
    store: Arc<dyn DocumentStore>,
}

impl DocStoreReports {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl ReportRepository for DocStoreReports {
    async fn insert(&self, report: Report) -> anyhow::Result<()> {
        let doc = json(&mapper::report_to_doc(&report))?;
        self.store.set(entity::REPORTS, report.id, doc).await?;
        Ok(())
    }
}
