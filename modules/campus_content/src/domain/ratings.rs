//! Peer-rating aggregation on approved notes, plus abuse reports.

use tracing::{debug, info, instrument};
use uuid::Uuid;

use crate::contract::model::{
    ContentKind, ContentStatus, Rating, RatingSummary, Report, UserProfile,
};
use crate::domain::error::DomainError;
use crate::domain::service::Service;

impl Service {
    /// Record a one-time rating on an approved note. A second call for the
    /// same `(note, user)` pair is refused; ratings are never upserted.
    #[instrument(
        name = "campus_content.service.rate_note",
        skip(self, caller),
        fields(caller_id = %caller.id, note_id = %note_id, value)
    )]
    pub async fn rate_note(
        &self,
        caller: &UserProfile,
        note_id: Uuid,
        value: u8,
    ) -> Result<(), DomainError> {
        info!("Rating note");

        if !(1..=5).contains(&value) {
            return Err(DomainError::RatingOutOfRange { value });
        }
        self.visible_note(note_id).await?;

        if self
            .ratings
            .find(note_id, caller.id)
            .await
            .map_err(|e| DomainError::database(e.to_string()))?
            .is_some()
        {
            return Err(DomainError::already_rated(note_id, caller.id));
        }

        self.ratings
            .insert(Rating {
                note_id,
                user_id: caller.id,
                value,
                created_at: self.now(),
            })
            .await
            .map_err(|e| DomainError::database(e.to_string()))?;

        info!("Successfully rated note");
        Ok(())
    }

    /// Read-side fold over all ratings of one note. The mean is rounded to
    /// one decimal place, halves away from zero.
    #[instrument(name = "campus_content.service.note_rating_summary", skip(self))]
    pub async fn note_rating_summary(&self, note_id: Uuid) -> Result<RatingSummary, DomainError> {
        let ratings = self
            .ratings
            .list_for_note(note_id)
            .await
            .map_err(|e| DomainError::database(e.to_string()))?;

        let count = ratings.len();
        let average = if count == 0 {
            0.0
        } else {
            let sum: u32 = ratings.iter().map(|r| u32::from(r.value)).sum();
            round_to_tenth(f64::from(sum) / count as f64)
        };

        debug!("Computed rating summary: average={average}, count={count}");
        Ok(RatingSummary { average, count })
    }

    /// File an append-only abuse report; review happens outside this core.
    #[instrument(
        name = "campus_content.service.report_content",
        skip(self, caller, reason),
        fields(caller_id = %caller.id, content_id = %content_id)
    )]
    pub async fn report_content(
        &self,
        caller: &UserProfile,
        content_id: Uuid,
        kind: ContentKind,
        reason: String,
    ) -> Result<Report, DomainError> {
        info!("Reporting content");

        if reason.trim().is_empty() {
            return Err(DomainError::missing_field("reason"));
        }

        let report = Report {
            id: Uuid::new_v4(),
            reporter_id: caller.id,
            content_id,
            content_kind: kind,
            reason,
            status: ContentStatus::Pending,
            created_at: self.now(),
        };

        self.reports
            .insert(report.clone())
            .await
            .map_err(|e| DomainError::database(e.to_string()))?;

        info!("Filed report {}", report.id);
        Ok(report)
    }
}

fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::round_to_tenth;

    #[test]
    fn rounds_half_away_from_zero() {
        assert_eq!(round_to_tenth(4.25), 4.3);
        assert_eq!(round_to_tenth(4.24), 4.2);
        assert_eq!(round_to_tenth(4.0), 4.0);
    }

    #[test]
    fn mean_of_4_5_3_is_exactly_4() {
        let mean = f64::from(4 + 5 + 3_u32) / 3.0;
        assert_eq!(round_to_tenth(mean), 4.0);
    }
}
