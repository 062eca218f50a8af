// src/services/review_service.rs
//
// Review Service - Ratings and Review Text
//
// CRITICAL RULES:
// - Submission always runs the full review schema, so AI-generated text
//   is validated exactly like hand-typed text
// - AI generation replaces the draft wholesale; it never submits

use std::sync::Arc;

use crate::domain::{Media, MediaId, Review};
use crate::error::AppResult;
use crate::forms::{review_schema, ReviewDraft};
use crate::store::{MediaStore, ReviewPayload};
use crate::validation::ValidationReport;

/// Outcome of a review form submission
#[derive(Debug)]
pub enum ReviewSubmission {
    Saved(Review),
    Rejected(ValidationReport),
}

pub struct ReviewService {
    store: Arc<dyn MediaStore>,
}

impl ReviewService {
    pub fn new(store: Arc<dyn MediaStore>) -> Self {
        Self { store }
    }

    /// List all reviews for one media
    pub async fn list_for_media(&self, media_id: MediaId) -> AppResult<Vec<Review>> {
        Ok(self.store.list_reviews(media_id).await?)
    }

    /// Create a review from the form draft
    pub async fn submit(
        &self,
        media_id: MediaId,
        draft: &ReviewDraft,
    ) -> AppResult<ReviewSubmission> {
        let report = review_schema().validate(draft);
        if !report.is_valid() {
            return Ok(ReviewSubmission::Rejected(report));
        }

        // rating is present: Required passed
        let rating = draft.rating.unwrap_or_default();
        let payload = ReviewPayload {
            media_id,
            rating,
            review_text: draft.review_text.clone(),
        };
        let review = self.store.create_review(&payload).await?;
        Ok(ReviewSubmission::Saved(review))
    }

    /// AI assist: ask the store to rewrite the draft text into a full
    /// review. Returns the generated text; the caller replaces the draft
    /// with it and the text is re-validated on submit.
    pub async fn generate_ai_review(
        &self,
        draft_text: &str,
        media: &Media,
    ) -> AppResult<String> {
        let generated = self.store.generate_review(draft_text, media).await?;
        Ok(generated)
    }
}
