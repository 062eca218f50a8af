// src/services/media_service.rs
//
// Media Service - Catalog Management
//
// CRITICAL RULES:
// - Manages media records ONLY
// - Validation runs before any store call; an invalid draft never
//   reaches the wire
// - Store failures surface as errors, never as validation outcomes

use std::sync::Arc;

use crate::domain::{DomainError, Media, MediaId, MediaKind, MediaStatus};
use crate::error::{AppError, AppResult};
use crate::forms::{media_schema, MediaDraft};
use crate::store::{MediaPayload, MediaStore};
use crate::validation::ValidationReport;

/// Outcome of a media form submission
///
/// Validation failure is a value, not an error: the caller keeps the
/// draft and shows the report. Collaborator failure is `Err(AppError)`.
#[derive(Debug)]
pub enum MediaSubmission {
    Saved(Media),
    Rejected(ValidationReport),
}

pub struct MediaService {
    store: Arc<dyn MediaStore>,
}

impl MediaService {
    pub fn new(store: Arc<dyn MediaStore>) -> Self {
        Self { store }
    }

    /// Fetch the full catalog
    pub async fn list_media(&self) -> AppResult<Vec<Media>> {
        Ok(self.store.list_media().await?)
    }

    /// Create a new media record from the form draft
    pub async fn submit(&self, draft: &MediaDraft) -> AppResult<MediaSubmission> {
        let report = media_schema().validate(draft);
        if !report.is_valid() {
            return Ok(MediaSubmission::Rejected(report));
        }

        let payload = draft_to_payload(draft)?;
        let media = self.store.create_media(&payload).await?;
        Ok(MediaSubmission::Saved(media))
    }

    /// Full replacement of an existing record (edit = resubmit)
    pub async fn update(&self, id: MediaId, draft: &MediaDraft) -> AppResult<MediaSubmission> {
        let report = media_schema().validate(draft);
        if !report.is_valid() {
            return Ok(MediaSubmission::Rejected(report));
        }

        let payload = draft_to_payload(draft)?;
        let media = self.store.update_media(id, &payload).await?;
        Ok(MediaSubmission::Saved(media))
    }
}

/// Type the validated draft: only reachable after the schema passed, so
/// an unparseable kind or status here is a domain inconsistency
fn draft_to_payload(draft: &MediaDraft) -> AppResult<MediaPayload> {
    let kind = match draft.kind.as_str() {
        "movie" => MediaKind::Movie,
        "tv" => {
            let total = draft.total_episodes.ok_or_else(|| {
                DomainError::InvariantViolation(
                    "validated tv draft has no episode count".to_string(),
                )
            })?;
            MediaKind::Show {
                total_episodes: total as u32,
            }
        }
        other => {
            return Err(AppError::Domain(DomainError::UnknownEnumValue {
                field: "type",
                value: other.to_string(),
            }))
        }
    };
    let status = MediaStatus::from_wire(&draft.status).ok_or(DomainError::UnknownEnumValue {
        field: "status",
        value: draft.status.clone(),
    })?;

    Ok(MediaPayload {
        title: draft.title.clone(),
        kind,
        director: draft.director.clone(),
        genre: draft.genre.clone(),
        platform: draft.platform.clone(),
        status,
    })
}
