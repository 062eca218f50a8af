// src/services/episode_service.rs
//
// Episode Service - Per-Episode Watch Tracking
//
// CRITICAL RULES:
// - The duplicate check runs against the caller's current episode list
//   BEFORE any store call; a colliding draft never reaches the wire
// - Editing in place excludes the edited record from the scan
// - The form draft is preserved on every non-saved outcome

use std::sync::Arc;

use crate::domain::{Episode, MediaId, WatchStatus};
use crate::error::AppResult;
use crate::forms::EpisodeForm;
use crate::store::{EpisodePayload, MediaStore};

/// Outcome of an episode form submission
#[derive(Debug)]
pub enum EpisodeSubmission {
    Saved(Episode),
    /// (season, episode) collides with an existing record; submission
    /// aborted, single blocking message
    Duplicate,
    /// Season or episode number below 1
    Invalid(String),
}

pub struct EpisodeService {
    store: Arc<dyn MediaStore>,
}

impl EpisodeService {
    pub fn new(store: Arc<dyn MediaStore>) -> Self {
        Self { store }
    }

    /// List all tracked episodes for one media
    pub async fn list_for_media(&self, media_id: MediaId) -> AppResult<Vec<Episode>> {
        Ok(self.store.list_episodes(media_id).await?)
    }

    /// Add a new episode record or fully replace the one being edited.
    ///
    /// `existing` is the caller's current in-memory list for this media;
    /// the store remains authoritative for what is actually persisted.
    pub async fn submit(
        &self,
        media_id: MediaId,
        form: &EpisodeForm,
        existing: &[Episode],
    ) -> AppResult<EpisodeSubmission> {
        if form.draft.season < 1 || form.draft.episode < 1 {
            return Ok(EpisodeSubmission::Invalid(
                "Season and episode numbers must be at least 1.".to_string(),
            ));
        }

        if form.is_duplicate_of(existing) {
            return Ok(EpisodeSubmission::Duplicate);
        }

        let payload = EpisodePayload {
            media_id,
            season: form.draft.season,
            episode: form.draft.episode,
            status: form.draft.status,
        };

        let episode = match form.editing {
            Some(id) => self.store.update_episode(id, &payload).await?,
            None => self.store.create_episode(&payload).await?,
        };
        Ok(EpisodeSubmission::Saved(episode))
    }
}

/// Episodes watched so far, for the "3 / 9 episodes watched" summary
pub fn watched_count(episodes: &[Episode]) -> usize {
    episodes
        .iter()
        .filter(|ep| ep.status == WatchStatus::Watched)
        .count()
}
