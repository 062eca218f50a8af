// src/store/mod.rs
//
// REST Store Client - The Authoritative Collaborator
//
// ARCHITECTURE:
// - `MediaStore` is the seam services depend on (mocked in tests)
// - `HttpMediaStore` talks JSON to the Movie Mate backend
// - Maps wire documents -> domain entities (NO domain mutation)
// - Store failures are always distinct from validation failures; the
//   core never retries

pub mod dto;
pub mod http;

pub use dto::Recommendation;
pub use http::HttpMediaStore;

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{Episode, EpisodeId, Media, MediaId, MediaKind, MediaStatus, Review, WatchStatus};

/// Collaborator failure: the store could not be reached, refused the
/// request, or answered with something that breaks its contract
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("store returned status {0}")]
    Status(reqwest::StatusCode),

    #[error("store response violated contract: {0}")]
    Contract(String),
}

/// Fields the store needs to create or fully replace a media record
#[derive(Debug, Clone, PartialEq)]
pub struct MediaPayload {
    pub title: String,
    pub kind: MediaKind,
    pub director: String,
    pub genre: String,
    pub platform: String,
    pub status: MediaStatus,
}

/// Fields the store needs to create or fully replace an episode record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EpisodePayload {
    pub media_id: MediaId,
    pub season: u32,
    pub episode: u32,
    pub status: WatchStatus,
}

/// Fields the store needs to create a review record
#[derive(Debug, Clone, PartialEq)]
pub struct ReviewPayload {
    pub media_id: MediaId,
    pub rating: f64,
    pub review_text: String,
}

/// The authoritative REST store
///
/// Create/update responses echo the stored record; beyond the typed
/// document mapping the core does not re-validate them.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MediaStore: Send + Sync {
    async fn list_media(&self) -> Result<Vec<Media>, StoreError>;

    async fn create_media(&self, payload: &MediaPayload) -> Result<Media, StoreError>;

    async fn update_media(
        &self,
        id: MediaId,
        payload: &MediaPayload,
    ) -> Result<Media, StoreError>;

    async fn list_episodes(&self, media_id: MediaId) -> Result<Vec<Episode>, StoreError>;

    async fn create_episode(&self, payload: &EpisodePayload) -> Result<Episode, StoreError>;

    async fn update_episode(
        &self,
        id: EpisodeId,
        payload: &EpisodePayload,
    ) -> Result<Episode, StoreError>;

    async fn list_reviews(&self, media_id: MediaId) -> Result<Vec<Review>, StoreError>;

    async fn create_review(&self, payload: &ReviewPayload) -> Result<Review, StoreError>;

    /// AI assist: the store rewrites the draft text into a full review
    async fn generate_review(
        &self,
        draft_text: &str,
        media: &Media,
    ) -> Result<String, StoreError>;

    async fn recommendations(&self) -> Result<Vec<Recommendation>, StoreError>;
}
