// src/store/http.rs
//
// HTTP implementation of the MediaStore contract
//
// Plain JSON over reqwest against the Movie Mate backend. This is
// INFRASTRUCTURE, not DOMAIN: it maps wire documents to entities and
// never applies business rules.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{header, Client};
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::dto::{
    EpisodeDoc, GenerateReviewDoc, GeneratedReviewDoc, MediaDoc, NewEpisodeDoc, NewMediaDoc,
    NewReviewDoc, ReviewDoc,
};
use super::{
    EpisodePayload, MediaPayload, MediaStore, Recommendation, ReviewPayload, StoreError,
};
use crate::config::Config;
use crate::domain::{Episode, EpisodeId, Media, MediaId, Review};

pub struct HttpMediaStore {
    base_url: String,
    http_client: Client,
}

impl HttpMediaStore {
    pub fn new(config: &Config) -> Self {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url: config.store_base_url.trim_end_matches('/').to_string(),
            http_client,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_json<T>(&self, path: &str) -> Result<T, StoreError>
    where
        T: DeserializeOwned,
    {
        log::debug!("GET {}", path);
        let response = self
            .http_client
            .get(self.url(path))
            .header(header::ACCEPT, "application/json")
            .send()
            .await?;
        Self::decode(response).await
    }

    async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, StoreError>
    where
        B: Serialize + Sync,
        T: DeserializeOwned,
    {
        log::debug!("POST {}", path);
        let response = self
            .http_client
            .post(self.url(path))
            .header(header::CONTENT_TYPE, "application/json")
            .json(body)
            .send()
            .await?;
        Self::decode(response).await
    }

    async fn put_json<B, T>(&self, path: &str, body: &B) -> Result<T, StoreError>
    where
        B: Serialize + Sync,
        T: DeserializeOwned,
    {
        log::debug!("PUT {}", path);
        let response = self
            .http_client
            .put(self.url(path))
            .header(header::CONTENT_TYPE, "application/json")
            .json(body)
            .send()
            .await?;
        Self::decode(response).await
    }

    async fn decode<T>(response: reqwest::Response) -> Result<T, StoreError>
    where
        T: DeserializeOwned,
    {
        let status = response.status();
        if !status.is_success() {
            log::warn!("store returned status {}", status);
            return Err(StoreError::Status(status));
        }
        response
            .json()
            .await
            .map_err(|e| StoreError::Contract(format!("undecodable response: {}", e)))
    }
}

#[async_trait]
impl MediaStore for HttpMediaStore {
    async fn list_media(&self) -> Result<Vec<Media>, StoreError> {
        let docs: Vec<MediaDoc> = self.get_json("/media").await?;
        docs.into_iter().map(Media::try_from).collect()
    }

    async fn create_media(&self, payload: &MediaPayload) -> Result<Media, StoreError> {
        let doc: MediaDoc = self
            .post_json("/media", &NewMediaDoc::from(payload))
            .await?;
        Media::try_from(doc)
    }

    async fn update_media(
        &self,
        id: MediaId,
        payload: &MediaPayload,
    ) -> Result<Media, StoreError> {
        let doc: MediaDoc = self
            .put_json(&format!("/media/{}", id), &NewMediaDoc::from(payload))
            .await?;
        Media::try_from(doc)
    }

    async fn list_episodes(&self, media_id: MediaId) -> Result<Vec<Episode>, StoreError> {
        let docs: Vec<EpisodeDoc> = self.get_json(&format!("/episodes/{}", media_id)).await?;
        docs.into_iter().map(Episode::try_from).collect()
    }

    async fn create_episode(&self, payload: &EpisodePayload) -> Result<Episode, StoreError> {
        let doc: EpisodeDoc = self
            .post_json("/episodes", &NewEpisodeDoc::from(payload))
            .await?;
        Episode::try_from(doc)
    }

    async fn update_episode(
        &self,
        id: EpisodeId,
        payload: &EpisodePayload,
    ) -> Result<Episode, StoreError> {
        let doc: EpisodeDoc = self
            .put_json(&format!("/episodes/{}", id), &NewEpisodeDoc::from(payload))
            .await?;
        Episode::try_from(doc)
    }

    async fn list_reviews(&self, media_id: MediaId) -> Result<Vec<Review>, StoreError> {
        let docs: Vec<ReviewDoc> = self.get_json(&format!("/reviews/{}", media_id)).await?;
        Ok(docs.into_iter().map(Review::from).collect())
    }

    async fn create_review(&self, payload: &ReviewPayload) -> Result<Review, StoreError> {
        let doc: ReviewDoc = self
            .post_json("/reviews", &NewReviewDoc::from(payload))
            .await?;
        Ok(Review::from(doc))
    }

    async fn generate_review(
        &self,
        draft_text: &str,
        media: &Media,
    ) -> Result<String, StoreError> {
        let body = GenerateReviewDoc {
            review_text: draft_text,
            media: MediaDoc::from(media),
        };
        let doc: GeneratedReviewDoc = self.post_json("/generate-review", &body).await?;
        Ok(doc.review)
    }

    async fn recommendations(&self) -> Result<Vec<Recommendation>, StoreError> {
        self.get_json("/recommendations").await
    }
}
