// src/store/dto.rs
//
// Wire documents for the Movie Mate REST API
//
// Field names follow the backend exactly: media uses camelCase extras
// (`totalEpisodes`), episodes and reviews use snake_case (`media_id`,
// `review_text`).

use serde::{Deserialize, Serialize};

use super::{EpisodePayload, MediaPayload, ReviewPayload, StoreError};
use crate::domain::{
    Episode, EpisodeId, Media, MediaId, MediaKind, MediaStatus, Review, ReviewId, WatchStatus,
};

/// Media record as the store sends it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct MediaDoc {
    pub id: i64,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub director: String,
    pub genre: String,
    pub platform: String,
    pub status: String,
    #[serde(
        rename = "totalEpisodes",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub total_episodes: Option<u32>,
    #[serde(
        rename = "episodesWatched",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub episodes_watched: Option<u32>,
}

impl TryFrom<MediaDoc> for Media {
    type Error = StoreError;

    fn try_from(doc: MediaDoc) -> Result<Self, StoreError> {
        let kind = match doc.kind.as_str() {
            "movie" => MediaKind::Movie,
            "tv" => {
                let total_episodes = doc.total_episodes.ok_or_else(|| {
                    StoreError::Contract(format!(
                        "tv record {} is missing totalEpisodes",
                        doc.id
                    ))
                })?;
                MediaKind::Show { total_episodes }
            }
            other => {
                return Err(StoreError::Contract(format!(
                    "unknown media type '{}'",
                    other
                )))
            }
        };
        let status = MediaStatus::from_wire(&doc.status).ok_or_else(|| {
            StoreError::Contract(format!("unknown media status '{}'", doc.status))
        })?;

        Ok(Media::new(
            MediaId(doc.id),
            doc.title,
            kind,
            doc.director,
            doc.genre,
            doc.platform,
            status,
        ))
    }
}

impl From<&Media> for MediaDoc {
    fn from(media: &Media) -> Self {
        Self {
            id: media.id.0,
            title: media.title.clone(),
            kind: media.kind.wire_name().to_string(),
            director: media.director.clone(),
            genre: media.genre.clone(),
            platform: media.platform.clone(),
            status: media.status.wire_name().to_string(),
            total_episodes: media.total_episodes(),
            episodes_watched: None,
        }
    }
}

/// Create/replace body for a media record (no id; the store assigns it)
#[derive(Debug, Serialize)]
pub(crate) struct NewMediaDoc<'a> {
    pub title: &'a str,
    #[serde(rename = "type")]
    pub kind: &'a str,
    pub director: &'a str,
    pub genre: &'a str,
    pub platform: &'a str,
    pub status: &'a str,
    #[serde(rename = "totalEpisodes", skip_serializing_if = "Option::is_none")]
    pub total_episodes: Option<u32>,
}

impl<'a> From<&'a MediaPayload> for NewMediaDoc<'a> {
    fn from(payload: &'a MediaPayload) -> Self {
        let total_episodes = match payload.kind {
            MediaKind::Movie => None,
            MediaKind::Show { total_episodes } => Some(total_episodes),
        };
        Self {
            title: &payload.title,
            kind: payload.kind.wire_name(),
            director: &payload.director,
            genre: &payload.genre,
            platform: &payload.platform,
            status: payload.status.wire_name(),
            total_episodes,
        }
    }
}

/// Episode record as the store sends it
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct EpisodeDoc {
    pub id: i64,
    pub media_id: i64,
    pub season: u32,
    pub episode: u32,
    pub status: String,
}

impl TryFrom<EpisodeDoc> for Episode {
    type Error = StoreError;

    fn try_from(doc: EpisodeDoc) -> Result<Self, StoreError> {
        let status = WatchStatus::from_wire(&doc.status).ok_or_else(|| {
            StoreError::Contract(format!("unknown episode status '{}'", doc.status))
        })?;
        Ok(Episode::new(
            EpisodeId(doc.id),
            MediaId(doc.media_id),
            doc.season,
            doc.episode,
            status,
        ))
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct NewEpisodeDoc {
    pub media_id: i64,
    pub season: u32,
    pub episode: u32,
    pub status: &'static str,
}

impl From<&EpisodePayload> for NewEpisodeDoc {
    fn from(payload: &EpisodePayload) -> Self {
        Self {
            media_id: payload.media_id.0,
            season: payload.season,
            episode: payload.episode,
            status: payload.status.wire_name(),
        }
    }
}

/// Review record as the store sends it
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ReviewDoc {
    pub id: i64,
    pub media_id: i64,
    pub rating: f64,
    pub review_text: String,
}

impl From<ReviewDoc> for Review {
    fn from(doc: ReviewDoc) -> Self {
        Review::new(
            ReviewId(doc.id),
            MediaId(doc.media_id),
            doc.rating,
            doc.review_text,
        )
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct NewReviewDoc<'a> {
    pub media_id: i64,
    pub rating: f64,
    pub review_text: &'a str,
}

impl<'a> From<&'a ReviewPayload> for NewReviewDoc<'a> {
    fn from(payload: &'a ReviewPayload) -> Self {
        Self {
            media_id: payload.media_id.0,
            rating: payload.rating,
            review_text: &payload.review_text,
        }
    }
}

/// AI review generation request: the draft text plus the media record
/// the review is about
#[derive(Debug, Serialize)]
pub(crate) struct GenerateReviewDoc<'a> {
    #[serde(rename = "reviewText")]
    pub review_text: &'a str,
    pub media: MediaDoc,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GeneratedReviewDoc {
    pub review: String,
}

/// One recommended title, read-only projection from the store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub id: MediaId,
    pub title: String,
    pub genre: String,
    pub platform: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tv_doc_maps_to_show() {
        let doc: MediaDoc = serde_json::from_str(
            r#"{"id":2,"title":"Severance","type":"tv","director":"Ben Stiller",
                "genre":"Thriller","platform":"Apple TV","status":"watching",
                "totalEpisodes":9}"#,
        )
        .unwrap();
        let media = Media::try_from(doc).unwrap();
        assert_eq!(media.kind, MediaKind::Show { total_episodes: 9 });
        assert_eq!(media.status, MediaStatus::Watching);
    }

    #[test]
    fn test_tv_doc_without_episodes_breaks_contract() {
        let doc: MediaDoc = serde_json::from_str(
            r#"{"id":2,"title":"Severance","type":"tv","director":"Ben Stiller",
                "genre":"Thriller","platform":"Apple TV","status":"watching"}"#,
        )
        .unwrap();
        assert!(matches!(
            Media::try_from(doc),
            Err(StoreError::Contract(_))
        ));
    }

    #[test]
    fn test_movie_doc_ignores_episode_count() {
        let doc: MediaDoc = serde_json::from_str(
            r#"{"id":1,"title":"Dune","type":"movie","director":"Denis Villeneuve",
                "genre":"Action","platform":"HBO","status":"completed"}"#,
        )
        .unwrap();
        let media = Media::try_from(doc).unwrap();
        assert_eq!(media.kind, MediaKind::Movie);
        assert_eq!(media.total_episodes(), None);
    }

    #[test]
    fn test_new_media_doc_omits_episodes_for_movies() {
        let payload = MediaPayload {
            title: "Dune".to_string(),
            kind: MediaKind::Movie,
            director: "Denis Villeneuve".to_string(),
            genre: "Action".to_string(),
            platform: "HBO".to_string(),
            status: MediaStatus::Completed,
        };
        let json = serde_json::to_value(NewMediaDoc::from(&payload)).unwrap();
        assert_eq!(json["type"], "movie");
        assert!(json.get("totalEpisodes").is_none());
    }

    #[test]
    fn test_episode_doc_round_trip_names() {
        let payload = EpisodePayload {
            media_id: MediaId(7),
            season: 1,
            episode: 2,
            status: WatchStatus::Unwatched,
        };
        let json = serde_json::to_value(NewEpisodeDoc::from(&payload)).unwrap();
        assert_eq!(json["media_id"], 7);
        assert_eq!(json["status"], "unwatched");
    }

    #[test]
    fn test_unknown_status_breaks_contract() {
        let doc = EpisodeDoc {
            id: 1,
            media_id: 7,
            season: 1,
            episode: 1,
            status: "paused".to_string(),
        };
        assert!(matches!(
            Episode::try_from(doc),
            Err(StoreError::Contract(_))
        ));
    }
}
