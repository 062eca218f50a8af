use serde::{Deserialize, Serialize};

use crate::domain::media::MediaId;

/// Opaque server-assigned review identifier
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ReviewId(pub i64);

impl std::fmt::Display for ReviewId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A user review of one media record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    /// Server-assigned immutable identifier
    pub id: ReviewId,

    /// Reference to the reviewed Media (REQUIRED)
    pub media_id: MediaId,

    /// Star rating in [0, 5], halves allowed
    pub rating: f64,

    /// Free-form review body, 10-500 characters
    pub review_text: String,
}

impl Review {
    pub fn new(id: ReviewId, media_id: MediaId, rating: f64, review_text: String) -> Self {
        Self {
            id,
            media_id,
            rating,
            review_text,
        }
    }
}
