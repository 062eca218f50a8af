use serde::{Deserialize, Serialize};

use crate::domain::media::MediaId;

/// Opaque server-assigned episode identifier
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct EpisodeId(pub i64);

impl std::fmt::Display for EpisodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Represents one tracked episode belonging to a Media
/// Episodes are the unit of viewing progress
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Episode {
    /// Server-assigned immutable identifier
    pub id: EpisodeId,

    /// Reference to parent Media (REQUIRED)
    pub media_id: MediaId,

    /// Season number, starting at 1
    pub season: u32,

    /// Episode number within the season, starting at 1
    pub episode: u32,

    /// Whether the user has watched this episode
    pub status: WatchStatus,
}

/// The (season, episode) pair that identifies an episode within one media
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EpisodeKey {
    pub season: u32,
    pub episode: u32,
}

/// Watch state of an episode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WatchStatus {
    Watched,
    Unwatched,
}

impl Episode {
    /// Create a new Episode
    /// media_id MUST be valid (checked by caller)
    pub fn new(
        id: EpisodeId,
        media_id: MediaId,
        season: u32,
        episode: u32,
        status: WatchStatus,
    ) -> Self {
        Self {
            id,
            media_id,
            season,
            episode,
            status,
        }
    }

    pub fn key(&self) -> EpisodeKey {
        EpisodeKey {
            season: self.season,
            episode: self.episode,
        }
    }
}

impl WatchStatus {
    pub fn wire_name(&self) -> &'static str {
        match self {
            WatchStatus::Watched => "watched",
            WatchStatus::Unwatched => "unwatched",
        }
    }

    pub fn from_wire(value: &str) -> Option<Self> {
        match value {
            "watched" => Some(WatchStatus::Watched),
            "unwatched" => Some(WatchStatus::Unwatched),
            _ => None,
        }
    }
}

impl std::fmt::Display for WatchStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.wire_name())
    }
}

impl std::fmt::Display for EpisodeKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "S{}E{}", self.season, self.episode)
    }
}
