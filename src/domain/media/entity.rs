use serde::{Deserialize, Serialize};

/// Fixed set of genres the catalog recognizes
pub const GENRES: [&str; 6] = [
    "Action", "Comedy", "Fantasy", "Horror", "Romance", "Thriller",
];

/// Opaque server-assigned media identifier
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct MediaId(pub i64);

impl std::fmt::Display for MediaId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One cataloged movie or TV show
/// This is the root entity for episodes and reviews
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Media {
    /// Server-assigned immutable identifier
    pub id: MediaId,

    /// Display title
    pub title: String,

    /// Movie or show; shows always carry a total episode count
    pub kind: MediaKind,

    /// Director name
    pub director: String,

    /// One of [`GENRES`]
    pub genre: String,

    /// Streaming platform the media is available on
    pub platform: String,

    /// Current lifecycle status
    pub status: MediaStatus,
}

/// Kind of media work
///
/// The total episode count exists exactly when the media is a show, so
/// the "required if kind = tv" rule is carried by the type itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MediaKind {
    Movie,
    // tag and field names stay wire-shaped, agreeing with wire_name()
    #[serde(rename = "tv")]
    Show {
        #[serde(rename = "totalEpisodes")]
        total_episodes: u32,
    },
}

/// Current lifecycle status of the media
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MediaStatus {
    Watching,
    Completed,
    Wishlist,
}

impl Media {
    /// Create a new Media entity with a server-assigned id
    pub fn new(
        id: MediaId,
        title: String,
        kind: MediaKind,
        director: String,
        genre: String,
        platform: String,
        status: MediaStatus,
    ) -> Self {
        Self {
            id,
            title,
            kind,
            director,
            genre,
            platform,
            status,
        }
    }

    /// Total episodes for shows, `None` for movies
    pub fn total_episodes(&self) -> Option<u32> {
        match self.kind {
            MediaKind::Movie => None,
            MediaKind::Show { total_episodes } => Some(total_episodes),
        }
    }
}

impl MediaKind {
    /// Tag used by the REST store ("movie" / "tv")
    pub fn wire_name(&self) -> &'static str {
        match self {
            MediaKind::Movie => "movie",
            MediaKind::Show { .. } => "tv",
        }
    }
}

impl MediaStatus {
    pub fn wire_name(&self) -> &'static str {
        match self {
            MediaStatus::Watching => "watching",
            MediaStatus::Completed => "completed",
            MediaStatus::Wishlist => "wishlist",
        }
    }

    /// Parse the REST store representation
    pub fn from_wire(value: &str) -> Option<Self> {
        match value {
            "watching" => Some(MediaStatus::Watching),
            "completed" => Some(MediaStatus::Completed),
            "wishlist" => Some(MediaStatus::Wishlist),
            _ => None,
        }
    }
}

impl std::fmt::Display for MediaKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.wire_name())
    }
}

impl std::fmt::Display for MediaStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.wire_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_serialization_agrees_with_wire_name() {
        for kind in [MediaKind::Movie, MediaKind::Show { total_episodes: 9 }] {
            let json = serde_json::to_value(kind).unwrap();
            assert_eq!(json["type"], kind.wire_name());
        }
        let show = serde_json::to_value(MediaKind::Show { total_episodes: 9 }).unwrap();
        assert_eq!(show["totalEpisodes"], 9);
    }
}
