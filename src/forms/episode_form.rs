use crate::domain::episode::{is_duplicate, Episode, EpisodeId, EpisodeKey, WatchStatus};

/// Single blocking message shown when a (season, episode) pair collides
pub const DUPLICATE_EPISODE_MESSAGE: &str = "This episode details already recorded.";

/// Raw state of the episode progress form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EpisodeDraft {
    pub season: u32,
    pub episode: u32,
    pub status: WatchStatus,
}

impl Default for EpisodeDraft {
    fn default() -> Self {
        Self {
            season: 1,
            episode: 1,
            status: WatchStatus::Watched,
        }
    }
}

impl EpisodeDraft {
    pub fn key(&self) -> EpisodeKey {
        EpisodeKey {
            season: self.season,
            episode: self.episode,
        }
    }
}

/// The add/edit episode form
///
/// Unlike the media form this carries a single blocking error, not a
/// per-field report: a duplicate aborts the submit and the draft is
/// preserved for correction.
#[derive(Debug, Clone, Default)]
pub struct EpisodeForm {
    pub draft: EpisodeDraft,
    /// Id of the record being edited in place, if any
    pub editing: Option<EpisodeId>,
    pub error: Option<String>,
}

impl EpisodeForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load an existing record into the form for in-place editing
    pub fn begin_edit(&mut self, episode: &Episode) {
        self.draft = EpisodeDraft {
            season: episode.season,
            episode: episode.episode,
            status: episode.status,
        };
        self.editing = Some(episode.id);
        self.error = None;
    }

    /// Back to defaults; also leaves edit mode
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// True when the current draft collides with an existing record.
    /// The record being edited is excluded from the scan.
    pub fn is_duplicate_of(&self, existing: &[Episode]) -> bool {
        is_duplicate(self.draft.key(), existing, self.editing)
    }
}
