pub mod entity;
pub mod invariants;

pub use entity::{Episode, EpisodeId, EpisodeKey, WatchStatus};
pub use invariants::{is_duplicate, validate_episode};
