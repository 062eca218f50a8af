pub mod entity;
pub mod invariants;

pub use entity::{Media, MediaId, MediaKind, MediaStatus, GENRES};
pub use invariants::validate_media;
