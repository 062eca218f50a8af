pub mod entity;
pub mod invariants;

pub use entity::{Review, ReviewId};
pub use invariants::{validate_review, REVIEW_MAX_CHARS, REVIEW_MIN_CHARS};
