// src/domain/mod.rs
//
// Domain Root - The Single Source of Truth for Domain API
//
// This file declares all domain modules and re-exports their public API.
// All other modules import from `crate::domain::*`

// ============================================================================
// MODULE DECLARATIONS
// ============================================================================

pub mod episode;
pub mod media;
pub mod review;

// ============================================================================
// PUBLIC API RE-EXPORTS
// ============================================================================

// Media Domain
pub use media::{validate_media, Media, MediaId, MediaKind, MediaStatus, GENRES};

// Episode Domain
pub use episode::{
    is_duplicate, validate_episode, Episode, EpisodeId, EpisodeKey, WatchStatus,
};

// Review Domain
pub use review::{validate_review, Review, ReviewId};

// ============================================================================
// DOMAIN ERROR TYPES
// ============================================================================

use thiserror::Error;

/// Domain-level errors
/// These represent violations of business rules and invariants
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),

    #[error("Rating {0} is outside the allowed 0-5 range")]
    RatingOutOfRange(f64),

    #[error("Unknown {field} value: {value}")]
    UnknownEnumValue { field: &'static str, value: String },

    #[error("Entity not found: {0}")]
    NotFound(String),
}

/// Domain result type
pub type DomainResult<T> = Result<T, DomainError>;
