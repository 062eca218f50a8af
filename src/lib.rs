// src/lib.rs
// Movie Mate Core - Client engine for the Movie Mate media tracker
//
// Architecture:
// - Domain-centric: All business rules live in domains
// - Declarative: Form validation is a pure interpreter over rule tables
// - Explicit: No implicit behavior, no magic
// - Thin client: The REST store stays authoritative for all data

// ============================================================================
// FOUNDATION
// ============================================================================

pub mod config;
pub mod domain;
pub mod error;
pub mod store;
pub mod validation;

// ============================================================================
// CLIENT LAYERS
// ============================================================================

pub mod application;
pub mod forms;
pub mod services;
pub mod view;

// ============================================================================
// PUBLIC API - Domain Entities
// ============================================================================

pub use domain::{
    is_duplicate,
    validate_episode,
    validate_media,
    validate_review,
    // Episode
    Episode,
    EpisodeId,
    EpisodeKey,
    // Media
    Media,
    MediaId,
    MediaKind,
    MediaStatus,
    // Review
    Review,
    ReviewId,
    WatchStatus,
    GENRES,
};

// ============================================================================
// PUBLIC API - Error Types
// ============================================================================

pub use error::{AppError, AppResult};

// ============================================================================
// PUBLIC API - Validation
// ============================================================================

pub use validation::{
    Constraint, FieldSchema, FieldSource, FieldType, FieldValue, RecordSchema, Rule,
    ValidationReport,
};

// ============================================================================
// PUBLIC API - Forms
// ============================================================================

pub use forms::{
    media_schema, review_schema, EpisodeDraft, EpisodeForm, MediaDraft, MediaForm, ReviewDraft,
    ReviewForm, DUPLICATE_EPISODE_MESSAGE,
};

// ============================================================================
// PUBLIC API - Table View
// ============================================================================

pub use view::{
    distinct_options, media_columns, view, CellValue, Column, Filter, SortDir, SortState,
    TableQuery, TableView,
};

// ============================================================================
// PUBLIC API - Store and Services
// ============================================================================

pub use store::{HttpMediaStore, MediaStore, Recommendation, StoreError};

pub use services::{
    watched_count, EpisodeService, EpisodeSubmission, MediaService, MediaSubmission,
    RecommendationService, ReviewService, ReviewSubmission,
};

// ============================================================================
// PUBLIC API - Application Notices
// ============================================================================

pub use application::{Notice, NoticeKind};
