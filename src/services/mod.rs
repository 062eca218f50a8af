// src/services/mod.rs
//
// Services Module - Orchestration Layer

pub mod episode_service;
pub mod media_service;
pub mod recommendation_service;
pub mod review_service;


// Re-export all services and their types
pub use media_service::{MediaService, MediaSubmission};

pub use episode_service::{watched_count, EpisodeService, EpisodeSubmission};

pub use review_service::{ReviewService, ReviewSubmission};

pub use recommendation_service::RecommendationService;
