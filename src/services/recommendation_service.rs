// src/services/recommendation_service.rs
//
// Recommendation Service - Read-Only Suggestions
//
// The store owns the recommendation logic; this is a passthrough.

use std::sync::Arc;

use crate::error::AppResult;
use crate::store::{MediaStore, Recommendation};

pub struct RecommendationService {
    store: Arc<dyn MediaStore>,
}

impl RecommendationService {
    pub fn new(store: Arc<dyn MediaStore>) -> Self {
        Self { store }
    }

    /// Fetch the current recommendations; an empty list is a normal
    /// outcome, not an error
    pub async fn fetch(&self) -> AppResult<Vec<Recommendation>> {
        Ok(self.store.recommendations().await?)
    }
}
