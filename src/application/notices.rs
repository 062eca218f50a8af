// src/application/notices.rs
//
// User-Facing Notices
//
// ARCHITECTURE:
// - Maps internal errors -> user-friendly snackbar messages
// - Never exposes internal implementation details
// - Notices are transient and global; they never mutate form state.
//   Validation errors stay field-local in the forms' reports and never
//   become notices.

use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::forms::DUPLICATE_EPISODE_MESSAGE;

/// Notice categories for the UI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeKind {
    Success,

    /// Duplicate episode conflict: blocking, form preserved
    Duplicate,

    /// Store/network failure: transient, retryable by the user
    StoreFailure,

    /// Anything else (500-class)
    Internal,
}

/// One transient message for the snackbar
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
    pub details: Option<String>,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: message.into(),
            details: None,
        }
    }

    pub fn media_saved() -> Self {
        Self::success("Media saved successfully!")
    }

    pub fn duplicate_episode() -> Self {
        Self {
            kind: NoticeKind::Duplicate,
            message: DUPLICATE_EPISODE_MESSAGE.to_string(),
            details: None,
        }
    }

    /// Map an internal error to a notice for one failed action.
    /// `fallback` names the action ("Failed to save media." etc.)
    pub fn from_app_error(error: &AppError, fallback: &str) -> Self {
        match error {
            AppError::Store(store_error) => {
                log::warn!("store failure: {}", store_error);
                Self {
                    kind: NoticeKind::StoreFailure,
                    message: fallback.to_string(),
                    details: Some(store_error.to_string()),
                }
            }
            other => {
                log::warn!("internal error: {}", other);
                Self {
                    kind: NoticeKind::Internal,
                    message: fallback.to_string(),
                    details: None,
                }
            }
        }
    }

    pub fn media_save_failed(error: &AppError) -> Self {
        Self::from_app_error(error, "Failed to save media.")
    }

    pub fn episode_add_failed(error: &AppError) -> Self {
        Self::from_app_error(error, "Failed to add episode.")
    }

    pub fn episode_update_failed(error: &AppError) -> Self {
        Self::from_app_error(error, "Failed to update episode.")
    }

    pub fn review_generation_failed(error: &AppError) -> Self {
        Self::from_app_error(error, "Something went wrong while generating the review.")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::StoreError;

    #[test]
    fn test_store_failure_keeps_fallback_message() {
        let error = AppError::Store(StoreError::Status(
            reqwest::StatusCode::INTERNAL_SERVER_ERROR,
        ));
        let notice = Notice::media_save_failed(&error);
        assert_eq!(notice.kind, NoticeKind::StoreFailure);
        assert_eq!(notice.message, "Failed to save media.");
        assert!(notice.details.is_some());
    }

    #[test]
    fn test_duplicate_notice_uses_blocking_message() {
        let notice = Notice::duplicate_episode();
        assert_eq!(notice.kind, NoticeKind::Duplicate);
        assert_eq!(notice.message, "This episode details already recorded.");
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&Notice::media_saved()).unwrap();
        assert!(json.contains("success"));
        assert!(json.contains("Media saved successfully!"));
    }
}
