// src/forms/mod.rs
//
// Form State - Drafts and Incremental Validation
//
// Each form pairs a raw draft (what the user typed) with a wholesale
// error report. Validation errors are field-local and non-destructive:
// the draft always survives a failed submit.

pub mod episode_form;
pub mod media_form;
pub mod review_form;

pub use episode_form::{EpisodeDraft, EpisodeForm, DUPLICATE_EPISODE_MESSAGE};
pub use media_form::{media_schema, MediaDraft, MediaForm};
pub use review_form::{review_schema, ReviewDraft, ReviewForm};
