use crate::domain::review::{REVIEW_MAX_CHARS, REVIEW_MIN_CHARS};
use crate::validation::{
    Constraint, FieldSchema, FieldSource, FieldType, FieldValue, RecordSchema, Rule,
    ValidationReport,
};

/// Raw state of the review form
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ReviewDraft {
    pub rating: Option<f64>,
    pub review_text: String,
}

impl FieldSource for ReviewDraft {
    fn field(&self, name: &str) -> FieldValue {
        match name {
            "rating" => match self.rating {
                Some(n) => FieldValue::Number(n),
                None => FieldValue::Missing,
            },
            "reviewText" => FieldValue::text(self.review_text.clone()),
            _ => FieldValue::Missing,
        }
    }
}

/// Rule table for the review form
pub fn review_schema() -> RecordSchema {
    RecordSchema::new(vec![
        FieldSchema::new(
            "rating",
            vec![
                Rule::new(Constraint::Required).with_message("Rating is required."),
                Rule::new(Constraint::Type(FieldType::Number))
                    .with_message("Please enter rating to proceed."),
                Rule::new(Constraint::Min(0.0)).with_message("Rating must be at least 0."),
                Rule::new(Constraint::Max(5.0)).with_message("Rating must not exceed 5."),
            ],
        ),
        FieldSchema::new(
            "reviewText",
            vec![
                Rule::new(Constraint::Required)
                    .with_message("Please enter review to proceed."),
                Rule::new(Constraint::MinLength(REVIEW_MIN_CHARS))
                    .with_message("Review must be at least 10 characters."),
                Rule::new(Constraint::MaxLength(REVIEW_MAX_CHARS))
                    .with_message("Review must not exceed 500 characters."),
            ],
        ),
    ])
}

/// The review form: draft + current error report
#[derive(Debug, Clone)]
pub struct ReviewForm {
    pub draft: ReviewDraft,
    pub errors: ValidationReport,
    schema: RecordSchema,
}

impl ReviewForm {
    pub fn new() -> Self {
        Self {
            draft: ReviewDraft::default(),
            errors: ValidationReport::new(),
            schema: review_schema(),
        }
    }

    /// Accepts only in-range ratings, mirroring the numeric input's
    /// min/max clamping; `None` clears the field.
    pub fn set_rating(&mut self, value: Option<f64>) {
        match value {
            Some(n) if (0.0..=5.0).contains(&n) => self.draft.rating = Some(n),
            Some(_) => {}
            None => self.draft.rating = None,
        }
    }

    /// Typing clears a stale text error immediately; blur re-validates
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.draft.review_text = text.into();
        self.errors.apply("reviewText", None);
    }

    /// AI assist: wholesale replacement of the draft text with the
    /// generated review. The replaced text still goes through
    /// [`validate_all`](Self::validate_all) on submit.
    pub fn replace_text(&mut self, generated: String) {
        self.draft.review_text = generated;
        self.errors.apply("reviewText", None);
    }

    pub fn validate_all(&mut self) -> bool {
        self.errors = self.schema.validate(&self.draft);
        self.errors.is_valid()
    }

    pub fn validate_field(&mut self, name: &str) {
        let outcome = self.schema.validate_field(&self.draft, name);
        self.errors.apply(name, outcome);
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_valid()
    }
}

impl Default for ReviewForm {
    fn default() -> Self {
        Self::new()
    }
}
