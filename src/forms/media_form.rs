use crate::domain::media::GENRES;
use crate::validation::{
    Constraint, FieldSchema, FieldSource, FieldType, FieldValue, RecordSchema, Rule,
    ValidationReport,
};

const MEDIA_KINDS: [&str; 2] = ["movie", "tv"];
const MEDIA_STATUSES: [&str; 3] = ["watching", "completed", "wishlist"];

/// Raw state of the add/edit media form
///
/// Kind and status stay as wire strings here; typing happens after
/// validation, when the draft becomes a store payload.
#[derive(Debug, Clone, PartialEq)]
pub struct MediaDraft {
    pub title: String,
    pub kind: String,
    pub director: String,
    pub genre: String,
    pub platform: String,
    pub status: String,
    pub total_episodes: Option<f64>,
}

impl Default for MediaDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            kind: "movie".to_string(),
            director: String::new(),
            genre: String::new(),
            platform: String::new(),
            status: "wishlist".to_string(),
            total_episodes: None,
        }
    }
}

impl FieldSource for MediaDraft {
    fn field(&self, name: &str) -> FieldValue {
        match name {
            "title" => FieldValue::text(self.title.clone()),
            "type" => FieldValue::text(self.kind.clone()),
            "director" => FieldValue::text(self.director.clone()),
            "genre" => FieldValue::text(self.genre.clone()),
            "platform" => FieldValue::text(self.platform.clone()),
            "status" => FieldValue::text(self.status.clone()),
            "totalEpisodes" => match self.total_episodes {
                Some(n) => FieldValue::Number(n),
                None => FieldValue::Missing,
            },
            _ => FieldValue::Missing,
        }
    }
}

/// Rule table for the media form
///
/// `totalEpisodes` is validated only while the draft says "tv"; for a
/// movie the field is skipped entirely, whatever it holds.
pub fn media_schema() -> RecordSchema {
    RecordSchema::new(vec![
        FieldSchema::new("title", vec![Rule::new(Constraint::Required)]),
        FieldSchema::new(
            "type",
            vec![
                Rule::new(Constraint::Required),
                Rule::new(Constraint::OneOf(&MEDIA_KINDS)),
            ],
        ),
        FieldSchema::new("director", vec![Rule::new(Constraint::Required)]),
        FieldSchema::new(
            "genre",
            vec![
                Rule::new(Constraint::Required),
                Rule::new(Constraint::OneOf(&GENRES)),
            ],
        ),
        FieldSchema::new("platform", vec![Rule::new(Constraint::Required)]),
        FieldSchema::new(
            "status",
            vec![
                Rule::new(Constraint::Required),
                Rule::new(Constraint::OneOf(&MEDIA_STATUSES)),
            ],
        ),
        FieldSchema::new(
            "totalEpisodes",
            vec![
                Rule::new(Constraint::RequiredWhen {
                    field: "type",
                    equals: "tv",
                })
                .with_message("Please enter total episodes to proceed."),
                Rule::new(Constraint::Type(FieldType::Number))
                    .with_message("Please enter a valid episode number."),
                Rule::new(Constraint::Min(1.0))
                    .with_message("Episode count must be at least 1."),
            ],
        ),
    ])
}

/// The add/edit media form: draft + current error report
#[derive(Debug, Clone)]
pub struct MediaForm {
    pub draft: MediaDraft,
    pub errors: ValidationReport,
    schema: RecordSchema,
}

impl MediaForm {
    pub fn new() -> Self {
        Self::with_draft(MediaDraft::default())
    }

    /// Start from an existing record's values (edit = full resubmit)
    pub fn with_draft(draft: MediaDraft) -> Self {
        Self {
            draft,
            errors: ValidationReport::new(),
            schema: media_schema(),
        }
    }

    /// Full validation on submit: replaces the report wholesale.
    /// Returns true when the draft is submittable.
    pub fn validate_all(&mut self) -> bool {
        self.errors = self.schema.validate(&self.draft);
        self.errors.is_valid()
    }

    /// Incremental validation on blur: touches only the named field's
    /// entry in the report.
    pub fn validate_field(&mut self, name: &str) {
        let outcome = self.schema.validate_field(&self.draft, name);
        self.errors.apply(name, outcome);
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_valid()
    }
}

impl Default for MediaForm {
    fn default() -> Self {
        Self::new()
    }
}
