use super::value::{FieldSource, FieldValue};

/// Expected primitive type of a field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    Text,
    Number,
}

/// One declarative constraint attached to a field
#[derive(Debug, Clone)]
pub enum Constraint {
    /// Field must be non-empty
    Required,

    /// Field must carry the given primitive type (empty values pass;
    /// `Required` governs presence)
    Type(FieldType),

    /// Numeric lower bound, inclusive
    Min(f64),

    /// Numeric upper bound, inclusive
    Max(f64),

    /// Minimum text length in characters
    MinLength(usize),

    /// Maximum text length in characters
    MaxLength(usize),

    /// Text must be one of the listed values
    OneOf(&'static [&'static str]),

    /// Field is validated only while `field` currently equals `equals`;
    /// when the condition holds, the field is also required
    RequiredWhen {
        field: &'static str,
        equals: &'static str,
    },
}

/// A constraint plus an optional message override
///
/// Without an override each constraint reports a default message naming
/// the violated bound. `OneOf` deliberately reports a generic message.
#[derive(Debug, Clone)]
pub struct Rule {
    pub constraint: Constraint,
    pub message: Option<&'static str>,
}

impl Rule {
    pub fn new(constraint: Constraint) -> Self {
        Self {
            constraint,
            message: None,
        }
    }

    pub fn with_message(mut self, message: &'static str) -> Self {
        self.message = Some(message);
        self
    }

    /// Evaluate this rule against one field value.
    ///
    /// Returns the violation message, or `None` when the rule passes.
    /// Pure: reads `record` only for cross-field conditions.
    pub fn check(
        &self,
        field: &str,
        value: &FieldValue,
        record: &dyn FieldSource,
    ) -> Option<String> {
        match &self.constraint {
            Constraint::Required => {
                if value.is_empty() {
                    return Some(self.message_or(|| {
                        format!("Please enter the {} to proceed.", field)
                    }));
                }
                None
            }

            Constraint::RequiredWhen {
                field: other,
                equals,
            } => {
                let active = record.field(other).as_text() == Some(*equals);
                if active && value.is_empty() {
                    return Some(self.message_or(|| {
                        format!("Please enter the {} to proceed.", field)
                    }));
                }
                None
            }

            Constraint::Type(expected) => {
                if value.is_empty() {
                    return None;
                }
                let matches = match expected {
                    FieldType::Text => value.as_text().is_some(),
                    // NaN and infinities are not usable numbers; bounds
                    // checks cannot catch NaN, so presence is rejected here
                    FieldType::Number => value.as_number().is_some_and(f64::is_finite),
                };
                if !matches {
                    return Some(self.message_or(|| match expected {
                        FieldType::Text => format!("Please enter a valid {}.", field),
                        FieldType::Number => "Please enter a valid number.".to_string(),
                    }));
                }
                None
            }

            Constraint::Min(min) => {
                if let Some(n) = value.as_number() {
                    if n < *min {
                        return Some(self.message_or(|| {
                            format!("{} must be at least {}.", field, min)
                        }));
                    }
                }
                None
            }

            Constraint::Max(max) => {
                if let Some(n) = value.as_number() {
                    if n > *max {
                        return Some(self.message_or(|| {
                            format!("{} must not exceed {}.", field, max)
                        }));
                    }
                }
                None
            }

            Constraint::MinLength(min) => {
                if let Some(text) = value.as_text() {
                    if !value.is_empty() && text.chars().count() < *min {
                        return Some(self.message_or(|| {
                            format!("{} must be at least {} characters.", field, min)
                        }));
                    }
                }
                None
            }

            Constraint::MaxLength(max) => {
                if let Some(text) = value.as_text() {
                    if text.chars().count() > *max {
                        return Some(self.message_or(|| {
                            format!("{} must not exceed {} characters.", field, max)
                        }));
                    }
                }
                None
            }

            Constraint::OneOf(allowed) => {
                if value.is_empty() {
                    return None;
                }
                match value.as_text() {
                    Some(text) if allowed.contains(&text) => None,
                    // All membership failures collapse to one message
                    _ => Some(self.message_or(|| "Invalid value.".to_string())),
                }
            }
        }
    }

    fn message_or(&self, default: impl FnOnce() -> String) -> String {
        match self.message {
            Some(message) => message.to_string(),
            None => default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    struct MapSource(BTreeMap<&'static str, FieldValue>);

    impl FieldSource for MapSource {
        fn field(&self, name: &str) -> FieldValue {
            self.0.get(name).cloned().unwrap_or(FieldValue::Missing)
        }
    }

    fn empty_record() -> MapSource {
        MapSource(BTreeMap::new())
    }

    #[test]
    fn test_required_rejects_blank_text() {
        let rule = Rule::new(Constraint::Required);
        let msg = rule.check("title", &FieldValue::text("   "), &empty_record());
        assert_eq!(msg.as_deref(), Some("Please enter the title to proceed."));
    }

    #[test]
    fn test_required_accepts_zero() {
        let rule = Rule::new(Constraint::Required);
        assert!(rule
            .check("rating", &FieldValue::Number(0.0), &empty_record())
            .is_none());
    }

    #[test]
    fn test_min_reports_violated_bound() {
        let rule = Rule::new(Constraint::Min(1.0));
        let msg = rule.check("totalEpisodes", &FieldValue::Number(0.0), &empty_record());
        assert_eq!(msg.as_deref(), Some("totalEpisodes must be at least 1."));
    }

    #[test]
    fn test_max_passes_at_bound() {
        let rule = Rule::new(Constraint::Max(5.0));
        assert!(rule
            .check("rating", &FieldValue::Number(5.0), &empty_record())
            .is_none());
    }

    #[test]
    fn test_number_type_rejects_non_finite() {
        let rule = Rule::new(Constraint::Type(FieldType::Number));
        for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let msg = rule.check("rating", &FieldValue::Number(bad), &empty_record());
            assert_eq!(msg.as_deref(), Some("Please enter a valid number."));
        }
    }

    #[test]
    fn test_one_of_collapses_to_generic_message() {
        let rule = Rule::new(Constraint::OneOf(&["movie", "tv"]));
        let msg = rule.check("type", &FieldValue::text("podcast"), &empty_record());
        assert_eq!(msg.as_deref(), Some("Invalid value."));
    }

    #[test]
    fn test_required_when_inactive_passes() {
        let record = MapSource(BTreeMap::from([("type", FieldValue::text("movie"))]));
        let rule = Rule::new(Constraint::RequiredWhen {
            field: "type",
            equals: "tv",
        });
        assert!(rule
            .check("totalEpisodes", &FieldValue::Missing, &record)
            .is_none());
    }

    #[test]
    fn test_required_when_active_rejects_missing() {
        let record = MapSource(BTreeMap::from([("type", FieldValue::text("tv"))]));
        let rule = Rule::new(Constraint::RequiredWhen {
            field: "type",
            equals: "tv",
        })
        .with_message("Please enter total episodes to proceed.");
        let msg = rule.check("totalEpisodes", &FieldValue::Missing, &record);
        assert_eq!(msg.as_deref(), Some("Please enter total episodes to proceed."));
    }

    #[test]
    fn test_message_override_wins() {
        let rule = Rule::new(Constraint::MinLength(10))
            .with_message("Review must be at least 10 characters.");
        let msg = rule.check("reviewText", &FieldValue::text("short"), &empty_record());
        assert_eq!(msg.as_deref(), Some("Review must be at least 10 characters."));
    }
}
