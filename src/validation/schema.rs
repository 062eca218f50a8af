use super::report::ValidationReport;
use super::rules::{Constraint, Rule};
use super::value::FieldSource;

/// Ordered rule list for one named field
#[derive(Debug, Clone)]
pub struct FieldSchema {
    pub name: &'static str,
    pub rules: Vec<Rule>,
}

impl FieldSchema {
    pub fn new(name: &'static str, rules: Vec<Rule>) -> Self {
        Self { name, rules }
    }

    /// A field whose rule list carries `RequiredWhen` is validated only
    /// while its condition holds; otherwise the whole field is skipped.
    fn applies(&self, record: &dyn FieldSource) -> bool {
        self.rules.iter().all(|rule| match &rule.constraint {
            Constraint::RequiredWhen { field, equals } => {
                record.field(field).as_text() == Some(*equals)
            }
            _ => true,
        })
    }

    /// First violated rule wins: one message per field
    fn check(&self, record: &dyn FieldSource) -> Option<String> {
        if !self.applies(record) {
            return None;
        }
        let value = record.field(self.name);
        self.rules
            .iter()
            .find_map(|rule| rule.check(self.name, &value, record))
    }
}

/// Declarative schema for a composite record: field -> ordered rules
#[derive(Debug, Clone)]
pub struct RecordSchema {
    fields: Vec<FieldSchema>,
}

impl RecordSchema {
    pub fn new(fields: Vec<FieldSchema>) -> Self {
        Self { fields }
    }

    /// Validate every declared field, with no short-circuit, so the
    /// caller can show all problems at once. Idempotent.
    pub fn validate(&self, record: &dyn FieldSource) -> ValidationReport {
        let mut report = ValidationReport::new();
        for field in &self.fields {
            if let Some(message) = field.check(record) {
                report.insert(field.name, message);
            }
        }
        report
    }

    /// Re-validate one field in isolation, for incremental (on-blur)
    /// feedback. The caller merges the outcome with
    /// [`ValidationReport::apply`], leaving other fields' state intact.
    ///
    /// Referencing a field the schema does not declare is a programming
    /// error and panics.
    pub fn validate_field(&self, record: &dyn FieldSource, name: &str) -> Option<String> {
        let field = self
            .fields
            .iter()
            .find(|f| f.name == name)
            .unwrap_or_else(|| panic!("unknown field '{}' in schema", name));
        field.check(record)
    }

    pub fn field_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().map(|f| f.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::value::FieldValue;
    use crate::validation::FieldType;
    use std::collections::BTreeMap;

    struct MapSource(BTreeMap<&'static str, FieldValue>);

    impl FieldSource for MapSource {
        fn field(&self, name: &str) -> FieldValue {
            self.0.get(name).cloned().unwrap_or(FieldValue::Missing)
        }
    }

    fn schema() -> RecordSchema {
        RecordSchema::new(vec![
            FieldSchema::new("title", vec![Rule::new(Constraint::Required)]),
            FieldSchema::new(
                "rating",
                vec![
                    Rule::new(Constraint::Required).with_message("Rating is required."),
                    Rule::new(Constraint::Type(FieldType::Number)),
                    Rule::new(Constraint::Max(5.0)),
                ],
            ),
        ])
    }

    #[test]
    fn test_collects_all_failures() {
        let record = MapSource(BTreeMap::new());
        let report = schema().validate(&record);
        assert_eq!(report.len(), 2);
        assert!(report.message("title").is_some());
        assert_eq!(report.message("rating"), Some("Rating is required."));
    }

    #[test]
    fn test_first_violation_wins_within_field() {
        let record = MapSource(BTreeMap::from([("rating", FieldValue::Number(9.0))]));
        let report = schema().validate(&record);
        assert_eq!(report.message("rating"), Some("rating must not exceed 5."));
    }

    #[test]
    fn test_validate_is_idempotent() {
        let record = MapSource(BTreeMap::from([("title", FieldValue::text("Dune"))]));
        let schema = schema();
        assert_eq!(schema.validate(&record), schema.validate(&record));
    }

    #[test]
    fn test_single_field_validation() {
        let record = MapSource(BTreeMap::new());
        let outcome = schema().validate_field(&record, "title");
        assert!(outcome.is_some());
    }

    #[test]
    #[should_panic(expected = "unknown field")]
    fn test_unknown_field_panics() {
        let record = MapSource(BTreeMap::new());
        schema().validate_field(&record, "studio");
    }
}
