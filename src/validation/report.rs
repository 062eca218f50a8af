use std::collections::BTreeMap;

use serde::Serialize;

/// Wholesale validation result: at most one message per failing field
///
/// Reports are returned complete by each validation call and merged
/// explicitly by the caller via [`apply`](Self::apply); nothing mutates
/// other fields' entries behind the caller's back.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    errors: BTreeMap<String, String>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn insert(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.insert(field.into(), message.into());
    }

    /// Merge a single-field outcome: a message replaces the field's entry,
    /// `None` clears it. Other fields are untouched.
    pub fn apply(&mut self, field: &str, outcome: Option<String>) {
        match outcome {
            Some(message) => {
                self.errors.insert(field.to_string(), message);
            }
            None => {
                self.errors.remove(field);
            }
        }
    }

    pub fn message(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.errors.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn clear(&mut self) {
        self.errors.clear();
    }
}
