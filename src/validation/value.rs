/// Raw value of a single form field, before any domain typing
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// Field absent or never filled in
    Missing,
    Text(String),
    Number(f64),
}

impl FieldValue {
    pub fn text(value: impl Into<String>) -> Self {
        FieldValue::Text(value.into())
    }

    /// Empty means missing, or text that is blank after trimming.
    /// A number is never empty.
    pub fn is_empty(&self) -> bool {
        match self {
            FieldValue::Missing => true,
            FieldValue::Text(s) => s.trim().is_empty(),
            FieldValue::Number(_) => false,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            FieldValue::Number(n) => Some(*n),
            _ => None,
        }
    }
}

/// Read access to a record's fields by name
///
/// Form drafts implement this so the rule interpreter can evaluate
/// cross-field constraints without knowing the draft's shape.
pub trait FieldSource {
    fn field(&self, name: &str) -> FieldValue;
}
