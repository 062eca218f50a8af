// src/validation/mod.rs
//
// Declarative Form Validation
//
// ARCHITECTURE:
// - A small pure interpreter over constraint tables (field -> ordered rules)
// - Reports are returned wholesale; callers merge them explicitly
// - No I/O, no hidden state, no partial mutation of error maps

pub mod report;
pub mod rules;
pub mod schema;
pub mod value;

pub use report::ValidationReport;
pub use rules::{Constraint, FieldType, Rule};
pub use schema::{FieldSchema, RecordSchema};
pub use value::{FieldSource, FieldValue};
