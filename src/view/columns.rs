use super::table::{CellValue, Column};
use crate::domain::media::{Media, MediaKind};

/// "watching" -> "Watching", "tv" -> "Tv": lowercase, underscores to
/// spaces, each word capitalized
pub fn humanize(raw: &str) -> String {
    raw.to_lowercase()
        .replace('_', " ")
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Column set for the media table
///
/// Type and status display (and sort by) their humanized labels but
/// filter on the raw wire value, matching the dropdowns that offer raw
/// values with humanized labels.
pub fn media_columns() -> Vec<Column<Media>> {
    vec![
        Column::new("title", |m: &Media| CellValue::text(m.title.clone())),
        Column::new("type", |m: &Media| {
            CellValue::text(humanize(m.kind.wire_name()))
        })
        .with_filter_value(|m: &Media| CellValue::text(m.kind.wire_name())),
        Column::new("director", |m: &Media| {
            CellValue::text(m.director.clone())
        }),
        Column::new("platform", |m: &Media| {
            CellValue::text(m.platform.clone())
        }),
        Column::new("status", |m: &Media| {
            CellValue::text(humanize(m.status.wire_name()))
        })
        .with_filter_value(|m: &Media| CellValue::text(m.status.wire_name())),
        Column::new("genre", |m: &Media| CellValue::text(m.genre.clone())),
        Column::new("episodes", |m: &Media| match m.kind {
            MediaKind::Movie => CellValue::text("-"),
            MediaKind::Show { total_episodes } => CellValue::Number(total_episodes as f64),
        }),
    ]
}
