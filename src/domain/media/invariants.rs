use super::entity::{Media, MediaKind, GENRES};
use crate::domain::{DomainError, DomainResult};

/// Validates all Media invariants
/// These are the absolute rules that must hold for a Media to be valid
pub fn validate_media(media: &Media) -> DomainResult<()> {
    validate_text(&media.title, "title")?;
    validate_text(&media.director, "director")?;
    validate_text(&media.platform, "platform")?;
    validate_genre(&media.genre)?;
    validate_kind(&media.kind)?;
    Ok(())
}

fn validate_text(value: &str, field: &str) -> DomainResult<()> {
    if value.trim().is_empty() {
        return Err(DomainError::InvariantViolation(format!(
            "Media {} cannot be empty",
            field
        )));
    }
    Ok(())
}

/// Genre must come from the fixed catalog set
fn validate_genre(genre: &str) -> DomainResult<()> {
    if !GENRES.contains(&genre) {
        return Err(DomainError::UnknownEnumValue {
            field: "genre",
            value: genre.to_string(),
        });
    }
    Ok(())
}

/// Shows always know their episode count, and it is at least 1
fn validate_kind(kind: &MediaKind) -> DomainResult<()> {
    if let MediaKind::Show { total_episodes } = kind {
        if *total_episodes < 1 {
            return Err(DomainError::InvariantViolation(
                "Show must have at least 1 episode".to_string(),
            ));
        }
    }
    Ok(())
}

/// Critical Media Invariants:
///
/// 1. Identity is server-assigned and immutable
/// 2. Title, director and platform are never empty
/// 3. Genre is one of the fixed catalog set
/// 4. Total episodes exist exactly when kind = Show (enforced by the type)
/// 5. A show's episode count is at least 1
/// 6. Edits are full replacements, never partial patches

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::media::{MediaId, MediaStatus};

    fn sample(kind: MediaKind) -> Media {
        Media::new(
            MediaId(1),
            "Severance".to_string(),
            kind,
            "Ben Stiller".to_string(),
            "Thriller".to_string(),
            "Apple TV".to_string(),
            MediaStatus::Watching,
        )
    }

    #[test]
    fn test_valid_movie() {
        let media = sample(MediaKind::Movie);
        assert!(validate_media(&media).is_ok());
    }

    #[test]
    fn test_valid_show() {
        let media = sample(MediaKind::Show { total_episodes: 9 });
        assert!(validate_media(&media).is_ok());
    }

    #[test]
    fn test_empty_title_fails() {
        let mut media = sample(MediaKind::Movie);
        media.title = "   ".to_string();
        assert!(validate_media(&media).is_err());
    }

    #[test]
    fn test_unknown_genre_fails() {
        let mut media = sample(MediaKind::Movie);
        media.genre = "Documentary".to_string();
        assert!(validate_media(&media).is_err());
    }

    #[test]
    fn test_show_with_zero_episodes_fails() {
        let media = sample(MediaKind::Show { total_episodes: 0 });
        assert!(validate_media(&media).is_err());
    }
}
