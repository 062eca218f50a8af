use super::entity::Review;
use crate::domain::{DomainError, DomainResult};

pub const REVIEW_MIN_CHARS: usize = 10;
pub const REVIEW_MAX_CHARS: usize = 500;

/// Validates all Review invariants
pub fn validate_review(review: &Review) -> DomainResult<()> {
    validate_rating(review.rating)?;
    validate_text(&review.review_text)?;
    Ok(())
}

fn validate_rating(rating: f64) -> DomainResult<()> {
    if !(0.0..=5.0).contains(&rating) {
        return Err(DomainError::RatingOutOfRange(rating));
    }
    Ok(())
}

/// Review body length is measured in characters, not bytes
fn validate_text(text: &str) -> DomainResult<()> {
    let chars = text.chars().count();
    if chars < REVIEW_MIN_CHARS || chars > REVIEW_MAX_CHARS {
        return Err(DomainError::InvariantViolation(format!(
            "Review text must be {}-{} characters, got {}",
            REVIEW_MIN_CHARS, REVIEW_MAX_CHARS, chars
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::media::MediaId;
    use crate::domain::review::ReviewId;

    fn review(rating: f64, text: &str) -> Review {
        Review::new(ReviewId(1), MediaId(7), rating, text.to_string())
    }

    #[test]
    fn test_valid_review() {
        assert!(validate_review(&review(4.5, "Tense and beautifully shot.")).is_ok());
    }

    #[test]
    fn test_rating_above_five_fails() {
        assert!(validate_review(&review(5.5, "Tense and beautifully shot.")).is_err());
    }

    #[test]
    fn test_negative_rating_fails() {
        assert!(validate_review(&review(-1.0, "Tense and beautifully shot.")).is_err());
    }

    #[test]
    fn test_short_text_fails() {
        assert!(validate_review(&review(4.0, "Meh")).is_err());
    }

    #[test]
    fn test_long_text_fails() {
        let long = "x".repeat(501);
        assert!(validate_review(&review(4.0, &long)).is_err());
    }
}
