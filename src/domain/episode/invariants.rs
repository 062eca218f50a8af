use super::entity::{Episode, EpisodeId, EpisodeKey};
use crate::domain::{DomainError, DomainResult};

/// Validates all Episode invariants
pub fn validate_episode(episode: &Episode) -> DomainResult<()> {
    validate_numbering(episode.season, episode.episode)?;
    Ok(())
}

/// Season and episode numbers start at 1
fn validate_numbering(season: u32, episode: u32) -> DomainResult<()> {
    if season < 1 {
        return Err(DomainError::InvariantViolation(
            "Season number must be at least 1".to_string(),
        ));
    }
    if episode < 1 {
        return Err(DomainError::InvariantViolation(
            "Episode number must be at least 1".to_string(),
        ));
    }
    Ok(())
}

/// Returns true when `candidate` collides with an existing episode's
/// (season, episode) pair.
///
/// `exclude` carries the id of the record currently being edited, so an
/// in-place edit never flags itself as its own duplicate. Comparison is
/// exact numeric equality; a linear scan is fine at per-media episode
/// counts.
pub fn is_duplicate(
    candidate: EpisodeKey,
    existing: &[Episode],
    exclude: Option<EpisodeId>,
) -> bool {
    existing.iter().any(|ep| {
        ep.season == candidate.season
            && ep.episode == candidate.episode
            && exclude != Some(ep.id)
    })
}

/// Critical Episode Invariants:
///
/// 1. Episode MUST belong to exactly one Media (media_id required)
/// 2. Season and episode numbers are positive
/// 3. (season, episode) is unique within one media's episodes
/// 4. Editing a record in place is never a duplicate of itself
/// 5. Episode ID is immutable
/// 6. media_id is immutable (episode cannot change parent)

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::episode::WatchStatus;
    use crate::domain::media::MediaId;

    fn episode(id: i64, season: u32, episode: u32) -> Episode {
        Episode::new(
            EpisodeId(id),
            MediaId(7),
            season,
            episode,
            WatchStatus::Watched,
        )
    }

    #[test]
    fn test_valid_episode() {
        assert!(validate_episode(&episode(1, 1, 1)).is_ok());
    }

    #[test]
    fn test_zero_season_fails() {
        assert!(validate_episode(&episode(1, 0, 1)).is_err());
    }

    #[test]
    fn test_zero_episode_fails() {
        assert!(validate_episode(&episode(1, 1, 0)).is_err());
    }

    #[test]
    fn test_collision_is_duplicate() {
        let existing = vec![episode(5, 1, 2)];
        let candidate = EpisodeKey {
            season: 1,
            episode: 2,
        };
        assert!(is_duplicate(candidate, &existing, None));
    }

    #[test]
    fn test_editing_in_place_is_not_self_duplicate() {
        let existing = vec![episode(5, 1, 2)];
        let candidate = EpisodeKey {
            season: 1,
            episode: 2,
        };
        assert!(!is_duplicate(candidate, &existing, Some(EpisodeId(5))));
    }

    #[test]
    fn test_editing_still_collides_with_other_records() {
        let existing = vec![episode(5, 1, 2), episode(9, 1, 2)];
        let candidate = EpisodeKey {
            season: 1,
            episode: 2,
        };
        assert!(is_duplicate(candidate, &existing, Some(EpisodeId(5))));
    }

    #[test]
    fn test_different_pair_is_not_duplicate() {
        let existing = vec![episode(5, 1, 2)];
        let candidate = EpisodeKey {
            season: 2,
            episode: 2,
        };
        assert!(!is_duplicate(candidate, &existing, None));
    }
}
