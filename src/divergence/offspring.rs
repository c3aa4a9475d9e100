//! Simulated child profile.
//!
//! Each trait is seeded from the inverse of the parent's extremity and then
//! jittered, so results differ between calls unless the caller passes a
//! seeded random source.

use chrono::Utc;
use rand::Rng;
use uuid::Uuid;

use crate::profiles::{Profile, Role};
use crate::scoring::{DomainScore, Level};

pub const MIN_SIMULATED_PERCENTAGE: f64 = 5.0;
pub const MAX_SIMULATED_PERCENTAGE: f64 = 95.0;
/// Half-width of the uniform jitter applied to the baseline.
pub const JITTER: f64 = 20.0;
/// Simulated scores are expressed out of 100 so `score == percentage`.
pub const SIMULATED_MAX_SCORE: u32 = 100;

fn baseline(level: Level) -> f64 {
    match level {
        Level::High => 30.0,
        Level::Low => 70.0,
        Level::Neutral => 50.0,
    }
}

/// Derives a new score set from `source`, one entry per source domain.
pub fn simulate_derived_scores<R: Rng>(
    source: &[DomainScore],
    rng: &mut R,
) -> Vec<DomainScore> {
    source
        .iter()
        .map(|parent| {
            let offset = rng.gen_range(-JITTER..JITTER);
            let percentage = (baseline(parent.level) + offset)
                .round()
                .clamp(MIN_SIMULATED_PERCENTAGE, MAX_SIMULATED_PERCENTAGE)
                as u8;
            DomainScore {
                domain: parent.domain,
                score: u32::from(percentage),
                max_score: SIMULATED_MAX_SCORE,
                percentage,
                level: Level::from_percentage(percentage),
                facets: Vec::new(),
            }
        })
        .collect()
}

/// Wraps `simulate_derived_scores` into a standalone `Child` profile.
pub fn simulate_child_profile<R: Rng>(parent: &Profile, rng: &mut R) -> Profile {
    Profile {
        id: Uuid::new_v4().to_string(),
        name: format!("Simulated child of {}", parent.name),
        role: Role::Child,
        scores: simulate_derived_scores(&parent.scores, rng),
        timestamp: Utc::now().timestamp_millis(),
        is_demo: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::Domain;
    use crate::profiles::demo_profiles;
    use crate::scoring::rounded_percentage;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn seeded_rng_is_reproducible() {
        let parent = &demo_profiles()[0];
        let first = simulate_derived_scores(&parent.scores, &mut StdRng::seed_from_u64(7));
        let second = simulate_derived_scores(&parent.scores, &mut StdRng::seed_from_u64(7));
        assert_eq!(first, second);
    }

    #[test]
    fn percentages_are_clamped_and_levels_rederived() {
        let mut rng = StdRng::seed_from_u64(42);
        for parent in demo_profiles() {
            for _ in 0..200 {
                let child = simulate_derived_scores(&parent.scores, &mut rng);
                assert_eq!(child.len(), parent.scores.len());
                for score in child {
                    assert!((5..=95).contains(&score.percentage));
                    assert_eq!(score.level, Level::from_percentage(score.percentage));
                    assert!(score.score <= score.max_score);
                }
            }
        }
    }

    #[test]
    fn results_stay_near_the_inverted_baseline() {
        let mut rng = StdRng::seed_from_u64(3);
        let high = DomainScore::from_sum(Domain::Openness, 30, 6);
        let low = DomainScore::from_sum(Domain::Neuroticism, 6, 6);
        assert_eq!(high.level, Level::High);
        assert_eq!(low.level, Level::Low);
        for _ in 0..200 {
            let child = simulate_derived_scores(&[high.clone(), low.clone()], &mut rng);
            // High parents seed at 30 so never exceed 50; Low parents seed at 70.
            assert!(child[0].percentage <= 50);
            assert!(child[1].percentage >= 50);
        }
    }

    #[test]
    fn simulated_scores_keep_percentage_consistent() {
        let mut rng = StdRng::seed_from_u64(11);
        let parent = DomainScore::from_sum(Domain::Openness, 10, 2);
        for _ in 0..200 {
            let child = simulate_derived_scores(std::slice::from_ref(&parent), &mut rng);
            let score = &child[0];
            assert_eq!(score.max_score, SIMULATED_MAX_SCORE);
            assert_eq!(
                rounded_percentage(score.score, score.max_score),
                score.percentage
            );
        }
    }

    #[test]
    fn child_profile_is_tagged_and_complete() {
        let parent = &demo_profiles()[1];
        let child = simulate_child_profile(parent, &mut StdRng::seed_from_u64(1));
        assert_eq!(child.role, Role::Child);
        assert_ne!(child.id, parent.id);
        assert!(child.name.contains(&parent.name));
        assert!(child.validate().is_ok());
    }
}
