use crate::inventory::Domain;
use crate::scoring::{DomainScore, Level};

use super::model::{Profile, Role};

/// Seeded profiles reported by an empty library so the comparison view has
/// something to show. Never persisted.
pub fn demo_profiles() -> Vec<Profile> {
    vec![
        demo(
            "demo-1",
            "Alex (The Architect)",
            1_700_000_000_000,
            [(28, 93), (27, 90), (12, 40), (15, 50), (10, 33)],
        ),
        demo(
            "demo-2",
            "Jordan (The Free Spirit)",
            1_700_000_000_001,
            [(29, 97), (8, 27), (26, 87), (24, 80), (18, 60)],
        ),
    ]
}

fn demo(id: &str, name: &str, timestamp: i64, scores: [(u32, u8); 5]) -> Profile {
    Profile {
        id: id.into(),
        name: name.into(),
        role: Role::Other,
        scores: Domain::ALL
            .iter()
            .zip(scores)
            .map(|(domain, (score, percentage))| DomainScore {
                domain: *domain,
                score,
                max_score: 30,
                percentage,
                level: Level::from_percentage(percentage),
                facets: Vec::new(),
            })
            .collect(),
        timestamp,
        is_demo: Some(true),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::rounded_percentage;

    #[test]
    fn demo_profiles_are_valid_and_flagged() {
        let demos = demo_profiles();
        assert_eq!(demos.len(), 2);
        for profile in &demos {
            assert!(profile.is_demo());
            profile.validate().unwrap();
        }
        let jordan = &demos[1];
        assert_eq!(jordan.score(Domain::Neuroticism).unwrap().level, Level::Neutral);
        assert_eq!(jordan.score(Domain::Conscientiousness).unwrap().level, Level::Low);
    }

    #[test]
    fn demo_percentages_follow_their_scores() {
        for profile in demo_profiles() {
            for score in &profile.scores {
                assert_eq!(
                    rounded_percentage(score.score, score.max_score),
                    score.percentage,
                    "{} / {}",
                    profile.name,
                    score.domain
                );
            }
        }
    }
}
