use anyhow::Result;
use personalitylab::divergence::simulate_child_profile;
use personalitylab::orchestration::EventType;
use personalitylab::profiles::{decode_profile, encode_profile, ProfileRepository, Role, ScopeKey};
use personalitylab::scoring::Level;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::support::lab::{LabFixture, HIGH_EVERYWHERE, LOW_EVERYWHERE};

#[test]
fn shared_profile_lands_in_another_vault_with_a_fresh_id() -> Result<()> {
    let fixture = LabFixture::new();
    let original = fixture.take_test("Dana", Role::Myself, HIGH_EVERYWHERE);
    let share = encode_profile(&original)?;

    let friend_vault = fixture
        .workspace
        .vault(ScopeKey::for_email("friend@example.com"));
    let friend_repo = fixture.workspace.profiles(&friend_vault);
    let imported = friend_repo.import_shared(&share)?;

    assert_ne!(imported.id, original.id);
    assert_eq!(imported.name, original.name);
    assert_eq!(imported.scores, original.scores);
    assert_eq!(imported.timestamp, original.timestamp);
    assert_eq!(friend_repo.get_profiles()?, vec![imported.clone()]);

    let events = friend_repo.events().load()?;
    let kinds: Vec<_> = events.iter().map(|e| e.event_type).collect();
    assert_eq!(kinds, [EventType::ProfileSaved, EventType::ProfileImported]);
    Ok(())
}

#[test]
fn broken_share_strings_change_nothing() -> Result<()> {
    let fixture = LabFixture::new();
    let repo = fixture.repository();
    assert!(repo.import_shared("not base64 at all!").is_err());
    // Valid base64, but not a profile.
    assert!(decode_profile("eyJmb28iOiAxfQ==").is_err());
    assert!(repo.saved_profiles()?.is_empty());
    assert!(repo.events().load()?.is_empty());
    Ok(())
}

#[test]
fn library_export_restores_into_a_new_vault() -> Result<()> {
    let fixture = LabFixture::new();
    let repo = fixture.repository();
    assert_eq!(repo.export_library()?, None);

    fixture.take_test("Avery", Role::Parent, HIGH_EVERYWHERE);
    fixture.take_test("Blake", Role::Child, LOW_EVERYWHERE);
    let export = repo.export_library()?.expect("library has profiles");

    let backup = fixture
        .workspace
        .vault(ScopeKey::for_email("backup@example.com"));
    let restored_repo = fixture.workspace.profiles(&backup);
    assert_eq!(restored_repo.import_library(&export)?, 2);
    assert_eq!(restored_repo.get_profiles()?, repo.get_profiles()?);

    assert!(restored_repo.import_library("{\"id\": \"x\"}").is_err());
    assert_eq!(restored_repo.saved_profiles()?.len(), 2);
    Ok(())
}

#[test]
fn simulated_child_can_join_the_library() -> Result<()> {
    let fixture = LabFixture::new();
    let parent = fixture.take_test("Jamie", Role::Parent, HIGH_EVERYWHERE);

    let mut rng = StdRng::seed_from_u64(7);
    let child = simulate_child_profile(&parent, &mut rng);
    assert_eq!(child.role, Role::Child);
    assert_eq!(child.name, "Simulated child of Jamie");
    for score in &child.scores {
        // High parents pull the baseline down to 30, so at most 49 after noise.
        assert!((10..=50).contains(&score.percentage), "{score:?}");
        assert_eq!(score.level, Level::from_percentage(score.percentage));
    }

    fixture.repository().save_profile(&child)?;
    let library = fixture.repository().get_profiles()?;
    assert_eq!(library.len(), 2);
    assert_eq!(library[1].id, child.id);
    Ok(())
}
