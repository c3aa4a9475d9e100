use anyhow::Result;
use personalitylab::orchestration::EventType;
use personalitylab::inventory::QuestionBank;
use personalitylab::profiles::{vault_key, Profile, ProfileRepository, Role, ScopeKey};
use personalitylab::scoring::{calculate_scores, Answer};
use personalitylab::workspace::Workspace;

use crate::support::lab::{LabFixture, MIDPOINT};
use crate::IntegrationHarness;

#[test]
fn guest_and_user_libraries_are_isolated() -> Result<()> {
    let fixture = LabFixture::new();
    assert_eq!(fixture.vault.scope, ScopeKey::Guest);
    fixture.take_test("Guest Pat", Role::Myself, MIDPOINT);

    let sessions = fixture.workspace.sessions();
    let session = sessions.login(" Pat@Example.COM ", "Pat")?;
    assert_eq!(session.vault_key, vault_key("pat@example.com"));

    let user_vault = fixture.workspace.active_vault();
    assert_eq!(user_vault.scope, ScopeKey::Vault(session.vault_key.clone()));
    let user_repo = fixture.workspace.profiles(&user_vault);
    // Fresh user vaults show the demo pair until something is saved.
    assert!(user_repo.get_profiles()?.iter().all(|p| p.is_demo()));
    assert!(user_repo.saved_profiles()?.is_empty());

    sessions.logout()?;
    assert_eq!(fixture.workspace.active_vault().scope, ScopeKey::Guest);
    let guest = fixture.repository().get_profiles()?;
    assert_eq!(guest.len(), 1);
    assert_eq!(guest[0].name, "Guest Pat");

    let kinds: Vec<_> = user_repo
        .events()
        .load()?
        .into_iter()
        .map(|e| e.event_type)
        .collect();
    assert_eq!(kinds, [EventType::SessionStarted, EventType::SessionEnded]);
    Ok(())
}

#[test]
fn same_email_reaches_the_same_vault_after_restart() -> Result<()> {
    let harness = IntegrationHarness::new();
    let first = harness.workspace();
    first.sessions().login("sky@example.com", "Sky")?;
    let vault = first.active_vault();
    let sky = Profile::new("Sky", Role::Myself, calculate_scores(&midpoint_answers()));
    first.profiles(&vault).save_profile(&sky)?;
    first.sessions().logout()?;

    let reopened = Workspace::open_at(harness.workspace_path())?;
    assert_eq!(reopened.active_vault().scope, ScopeKey::Guest);
    reopened.sessions().login("SKY@example.com", "Sky")?;
    let again = reopened.profiles(&reopened.active_vault()).get_profiles()?;
    assert_eq!(again, vec![sky]);
    Ok(())
}

#[test]
fn disabling_demos_leaves_empty_libraries_empty() -> Result<()> {
    let harness = IntegrationHarness::new();
    let mut workspace = harness.workspace();
    workspace.config.library.include_demos = false;
    workspace.save_config()?;

    let reopened = harness.workspace();
    let vault = reopened.active_vault();
    assert!(reopened.profiles(&vault).get_profiles()?.is_empty());
    Ok(())
}

fn midpoint_answers() -> Vec<Answer> {
    QuestionBank::standard()
        .questions()
        .iter()
        .zip(MIDPOINT)
        .map(|(question, value)| Answer::new(question.id.clone(), value))
        .collect()
}
