use super::super::IntegrationHarness;
use personalitylab::inventory::QuestionBank;
use personalitylab::profiles::{Profile, ProfileRepository, Role, VaultProfileRepository};
use personalitylab::session::TestRun;
use personalitylab::workspace::{Vault, Workspace};

/// Raw answers in standard bank order that max out every domain.
pub const HIGH_EVERYWHERE: [u8; 10] = [5, 1, 5, 5, 5, 1, 5, 1, 1, 1];
/// Raw answers in standard bank order that bottom out every domain.
pub const LOW_EVERYWHERE: [u8; 10] = [1, 5, 1, 1, 1, 5, 1, 5, 5, 5];
/// Every item answered with the scale midpoint.
pub const MIDPOINT: [u8; 10] = [3; 10];

pub struct LabFixture {
    harness: IntegrationHarness,
    pub workspace: Workspace,
    pub vault: Vault,
}

impl LabFixture {
    pub fn new() -> Self {
        let harness = IntegrationHarness::new();
        let workspace = harness.workspace();
        let vault = workspace.active_vault();
        Self {
            harness,
            workspace,
            vault,
        }
    }

    pub fn repository(&self) -> VaultProfileRepository {
        self.workspace.profiles(&self.vault)
    }

    pub fn reopen(&self) -> Workspace {
        self.harness.workspace()
    }

    /// Takes the standard test with `values` and saves the labelled profile.
    pub fn take_test(&self, name: &str, role: Role, values: [u8; 10]) -> Profile {
        let mut run = TestRun::new(QuestionBank::standard());
        for value in values {
            run.answer(value).expect("answer within scale");
        }
        let (profile, _) = run.finish(name, role).expect("completed test");
        self.repository()
            .save_profile(&profile)
            .expect("profile saved");
        profile
    }
}
