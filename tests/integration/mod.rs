use personalitylab::workspace::Workspace;
use std::path::Path;
use tempfile::TempDir;

pub struct IntegrationHarness {
    root: TempDir,
}

impl IntegrationHarness {
    pub fn new() -> Self {
        let root = TempDir::new().expect("failed to create temp workspace");
        Self { root }
    }

    pub fn workspace_path(&self) -> &Path {
        self.root.path()
    }

    pub fn workspace(&self) -> Workspace {
        Workspace::open_at(self.root.path()).expect("failed to open workspace for tests")
    }
}

mod compare_analysis;
mod sharing;
mod test_flow;
mod vault_scopes;
pub mod support;
