mod config;
pub mod layout;

pub use config::{
    config_file_path, load_or_default, save, workspace_root, AiSettings, AppConfig,
    LibrarySettings, API_KEY_ENV, CONFIG_FILE_NAME, HOME_ENV,
};
pub use layout::VaultLayout;

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::profiles::{ScopeKey, VaultProfileRepository};
use crate::session::{ProgressStore, SessionStore};

/// A scope's storage directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vault {
    pub scope: ScopeKey,
    pub layout: VaultLayout,
}

impl Vault {
    pub fn dir(&self) -> &Path {
        &self.layout.dir
    }
}

/// Owns the workspace root and configuration; hands out vault handles.
pub struct Workspace {
    pub root: PathBuf,
    pub config: AppConfig,
}

impl Workspace {
    /// Opens the workspace at the resolved default root.
    pub fn open() -> Result<Self> {
        Self::open_at(workspace_root()?)
    }

    /// Opens (and creates if needed) a workspace at an explicit root.
    pub fn open_at(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        let vaults = layout::vaults_dir(&root);
        fs::create_dir_all(&vaults)
            .with_context(|| format!("Failed to create vault directory {:?}", vaults))?;
        let config = load_or_default(&root)?;
        tracing::debug!(root = %root.display(), "opened workspace");
        Ok(Self { root, config })
    }

    pub fn save_config(&self) -> Result<PathBuf> {
        save(&self.root, &self.config)
    }

    pub fn sessions(&self) -> SessionStore {
        SessionStore::new(layout::session_path(&self.root))
    }

    /// Vault for the currently signed-in user, or the guest vault.
    pub fn active_vault(&self) -> Vault {
        self.vault(self.sessions().scope())
    }

    pub fn vault(&self, scope: ScopeKey) -> Vault {
        let dir = layout::vaults_dir(&self.root).join(scope.slug());
        Vault {
            scope,
            layout: VaultLayout::new(dir),
        }
    }

    pub fn profiles(&self, vault: &Vault) -> VaultProfileRepository {
        VaultProfileRepository::new(vault.clone(), self.config.library.include_demos)
    }

    pub fn progress(&self, vault: &Vault) -> ProgressStore {
        ProgressStore::new(vault.clone())
    }
}
