//! Client-side sign-in stub.
//!
//! "Logging in" only records which vault to use. There is no password and no
//! verification; the stored session is a convenience, not a boundary.

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::path::PathBuf;

use crate::orchestration::{EventLog, EventType};
use crate::profiles::storage::{read_json_lenient, remove_file, write_json};
use crate::profiles::{is_vault_key, vault_key, ScopeKey};
use crate::workspace::{Vault, VaultLayout};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserSession {
    pub email: String,
    pub name: String,
    /// Hash of the normalized email used to partition storage.
    pub vault_key: String,
}

impl UserSession {
    /// Vault scope of this session. A stored key that is not a 64-digit
    /// lowercase hex hash falls back to the guest vault.
    pub fn scope(&self) -> ScopeKey {
        if is_vault_key(&self.vault_key) {
            ScopeKey::Vault(self.vault_key.clone())
        } else {
            tracing::warn!(vault = %self.vault_key, "ignoring malformed vault key");
            ScopeKey::Guest
        }
    }
}

pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn login(&self, email: &str, name: &str) -> Result<UserSession> {
        if email.trim().is_empty() {
            bail!("An email address is required to sign in");
        }
        let session = UserSession {
            email: email.trim().to_string(),
            name: name.trim().to_string(),
            vault_key: vault_key(email),
        };
        write_json(&self.path, &session)?;
        self.audit(&session, EventType::SessionStarted)?;
        tracing::info!(vault = %session.vault_key, "session started");
        Ok(session)
    }

    /// Current session; a missing or corrupt session file reads as signed out.
    pub fn current(&self) -> Option<UserSession> {
        read_json_lenient(&self.path)
    }

    pub fn is_authenticated(&self) -> bool {
        self.current().is_some()
    }

    pub fn logout(&self) -> Result<()> {
        if let Some(session) = self.current() {
            self.audit(&session, EventType::SessionEnded)?;
        }
        remove_file(&self.path)
    }

    pub fn scope(&self) -> ScopeKey {
        self.current()
            .map(|session| session.scope())
            .unwrap_or(ScopeKey::Guest)
    }

    fn audit(&self, session: &UserSession, event_type: EventType) -> Result<()> {
        let Some(root) = self.path.parent() else {
            return Ok(());
        };
        let scope = session.scope();
        let vault = Vault {
            layout: VaultLayout::new(
                crate::workspace::layout::vaults_dir(root).join(scope.slug()),
            ),
            scope,
        };
        EventLog::for_vault(&vault).record(event_type, json!({ "name": session.name }))?;
        Ok(())
    }
}
