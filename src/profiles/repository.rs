//! Profile persistence port and its implementations.

use anyhow::{bail, Context, Result};
use serde_json::json;
use std::cell::RefCell;
use std::collections::HashSet;

use crate::orchestration::{EventLog, EventType};
use crate::workspace::Vault;

use super::demo::demo_profiles;
use super::model::Profile;
use super::storage::{read_json, write_json};

/// Keyed persistence of `Profile` records.
///
/// `get_profiles` returns insertion order. Saving an existing id replaces the
/// record and moves it to the end.
pub trait ProfileRepository {
    fn get_profiles(&self) -> Result<Vec<Profile>>;

    fn save_profile(&self, profile: &Profile) -> Result<()>;

    fn get_profile_by_id(&self, id: &str) -> Result<Option<Profile>> {
        Ok(self.get_profiles()?.into_iter().find(|p| p.id == id))
    }

    /// Removes a saved profile; returns whether anything was removed.
    fn delete_profile(&self, id: &str) -> Result<bool>;
}

fn upsert(profiles: &mut Vec<Profile>, profile: &Profile) {
    profiles.retain(|p| p.id != profile.id);
    profiles.push(profile.clone());
}

/// File-backed repository storing one JSON array per vault.
pub struct VaultProfileRepository {
    vault: Vault,
    include_demos: bool,
    events: EventLog,
}

impl VaultProfileRepository {
    pub fn new(vault: Vault, include_demos: bool) -> Self {
        let events = EventLog::for_vault(&vault);
        Self {
            vault,
            include_demos,
            events,
        }
    }

    pub fn vault(&self) -> &Vault {
        &self.vault
    }

    /// Profiles actually written to disk, without demo seeding.
    pub fn saved_profiles(&self) -> Result<Vec<Profile>> {
        Ok(read_json(&self.vault.layout.profiles)?.unwrap_or_default())
    }

    fn write_all(&self, profiles: &[Profile]) -> Result<()> {
        write_json(&self.vault.layout.profiles, &profiles)
    }

    /// Serialized library for backup, or `None` when nothing is saved.
    pub fn export_library(&self) -> Result<Option<String>> {
        let saved = self.saved_profiles()?;
        if saved.is_empty() {
            return Ok(None);
        }
        Ok(Some(serde_json::to_string_pretty(&saved)?))
    }

    /// Replaces the vault library with a previously exported JSON array.
    pub fn import_library(&self, json: &str) -> Result<usize> {
        let value: serde_json::Value =
            serde_json::from_str(json).context("Library import is not valid JSON")?;
        if !value.is_array() {
            bail!("Library import must be a JSON array of profiles");
        }
        let profiles: Vec<Profile> =
            serde_json::from_value(value).context("Library import contains malformed profiles")?;
        let mut seen = HashSet::new();
        for profile in &profiles {
            profile.validate()?;
            if !seen.insert(profile.id.as_str()) {
                bail!("Library import repeats profile id '{}'", profile.id);
            }
        }
        self.write_all(&profiles)?;
        self.audit(
            EventType::LibraryImported,
            json!({ "profile_count": profiles.len() }),
        );
        tracing::info!(vault = %self.vault.scope, count = profiles.len(), "library imported");
        Ok(profiles.len())
    }

    /// Audit trail of this vault.
    pub fn events(&self) -> &EventLog {
        &self.events
    }

    /// Appends to the audit trail after a mutation has been written. A failed
    /// append is logged and does not undo or fail the mutation.
    pub(crate) fn audit(&self, event_type: EventType, details: serde_json::Value) {
        if let Err(err) = self.events.record(event_type, details) {
            tracing::warn!(
                vault = %self.vault.scope,
                event = ?event_type,
                error = %err,
                "failed to append vault event"
            );
        }
    }
}

impl ProfileRepository for VaultProfileRepository {
    fn get_profiles(&self) -> Result<Vec<Profile>> {
        let saved = self.saved_profiles()?;
        if self.include_demos && saved.is_empty() {
            return Ok(demo_profiles());
        }
        Ok(saved)
    }

    fn save_profile(&self, profile: &Profile) -> Result<()> {
        profile.validate()?;
        let mut saved = self.saved_profiles()?;
        upsert(&mut saved, profile);
        self.write_all(&saved)?;
        self.audit(
            EventType::ProfileSaved,
            json!({ "profile_id": profile.id, "role": profile.role }),
        );
        tracing::debug!(vault = %self.vault.scope, profile_id = %profile.id, "profile saved");
        Ok(())
    }

    fn delete_profile(&self, id: &str) -> Result<bool> {
        let mut saved = self.saved_profiles()?;
        let before = saved.len();
        saved.retain(|p| p.id != id);
        if saved.len() == before {
            return Ok(false);
        }
        self.write_all(&saved)?;
        self.audit(EventType::ProfileDeleted, json!({ "profile_id": id }));
        Ok(true)
    }
}

/// In-process repository; useful for embedding and tests.
#[derive(Default)]
pub struct MemoryProfileRepository {
    profiles: RefCell<Vec<Profile>>,
    include_demos: bool,
}

impl MemoryProfileRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_demos() -> Self {
        Self {
            profiles: RefCell::new(Vec::new()),
            include_demos: true,
        }
    }

    pub fn with_profiles(profiles: Vec<Profile>) -> Self {
        Self {
            profiles: RefCell::new(profiles),
            include_demos: false,
        }
    }
}

impl ProfileRepository for MemoryProfileRepository {
    fn get_profiles(&self) -> Result<Vec<Profile>> {
        let profiles = self.profiles.borrow();
        if self.include_demos && profiles.is_empty() {
            return Ok(demo_profiles());
        }
        Ok(profiles.clone())
    }

    fn save_profile(&self, profile: &Profile) -> Result<()> {
        profile.validate()?;
        upsert(&mut self.profiles.borrow_mut(), profile);
        Ok(())
    }

    fn delete_profile(&self, id: &str) -> Result<bool> {
        let mut profiles = self.profiles.borrow_mut();
        let before = profiles.len();
        profiles.retain(|p| p.id != id);
        Ok(profiles.len() != before)
    }
}
