//! Append-only audit log of vault mutations.
//!
//! Each vault keeps an `events.jsonl` file with one `VaultEvent` per line.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::PathBuf;
use uuid::Uuid;

use crate::workspace::Vault;

/// Type of vault events that can be logged.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    ProfileSaved,
    ProfileDeleted,
    ProfileImported,
    LibraryImported,
    SessionStarted,
    SessionEnded,
}

/// One audit record stored as a JSONL line.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VaultEvent {
    pub event_id: Uuid,
    pub vault: String,
    pub event_type: EventType,
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub details: serde_json::Value,
}

/// Wraps the event log path for a vault.
#[derive(Debug, Clone)]
pub struct EventLog {
    vault: String,
    events_path: PathBuf,
}

impl EventLog {
    pub fn for_vault(vault: &Vault) -> Self {
        Self {
            vault: vault.scope.slug().to_string(),
            events_path: vault.layout.events.clone(),
        }
    }

    /// Appends a new event and returns its id.
    pub fn record(&self, event_type: EventType, details: serde_json::Value) -> Result<Uuid> {
        let event = VaultEvent {
            event_id: Uuid::new_v4(),
            vault: self.vault.clone(),
            event_type,
            timestamp: Utc::now(),
            details,
        };
        self.append_event(&event)?;
        Ok(event.event_id)
    }

    pub fn append_event(&self, event: &VaultEvent) -> Result<()> {
        if let Some(parent) = self.events_path.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut file = fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.events_path)
            .with_context(|| format!("Failed to open event log {:?}", self.events_path))?;
        file.write_all(serde_json::to_string(event)?.as_bytes())?;
        file.write_all(b"\n")?;
        Ok(())
    }

    pub fn load(&self) -> Result<Vec<VaultEvent>> {
        if !self.events_path.exists() {
            return Ok(Vec::new());
        }
        let data = fs::read_to_string(&self.events_path)
            .with_context(|| format!("Failed to read event log {:?}", self.events_path))?;
        let mut events = Vec::new();
        for line in data.lines().filter(|l| !l.trim().is_empty()) {
            let event: VaultEvent = serde_json::from_str(line)?;
            events.push(event);
        }
        Ok(events)
    }
}
