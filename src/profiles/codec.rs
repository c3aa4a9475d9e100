//! Portable share strings for single profiles.
//!
//! A share string is standard base64 over the profile's UTF-8 JSON.

use anyhow::{Context, Result};
use base64::{engine::general_purpose, Engine as _};
use serde_json::json;

use crate::orchestration::EventType;

use super::model::{generate_id, Profile};
use super::repository::{ProfileRepository, VaultProfileRepository};

pub fn encode_profile(profile: &Profile) -> Result<String> {
    let json = serde_json::to_vec(profile).context("Failed serializing profile for sharing")?;
    Ok(general_purpose::STANDARD.encode(json))
}

/// Decodes a share string. The decoded profile always gets a fresh id so an
/// import never overwrites an existing record.
pub fn decode_profile(encoded: &str) -> Result<Profile> {
    let bytes = general_purpose::STANDARD
        .decode(encoded.trim())
        .context("Share string is not valid base64")?;
    let mut profile: Profile =
        serde_json::from_slice(&bytes).context("Share string does not contain a profile")?;
    profile.id = generate_id();
    profile.validate()?;
    Ok(profile)
}

/// Decodes a share string and saves the result.
pub fn import_shared_profile<R: ProfileRepository + ?Sized>(
    repo: &R,
    encoded: &str,
) -> Result<Profile> {
    let profile = decode_profile(encoded)?;
    repo.save_profile(&profile)?;
    Ok(profile)
}

impl VaultProfileRepository {
    /// Imports a share string and records it in the vault audit log.
    pub fn import_shared(&self, encoded: &str) -> Result<Profile> {
        let profile = import_shared_profile(self, encoded)?;
        self.audit(
            EventType::ProfileImported,
            json!({ "profile_id": profile.id, "name": profile.name }),
        );
        Ok(profile)
    }
}
