use serde::{Deserialize, Serialize};
use std::fmt;

use super::storage::compute_hash;

const GUEST_SLUG: &str = "guest";

/// Partition key for vault storage.
///
/// Signed-in users get a vault keyed by a hash of their normalized email;
/// everyone else shares the guest vault. This is a namespacing device only.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScopeKey {
    Guest,
    Vault(String),
}

impl ScopeKey {
    pub fn for_email(email: &str) -> Self {
        ScopeKey::Vault(vault_key(email))
    }

    /// Directory-safe identifier for this scope.
    pub fn slug(&self) -> &str {
        match self {
            ScopeKey::Guest => GUEST_SLUG,
            ScopeKey::Vault(key) => key,
        }
    }

    /// Prefixes a storage key with this scope, e.g. `guest_profiles`.
    pub fn storage_key(&self, base: &str) -> String {
        format!("{}_{}", self.slug(), base)
    }

    pub fn is_guest(&self) -> bool {
        matches!(self, ScopeKey::Guest)
    }
}

impl fmt::Display for ScopeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

/// SHA-256 hex of the trimmed, lowercased email.
pub fn vault_key(email: &str) -> String {
    compute_hash(email.trim().to_lowercase().as_bytes())
}

/// True for keys shaped like `vault_key` output: 64 lowercase hex digits.
pub fn is_vault_key(key: &str) -> bool {
    key.len() == 64 && key.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
}
