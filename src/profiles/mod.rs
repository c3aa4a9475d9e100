//! Saved profiles and the repository port that owns them.

pub mod codec;
pub mod demo;
pub mod model;
pub mod repository;
pub mod scope;
pub mod storage;

pub use codec::{decode_profile, encode_profile, import_shared_profile};
pub use demo::demo_profiles;
pub use model::{generate_id, Profile, Role};
pub use repository::{MemoryProfileRepository, ProfileRepository, VaultProfileRepository};
pub use scope::{is_vault_key, vault_key, ScopeKey};
