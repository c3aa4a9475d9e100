//! Shared filesystem layout helpers.
//!
//! Every vault artifact lives under `<root>/vaults/<scope slug>/`.
//! Centralizing the file names here avoids duplicating string constants
//! across the repository, session, and event-log modules.

use std::path::{Path, PathBuf};

/// Directory (under the workspace root) holding one folder per scope.
pub const VAULTS_SUBDIR: &str = "vaults";
/// File storing the signed-in session stub.
pub const SESSION_FILE: &str = "session.json";
pub const PROFILES_FILE: &str = "profiles.json";
pub const PROGRESS_FILE: &str = "progress.json";
pub const LAST_RESULT_FILE: &str = "last_result.json";
pub const EVENTS_FILE: &str = "events.jsonl";

/// Paths for a single vault directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VaultLayout {
    pub dir: PathBuf,
    pub profiles: PathBuf,
    pub progress: PathBuf,
    pub last_result: PathBuf,
    pub events: PathBuf,
}

impl VaultLayout {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        Self {
            profiles: dir.join(PROFILES_FILE),
            progress: dir.join(PROGRESS_FILE),
            last_result: dir.join(LAST_RESULT_FILE),
            events: dir.join(EVENTS_FILE),
            dir,
        }
    }
}

pub fn vaults_dir(root: &Path) -> PathBuf {
    root.join(VAULTS_SUBDIR)
}

pub fn session_path(root: &Path) -> PathBuf {
    root.join(SESSION_FILE)
}
