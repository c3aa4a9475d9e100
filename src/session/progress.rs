use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::profiles::storage::{read_json_lenient, remove_file, write_json};
use crate::scoring::{Answer, DomainScore};
use crate::workspace::Vault;

/// Resumable position in an unfinished test.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct TestProgress {
    pub idx: usize,
    pub answers: Vec<Answer>,
}

/// Snapshot of the most recently completed test.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TestResult {
    pub answers: Vec<Answer>,
    pub scores: Vec<DomainScore>,
    pub timestamp: i64,
    pub person_name: String,
}

/// Per-vault storage for in-progress tests and the last result.
pub struct ProgressStore {
    vault: Vault,
}

impl ProgressStore {
    pub fn new(vault: Vault) -> Self {
        Self { vault }
    }

    pub fn save_progress(&self, progress: &TestProgress) -> Result<()> {
        write_json(&self.vault.layout.progress, progress)
    }

    pub fn progress(&self) -> Option<TestProgress> {
        read_json_lenient(&self.vault.layout.progress)
    }

    pub fn clear_progress(&self) -> Result<()> {
        remove_file(&self.vault.layout.progress)
    }

    pub fn save_last_result(&self, result: &TestResult) -> Result<()> {
        write_json(&self.vault.layout.last_result, result)
    }

    pub fn last_result(&self) -> Option<TestResult> {
        read_json_lenient(&self.vault.layout.last_result)
    }
}
