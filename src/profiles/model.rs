//! Saved personality profiles.
//!
//! The JSON shape uses camelCase keys so share strings and library exports
//! stay readable by the browser client.

use anyhow::{bail, Result};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::inventory::Domain;
use crate::scoring::{rounded_percentage, DomainScore, Level};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Role {
    #[serde(rename = "Self")]
    Myself,
    Parent,
    Child,
    Partner,
    Friend,
    Other,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Myself => "Self",
            Role::Parent => "Parent",
            Role::Child => "Child",
            Role::Partner => "Partner",
            Role::Friend => "Friend",
            Role::Other => "Other",
        }
    }

    pub fn parse(raw: &str) -> Result<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "self" => Ok(Role::Myself),
            "parent" => Ok(Role::Parent),
            "child" => Ok(Role::Child),
            "partner" => Ok(Role::Partner),
            "friend" => Ok(Role::Friend),
            "other" => Ok(Role::Other),
            other => bail!(
                "Unknown role '{other}'. Expected self/parent/child/partner/friend/other."
            ),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub id: String,
    pub name: String,
    pub role: Role,
    pub scores: Vec<DomainScore>,
    /// Epoch milliseconds.
    pub timestamp: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_demo: Option<bool>,
}

impl Profile {
    /// Creates a profile with a fresh id stamped with the current time.
    pub fn new(name: impl Into<String>, role: Role, scores: Vec<DomainScore>) -> Self {
        Self {
            id: generate_id(),
            name: name.into(),
            role,
            scores,
            timestamp: Utc::now().timestamp_millis(),
            is_demo: None,
        }
    }

    pub fn is_demo(&self) -> bool {
        self.is_demo.unwrap_or(false)
    }

    pub fn score(&self, domain: Domain) -> Option<&DomainScore> {
        self.scores.iter().find(|score| score.domain == domain)
    }

    /// First word of the name, used for compact column labels.
    pub fn short_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or(&self.name)
    }

    /// Checks the record invariants: non-empty id and name, and exactly one
    /// score per domain whose percentage and level follow from
    /// `score / max_score`.
    pub fn validate(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            bail!("Profile id must not be empty");
        }
        if self.name.trim().is_empty() {
            bail!("Profile '{}' has an empty name", self.id);
        }
        if self.scores.len() != Domain::ALL.len() {
            bail!(
                "Profile '{}' must carry {} domain scores, found {}",
                self.id,
                Domain::ALL.len(),
                self.scores.len()
            );
        }
        for domain in Domain::ALL {
            let matches = self.scores.iter().filter(|s| s.domain == domain).count();
            if matches != 1 {
                bail!(
                    "Profile '{}' has {matches} entries for {domain}, expected exactly one",
                    self.id
                );
            }
        }
        for score in &self.scores {
            if score.score > score.max_score || score.percentage > 100 {
                bail!(
                    "Profile '{}' has an out-of-range {} score",
                    self.id,
                    score.domain
                );
            }
            if score.percentage != rounded_percentage(score.score, score.max_score) {
                bail!(
                    "Profile '{}' reports {}% for {} but {}/{} scores {}%",
                    self.id,
                    score.percentage,
                    score.domain,
                    score.score,
                    score.max_score,
                    rounded_percentage(score.score, score.max_score)
                );
            }
            if score.level != expected_level(score) {
                bail!(
                    "Profile '{}' labels {}% {} as {:?}",
                    self.id,
                    score.percentage,
                    score.domain,
                    score.level
                );
            }
        }
        Ok(())
    }
}

/// Unanswered domains (`max_score == 0`) are always `Neutral`.
fn expected_level(score: &DomainScore) -> Level {
    if score.max_score == 0 {
        Level::Neutral
    } else {
        Level::from_percentage(score.percentage)
    }
}

impl AsRef<[DomainScore]> for Profile {
    fn as_ref(&self) -> &[DomainScore] {
        &self.scores
    }
}

pub fn generate_id() -> String {
    Uuid::new_v4().to_string()
}
