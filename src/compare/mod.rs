//! Comparison sessions over a snapshot of the profile library.
//!
//! A `ComparisonSession` reads the repository once, keeps a selection of
//! profile ids, builds the divergence heatmap for that selection and forwards
//! it to a `NarrativePort` on demand. At most one narrative request runs per
//! session.

use serde::Serialize;
use std::sync::atomic::{AtomicBool, Ordering};
use thiserror::Error;
use tracing::{debug, info};

use crate::analysis::{AnalysisError, AnalysisMode, AnalysisResult, ChatMessage, NarrativePort};
use crate::divergence::{build_heatmap, DivergenceError, Heatmap};
use crate::profiles::{Profile, ProfileRepository};

/// Members required before divergence or analysis can run.
pub const MIN_COMPARISON_SIZE: usize = 2;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ComparisonError {
    #[error("select at least 2 profiles to compare, got {selected}")]
    InsufficientProfiles { selected: usize },

    #[error("profile {0} is not part of this comparison")]
    UnknownProfile(String),

    /// A narrative request for this session has not resolved yet.
    #[error("an analysis request is already in flight")]
    AnalysisInFlight,

    #[error(transparent)]
    Divergence(#[from] DivergenceError),

    #[error(transparent)]
    Analysis(#[from] AnalysisError),
}

/// Column header of the heatmap.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct MemberColumn {
    pub id: String,
    pub label: String,
}

/// Heatmap plus the member each column belongs to.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ComparisonMatrix {
    pub members: Vec<MemberColumn>,
    pub heatmap: Heatmap,
}

pub struct ComparisonSession {
    available: Vec<Profile>,
    selected: Vec<String>,
    in_flight: AtomicBool,
}

/// Clears the in-flight flag when the request future completes or is dropped.
struct InFlightGuard<'a>(&'a AtomicBool);

impl<'a> InFlightGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Result<Self, ComparisonError> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map_err(|_| ComparisonError::AnalysisInFlight)?;
        Ok(Self(flag))
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl ComparisonSession {
    /// Snapshots the repository and pre-selects its first two profiles.
    pub fn open<R: ProfileRepository + ?Sized>(repo: &R) -> anyhow::Result<Self> {
        let available = repo.get_profiles()?;
        Ok(Self::from_profiles(available))
    }

    pub fn from_profiles(available: Vec<Profile>) -> Self {
        let selected = available
            .iter()
            .take(MIN_COMPARISON_SIZE)
            .map(|p| p.id.clone())
            .collect();
        debug!(available = available.len(), "opened comparison session");
        Self {
            available,
            selected,
            in_flight: AtomicBool::new(false),
        }
    }

    pub fn available(&self) -> &[Profile] {
        &self.available
    }

    pub fn selected_ids(&self) -> &[String] {
        &self.selected
    }

    /// Replaces the selection. Repeated ids count once.
    pub fn select<I, S>(&mut self, ids: I) -> Result<(), ComparisonError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut selected: Vec<String> = Vec::new();
        for id in ids {
            let id = id.as_ref();
            self.ensure_known(id)?;
            if !selected.iter().any(|s| s == id) {
                selected.push(id.to_string());
            }
        }
        self.selected = selected;
        Ok(())
    }

    /// Adds or removes one profile; returns whether it is now selected.
    pub fn toggle(&mut self, id: &str) -> Result<bool, ComparisonError> {
        self.ensure_known(id)?;
        if let Some(pos) = self.selected.iter().position(|s| s == id) {
            self.selected.remove(pos);
            Ok(false)
        } else {
            self.selected.push(id.to_string());
            Ok(true)
        }
    }

    fn ensure_known(&self, id: &str) -> Result<(), ComparisonError> {
        if self.available.iter().any(|p| p.id == id) {
            Ok(())
        } else {
            Err(ComparisonError::UnknownProfile(id.to_string()))
        }
    }

    /// Selected profiles in selection order.
    pub fn selected_profiles(&self) -> Vec<&Profile> {
        self.selected
            .iter()
            .filter_map(|id| self.available.iter().find(|p| &p.id == id))
            .collect()
    }

    fn comparison_set(&self) -> Result<Vec<Profile>, ComparisonError> {
        let members: Vec<Profile> = self.selected_profiles().into_iter().cloned().collect();
        if members.len() < MIN_COMPARISON_SIZE {
            return Err(ComparisonError::InsufficientProfiles {
                selected: members.len(),
            });
        }
        Ok(members)
    }

    /// Request shape for the current selection.
    pub fn mode(&self) -> Result<AnalysisMode, ComparisonError> {
        let count = self.comparison_set()?.len();
        Ok(AnalysisMode::for_count(count))
    }

    pub fn heatmap(&self) -> Result<ComparisonMatrix, ComparisonError> {
        let members = self.comparison_set()?;
        let heatmap = build_heatmap(&members)?;
        Ok(ComparisonMatrix {
            members: members
                .iter()
                .map(|p| MemberColumn {
                    id: p.id.clone(),
                    label: p.short_name().to_string(),
                })
                .collect(),
            heatmap,
        })
    }

    pub fn is_analyzing(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Sends the selection to the narrative port. Rejected while another
    /// request from this session is outstanding.
    pub async fn analyze<P: NarrativePort + ?Sized>(
        &self,
        port: &P,
    ) -> Result<AnalysisResult, ComparisonError> {
        let members = self.comparison_set()?;
        let _guard = InFlightGuard::acquire(&self.in_flight)?;
        info!(
            members = members.len(),
            mode = ?AnalysisMode::for_count(members.len()),
            "running comparison analysis"
        );
        Ok(port.analyze_profiles(&members).await?)
    }

    pub async fn chat<P: NarrativePort + ?Sized>(
        &self,
        port: &P,
        history: &[ChatMessage],
        message: &str,
    ) -> Result<String, ComparisonError> {
        let members = self.comparison_set()?;
        let _guard = InFlightGuard::acquire(&self.in_flight)?;
        debug!(members = members.len(), turns = history.len(), "sending chat message");
        Ok(port.chat(&members, history, message).await?)
    }
}
