//! Profile divergence math.
//!
//! Everything here works on slices of `DomainScore` and only reads the
//! `percentage` field. Missing domain entries count as 0%.

pub mod offspring;

use serde::Serialize;
use thiserror::Error;

use crate::inventory::Domain;
use crate::scoring::{percentage_for, DomainScore};

pub use offspring::{simulate_child_profile, simulate_derived_scores};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DivergenceError {
    #[error("group divergence needs at least 2 profiles, got {count}")]
    InsufficientProfiles { count: usize },
}

/// Absolute distance between two percentages for the same domain.
pub fn gap(a: u8, b: u8) -> u8 {
    a.abs_diff(b)
}

/// Severity bucket for an average gap.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum DivergenceTier {
    Harmonious,
    Minor,
    Significant,
    Severe,
}

impl DivergenceTier {
    /// `> 60` severe, `> 40` significant, `> 20` minor, otherwise harmonious.
    pub fn from_gap(gap: f64) -> Self {
        if gap > 60.0 {
            DivergenceTier::Severe
        } else if gap > 40.0 {
            DivergenceTier::Significant
        } else if gap > 20.0 {
            DivergenceTier::Minor
        } else {
            DivergenceTier::Harmonious
        }
    }

    /// Legend label used by the heatmap.
    pub fn label(self) -> &'static str {
        match self {
            DivergenceTier::Harmonious => "Harmony",
            DivergenceTier::Minor => "Friction",
            DivergenceTier::Significant => "Conflict",
            DivergenceTier::Severe => "Clashing",
        }
    }
}

/// Mean pairwise gap of every member against all *other* members on one
/// domain. Result `i` belongs to `members[i]`.
///
/// Members are distinguished by position, so the same profile passed twice
/// is compared against itself like any other member.
pub fn group_divergence<S: AsRef<[DomainScore]>>(
    members: &[S],
    domain: Domain,
) -> Result<Vec<f64>, DivergenceError> {
    if members.len() < 2 {
        return Err(DivergenceError::InsufficientProfiles {
            count: members.len(),
        });
    }
    let percentages: Vec<u8> = members
        .iter()
        .map(|m| percentage_for(m.as_ref(), domain))
        .collect();
    let others = (percentages.len() - 1) as f64;

    Ok(percentages
        .iter()
        .enumerate()
        .map(|(i, own)| {
            let total: u32 = percentages
                .iter()
                .enumerate()
                .filter(|(j, _)| *j != i)
                .map(|(_, other)| u32::from(gap(*own, *other)))
                .sum();
            f64::from(total) / others
        })
        .collect())
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct HeatmapCell {
    pub avg_gap: f64,
    pub tier: DivergenceTier,
}

impl HeatmapCell {
    fn new(avg_gap: f64) -> Self {
        Self {
            avg_gap,
            tier: DivergenceTier::from_gap(avg_gap),
        }
    }

    /// Rounded value shown inside the cell.
    pub fn display_value(&self) -> u8 {
        self.avg_gap.round() as u8
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct HeatmapRow {
    pub domain: Domain,
    pub cells: Vec<HeatmapCell>,
}

/// Domain-by-member divergence matrix; rows follow canonical domain order
/// and cells follow the member order passed to `build_heatmap`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Heatmap {
    pub rows: Vec<HeatmapRow>,
}

impl Heatmap {
    pub fn row(&self, domain: Domain) -> Option<&HeatmapRow> {
        self.rows.iter().find(|row| row.domain == domain)
    }

    pub fn cell(&self, domain: Domain, member: usize) -> Option<&HeatmapCell> {
        self.row(domain).and_then(|row| row.cells.get(member))
    }

    /// Highest-severity cell in the matrix, if any.
    pub fn worst(&self) -> Option<(Domain, usize, &HeatmapCell)> {
        self.rows
            .iter()
            .flat_map(|row| {
                row.cells
                    .iter()
                    .enumerate()
                    .map(move |(idx, cell)| (row.domain, idx, cell))
            })
            .max_by(|a, b| a.2.avg_gap.total_cmp(&b.2.avg_gap))
    }
}

pub fn build_heatmap<S: AsRef<[DomainScore]>>(members: &[S]) -> Result<Heatmap, DivergenceError> {
    let rows = Domain::ALL
        .iter()
        .map(|domain| {
            let cells = group_divergence(members, *domain)?
                .into_iter()
                .map(HeatmapCell::new)
                .collect();
            Ok(HeatmapRow {
                domain: *domain,
                cells,
            })
        })
        .collect::<Result<Vec<_>, DivergenceError>>()?;
    Ok(Heatmap { rows })
}
