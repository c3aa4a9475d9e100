//! Request shaping for the narrative model.

use serde::Serialize;
use serde_json::{json, Value};

use crate::inventory::Domain;
use crate::profiles::{Profile, Role};
use crate::scoring::Level;

/// Two profiles get a dyad analysis; more get group insights as well.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisMode {
    Dyadic,
    Group,
}

impl AnalysisMode {
    pub fn for_count(count: usize) -> Self {
        if count > 2 {
            AnalysisMode::Group
        } else {
            AnalysisMode::Dyadic
        }
    }
}

#[derive(Debug, Serialize)]
struct ScoreSummary {
    d: Domain,
    p: u8,
    l: Level,
}

#[derive(Debug, Serialize)]
struct ProfileSummary<'a> {
    name: &'a str,
    role: Role,
    scores: Vec<ScoreSummary>,
}

fn summarize(profiles: &[Profile]) -> Vec<ProfileSummary<'_>> {
    profiles
        .iter()
        .map(|p| ProfileSummary {
            name: &p.name,
            role: p.role,
            scores: p
                .scores
                .iter()
                .map(|s| ScoreSummary {
                    d: s.domain,
                    p: s.percentage,
                    l: s.level,
                })
                .collect(),
        })
        .collect()
}

pub fn build_analysis_prompt(profiles: &[Profile]) -> String {
    let summary = serde_json::to_string_pretty(&summarize(profiles)).unwrap_or_default();
    let insight = match AnalysisMode::for_count(profiles.len()) {
        AnalysisMode::Group => {
            "Analyze the group \"vibe\" and identify clusters (e.g., who is the emotional outlier)."
        }
        AnalysisMode::Dyadic => "Analyze the primary relationship dyad.",
    };
    format!(
        "Analyze the personality dynamics for the following {count} individuals:\n\
         {summary}\n\n\
         TASK:\n\
         1. Identify core friction points between specific individuals or the group as a whole.\n\
         2. PROVIDE SCIENTIFIC CONTEXT: Ground your advice in established Big Five psychological theory.\n\
         3. GROUP INSIGHTS: {insight}\n\
         4. STRATEGIES: Provide actionable protocols for communication.\n\n\
         VALIDATION:\n\
         Do not invent traits. If someone has 10% Neuroticism, describe them as highly emotionally stable.",
        count = profiles.len(),
    )
}

/// Response schema of `AnalysisResult` in Gemini's OpenAPI subset. Group requests also require
/// `groupDynamics`.
pub fn analysis_schema(mode: AnalysisMode) -> Value {
    let mut required = vec!["overview", "frictionPoints", "scientificContext", "strategies"];
    if mode == AnalysisMode::Group {
        required.push("groupDynamics");
    }
    json!({
        "type": "OBJECT",
        "properties": {
            "overview": { "type": "STRING" },
            "frictionPoints": { "type": "ARRAY", "items": { "type": "STRING" } },
            "groupDynamics": { "type": "STRING" },
            "scientificContext": { "type": "STRING" },
            "strategies": { "type": "ARRAY", "items": { "type": "STRING" } },
        },
        "required": required,
    })
}

/// One line per profile: `Name (Role): Openness 93%, ...`.
pub fn chat_context(profiles: &[Profile]) -> String {
    profiles
        .iter()
        .map(|p| {
            let scores = p
                .scores
                .iter()
                .map(|s| format!("{} {}%", s.domain, s.percentage))
                .collect::<Vec<_>>()
                .join(", ");
            format!("{} ({}): {}", p.name, p.role, scores)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn chat_system_prompt(profiles: &[Profile]) -> String {
    format!(
        "You are the Personality Dynamics Lab advisor. You provide concise, empathetic advice \
         based on Big Five data. Reference specific percentages. Current context: {}",
        chat_context(profiles)
    )
}
