//! Answer scoring.
//!
//! `calculate_scores` is a pure mapping from raw Likert answers to one
//! `DomainScore` per trait domain. It never fails: answers that reference an
//! unknown question, or carry a value outside `1..=5`, are dropped.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::inventory::{Domain, Keying, QuestionBank};

/// Lowest accepted Likert value.
pub const MIN_ANSWER: u8 = 1;
/// Highest accepted Likert value.
pub const MAX_ANSWER: u8 = 5;

/// Percentages strictly below this are `Low`.
pub const LOW_THRESHOLD: u8 = 40;
/// Percentages strictly above this are `High`.
pub const HIGH_THRESHOLD: u8 = 60;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Answer {
    pub question_id: String,
    pub value: u8,
}

impl Answer {
    pub fn new(question_id: impl Into<String>, value: u8) -> Self {
        Self {
            question_id: question_id.into(),
            value,
        }
    }

    pub fn in_range(&self) -> bool {
        (MIN_ANSWER..=MAX_ANSWER).contains(&self.value)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Level {
    Low,
    Neutral,
    High,
}

impl Level {
    /// `< 40` is Low, `> 60` is High, 40 through 60 inclusive is Neutral.
    pub fn from_percentage(percentage: u8) -> Self {
        if percentage < LOW_THRESHOLD {
            Level::Low
        } else if percentage > HIGH_THRESHOLD {
            Level::High
        } else {
            Level::Neutral
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FacetScore {
    pub name: String,
    pub score: u32,
    pub max_score: u32,
    pub percentage: u8,
    pub level: Level,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DomainScore {
    pub domain: Domain,
    pub score: u32,
    pub max_score: u32,
    pub percentage: u8,
    pub level: Level,
    #[serde(default)]
    pub facets: Vec<FacetScore>,
}

impl DomainScore {
    /// Derives percentage and level from a keyed sum over `count` items.
    ///
    /// A domain with no answered items scores 0% and is reported `Neutral`.
    pub fn from_sum(domain: Domain, sum: u32, count: u32) -> Self {
        let max_score = count * u32::from(MAX_ANSWER);
        let (percentage, level) = if max_score == 0 {
            (0, Level::Neutral)
        } else {
            let percentage = rounded_percentage(sum, max_score);
            (percentage, Level::from_percentage(percentage))
        };
        Self {
            domain,
            score: sum,
            max_score,
            percentage,
            level,
            facets: Vec::new(),
        }
    }
}

/// `round(100 * score / max)` with halves rounding up, in integer arithmetic.
pub fn rounded_percentage(score: u32, max_score: u32) -> u8 {
    if max_score == 0 {
        return 0;
    }
    let score = u64::from(score.min(max_score));
    let max = u64::from(max_score);
    ((200 * score + max) / (2 * max)) as u8
}

/// Reverse-scores minus-keyed items so a higher value always means more of
/// the trait.
pub fn keyed_value(keyed: Keying, raw: u8) -> u8 {
    match keyed {
        Keying::Plus => raw,
        Keying::Minus => MAX_ANSWER + 1 - raw,
    }
}

/// Scores answers against the standard inventory.
pub fn calculate_scores(answers: &[Answer]) -> Vec<DomainScore> {
    calculate_scores_with(&QuestionBank::standard(), answers)
}

/// Scores answers against an explicit bank. Always returns five entries in
/// canonical domain order.
pub fn calculate_scores_with(bank: &QuestionBank, answers: &[Answer]) -> Vec<DomainScore> {
    let mut totals: HashMap<Domain, (u32, u32)> =
        Domain::ALL.iter().map(|domain| (*domain, (0, 0))).collect();

    for answer in answers {
        let Some(question) = bank.get(&answer.question_id) else {
            continue;
        };
        if !answer.in_range() {
            continue;
        }
        let entry = totals.entry(question.domain).or_insert((0, 0));
        entry.0 += u32::from(keyed_value(question.keyed, answer.value));
        entry.1 += 1;
    }

    Domain::ALL
        .iter()
        .map(|domain| {
            let (sum, count) = totals.get(domain).copied().unwrap_or((0, 0));
            DomainScore::from_sum(*domain, sum, count)
        })
        .collect()
}

/// Looks up the percentage for `domain`, treating a missing entry as 0.
pub fn percentage_for(scores: &[DomainScore], domain: Domain) -> u8 {
    scores
        .iter()
        .find(|score| score.domain == domain)
        .map(|score| score.percentage)
        .unwrap_or(0)
}
