//! Big-Five inventory items.
//!
//! The bank is static data: every item is tagged with the trait domain it
//! measures and whether agreement counts toward (`Plus`) or against
//! (`Minus`) that trait.

pub mod content;

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the five OCEAN trait domains.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Domain {
    Openness,
    Conscientiousness,
    Extraversion,
    Agreeableness,
    Neuroticism,
}

impl Domain {
    /// Canonical reporting order.
    pub const ALL: [Domain; 5] = [
        Domain::Openness,
        Domain::Conscientiousness,
        Domain::Extraversion,
        Domain::Agreeableness,
        Domain::Neuroticism,
    ];

    /// Single-letter code used by the item bank.
    pub fn code(self) -> char {
        match self {
            Domain::Openness => 'O',
            Domain::Conscientiousness => 'C',
            Domain::Extraversion => 'E',
            Domain::Agreeableness => 'A',
            Domain::Neuroticism => 'N',
        }
    }

    pub fn from_code(code: char) -> Option<Self> {
        match code.to_ascii_uppercase() {
            'O' => Some(Domain::Openness),
            'C' => Some(Domain::Conscientiousness),
            'E' => Some(Domain::Extraversion),
            'A' => Some(Domain::Agreeableness),
            'N' => Some(Domain::Neuroticism),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Domain::Openness => "Openness",
            Domain::Conscientiousness => "Conscientiousness",
            Domain::Extraversion => "Extraversion",
            Domain::Agreeableness => "Agreeableness",
            Domain::Neuroticism => "Neuroticism",
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Keying direction of an item.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Keying {
    Plus,
    Minus,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Question {
    pub id: String,
    pub text: String,
    pub domain: Domain,
    pub keyed: Keying,
}

impl Question {
    pub fn new(id: impl Into<String>, text: impl Into<String>, domain: Domain, keyed: Keying) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            domain,
            keyed,
        }
    }
}

/// Ordered, immutable list of inventory items with unique ids.
#[derive(Debug, Clone)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    /// Builds a bank from an ordered item list. Fails on duplicate ids.
    pub fn new(questions: Vec<Question>) -> anyhow::Result<Self> {
        let mut seen = std::collections::HashSet::new();
        for question in &questions {
            if !seen.insert(question.id.as_str()) {
                anyhow::bail!("Duplicate question id '{}' in inventory", question.id);
            }
        }
        Ok(Self { questions })
    }

    /// The ten-item short inventory shipped with the application.
    pub fn standard() -> Self {
        use Domain::*;
        use Keying::*;
        let items = [
            ("1", "Am the life of the party.", Extraversion, Plus),
            ("2", "Feel little concern for others.", Agreeableness, Minus),
            ("3", "Am always prepared.", Conscientiousness, Plus),
            ("4", "Get stressed out easily.", Neuroticism, Plus),
            ("5", "Have a rich vocabulary.", Openness, Plus),
            ("6", "Don't talk a lot.", Extraversion, Minus),
            ("7", "Am interested in people.", Agreeableness, Plus),
            ("8", "Leave my belongings around.", Conscientiousness, Minus),
            ("9", "Am relaxed most of the time.", Neuroticism, Minus),
            ("10", "Have difficulty understanding abstract ideas.", Openness, Minus),
        ];
        Self {
            questions: items
                .into_iter()
                .map(|(id, text, domain, keyed)| Question::new(id, text, domain, keyed))
                .collect(),
        }
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn get(&self, id: &str) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == id)
    }

    pub fn at(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

impl Default for QuestionBank {
    fn default() -> Self {
        Self::standard()
    }
}
