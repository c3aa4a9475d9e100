//! The test-taking flow: walk the bank, collect one answer per item, then
//! turn the answers into a labelled profile.

use chrono::Utc;
use thiserror::Error;

use crate::inventory::{Question, QuestionBank};
use crate::profiles::{Profile, Role};
use crate::scoring::{calculate_scores_with, Answer, MAX_ANSWER, MIN_ANSWER};

use super::progress::{TestProgress, TestResult};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TestRunError {
    #[error("answer {value} is outside the 1-5 scale")]
    OutOfRange { value: u8 },
    #[error("test is incomplete: {answered} of {total} items answered")]
    Incomplete { answered: usize, total: usize },
    #[error("a name is required to save a profile")]
    MissingName,
    #[error("the question bank is empty")]
    EmptyBank,
}

/// In-progress test. Answers to the same item replace each other.
#[derive(Debug, Clone)]
pub struct TestRun {
    bank: QuestionBank,
    idx: usize,
    answers: Vec<Answer>,
}

impl TestRun {
    pub fn new(bank: QuestionBank) -> Self {
        Self {
            bank,
            idx: 0,
            answers: Vec::new(),
        }
    }

    /// Restores saved progress. Answers for items no longer in the bank are
    /// dropped and the cursor is clamped to the bank.
    pub fn resume(bank: QuestionBank, progress: TestProgress) -> Self {
        let last = bank.len().saturating_sub(1);
        let mut answers: Vec<Answer> = Vec::new();
        for answer in progress.answers {
            if bank.get(&answer.question_id).is_none() || !answer.in_range() {
                continue;
            }
            answers.retain(|a| a.question_id != answer.question_id);
            answers.push(answer);
        }
        Self {
            idx: progress.idx.min(last),
            bank,
            answers,
        }
    }

    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    pub fn position(&self) -> usize {
        self.idx
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.bank.at(self.idx)
    }

    pub fn current_answer(&self) -> Option<u8> {
        let question = self.current_question()?;
        self.answers
            .iter()
            .find(|a| a.question_id == question.id)
            .map(|a| a.value)
    }

    /// Records an answer for the current item and moves to the next one,
    /// staying put on the last item.
    pub fn answer(&mut self, value: u8) -> Result<(), TestRunError> {
        if !(MIN_ANSWER..=MAX_ANSWER).contains(&value) {
            return Err(TestRunError::OutOfRange { value });
        }
        let question_id = self
            .current_question()
            .ok_or(TestRunError::EmptyBank)?
            .id
            .clone();
        match self.answers.iter_mut().find(|a| a.question_id == question_id) {
            Some(existing) => existing.value = value,
            None => self.answers.push(Answer::new(question_id, value)),
        }
        if self.idx + 1 < self.bank.len() {
            self.idx += 1;
        }
        Ok(())
    }

    pub fn back(&mut self) {
        self.idx = self.idx.saturating_sub(1);
    }

    pub fn answers(&self) -> &[Answer] {
        &self.answers
    }

    pub fn is_complete(&self) -> bool {
        !self.bank.is_empty() && self.answers.len() == self.bank.len()
    }

    pub fn progress(&self) -> TestProgress {
        TestProgress {
            idx: self.idx,
            answers: self.answers.clone(),
        }
    }

    /// Scores the completed test and labels it as a new profile.
    pub fn finish(&self, name: &str, role: Role) -> Result<(Profile, TestResult), TestRunError> {
        if !self.is_complete() {
            return Err(TestRunError::Incomplete {
                answered: self.answers.len(),
                total: self.bank.len(),
            });
        }
        let name = name.trim();
        if name.is_empty() {
            return Err(TestRunError::MissingName);
        }
        let scores = calculate_scores_with(&self.bank, &self.answers);
        let profile = Profile::new(name, role, scores.clone());
        let result = TestResult {
            answers: self.answers.clone(),
            scores,
            timestamp: Utc::now().timestamp_millis(),
            person_name: name.to_string(),
        };
        Ok((profile, result))
    }
}
