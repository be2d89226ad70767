// src/models/answer.rs

use indexmap::IndexMap;

use crate::grading::error::GradingError;

/// Question number to letter mapping that remembers insertion order.
///
/// Re-inserting a question overwrites its letter but keeps the position of
/// the first occurrence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerMap {
    entries: IndexMap<u32, char>,
}

impl AnswerMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or overwrites an answer, returning the letter it replaced.
    pub fn insert(&mut self, question: u32, letter: char) -> Option<char> {
        self.entries.insert(question, letter.to_ascii_uppercase())
    }

    pub fn get(&self, question: u32) -> Option<char> {
        self.entries.get(&question).copied()
    }

    pub fn contains(&self, question: u32) -> bool {
        self.entries.contains_key(&question)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates `(question, letter)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, char)> + '_ {
        self.entries.iter().map(|(&question, &letter)| (question, letter))
    }
}

impl FromIterator<(u32, char)> for AnswerMap {
    fn from_iter<I: IntoIterator<Item = (u32, char)>>(iter: I) -> Self {
        let mut map = AnswerMap::new();
        for (question, letter) in iter {
            map.insert(question, letter);
        }
        map
    }
}

/// The authoritative answers. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerKey {
    answers: AnswerMap,
}

impl AnswerKey {
    pub fn new(answers: AnswerMap) -> Result<Self, GradingError> {
        if answers.is_empty() {
            return Err(GradingError::EmptyKey);
        }
        Ok(Self { answers })
    }

    pub fn get(&self, question: u32) -> Option<char> {
        self.answers.get(question)
    }

    pub fn contains(&self, question: u32) -> bool {
        self.answers.contains(question)
    }

    /// Number of questions, used as `total_questions` in every report.
    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (u32, char)> + '_ {
        self.answers.iter()
    }
}

/// One student's parsed submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentAnswers {
    /// Trimmed, non-empty.
    pub name: String,
    /// Questions absent from the map count as unanswered.
    pub answers: AnswerMap,
}
