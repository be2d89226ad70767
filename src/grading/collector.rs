// src/grading/collector.rs

use crate::models::answer::AnswerMap;

use super::{
    error::{GradingError, Malformation},
    normalizer::{AnswerLine, normalize_line},
    policy::ParsePolicy,
};

/// Notation state of one parse target (the key, or one student).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Notation {
    Unset,
    Numbered,
    /// Holds the implicit number of the next compact letter.
    Compact { next: u32 },
}

/// Accumulates normalized lines into an `AnswerMap`.
///
/// The first recognized line fixes the notation for the rest of the target;
/// lines in the other notation are reported as `MixedNotation`.
pub struct AnswerCollector<'a> {
    policy: &'a ParsePolicy,
    target: String,
    notation: Notation,
    answers: AnswerMap,
}

impl<'a> AnswerCollector<'a> {
    /// `target` names the parse target in error locations, e.g. `answer key`.
    pub fn new(policy: &'a ParsePolicy, target: impl Into<String>) -> Self {
        Self {
            policy,
            target: target.into(),
            notation: Notation::Unset,
            answers: AnswerMap::new(),
        }
    }

    /// Feeds one raw line. `line_no` is 1-based within the input text.
    pub fn feed(&mut self, line_no: usize, line: &str) -> Result<(), GradingError> {
        if line.trim().is_empty() {
            return Ok(());
        }

        match normalize_line(line) {
            None => {
                self.report(Malformation::UnrecognizedLine, line_no, line)?;
            }
            Some(AnswerLine::Numbered { question, letter }) => match self.notation {
                Notation::Unset | Notation::Numbered => {
                    self.notation = Notation::Numbered;
                    self.answers.insert(question, letter);
                }
                Notation::Compact { .. } => {
                    self.report(Malformation::MixedNotation, line_no, line)?;
                }
            },
            Some(AnswerLine::CompactRun(letters)) => {
                let mut next = match self.notation {
                    Notation::Unset => 1,
                    Notation::Compact { next } => next,
                    Notation::Numbered => {
                        self.report(Malformation::MixedNotation, line_no, line)?;
                        return Ok(());
                    }
                };
                for letter in letters {
                    self.answers.insert(next, letter);
                    next = match next.checked_add(1) {
                        Some(n) => n,
                        None => break,
                    };
                }
                self.notation = Notation::Compact { next };
            }
        }

        Ok(())
    }

    pub fn finish(self) -> AnswerMap {
        self.answers
    }

    fn report(
        &self,
        class: Malformation,
        line_no: usize,
        line: &str,
    ) -> Result<(), GradingError> {
        self.policy.check(class, || {
            format!("{}, line {}: '{}'", self.target, line_no, line.trim())
        })?;
        Ok(())
    }
}
