// src/grading/error.rs

use std::fmt;

use thiserror::Error;

/// A class of input noise the parsers know how to tolerate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Malformation {
    /// A line that is neither a numbered answer nor a compact run.
    UnrecognizedLine,
    /// A line whose notation differs from the one the target started with.
    MixedNotation,
    /// The first line of a block looks like a numbered answer.
    AnswerShapedName,
    /// A block with a name but no recognizable answers.
    EmptySubmission,
    /// An answer to a question that is not in the key.
    ExtraAnswer,
}

impl fmt::Display for Malformation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Malformation::UnrecognizedLine => "unrecognized answer line",
            Malformation::MixedNotation => "mixed numbered and compact notation",
            Malformation::AnswerShapedName => "student name looks like an answer",
            Malformation::EmptySubmission => "submission has no recognizable answers",
            Malformation::ExtraAnswer => "answer to a question missing from the key",
        };
        f.write_str(label)
    }
}

/// Failures raised by the grading core.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GradingError {
    /// The key text produced no answers, so nothing can be scored.
    #[error("Answer key has no recognizable answers")]
    EmptyKey,

    /// A malformation the active policy is configured to reject.
    #[error("{class} ({location})")]
    Malformed {
        class: Malformation,
        location: String,
    },
}
