// src/grading/mod.rs

//! Answer normalization and grading engine.
//!
//! Raw key text and raw submissions text go in; a [`GradingResult`] with one
//! report per student and a class summary comes out. The only hard failure
//! is a key with no recognizable answers; everything else degrades according
//! to the [`ParsePolicy`].

pub mod aggregator;
pub mod collector;
pub mod error;
pub mod grader;
pub mod key_parser;
pub mod normalizer;
pub mod policy;
pub mod submission_parser;

pub use error::{GradingError, Malformation};
pub use grader::Grader;
pub use policy::{GradeScale, ParsePolicy, Tolerance};

use crate::models::report::GradingResult;

/// Parse policy plus grader, shared read-only by every request.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GradingEngine {
    pub policy: ParsePolicy,
    pub grader: Grader,
}

impl GradingEngine {
    pub fn new(policy: ParsePolicy, grader: Grader) -> Self {
        Self { policy, grader }
    }

    /// Runs the full pipeline over one request's text.
    pub fn grade_texts(
        &self,
        key_text: &str,
        submissions_text: &str,
    ) -> Result<GradingResult, GradingError> {
        let key = key_parser::parse_key(key_text, &self.policy)?;
        let students = submission_parser::parse_submissions(submissions_text, &self.policy)?;

        let mut reports = Vec::with_capacity(students.len());
        for student in &students {
            grader::check_extra_answers(student, &key, &self.policy)?;
            reports.push(self.grader.grade(student, &key));
        }

        let summary = aggregator::summarize(&reports, &key);
        Ok(GradingResult { summary, reports })
    }
}
