// src/grading/submission_parser.rs

use crate::models::answer::StudentAnswers;

use super::{
    collector::AnswerCollector,
    error::{GradingError, Malformation},
    normalizer::{AnswerLine, normalize_line},
    policy::{ParsePolicy, Tolerance},
};

/// Splits text into blank-line separated blocks of `(line_no, line)`.
fn split_blocks(text: &str) -> Vec<Vec<(usize, &str)>> {
    let mut blocks = Vec::new();
    let mut current = Vec::new();

    for (idx, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            if !current.is_empty() {
                blocks.push(std::mem::take(&mut current));
            }
        } else {
            current.push((idx + 1, line));
        }
    }
    if !current.is_empty() {
        blocks.push(current);
    }

    blocks
}

/// Parses one block: the first line is the name, the rest are answers.
///
/// Returns `Ok(None)` when the policy drops the block from the roster.
fn parse_block(
    block: &[(usize, &str)],
    policy: &ParsePolicy,
) -> Result<Option<StudentAnswers>, GradingError> {
    let Some((&(name_line, raw_name), answer_lines)) = block.split_first() else {
        return Ok(None);
    };
    let name = raw_name.trim().to_string();

    if matches!(normalize_line(&name), Some(AnswerLine::Numbered { .. })) {
        policy.check(Malformation::AnswerShapedName, || {
            format!("line {}: '{}'", name_line, name)
        })?;
    }

    let mut collector = AnswerCollector::new(policy, format!("student '{}'", name));
    for &(line_no, line) in answer_lines {
        collector.feed(line_no, line)?;
    }
    let answers = collector.finish();

    if answers.is_empty() {
        let tolerance = policy.check(Malformation::EmptySubmission, || {
            format!("student '{}' at line {}", name, name_line)
        })?;
        if tolerance == Tolerance::Skip {
            return Ok(None);
        }
    }

    Ok(Some(StudentAnswers { name, answers }))
}

/// Parses the raw submissions text into one `StudentAnswers` per block, in order.
pub fn parse_submissions(
    text: &str,
    policy: &ParsePolicy,
) -> Result<Vec<StudentAnswers>, GradingError> {
    let mut students = Vec::new();
    for block in split_blocks(text) {
        if let Some(student) = parse_block(&block, policy)? {
            students.push(student);
        }
    }

    tracing::debug!("Parsed {} student submissions", students.len());
    Ok(students)
}
