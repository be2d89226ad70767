// src/grading/grader.rs

use crate::models::{
    answer::{AnswerKey, StudentAnswers},
    report::{MissedQuestion, ScoreRecord},
};

use super::{
    error::{GradingError, Malformation},
    policy::{GradeScale, ParsePolicy},
};

/// Largest supported number of decimal places for percentages.
pub const MAX_PERCENTAGE_DECIMALS: u32 = 4;

/// Rounds half away from zero to `decimals` places.
fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals.min(MAX_PERCENTAGE_DECIMALS) as i32);
    (value * factor).round() / factor
}

/// Scores students against a key with a fixed grade scale.
#[derive(Debug, Clone, PartialEq)]
pub struct Grader {
    scale: GradeScale,
    percentage_decimals: u32,
}

impl Default for Grader {
    fn default() -> Self {
        Self::new(GradeScale::default(), 0)
    }
}

impl Grader {
    pub fn new(scale: GradeScale, percentage_decimals: u32) -> Self {
        Self {
            scale,
            percentage_decimals: percentage_decimals.min(MAX_PERCENTAGE_DECIMALS),
        }
    }

    /// Grades one student. Answers to questions outside the key are ignored.
    pub fn grade(&self, student: &StudentAnswers, key: &AnswerKey) -> ScoreRecord {
        let mut raw_score: usize = 0;
        let mut missed = Vec::new();

        for (question, correct) in key.iter() {
            let given = student.answers.get(question);
            match given {
                Some(letter) if letter.eq_ignore_ascii_case(&correct) => raw_score += 1,
                _ => missed.push(MissedQuestion {
                    question,
                    student_answer: given,
                    correct_answer: correct,
                }),
            }
        }

        let total_questions = key.len();
        let percentage = round_to(
            raw_score as f64 / total_questions as f64 * 100.0,
            self.percentage_decimals,
        );

        ScoreRecord {
            name: student.name.clone(),
            raw_score,
            total_questions,
            percentage,
            suggested_grade: self.scale.grade_for(percentage).to_string(),
            missed,
        }
    }
}

/// Applies the extra-answer rule to answers for questions the key lacks.
pub fn check_extra_answers(
    student: &StudentAnswers,
    key: &AnswerKey,
    policy: &ParsePolicy,
) -> Result<(), GradingError> {
    for (question, _) in student.answers.iter().filter(|(q, _)| !key.contains(*q)) {
        policy.check(Malformation::ExtraAnswer, || {
            format!("student '{}', question {}", student.name, question)
        })?;
    }
    Ok(())
}
