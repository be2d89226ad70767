// src/models/report.rs

use serde::{Deserialize, Serialize};

/// A question where the student's answer differs from the key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MissedQuestion {
    pub question: u32,
    /// `None` (serialized as `null`) when the student left it unanswered.
    pub student_answer: Option<char>,
    pub correct_answer: char,
}

/// Per-student grading outcome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreRecord {
    pub name: String,
    pub raw_score: usize,
    pub total_questions: usize,
    pub percentage: f64,
    pub suggested_grade: String,
    /// In key order.
    pub missed: Vec<MissedQuestion>,
}

/// Condensed view of a `ScoreRecord` used in the class ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankingEntry {
    pub name: String,
    pub raw_score: usize,
    pub percentage: f64,
}

impl From<&ScoreRecord> for RankingEntry {
    fn from(record: &ScoreRecord) -> Self {
        Self {
            name: record.name.clone(),
            raw_score: record.raw_score,
            percentage: record.percentage,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MostMissedQuestion {
    pub question: u32,
    pub missed_by: usize,
}

/// Class-wide statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub total_students: usize,
    pub ranking: Vec<RankingEntry>,
    pub most_missed_questions: Vec<MostMissedQuestion>,
}

/// Full response of one grading request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradingResult {
    pub summary: Summary,
    /// In submission block order.
    pub reports: Vec<ScoreRecord>,
}
