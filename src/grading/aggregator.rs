// src/grading/aggregator.rs

use std::collections::HashMap;

use crate::models::{
    answer::AnswerKey,
    report::{MostMissedQuestion, RankingEntry, ScoreRecord, Summary},
};

/// Orders by raw score descending, then by name ascending (ordinal).
///
/// Stable, so students sharing both score and name keep block order.
pub fn rank(records: &[ScoreRecord]) -> Vec<RankingEntry> {
    let mut ranking: Vec<RankingEntry> = records.iter().map(RankingEntry::from).collect();
    ranking.sort_by(|a, b| {
        b.raw_score
            .cmp(&a.raw_score)
            .then_with(|| a.name.cmp(&b.name))
    });
    ranking
}

/// Questions tied for the highest miss count, by question number.
/// Empty when nobody missed anything.
pub fn most_missed(records: &[ScoreRecord], key: &AnswerKey) -> Vec<MostMissedQuestion> {
    let mut counts: HashMap<u32, usize> = HashMap::new();
    for record in records {
        for missed in &record.missed {
            *counts.entry(missed.question).or_insert(0) += 1;
        }
    }

    let max = key
        .iter()
        .map(|(q, _)| counts.get(&q).copied().unwrap_or(0))
        .max()
        .unwrap_or(0);
    if max == 0 {
        return Vec::new();
    }

    let mut questions: Vec<MostMissedQuestion> = key
        .iter()
        .filter(|(q, _)| counts.get(q).copied().unwrap_or(0) == max)
        .map(|(question, _)| MostMissedQuestion {
            question,
            missed_by: max,
        })
        .collect();
    questions.sort_by_key(|m| m.question);
    questions
}

pub fn summarize(records: &[ScoreRecord], key: &AnswerKey) -> Summary {
    Summary {
        total_students: records.len(),
        ranking: rank(records),
        most_missed_questions: most_missed(records, key),
    }
}
