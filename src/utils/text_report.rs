// src/utils/text_report.rs

use std::fmt::Write;

use chrono::{DateTime, SecondsFormat, Utc};

use crate::models::report::GradingResult;

/// Suggested file name for the downloadable report.
pub const REPORT_FILE_NAME: &str = "grading-report.txt";

/// Renders a plain-text report: aggregate summary first, then one section per student.
pub fn render(result: &GradingResult, generated_at: DateTime<Utc>) -> String {
    let mut out = String::new();
    write_report(&mut out, result, generated_at).expect("writing to a String cannot fail");
    out
}

fn write_report(
    out: &mut String,
    result: &GradingResult,
    generated_at: DateTime<Utc>,
) -> std::fmt::Result {
    let summary = &result.summary;

    writeln!(
        out,
        "Generated: {}",
        generated_at.to_rfc3339_opts(SecondsFormat::Secs, true)
    )?;
    writeln!(out, "=== Aggregate Summary ===")?;
    writeln!(out, "Total students: {}", summary.total_students)?;

    if !summary.ranking.is_empty() {
        writeln!(out, "Ranking:")?;
        for (idx, entry) in summary.ranking.iter().enumerate() {
            writeln!(
                out,
                "{}. {} — {} pts ({}%)",
                idx + 1,
                entry.name,
                entry.raw_score,
                entry.percentage
            )?;
        }
    }

    if !summary.most_missed_questions.is_empty() {
        writeln!(out, "Most missed question(s):")?;
        for q in &summary.most_missed_questions {
            writeln!(out, "Q{} missed by {}", q.question, q.missed_by)?;
        }
    }

    writeln!(out)?;
    writeln!(out, "=== Per-student Reports ===")?;

    for report in &result.reports {
        writeln!(out)?;
        writeln!(out, "Name: {}", report.name)?;
        writeln!(
            out,
            "Score: {}/{} ({}%)",
            report.raw_score, report.total_questions, report.percentage
        )?;
        writeln!(out, "Suggested grade: {}", report.suggested_grade)?;

        if report.missed.is_empty() {
            writeln!(out, "Missed: none")?;
            continue;
        }
        writeln!(out, "Missed:")?;
        for m in &report.missed {
            let student = m
                .student_answer
                .map(String::from)
                .unwrap_or_else(|| "-".to_string());
            writeln!(
                out,
                " - Q{}: student={} | key={}",
                m.question, student, m.correct_answer
            )?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grading::GradingEngine;
    use chrono::TimeZone;

    #[test]
    fn renders_summary_and_reports() {
        let result = GradingEngine::default()
            .grade_texts(
                "1) A\n2) B\n3) C\n4) A\n5) B",
                "Alice\n1) a\n2) b\n3) c\n4) a\n5) c\n\nBob",
            )
            .unwrap();
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();

        let text = render(&result, at);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "Generated: 2024-05-01T12:00:00Z");
        assert!(lines.contains(&"Total students: 2"));
        assert!(lines.contains(&"1. Alice — 4 pts (80%)"));
        assert!(lines.contains(&"2. Bob — 0 pts (0%)"));
        assert!(lines.contains(&"Q5 missed by 2"));
        assert!(lines.contains(&"Score: 4/5 (80%)"));
        assert!(lines.contains(&" - Q5: student=C | key=B"));
        assert!(lines.contains(&" - Q1: student=- | key=A"));
    }

    #[test]
    fn perfect_score_has_no_misses() {
        let result = GradingEngine::default()
            .grade_texts("AB", "Perfect\nab")
            .unwrap();
        let text = render(&result, Utc::now());
        assert!(text.contains("Missed: none"));
        assert!(!text.contains("Most missed"));
    }
}
