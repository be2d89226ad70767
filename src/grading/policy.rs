// src/grading/policy.rs

use std::str::FromStr;

use super::error::{GradingError, Malformation};

/// What to do when a parser meets a given kind of malformed input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tolerance {
    /// Ignore the offending input and keep going.
    Skip,
    /// Keep the student on the roster with whatever was recognized (possibly nothing).
    /// Only meaningful for empty submissions; elsewhere it behaves like `Skip`.
    ZeroScore,
    /// Abort the whole grading request.
    Fail,
}

/// Central table of degradation rules shared by the key and submission parsers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsePolicy {
    pub unrecognized_line: Tolerance,
    pub mixed_notation: Tolerance,
    pub answer_shaped_name: Tolerance,
    pub empty_submission: Tolerance,
    pub extra_answer: Tolerance,
}

impl Default for ParsePolicy {
    fn default() -> Self {
        Self {
            unrecognized_line: Tolerance::Skip,
            mixed_notation: Tolerance::Skip,
            answer_shaped_name: Tolerance::Skip,
            empty_submission: Tolerance::ZeroScore,
            extra_answer: Tolerance::Skip,
        }
    }
}

impl ParsePolicy {
    /// Rejects every malformation instead of degrading.
    pub fn strict() -> Self {
        Self {
            unrecognized_line: Tolerance::Fail,
            mixed_notation: Tolerance::Fail,
            answer_shaped_name: Tolerance::Fail,
            empty_submission: Tolerance::Fail,
            extra_answer: Tolerance::Fail,
        }
    }

    pub fn tolerance_for(&self, class: Malformation) -> Tolerance {
        match class {
            Malformation::UnrecognizedLine => self.unrecognized_line,
            Malformation::MixedNotation => self.mixed_notation,
            Malformation::AnswerShapedName => self.answer_shaped_name,
            Malformation::EmptySubmission => self.empty_submission,
            Malformation::ExtraAnswer => self.extra_answer,
        }
    }

    /// Applies the policy to one occurrence of `class`.
    ///
    /// Returns the tolerance to act on when the input is tolerated, or a
    /// `GradingError::Malformed` when the policy says to fail.
    pub fn check(
        &self,
        class: Malformation,
        location: impl FnOnce() -> String,
    ) -> Result<Tolerance, GradingError> {
        match self.tolerance_for(class) {
            Tolerance::Fail => Err(GradingError::Malformed {
                class,
                location: location(),
            }),
            tolerated => {
                let location = location();
                // A skipped notation switch can drop a whole block of answers
                if class == Malformation::MixedNotation {
                    tracing::warn!("Tolerated {}: {}", class, location);
                } else {
                    tracing::debug!("Tolerated {}: {}", class, location);
                }
                Ok(tolerated)
            }
        }
    }
}

/// Ordered percentage thresholds mapped to suggested letter grades.
#[derive(Debug, Clone, PartialEq)]
pub struct GradeScale {
    /// `(minimum percentage, grade)` pairs, highest threshold first.
    thresholds: Vec<(f64, String)>,
    fallback: String,
}

impl Default for GradeScale {
    fn default() -> Self {
        Self::new(
            vec![
                (90.0, "A".to_string()),
                (80.0, "B".to_string()),
                (70.0, "C".to_string()),
                (60.0, "D".to_string()),
            ],
            "F",
        )
    }
}

impl GradeScale {
    pub fn new(mut thresholds: Vec<(f64, String)>, fallback: impl Into<String>) -> Self {
        thresholds.sort_by(|a, b| b.0.total_cmp(&a.0));
        Self {
            thresholds,
            fallback: fallback.into(),
        }
    }

    /// Returns the grade for the first threshold `percentage` reaches.
    pub fn grade_for(&self, percentage: f64) -> &str {
        self.thresholds
            .iter()
            .find(|(min, _)| percentage >= *min)
            .map(|(_, grade)| grade.as_str())
            .unwrap_or(self.fallback.as_str())
    }
}

/// Parses `A:90,B:80,C:70,D:60,F`; the entry without a threshold is the fallback.
impl FromStr for GradeScale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut thresholds = Vec::new();
        let mut fallback = None;

        for entry in s.split(',').map(str::trim).filter(|e| !e.is_empty()) {
            match entry.split_once(':') {
                Some((grade, min)) => {
                    let min: f64 = min
                        .trim()
                        .parse()
                        .map_err(|_| format!("invalid threshold in '{}'", entry))?;
                    if !(0.0..=100.0).contains(&min) {
                        return Err(format!("threshold out of range in '{}'", entry));
                    }
                    thresholds.push((min, grade.trim().to_string()));
                }
                None if fallback.is_none() => fallback = Some(entry.to_string()),
                None => return Err(format!("more than one fallback grade ('{}')", entry)),
            }
        }

        if thresholds.is_empty() {
            return Err("grade scale needs at least one threshold".to_string());
        }
        let fallback = fallback.ok_or_else(|| "grade scale needs a fallback grade".to_string())?;

        Ok(Self::new(thresholds, fallback))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_scale_boundaries() {
        let scale = GradeScale::default();
        assert_eq!(scale.grade_for(100.0), "A");
        assert_eq!(scale.grade_for(90.0), "A");
        assert_eq!(scale.grade_for(89.9), "B");
        assert_eq!(scale.grade_for(80.0), "B");
        assert_eq!(scale.grade_for(70.0), "C");
        assert_eq!(scale.grade_for(60.0), "D");
        assert_eq!(scale.grade_for(59.0), "F");
        assert_eq!(scale.grade_for(0.0), "F");
    }

    #[test]
    fn parse_scale_from_str() {
        let scale: GradeScale = "Pass:50, Fail".parse().unwrap();
        assert_eq!(scale.grade_for(50.0), "Pass");
        assert_eq!(scale.grade_for(49.0), "Fail");

        // Order of entries does not matter
        let scale: GradeScale = "C:70,A:90,F,B:80".parse().unwrap();
        assert_eq!(scale.grade_for(85.0), "B");
        assert_eq!(scale.grade_for(95.0), "A");
    }

    #[test]
    fn parse_scale_rejects_bad_input() {
        assert!("A:ninety,F".parse::<GradeScale>().is_err());
        assert!("A:90".parse::<GradeScale>().is_err());
        assert!("F".parse::<GradeScale>().is_err());
        assert!("A:120,F".parse::<GradeScale>().is_err());
        assert!("A:90,F,E".parse::<GradeScale>().is_err());
    }

    #[test]
    fn strict_policy_fails() {
        let policy = ParsePolicy::strict();
        let err = policy
            .check(Malformation::UnrecognizedLine, || "line 3".to_string())
            .unwrap_err();
        assert_eq!(
            err,
            GradingError::Malformed {
                class: Malformation::UnrecognizedLine,
                location: "line 3".to_string(),
            }
        );
    }

    #[test]
    fn default_policy_tolerates() {
        let policy = ParsePolicy::default();
        assert_eq!(
            policy.check(Malformation::EmptySubmission, String::new),
            Ok(Tolerance::ZeroScore)
        );
        assert_eq!(
            policy.check(Malformation::MixedNotation, String::new),
            Ok(Tolerance::Skip)
        );
    }
}
