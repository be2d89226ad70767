// src/grading/key_parser.rs

use crate::models::answer::AnswerKey;

use super::{collector::AnswerCollector, error::GradingError, policy::ParsePolicy};

/// Parses the raw answer-key text.
///
/// Later entries for the same question overwrite earlier ones. Fails with
/// `GradingError::EmptyKey` if nothing recognizable is found.
pub fn parse_key(text: &str, policy: &ParsePolicy) -> Result<AnswerKey, GradingError> {
    let mut collector = AnswerCollector::new(policy, "answer key");
    for (idx, line) in text.lines().enumerate() {
        collector.feed(idx + 1, line)?;
    }

    let key = AnswerKey::new(collector.finish())?;
    tracing::debug!("Parsed answer key with {} questions", key.len());
    Ok(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(key: &AnswerKey) -> Vec<(u32, char)> {
        key.iter().collect()
    }

    #[test]
    fn mixed_separators() {
        let key = parse_key("1) A\n2. B\n3-C\n4 D\n5:E", &ParsePolicy::default()).unwrap();
        assert_eq!(
            pairs(&key),
            vec![(1, 'A'), (2, 'B'), (3, 'C'), (4, 'D'), (5, 'E')]
        );
    }

    #[test]
    fn compact_key() {
        let key = parse_key("ABCABC", &ParsePolicy::default()).unwrap();
        assert_eq!(key.len(), 6);
        assert_eq!(key.get(4), Some('A'));
        assert_eq!(key.get(6), Some('C'));
    }

    #[test]
    fn later_correction_wins() {
        let key = parse_key("1) A\n2) B\n1) D", &ParsePolicy::default()).unwrap();
        assert_eq!(pairs(&key), vec![(1, 'D'), (2, 'B')]);
    }

    #[test]
    fn leading_heading_is_read_as_compact_run() {
        // A letters-only heading fixes compact notation, so numbered lines after it are skipped
        let key = parse_key("Key\n1) A\n2) B", &ParsePolicy::default()).unwrap();
        assert_eq!(pairs(&key), vec![(1, 'K'), (2, 'E'), (3, 'Y')]);

        let err = parse_key("Key\n1) A\n2) B", &ParsePolicy::strict()).unwrap_err();
        assert!(matches!(
            err,
            GradingError::Malformed {
                class: crate::grading::error::Malformation::MixedNotation,
                ..
            }
        ));
    }

    #[test]
    fn empty_key_fails() {
        let policy = ParsePolicy::default();
        assert_eq!(parse_key("", &policy), Err(GradingError::EmptyKey));
        assert_eq!(parse_key("\n  \n\t\n", &policy), Err(GradingError::EmptyKey));
        assert_eq!(parse_key("no answers here!", &policy), Err(GradingError::EmptyKey));
    }

    #[test]
    fn windows_line_endings() {
        let key = parse_key("1) a\r\n2) b\r\n", &ParsePolicy::default()).unwrap();
        assert_eq!(pairs(&key), vec![(1, 'A'), (2, 'B')]);
    }
}
