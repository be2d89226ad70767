// src/grading/normalizer.rs

use std::sync::LazyLock;

use regex::Regex;

/// Question number, separator noise, one letter, optional trailing noise.
/// Matches `1a`, `1) a`, `2. B`, `3-c`, `4 D`, `5:E`, `6) c.`
static NUMBERED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]+)[^A-Za-z0-9]*([A-Za-z])[^A-Za-z0-9]*$").expect("valid numbered regex")
});

/// Letters only, each one an answer to the next question.
static COMPACT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z]+$").expect("valid compact regex"));

/// One answer line reduced to its canonical form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerLine {
    /// An explicitly numbered answer.
    Numbered { question: u32, letter: char },
    /// A run of letters numbered implicitly by position.
    CompactRun(Vec<char>),
}

/// Classifies one raw line. Letters come back upper-cased.
///
/// Returns `None` for blank lines and for anything that is neither a numbered
/// answer nor a compact run, including question number `0` and numbers that
/// do not fit in a `u32`.
pub fn normalize_line(line: &str) -> Option<AnswerLine> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    if let Some(caps) = NUMBERED.captures(line) {
        let question: u32 = caps[1].parse().ok().filter(|&q| q > 0)?;
        let letter = caps[2].chars().next()?.to_ascii_uppercase();
        return Some(AnswerLine::Numbered { question, letter });
    }

    if COMPACT.is_match(line) {
        return Some(AnswerLine::CompactRun(
            line.chars().map(|c| c.to_ascii_uppercase()).collect(),
        ));
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbered(question: u32, letter: char) -> Option<AnswerLine> {
        Some(AnswerLine::Numbered { question, letter })
    }

    #[test]
    fn numbered_separators() {
        assert_eq!(normalize_line("1) A"), numbered(1, 'A'));
        assert_eq!(normalize_line("2. B"), numbered(2, 'B'));
        assert_eq!(normalize_line("3-C"), numbered(3, 'C'));
        assert_eq!(normalize_line("4 D"), numbered(4, 'D'));
        assert_eq!(normalize_line("5:E"), numbered(5, 'E'));
        assert_eq!(normalize_line("1a"), numbered(1, 'A'));
        assert_eq!(normalize_line("  12 ) - b  "), numbered(12, 'B'));
        assert_eq!(normalize_line("6) c."), numbered(6, 'C'));
    }

    #[test]
    fn compact_runs() {
        assert_eq!(
            normalize_line("abCab"),
            Some(AnswerLine::CompactRun(vec!['A', 'B', 'C', 'A', 'B']))
        );
        assert_eq!(normalize_line("d"), Some(AnswerLine::CompactRun(vec!['D'])));
    }

    #[test]
    fn blank_and_noise() {
        assert_eq!(normalize_line(""), None);
        assert_eq!(normalize_line("   \t"), None);
        assert_eq!(normalize_line("1) AB"), None);
        assert_eq!(normalize_line("A B C"), None);
        assert_eq!(normalize_line("1)"), None);
        assert_eq!(normalize_line("---"), None);
        assert_eq!(normalize_line("Q1: A"), None);
    }

    #[test]
    fn rejects_bad_question_numbers() {
        assert_eq!(normalize_line("0) A"), None);
        assert_eq!(normalize_line("99999999999) A"), None);
    }
}
