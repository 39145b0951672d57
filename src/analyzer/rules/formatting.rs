//! ATS-friendly formatting rule.
//!
//! Starts from full marks and applies two independent deductions: heavy use of
//! decorative bullet glyphs, and too few standard section headings.

use super::{CriterionRule, ResumeText};
use crate::CriterionKey;

/// Decorative glyphs that parsers commonly mangle
pub const DECORATIVE_GLYPHS: [char; 6] = ['■', '●', '★', '▪', '►', '◆'];
pub const STANDARD_HEADERS: [&str; 4] = ["experience", "education", "skills", "summary"];

const FULL_MARKS: i32 = 15;
const GLYPH_LIMIT: usize = 10;
const GLYPH_PENALTY: i32 = 5;
const MIN_HEADERS: usize = 2;
const HEADER_PENALTY: i32 = 5;

pub struct FormattingRule;

impl FormattingRule {
    pub fn count_glyphs(text: &str) -> usize {
        text.chars()
            .filter(|c| DECORATIVE_GLYPHS.contains(c))
            .count()
    }
}

impl CriterionRule for FormattingRule {
    fn key(&self) -> CriterionKey {
        CriterionKey::Formatting
    }

    fn score(&self, resume: &ResumeText<'_>) -> u8 {
        let mut score = FULL_MARKS;

        if Self::count_glyphs(resume.raw()) > GLYPH_LIMIT {
            score -= GLYPH_PENALTY;
        }
        if resume.count_hits(&STANDARD_HEADERS) < MIN_HEADERS {
            score -= HEADER_PENALTY;
        }

        score.max(0) as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(text: &str) -> u8 {
        FormattingRule.score(&ResumeText::new(text))
    }

    #[test]
    fn clean_resume_keeps_full_marks() {
        assert_eq!(score("Summary ... Experience ... Education ... Skills"), 15);
    }

    #[test]
    fn glyph_limit_is_exclusive() {
        let ten = format!("Experience Education {}", "● item ".repeat(10));
        let eleven = format!("Experience Education {}", "● item ".repeat(11));
        assert_eq!(score(&ten), 15);
        assert_eq!(score(&eleven), 10);
    }

    #[test]
    fn mixed_glyphs_are_counted_together() {
        assert_eq!(FormattingRule::count_glyphs("■●★▪►◆ • -"), 6);
    }

    #[test]
    fn both_penalties_apply() {
        let text = format!("Skills {}", "● ".repeat(12));
        assert_eq!(score(&text), 5);
    }

    #[test]
    fn empty_text_misses_headers() {
        assert_eq!(score(""), 10);
    }
}
