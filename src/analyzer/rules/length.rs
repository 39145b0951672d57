//! Length & density rule: word count bands

use super::{CriterionRule, ResumeText};
use crate::CriterionKey;

pub struct LengthRule;

impl LengthRule {
    /// Points for a word count. 400-800 words is the target range.
    pub fn points_for(word_count: usize) -> u8 {
        match word_count {
            400..=800 => 7,
            300..=399 => 6,
            801..=1000 => 5,
            200..=299 => 4,
            1001..=1200 => 3,
            _ => 2,
        }
    }
}

impl CriterionRule for LengthRule {
    fn key(&self) -> CriterionKey {
        CriterionKey::Length
    }

    fn score(&self, resume: &ResumeText<'_>) -> u8 {
        Self::points_for(resume.word_count())
    }
}
