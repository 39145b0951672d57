//! Criterion rules for ATS scoring
//!
//! Each rule inspects the full resume text and awards points for one criterion.
//! Rules are stateless unit structs; their keyword tables and patterns are
//! process-wide constants compiled on first use.

/// Declare a lazily compiled, process-wide regex accessor.
macro_rules! static_regex {
    ($name:ident, $pattern:expr) => {
        fn $name() -> &'static regex::Regex {
            static RE: std::sync::OnceLock<regex::Regex> = std::sync::OnceLock::new();
            RE.get_or_init(|| regex::Regex::new($pattern).expect("static pattern compiles"))
        }
    };
}

pub mod action_verbs;
pub mod contact_info;
pub mod education;
pub mod formatting;
pub mod keywords;
pub mod length;
pub mod professional_summary;
pub mod work_experience;

pub use action_verbs::ActionVerbsRule;
pub use contact_info::ContactInfoRule;
pub use education::EducationRule;
pub use formatting::FormattingRule;
pub use keywords::KeywordsRule;
pub use length::LengthRule;
pub use professional_summary::ProfessionalSummaryRule;
pub use work_experience::WorkExperienceRule;

use super::catalog;
use crate::{Criterion, CriterionKey};

/// Rules in evaluation order
pub static DEFAULT_RULES: [&dyn CriterionRule; 8] = [
    &ContactInfoRule,
    &KeywordsRule,
    &WorkExperienceRule,
    &EducationRule,
    &FormattingRule,
    &LengthRule,
    &ActionVerbsRule,
    &ProfessionalSummaryRule,
];

/// Trait for criterion rules
pub trait CriterionRule: Send + Sync {
    /// Criterion this rule scores
    fn key(&self) -> CriterionKey;

    /// Points earned, already clamped to the criterion's range
    fn score(&self, resume: &ResumeText<'_>) -> u8;

    /// Score the text and attach the catalog name and feedback
    fn evaluate(&self, resume: &ResumeText<'_>) -> Criterion {
        let def = catalog::definition(self.key());
        let score = self.score(resume).min(def.max_score);
        let passed = def.passes(score);
        Criterion {
            key: def.key,
            name: def.name.to_string(),
            score,
            max_score: def.max_score,
            feedback: def.feedback(passed).to_string(),
            passed,
        }
    }
}

/// Resume text with a lowercase copy for case-insensitive substring checks
#[derive(Debug, Clone)]
pub struct ResumeText<'a> {
    raw: &'a str,
    lower: String,
}

impl<'a> ResumeText<'a> {
    pub fn new(raw: &'a str) -> Self {
        Self {
            raw,
            lower: raw.to_lowercase(),
        }
    }

    /// Original casing, for patterns that depend on it
    pub fn raw(&self) -> &'a str {
        self.raw
    }

    /// Case-insensitive substring test; `needle` must be lowercase.
    pub fn mentions(&self, needle: &str) -> bool {
        self.lower.contains(needle)
    }

    /// Number of table entries found anywhere in the text (each counted once).
    pub fn count_hits(&self, table: &[&str]) -> usize {
        table.iter().filter(|term| self.mentions(term)).count()
    }

    /// First table entry found in the text, in table order.
    pub fn first_hit<'t>(&self, table: &[&'t str]) -> Option<&'t str> {
        table.iter().copied().find(|term| self.mentions(term))
    }

    pub fn word_count(&self) -> usize {
        crate::count_words(self.raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_rules_follow_catalog_order() {
        let keys: Vec<CriterionKey> = DEFAULT_RULES.iter().map(|r| r.key()).collect();
        assert_eq!(keys, CriterionKey::ALL.to_vec());
    }

    #[test]
    fn count_hits_is_case_insensitive_and_counts_once() {
        let resume = ResumeText::new("PYTHON python Python and Docker");
        assert_eq!(resume.count_hits(&["python", "docker", "kubernetes"]), 2);
    }

    #[test]
    fn first_hit_respects_table_order() {
        let resume = ResumeText::new("Career Objective and Professional Summary");
        assert_eq!(resume.first_hit(&["summary", "objective"]), Some("summary"));
        assert_eq!(resume.first_hit(&["profile"]), None);
    }

    #[test]
    fn evaluate_uses_catalog_feedback() {
        let resume = ResumeText::new("");
        let criterion = LengthRule.evaluate(&resume);
        assert_eq!(criterion.key, CriterionKey::Length);
        assert_eq!(criterion.score, 2);
        assert_eq!(criterion.max_score, 7);
        assert!(!criterion.passed);
        assert_eq!(
            criterion.feedback,
            "Resume is too short (lacking detail) or too long (unfocused)"
        );
    }
}
