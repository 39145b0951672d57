//! Professional summary rule: summary section, years of experience, title, value proposition

use super::{CriterionRule, ResumeText};
use crate::CriterionKey;

pub const SUMMARY_SECTIONS: [&str; 8] = [
    "summary",
    "professional summary",
    "career summary",
    "profile",
    "objective",
    "career objective",
    "professional profile",
    "about",
];

pub const TITLE_INDICATORS: [&str; 10] = [
    "software engineer",
    "developer",
    "manager",
    "analyst",
    "designer",
    "consultant",
    "specialist",
    "director",
    "architect",
    "lead",
];

pub const VALUE_PHRASES: [&str; 9] = [
    "proven",
    "experienced",
    "skilled",
    "expertise in",
    "specializing in",
    "passionate",
    "dedicated",
    "results-driven",
    "track record",
];

const SECTION_POINTS: u8 = 2;
const MAX_POINTS: u8 = 5;

static_regex!(
    years_of_experience_pattern,
    r"(?i)[0-9]+\+?\s*(years?|yrs?)(\s+of)?\s+(experience|expertise)"
);

pub struct ProfessionalSummaryRule;

impl ProfessionalSummaryRule {
    pub fn states_years_of_experience(text: &str) -> bool {
        years_of_experience_pattern().is_match(text)
    }
}

impl CriterionRule for ProfessionalSummaryRule {
    fn key(&self) -> CriterionKey {
        CriterionKey::Summary
    }

    fn score(&self, resume: &ResumeText<'_>) -> u8 {
        let mut score = 0;

        if resume.first_hit(&SUMMARY_SECTIONS).is_some() {
            score += SECTION_POINTS;
        }
        if Self::states_years_of_experience(resume.raw()) {
            score += 1;
        }
        if resume.first_hit(&TITLE_INDICATORS).is_some() {
            score += 1;
        }
        if resume.first_hit(&VALUE_PHRASES).is_some() {
            score += 1;
        }

        score.min(MAX_POINTS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(text: &str) -> u8 {
        ProfessionalSummaryRule.score(&ResumeText::new(text))
    }

    #[test]
    fn complete_summary() {
        let text = "Professional Summary: Results-driven software engineer with 8+ years of experience";
        assert_eq!(score(text), 5);
    }

    #[test]
    fn years_phrase_variants() {
        assert!(ProfessionalSummaryRule::states_years_of_experience("5 years experience"));
        assert!(ProfessionalSummaryRule::states_years_of_experience("10+ yrs of expertise"));
        assert!(ProfessionalSummaryRule::states_years_of_experience("1 Year of Experience"));
        assert!(!ProfessionalSummaryRule::states_years_of_experience("years of experience"));
    }

    #[test]
    fn section_keywords_award_once() {
        assert_eq!(score("Summary, Objective, Profile"), 2);
    }

    #[test]
    fn empty_text_scores_zero() {
        assert_eq!(score(""), 0);
    }
}
