//! Contact information rule: email, phone, LinkedIn, location

use super::{CriterionRule, ResumeText};
use crate::CriterionKey;

const EMAIL_POINTS: u8 = 3;
const PHONE_POINTS: u8 = 3;
const LINKEDIN_POINTS: u8 = 1;
const LOCATION_POINTS: u8 = 1;
const MAX_POINTS: u8 = 8;

// `[A-Z|a-z]` keeps the literal `|` in the TLD class.
static_regex!(
    email_pattern,
    r"(?-u:\b)[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Z|a-z]{2,}(?-u:\b)"
);
static_regex!(phone_pattern, r"(?-u:\b)[0-9]{3}[-.]?[0-9]{3}[-.]?[0-9]{4}(?-u:\b)");
static_regex!(phone_paren_pattern, r"\([0-9]{3}\)\s*[0-9]{3}[-.]?[0-9]{4}");
static_regex!(city_state_pattern, r"(?-u:\b)[A-Z][a-z]+,\s*[A-Z]{2}(?-u:\b)");
static_regex!(zip_pattern, r"(?-u:\b)[0-9]{5}(?-u:\b)");

/// Rule for checking that a recruiter can reach the candidate
pub struct ContactInfoRule;

impl ContactInfoRule {
    pub fn has_email(text: &str) -> bool {
        email_pattern().is_match(text)
    }

    pub fn has_phone(text: &str) -> bool {
        phone_pattern().is_match(text) || phone_paren_pattern().is_match(text)
    }

    pub fn has_location(text: &str) -> bool {
        city_state_pattern().is_match(text) || zip_pattern().is_match(text)
    }
}

impl CriterionRule for ContactInfoRule {
    fn key(&self) -> CriterionKey {
        CriterionKey::Contact
    }

    fn score(&self, resume: &ResumeText<'_>) -> u8 {
        let text = resume.raw();
        let mut score = 0;

        if Self::has_email(text) {
            score += EMAIL_POINTS;
        }
        if Self::has_phone(text) {
            score += PHONE_POINTS;
        }
        if resume.mentions("linkedin") {
            score += LINKEDIN_POINTS;
        }
        if Self::has_location(text) {
            score += LOCATION_POINTS;
        }

        score.min(MAX_POINTS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(text: &str) -> u8 {
        ContactInfoRule.score(&ResumeText::new(text))
    }

    #[test]
    fn full_contact_block_scores_max() {
        let text = "Jane Doe | jane.doe@example.com | 555-123-4567 | linkedin.com/in/janedoe | Austin, TX";
        assert_eq!(score(text), 8);
    }

    #[test]
    fn empty_text_scores_zero() {
        assert_eq!(score(""), 0);
    }

    #[test]
    fn email_adds_exactly_three() {
        let base = "Jane Doe, software person";
        let with_email = format!("{} jane@example.org", base);
        assert_eq!(score(&with_email) - score(base), 3);
    }

    #[test]
    fn phone_formats() {
        assert!(ContactInfoRule::has_phone("call 5551234567"));
        assert!(ContactInfoRule::has_phone("call 555.123.4567"));
        assert!(ContactInfoRule::has_phone("call (555) 123-4567"));
        assert!(ContactInfoRule::has_phone("call (555)123.4567"));
        assert!(!ContactInfoRule::has_phone("call 555-1234"));
    }

    #[test]
    fn email_requires_alphabetic_tld() {
        assert!(ContactInfoRule::has_email("reach me at a.b+c@mail.co.uk"));
        assert!(!ContactInfoRule::has_email("reach me at someone@localhost"));
        assert!(!ContactInfoRule::has_email("reach me at someone@host.1"));
    }

    #[test]
    fn location_is_case_sensitive_for_city_state() {
        assert!(ContactInfoRule::has_location("New York, NY"));
        assert!(!ContactInfoRule::has_location("new york, ny"));
        assert!(ContactInfoRule::has_location("zip 94105"));
        assert!(!ContactInfoRule::has_location("id 941056"));
    }

    #[test]
    fn linkedin_is_case_insensitive() {
        assert_eq!(score("LinkedIn profile available"), 1);
    }

    #[test]
    fn contact_details_adjacent_to_cjk_text() {
        assert_eq!(score("邮箱jane@example.com"), 3);
        assert_eq!(score("电话5551234567"), 3);
        assert_eq!(score("邮编94105"), 1);
    }
}
