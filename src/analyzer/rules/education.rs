//! Education rule: section, degree, graduation year, certifications

use super::{CriterionRule, ResumeText};
use crate::CriterionKey;

pub const DEGREES: [&str; 15] = [
    "bachelor", "master", "phd", "doctorate", "associate", "diploma", "b.s.", "m.s.", "b.a.",
    "m.a.", "mba", "b.sc", "m.sc", "b.tech", "m.tech",
];

pub const CERTIFICATIONS: [&str; 12] = [
    "certification",
    "certified",
    "certificate",
    "credential",
    "aws certified",
    "pmp",
    "cissp",
    "comptia",
    "scrum master",
    "google certified",
    "microsoft certified",
    "oracle certified",
];

const SECTION_POINTS: u8 = 2;
const DEGREE_POINTS: u8 = 3;
const YEAR_POINTS: u8 = 1;
const CERTIFICATION_POINTS: u8 = 2;
const MAX_POINTS: u8 = 8;

static_regex!(year_pattern, r"(?-u:\b)(19|20)[0-9]{2}(?-u:\b)");

pub struct EducationRule;

impl CriterionRule for EducationRule {
    fn key(&self) -> CriterionKey {
        CriterionKey::Education
    }

    fn score(&self, resume: &ResumeText<'_>) -> u8 {
        let mut score = 0;

        if resume.mentions("education") {
            score += SECTION_POINTS;
        }
        if resume.first_hit(&DEGREES).is_some() {
            score += DEGREE_POINTS;
        }
        if year_pattern().is_match(resume.raw()) {
            score += YEAR_POINTS;
        }
        if resume.first_hit(&CERTIFICATIONS).is_some() {
            score += CERTIFICATION_POINTS;
        }

        score.min(MAX_POINTS)
    }
}
