//! Keywords & skills rule: technical terms, soft skills, skills section heading

use super::{CriterionRule, ResumeText};
use crate::CriterionKey;

pub const TECH_KEYWORDS: [&str; 65] = [
    "python",
    "java",
    "javascript",
    "typescript",
    "react",
    "angular",
    "vue",
    "node.js",
    "flutter",
    "dart",
    "kotlin",
    "swift",
    "sql",
    "nosql",
    "mongodb",
    "postgresql",
    "aws",
    "azure",
    "gcp",
    "cloud",
    "api",
    "rest",
    "graphql",
    "microservices",
    "agile",
    "scrum",
    "kanban",
    "git",
    "docker",
    "kubernetes",
    "ci/cd",
    "devops",
    "machine learning",
    "ai",
    "artificial intelligence",
    "data analysis",
    "data science",
    "project management",
    "leadership",
    "team management",
    "stakeholder management",
    "testing",
    "automation",
    "security",
    "performance optimization",
    "scalability",
    "html",
    "css",
    "sass",
    "webpack",
    "redux",
    "next.js",
    "express",
    "django",
    "flask",
    "spring",
    "hibernate",
    ".net",
    "c#",
    "c++",
    "go",
    "rust",
    "ruby",
    "rails",
    "php",
];

pub const SOFT_SKILLS: [&str; 9] = [
    "communication",
    "collaboration",
    "problem-solving",
    "critical thinking",
    "leadership",
    "teamwork",
    "adaptability",
    "time management",
    "strategic planning",
];

const SKILLS_SECTION_BONUS: u8 = 2;
const MAX_POINTS: u8 = 25;

static_regex!(
    skills_heading_pattern,
    r"(?i)(?-u:\b)(skills|technical skills|core competencies|expertise)(?-u:\b)"
);

/// Rule for keyword density, the signal ATS ranking leans on most
pub struct KeywordsRule;

impl KeywordsRule {
    /// Base points from the number of distinct technical terms present
    pub fn base_points(tech_hits: usize) -> u8 {
        match tech_hits {
            15.. => 20,
            12..=14 => 17,
            9..=11 => 14,
            6..=8 => 11,
            3..=5 => 8,
            _ => 4,
        }
    }

    pub fn soft_skill_bonus(soft_hits: usize) -> u8 {
        match soft_hits {
            4.. => 3,
            2..=3 => 2,
            1 => 1,
            _ => 0,
        }
    }

    pub fn has_skills_section(text: &str) -> bool {
        skills_heading_pattern().is_match(text)
    }
}

impl CriterionRule for KeywordsRule {
    fn key(&self) -> CriterionKey {
        CriterionKey::Keywords
    }

    fn score(&self, resume: &ResumeText<'_>) -> u8 {
        let tech_hits = resume.count_hits(&TECH_KEYWORDS);
        let soft_hits = resume.count_hits(&SOFT_SKILLS);

        let mut score = Self::base_points(tech_hits) + Self::soft_skill_bonus(soft_hits);
        if Self::has_skills_section(resume.raw()) {
            score += SKILLS_SECTION_BONUS;
        }

        score.min(MAX_POINTS)
    }
}
