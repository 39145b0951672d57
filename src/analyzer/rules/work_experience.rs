//! Work experience rule: section presence, job titles, quantified results, dates

use super::{CriterionRule, ResumeText};
use crate::CriterionKey;

pub const EXPERIENCE_SECTIONS: [&str; 4] = [
    "experience",
    "employment",
    "work history",
    "professional experience",
];

pub const JOB_TITLES: [&str; 17] = [
    "developer",
    "engineer",
    "manager",
    "director",
    "analyst",
    "designer",
    "consultant",
    "specialist",
    "coordinator",
    "lead",
    "senior",
    "architect",
    "administrator",
    "technician",
    "associate",
    "executive",
    "officer",
];

const SECTION_POINTS: u8 = 4;
const DATE_POINTS: u8 = 5;
const MAX_POINTS: u8 = 22;

static_regex!(percent_pattern, r"[0-9]+%");
static_regex!(dollar_pattern, r"\$[0-9]+[KMB]?");
static_regex!(
    headcount_pattern,
    r"(?i)[0-9]+\+?\s*(users|customers|clients|employees|team members)"
);
static_regex!(multiplier_pattern, r"(?i)[0-9]+x");

static_regex!(year_range_pattern, r"[0-9]{4}\s*[-–]\s*[0-9]{4}");
static_regex!(ongoing_pattern, r"(?i)[0-9]{4}\s*[-–]\s*(Present|Current)");
static_regex!(
    month_year_pattern,
    r"(?i)(Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Oct|Nov|Dec)[a-z]*\s+[0-9]{4}"
);

/// Rule for a documented work history with measurable impact
pub struct WorkExperienceRule;

impl WorkExperienceRule {
    /// Total metric matches across percentages, dollar amounts, headcounts and multipliers
    pub fn count_metrics(text: &str) -> usize {
        [
            percent_pattern(),
            dollar_pattern(),
            headcount_pattern(),
            multiplier_pattern(),
        ]
        .iter()
        .map(|re| re.find_iter(text).count())
        .sum()
    }

    pub fn title_points(title_hits: usize) -> u8 {
        match title_hits {
            3.. => 5,
            1..=2 => 3,
            _ => 0,
        }
    }

    pub fn metric_points(metric_count: usize) -> u8 {
        match metric_count {
            5.. => 8,
            3..=4 => 6,
            1..=2 => 3,
            _ => 0,
        }
    }

    pub fn has_date_ranges(text: &str) -> bool {
        year_range_pattern().is_match(text)
            || ongoing_pattern().is_match(text)
            || month_year_pattern().is_match(text)
    }
}

impl CriterionRule for WorkExperienceRule {
    fn key(&self) -> CriterionKey {
        CriterionKey::Experience
    }

    fn score(&self, resume: &ResumeText<'_>) -> u8 {
        let mut score = 0;

        if resume.first_hit(&EXPERIENCE_SECTIONS).is_some() {
            score += SECTION_POINTS;
        }
        score += Self::title_points(resume.count_hits(&JOB_TITLES));
        score += Self::metric_points(Self::count_metrics(resume.raw()));
        if Self::has_date_ranges(resume.raw()) {
            score += DATE_POINTS;
        }

        score.min(MAX_POINTS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(text: &str) -> u8 {
        WorkExperienceRule.score(&ResumeText::new(text))
    }

    #[test]
    fn metrics_are_summed_across_pattern_kinds() {
        // 30%, $2M, 500 users, 3x
        let text = "Cut costs 30%, saved $2M, served 500 users, 3x throughput";
        assert_eq!(WorkExperienceRule::count_metrics(text), 4);
    }

    #[test]
    fn dollar_amounts_match_with_or_without_suffix() {
        assert_eq!(WorkExperienceRule::count_metrics("$50K budget"), 1);
        assert_eq!(WorkExperienceRule::count_metrics("$50k budget"), 1);
        assert_eq!(WorkExperienceRule::count_metrics("budget"), 0);
    }

    #[test]
    fn headcount_allows_plus_and_case() {
        assert_eq!(WorkExperienceRule::count_metrics("Managed 12+ Team Members"), 1);
        assert_eq!(WorkExperienceRule::count_metrics("10000 customers"), 1);
    }

    #[test]
    fn date_formats() {
        assert!(WorkExperienceRule::has_date_ranges("2019 - 2023"));
        assert!(WorkExperienceRule::has_date_ranges("2019–2023"));
        assert!(WorkExperienceRule::has_date_ranges("2021 - present"));
        assert!(WorkExperienceRule::has_date_ranges("September 2020"));
        assert!(!WorkExperienceRule::has_date_ranges("worked for 3 years"));
    }

    #[test]
    fn metric_point_steps() {
        assert_eq!(WorkExperienceRule::metric_points(0), 0);
        assert_eq!(WorkExperienceRule::metric_points(1), 3);
        assert_eq!(WorkExperienceRule::metric_points(3), 6);
        assert_eq!(WorkExperienceRule::metric_points(5), 8);
    }

    #[test]
    fn complete_history_scores_max() {
        let text = "Professional Experience\n\
                    Senior Software Engineer, Team Lead - Jan 2019 - Present\n\
                    Grew revenue 40%, cut latency 60%, saved $1M, onboarded 2000 users, 5x faster deploys";
        assert_eq!(score(text), 22);
    }

    #[test]
    fn empty_text_scores_zero() {
        assert_eq!(score(""), 0);
    }
}
