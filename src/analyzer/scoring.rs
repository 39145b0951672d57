//! Aggregation of criterion scores into a report

use super::catalog;
use crate::{Criteria, Criterion, Report, SummaryBand};

/// Calculator that turns evaluated criteria into the final report
pub struct ScoreCalculator;

impl ScoreCalculator {
    /// Sum the criteria and bucket them into strengths and improvements, in order.
    pub fn aggregate(criteria: Vec<Criterion>) -> Report {
        let mut strengths = Vec::new();
        let mut improvements = Vec::new();

        for criterion in &criteria {
            let def = catalog::definition(criterion.key);
            if criterion.passed {
                strengths.push(def.strength.to_string());
            } else {
                improvements.push(def.improvement.to_string());
            }
        }

        let criteria: Criteria = criteria.into_iter().collect();
        let total_score = Self::total(&criteria);

        Report {
            total_score,
            criteria,
            strengths,
            improvements,
            summary: Self::summary(total_score).to_string(),
        }
    }

    /// Unweighted sum; max scores add up to 100 so this is already a percentage.
    pub fn total(criteria: &Criteria) -> u8 {
        criteria.total().min(100) as u8
    }

    pub fn summary(total_score: u8) -> &'static str {
        catalog::band_summary(SummaryBand::from_score(total_score))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::catalog::CRITERIA;

    fn make_criteria(scores: [u8; 8]) -> Vec<Criterion> {
        CRITERIA
            .iter()
            .zip(scores)
            .map(|(def, score)| {
                let passed = def.passes(score);
                Criterion {
                    key: def.key,
                    name: def.name.to_string(),
                    score,
                    max_score: def.max_score,
                    feedback: def.feedback(passed).to_string(),
                    passed,
                }
            })
            .collect()
    }

    #[test]
    fn test_perfect_scores() {
        let report = ScoreCalculator::aggregate(make_criteria([8, 25, 22, 8, 15, 7, 10, 5]));
        assert_eq!(report.total_score, 100);
        assert_eq!(report.strengths.len(), 8);
        assert!(report.improvements.is_empty());
        assert!(report.summary.starts_with("Excellent!"));
    }

    #[test]
    fn test_zero_scores() {
        let report = ScoreCalculator::aggregate(make_criteria([0; 8]));
        assert_eq!(report.total_score, 0);
        assert!(report.strengths.is_empty());
        assert_eq!(report.improvements.len(), 8);
        assert!(report.summary.starts_with("Needs Improvement."));
    }

    #[test]
    fn test_buckets_keep_evaluation_order() {
        // contact passes, keywords fails, experience passes, rest fail
        let report = ScoreCalculator::aggregate(make_criteria([6, 19, 18, 0, 0, 0, 0, 0]));
        assert_eq!(
            report.strengths,
            vec![
                "Complete contact information provided".to_string(),
                "Strong work history with quantifiable impact statements".to_string(),
            ]
        );
        assert_eq!(report.improvements.len(), 6);
        assert!(report.improvements[0].starts_with("Mirror keywords"));
        assert_eq!(report.total_score, 43);
    }

    #[test]
    fn test_summary_bands() {
        assert!(ScoreCalculator::summary(80).starts_with("Excellent!"));
        assert!(ScoreCalculator::summary(79).starts_with("Good!"));
        assert!(ScoreCalculator::summary(65).starts_with("Good!"));
        assert!(ScoreCalculator::summary(64).starts_with("Fair."));
        assert!(ScoreCalculator::summary(50).starts_with("Fair."));
        assert!(ScoreCalculator::summary(49).starts_with("Needs Improvement."));
    }

    #[test]
    fn test_threshold_boundary_is_inclusive() {
        let report = ScoreCalculator::aggregate(make_criteria([8, 20, 0, 0, 0, 0, 0, 0]));
        let keywords = report.criterion(crate::CriterionKey::Keywords).unwrap();
        assert!(keywords.passed);
        assert_eq!(
            keywords.feedback,
            "Strong keyword optimization with industry-relevant terms"
        );
    }
}
