//! Fixed criterion constants and the user-visible sentences attached to them.
//!
//! Every string here is shown to end users verbatim; keep edits deliberate.

use crate::{CriterionKey, SummaryBand};

/// Compile-time description of one criterion
#[derive(Debug, Clone, Copy)]
pub struct CriterionDef {
    pub key: CriterionKey,
    pub name: &'static str,
    pub max_score: u8,
    pub pass_threshold: u8,
    pub pass_feedback: &'static str,
    pub fail_feedback: &'static str,
    pub strength: &'static str,
    pub improvement: &'static str,
}

impl CriterionDef {
    pub fn passes(&self, score: u8) -> bool {
        score >= self.pass_threshold
    }

    pub fn feedback(&self, passed: bool) -> &'static str {
        if passed {
            self.pass_feedback
        } else {
            self.fail_feedback
        }
    }
}

/// All criteria in evaluation order. Max scores sum to 100.
pub const CRITERIA: [CriterionDef; 8] = [
    CriterionDef {
        key: CriterionKey::Contact,
        name: "Contact Information",
        max_score: 8,
        pass_threshold: 6,
        pass_feedback: "Complete contact information found",
        fail_feedback: "Missing some contact details (email, phone, LinkedIn)",
        strength: "Complete contact information provided",
        improvement: "Add missing contact details (email, phone, LinkedIn profile)",
    },
    CriterionDef {
        key: CriterionKey::Keywords,
        name: "Keywords & Skills Match",
        max_score: 25,
        pass_threshold: 20,
        pass_feedback: "Strong keyword optimization with industry-relevant terms",
        fail_feedback:
            "Insufficient keywords - add role-specific technical skills and industry terms",
        strength: "Excellent keyword density and technical skill coverage",
        improvement: "Mirror keywords from target job descriptions. Include both full terms and acronyms (e.g., \"Search Engine Optimization (SEO)\")",
    },
    CriterionDef {
        key: CriterionKey::Experience,
        name: "Work Experience & Achievements",
        max_score: 22,
        pass_threshold: 18,
        pass_feedback: "Well-documented work experience with quantifiable achievements",
        fail_feedback: "Add more measurable results with specific metrics and numbers",
        strength: "Strong work history with quantifiable impact statements",
        improvement: "Use the formula: Action Verb + Task + Measurable Result (e.g., \"Increased revenue by 30% through new marketing strategy\")",
    },
    CriterionDef {
        key: CriterionKey::Education,
        name: "Education & Certifications",
        max_score: 8,
        pass_threshold: 6,
        pass_feedback: "Education and certifications properly documented",
        fail_feedback: "Add degree, institution, graduation date, and relevant certifications",
        strength: "Complete education and certification information",
        improvement: "Include all degrees, certifications, and professional development courses",
    },
    CriterionDef {
        key: CriterionKey::Formatting,
        name: "ATS-Friendly Formatting",
        max_score: 15,
        pass_threshold: 12,
        pass_feedback: "Clean formatting optimized for ATS parsing",
        fail_feedback: "Avoid tables, columns, headers/footers, and graphics. Use standard section headings",
        strength: "Resume uses ATS-parseable formatting",
        improvement: "Use reverse-chronological format with standard headings: Summary, Experience, Education, Skills. Avoid text boxes and special characters",
    },
    CriterionDef {
        key: CriterionKey::Length,
        name: "Resume Length & Content Density",
        max_score: 7,
        pass_threshold: 5,
        pass_feedback: "Optimal resume length (1-2 pages, 400-800 words)",
        fail_feedback: "Resume is too short (lacking detail) or too long (unfocused)",
        strength: "Appropriate resume length with focused content",
        improvement: "Target 1 page for <10 years experience, 2 pages for 10+ years",
    },
    CriterionDef {
        key: CriterionKey::ActionVerbs,
        name: "Action Verbs & Impact",
        max_score: 10,
        pass_threshold: 8,
        pass_feedback: "Strong action verbs demonstrate clear impact",
        fail_feedback: "Replace passive language with powerful action verbs (Led, Achieved, Optimized, Spearheaded)",
        strength: "Compelling action-oriented language throughout",
        improvement: "Start all bullet points with strong action verbs in past tense",
    },
    CriterionDef {
        key: CriterionKey::Summary,
        name: "Professional Summary",
        max_score: 5,
        pass_threshold: 4,
        pass_feedback: "Clear professional summary with key qualifications",
        fail_feedback: "Add a 2-3 sentence summary highlighting your value proposition",
        strength: "Strong professional summary captures key qualifications",
        improvement: "Add a summary at the top with your title, years of experience, and top skills",
    },
];

/// Look up the definition of a criterion key
pub fn definition(key: CriterionKey) -> &'static CriterionDef {
    match key {
        CriterionKey::Contact => &CRITERIA[0],
        CriterionKey::Keywords => &CRITERIA[1],
        CriterionKey::Experience => &CRITERIA[2],
        CriterionKey::Education => &CRITERIA[3],
        CriterionKey::Formatting => &CRITERIA[4],
        CriterionKey::Length => &CRITERIA[5],
        CriterionKey::ActionVerbs => &CRITERIA[6],
        CriterionKey::Summary => &CRITERIA[7],
    }
}

/// Summary sentence for a score band
pub fn band_summary(band: SummaryBand) -> &'static str {
    match band {
        SummaryBand::Excellent => "Excellent! Your resume is highly ATS-optimized and should perform well in automated screening systems. You have a strong match rate.",
        SummaryBand::Good => "Good! Your resume is ATS-friendly with minor improvements needed to maximize your chances. You're above the 65% success threshold.",
        SummaryBand::Fair => "Fair. Your resume needs several improvements to pass through ATS systems effectively. Focus on keywords and formatting.",
        SummaryBand::NeedsImprovement => "Needs Improvement. Significant changes are required to make your resume ATS-compatible. Priority: add keywords and quantifiable achievements.",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn max_scores_sum_to_100() {
        let sum: u32 = CRITERIA.iter().map(|c| c.max_score as u32).sum();
        assert_eq!(sum, 100);
    }

    #[test]
    fn catalog_order_matches_key_order() {
        let keys: Vec<CriterionKey> = CRITERIA.iter().map(|c| c.key).collect();
        assert_eq!(keys, CriterionKey::ALL.to_vec());
        for key in CriterionKey::ALL {
            assert_eq!(definition(key).key, key);
        }
    }

    #[test]
    fn thresholds_within_max() {
        for c in &CRITERIA {
            assert!(c.pass_threshold <= c.max_score, "{}", c.name);
            assert!(c.pass_threshold > 0, "{}", c.name);
        }
    }

    #[test]
    fn feedback_selects_variant() {
        let contact = definition(CriterionKey::Contact);
        assert!(contact.passes(6));
        assert!(!contact.passes(5));
        assert_eq!(contact.feedback(true), "Complete contact information found");
        assert_eq!(
            contact.feedback(false),
            "Missing some contact details (email, phone, LinkedIn)"
        );
    }

    #[test]
    fn band_summaries_open_with_band_name() {
        assert!(band_summary(SummaryBand::Excellent).starts_with("Excellent!"));
        assert!(band_summary(SummaryBand::Good).starts_with("Good!"));
        assert!(band_summary(SummaryBand::Fair).starts_with("Fair."));
        assert!(band_summary(SummaryBand::NeedsImprovement).starts_with("Needs Improvement."));
    }
}
