//! Action verbs rule: variety of impact-oriented verbs

use super::{CriterionRule, ResumeText};
use crate::CriterionKey;

pub const ACTION_VERBS: [&str; 42] = [
    "led",
    "developed",
    "created",
    "managed",
    "implemented",
    "designed",
    "built",
    "improved",
    "increased",
    "reduced",
    "achieved",
    "delivered",
    "launched",
    "collaborated",
    "coordinated",
    "spearheaded",
    "orchestrated",
    "pioneered",
    "optimized",
    "streamlined",
    "transformed",
    "drove",
    "executed",
    "established",
    "accelerated",
    "scaled",
    "architected",
    "engineered",
    "automated",
    "migrated",
    "deployed",
    "integrated",
    "analyzed",
    "resolved",
    "enhanced",
    "generated",
    "facilitated",
    "mentored",
    "trained",
    "directed",
    "supervised",
    "oversaw",
];

pub struct ActionVerbsRule;

impl ActionVerbsRule {
    /// Points for the number of distinct verbs found
    pub fn points_for(verb_hits: usize) -> u8 {
        match verb_hits {
            12.. => 10,
            9..=11 => 8,
            6..=8 => 6,
            4..=5 => 4,
            2..=3 => 2,
            _ => 1,
        }
    }
}

impl CriterionRule for ActionVerbsRule {
    fn key(&self) -> CriterionKey {
        CriterionKey::ActionVerbs
    }

    fn score(&self, resume: &ResumeText<'_>) -> u8 {
        Self::points_for(resume.count_hits(&ACTION_VERBS))
    }
}
