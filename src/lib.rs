//! atscore: ATS compatibility scorer for resumes
//!
//! This library scores extracted resume text against a fixed set of heuristic
//! criteria (contact details, keyword coverage, quantified achievements,
//! formatting, ...) and produces a 0-100 composite score with feedback.
//! Text extraction and the optional language-model critique live at the edges
//! (`extract`, `narrative`); the scoring itself is a pure function of the text.

pub mod analyzer;
pub mod config;
pub mod extract;
pub mod narrative;
pub mod reporter;

use regex::Regex;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::OnceLock;

/// Score a resume's plain text. Never fails; empty input yields a near-zero report.
pub fn score(resume_text: &str) -> Report {
    analyzer::ScoringEngine::new().score_text(resume_text)
}

/// Whitespace-delimited, non-empty token count.
///
/// The separator set includes U+FEFF (BOM) and excludes U+0085 (NEL), unlike
/// `char::is_whitespace`.
pub fn count_words(text: &str) -> usize {
    static WHITESPACE: OnceLock<Regex> = OnceLock::new();
    let whitespace = WHITESPACE.get_or_init(|| {
        Regex::new(
            r"[\t\n\x0B\x0C\r \x{00A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}]+",
        )
        .unwrap()
    });
    whitespace.split(text).filter(|word| !word.is_empty()).count()
}

/// The complete ATS report for one resume
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    /// Sum of all criterion scores (0-100)
    pub total_score: u8,
    /// Criteria keyed by identifier, in evaluation order
    pub criteria: Criteria,
    /// One sentence per passed criterion
    pub strengths: Vec<String>,
    /// One sentence per failed criterion
    pub improvements: Vec<String>,
    /// Overall verdict chosen by score band
    pub summary: String,
}

impl Report {
    pub fn band(&self) -> SummaryBand {
        SummaryBand::from_score(self.total_score)
    }

    pub fn criterion(&self, key: CriterionKey) -> Option<&Criterion> {
        self.criteria.get(key)
    }
}

/// One scored dimension of resume quality
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Criterion {
    /// Identifier, unique within a report
    pub key: CriterionKey,
    /// Human-readable name (e.g. "Keywords & Skills Match")
    pub name: String,
    /// Points earned (0..=max_score)
    pub score: u8,
    /// Points available for this criterion
    pub max_score: u8,
    /// Pass or fail feedback line
    pub feedback: String,
    /// Whether the score reached the pass threshold
    pub passed: bool,
}

/// Criterion identifiers in evaluation order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CriterionKey {
    Contact,
    Keywords,
    Experience,
    Education,
    Formatting,
    Length,
    ActionVerbs,
    Summary,
}

impl CriterionKey {
    pub const ALL: [CriterionKey; 8] = [
        CriterionKey::Contact,
        CriterionKey::Keywords,
        CriterionKey::Experience,
        CriterionKey::Education,
        CriterionKey::Formatting,
        CriterionKey::Length,
        CriterionKey::ActionVerbs,
        CriterionKey::Summary,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CriterionKey::Contact => "contact",
            CriterionKey::Keywords => "keywords",
            CriterionKey::Experience => "experience",
            CriterionKey::Education => "education",
            CriterionKey::Formatting => "formatting",
            CriterionKey::Length => "length",
            CriterionKey::ActionVerbs => "actionVerbs",
            CriterionKey::Summary => "summary",
        }
    }
}

impl fmt::Display for CriterionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CriterionKey {
    type Err = String;

    /// Accepts the report key (`actionVerbs`) as well as kebab/snake spellings.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .collect::<String>()
            .to_lowercase();
        CriterionKey::ALL
            .into_iter()
            .find(|k| k.as_str().to_lowercase() == normalized)
            .ok_or_else(|| {
                let known: Vec<&str> = CriterionKey::ALL.iter().map(|k| k.as_str()).collect();
                format!("unknown criterion '{}' (expected one of: {})", s, known.join(", "))
            })
    }
}

/// Ordered criterion collection, serialized as a JSON object keyed by criterion key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Criteria(Vec<Criterion>);

impl Criteria {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Append a criterion; a repeated key replaces the earlier entry in place.
    pub fn insert(&mut self, criterion: Criterion) {
        match self.0.iter_mut().find(|c| c.key == criterion.key) {
            Some(existing) => *existing = criterion,
            None => self.0.push(criterion),
        }
    }

    pub fn get(&self, key: CriterionKey) -> Option<&Criterion> {
        self.0.iter().find(|c| c.key == key)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Criterion> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn total(&self) -> u32 {
        self.0.iter().map(|c| c.score as u32).sum()
    }
}

impl<'a> IntoIterator for &'a Criteria {
    type Item = &'a Criterion;
    type IntoIter = std::slice::Iter<'a, Criterion>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<Criterion> for Criteria {
    fn from_iter<I: IntoIterator<Item = Criterion>>(iter: I) -> Self {
        let mut criteria = Criteria::new();
        for criterion in iter {
            criteria.insert(criterion);
        }
        criteria
    }
}

impl Serialize for Criteria {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for criterion in &self.0 {
            map.serialize_entry(criterion.key.as_str(), criterion)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Criteria {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct CriteriaVisitor;

        impl<'de> Visitor<'de> for CriteriaVisitor {
            type Value = Criteria;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of criterion key to criterion")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Criteria, A::Error> {
                let mut criteria = Criteria::new();
                while let Some((_key, criterion)) = access.next_entry::<String, Criterion>()? {
                    criteria.insert(criterion);
                }
                Ok(criteria)
            }
        }

        deserializer.deserialize_map(CriteriaVisitor)
    }
}

/// Verdict band for a total score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SummaryBand {
    Excellent,
    Good,
    Fair,
    NeedsImprovement,
}

impl SummaryBand {
    pub fn from_score(score: u8) -> Self {
        match score {
            80..=u8::MAX => SummaryBand::Excellent,
            65..=79 => SummaryBand::Good,
            50..=64 => SummaryBand::Fair,
            _ => SummaryBand::NeedsImprovement,
        }
    }
}

impl fmt::Display for SummaryBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SummaryBand::Excellent => write!(f, "Excellent"),
            SummaryBand::Good => write!(f, "Good"),
            SummaryBand::Fair => write!(f, "Fair"),
            SummaryBand::NeedsImprovement => write!(f, "Needs Improvement"),
        }
    }
}

/// A report tied to the file it came from
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredResume {
    /// Path to the scored resume
    pub file_path: PathBuf,
    /// Words in the normalized text
    pub word_count: usize,
    /// The ATS report
    pub report: Report,
    /// Language-model critique, when requested
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub narrative: Option<String>,
}
