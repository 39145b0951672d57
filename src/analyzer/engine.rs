//! Scoring engine - runs every criterion rule and batches files

use crate::extract::{self, ExtractLimits};
use crate::{count_words, Report, ScoredResume, SummaryBand};
use anyhow::{Context, Result};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::rules::{CriterionRule, ResumeText, DEFAULT_RULES};
use super::ScoreCalculator;

/// Main scoring engine that orchestrates all rules
pub struct ScoringEngine {
    /// Rules in evaluation order
    rules: &'static [&'static dyn CriterionRule],
    /// Limits applied when reading resume files
    limits: ExtractLimits,
}

impl ScoringEngine {
    /// Create a new scoring engine with the default rules and limits
    pub fn new() -> Self {
        Self {
            rules: &DEFAULT_RULES,
            limits: ExtractLimits::default(),
        }
    }

    /// Override file extraction limits
    pub fn with_limits(mut self, limits: ExtractLimits) -> Self {
        self.limits = limits;
        self
    }

    pub fn limits(&self) -> &ExtractLimits {
        &self.limits
    }

    /// Score already-extracted resume text
    pub fn score_text(&self, text: &str) -> Report {
        let resume = ResumeText::new(text);
        let criteria = self.rules.iter().map(|rule| rule.evaluate(&resume)).collect();
        ScoreCalculator::aggregate(criteria)
    }

    /// Extract a resume file and score it
    pub fn score_file(&self, path: &Path) -> Result<ScoredResume> {
        self.score_file_with_text(path).map(|(result, _)| result)
    }

    /// Like [`score_file`](Self::score_file), also handing back the normalized text
    /// so callers can reuse it without extracting the file again.
    pub fn score_file_with_text(&self, path: &Path) -> Result<(ScoredResume, String)> {
        let text = extract::extract_file(path, &self.limits)
            .with_context(|| format!("Failed to extract resume text: {}", path.display()))?;

        let report = self.score_text(&text);
        let word_count = count_words(&text);
        debug!(
            path = %path.display(),
            words = word_count,
            score = report.total_score,
            "scored resume"
        );

        let result = ScoredResume {
            file_path: path.to_path_buf(),
            word_count,
            report,
            narrative: None,
        };
        Ok((result, text))
    }

    /// Score multiple files sequentially
    pub fn score_many(&self, paths: &[PathBuf]) -> Vec<Result<ScoredResume>> {
        paths.iter().map(|p| self.score_file(p)).collect()
    }

    /// Score multiple files in parallel using rayon
    pub fn score_parallel(&self, paths: &[PathBuf]) -> Vec<Result<ScoredResume>> {
        use rayon::prelude::*;

        paths.par_iter().map(|p| self.score_file(p)).collect()
    }

    /// Get aggregate stats from multiple results
    pub fn aggregate_stats(results: &[ScoredResume]) -> AggregateStats {
        if results.is_empty() {
            return AggregateStats::default();
        }

        let total_score: u32 = results.iter().map(|r| r.report.total_score as u32).sum();
        let average_score = (total_score / results.len() as u32) as u8;

        let (passed, failed): (Vec<bool>, Vec<bool>) = results
            .iter()
            .flat_map(|r| r.report.criteria.iter().map(|c| c.passed))
            .partition(|passed| *passed);

        AggregateStats {
            files_scored: results.len(),
            average_score,
            average_band: SummaryBand::from_score(average_score),
            passed_criteria: passed.len(),
            failed_criteria: failed.len(),
        }
    }
}

impl Default for ScoringEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Aggregate statistics from multiple scored resumes
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregateStats {
    /// Number of files scored
    pub files_scored: usize,
    /// Floor of the mean total score
    pub average_score: u8,
    /// Band of the average score
    pub average_band: SummaryBand,
    /// Passed criteria across all files
    pub passed_criteria: usize,
    /// Failed criteria across all files
    pub failed_criteria: usize,
}

impl Default for AggregateStats {
    fn default() -> Self {
        Self {
            files_scored: 0,
            average_score: 0,
            average_band: SummaryBand::NeedsImprovement,
            passed_criteria: 0,
            failed_criteria: 0,
        }
    }
}
