//! Config schema and deserialization

use crate::extract::{ExtractLimits, DEFAULT_MAX_FILE_SIZE_MB, DEFAULT_MIN_TEXT_LENGTH};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Language-model critique settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NarrativeConfig {
    /// Request a critique for every scored file
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,

    /// Model name (default: GEMINI_MODEL or gemini-2.0-flash)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
}

/// Per-path override configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigOverride {
    /// Glob patterns this override applies to
    pub files: Vec<String>,

    /// Optional threshold override for matched files
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub threshold: Option<u8>,
}

/// Root config structure for .atscorerc.json
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Extend another config file (path relative to this config)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extends: Option<String>,

    /// Minimum score (exit 1 if below)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub threshold: Option<u8>,

    /// Glob patterns for files/directories to skip
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ignore: Vec<String>,

    /// Resume file suffixes (default: .pdf, .txt, .md)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub file_patterns: Vec<String>,

    /// Minimum extracted characters for a usable resume
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_text_length: Option<usize>,

    /// Upload size limit in megabytes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_file_size_mb: Option<u64>,

    #[serde(default)]
    pub narrative: NarrativeConfig,

    /// Per-path thresholds (e.g. stricter for senior roles)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub overrides: Vec<ConfigOverride>,
}

impl Config {
    /// Merge CLI overrides into config. CLI values take precedence.
    pub fn merge_with_cli(mut self, cli_threshold: Option<u8>, cli_narrative: bool) -> Self {
        if cli_threshold.is_some() {
            self.threshold = cli_threshold;
        }
        if cli_narrative {
            self.narrative.enabled = Some(true);
        }
        self
    }

    /// Threshold for one file, applying matching overrides in order
    pub fn threshold_for(&self, file_path: &Path) -> Option<u8> {
        self.overrides
            .iter()
            .filter(|o| Self::matches_override(file_path, &o.files))
            .filter_map(|o| o.threshold)
            .last()
            .or(self.threshold)
    }

    /// Check if a file path matches any of the override patterns
    fn matches_override(file_path: &Path, patterns: &[String]) -> bool {
        patterns.iter().any(|pattern| match globset::Glob::new(pattern) {
            Ok(glob) => glob.compile_matcher().is_match(file_path),
            Err(_) => false,
        })
    }

    /// Merge another config into this one (for extends)
    pub fn merge_from(&mut self, base: Config) {
        // Base values are overridden by this config's values
        if self.threshold.is_none() {
            self.threshold = base.threshold;
        }
        if self.extends.is_none() {
            self.extends = base.extends;
        }
        if self.min_text_length.is_none() {
            self.min_text_length = base.min_text_length;
        }
        if self.max_file_size_mb.is_none() {
            self.max_file_size_mb = base.max_file_size_mb;
        }
        if self.file_patterns.is_empty() {
            self.file_patterns = base.file_patterns;
        }
        if self.narrative.enabled.is_none() {
            self.narrative.enabled = base.narrative.enabled;
        }
        if self.narrative.model.is_none() {
            self.narrative.model = base.narrative.model;
        }

        let mut all_ignores = base.ignore;
        all_ignores.append(&mut self.ignore);
        self.ignore = all_ignores;

        // Prepend base overrides so this config's entries win
        let mut all_overrides = base.overrides;
        all_overrides.append(&mut self.overrides);
        self.overrides = all_overrides;
    }

    /// Resume file suffixes to collect
    pub fn get_file_patterns(&self) -> Vec<&str> {
        if self.file_patterns.is_empty() {
            vec![".pdf", ".txt", ".md"]
        } else {
            self.file_patterns.iter().map(|s| s.as_str()).collect()
        }
    }

    pub fn extract_limits(&self) -> ExtractLimits {
        ExtractLimits {
            min_text_length: self.min_text_length.unwrap_or(DEFAULT_MIN_TEXT_LENGTH),
            max_file_size_mb: self.max_file_size_mb.unwrap_or(DEFAULT_MAX_FILE_SIZE_MB),
        }
    }

    pub fn narrative_enabled(&self) -> bool {
        self.narrative.enabled.unwrap_or(false)
    }
}
