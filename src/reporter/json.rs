//! JSON reporter for machine-readable output

use crate::analyzer::AggregateStats;
use crate::ScoredResume;
use serde::Serialize;

/// Reporter for JSON output
pub struct JsonReporter {
    /// Whether to pretty-print JSON
    pretty: bool,
}

impl JsonReporter {
    /// Create a new JSON reporter
    pub fn new() -> Self {
        Self { pretty: false }
    }

    /// Enable pretty-printing
    pub fn pretty(mut self) -> Self {
        self.pretty = true;
        self
    }

    /// Report a single scored resume as JSON
    pub fn report(&self, result: &ScoredResume) -> String {
        self.render(result, "{}")
    }

    /// Report multiple results as JSON array
    pub fn report_many(&self, results: &[ScoredResume]) -> String {
        self.render(results, "[]")
    }

    /// Report with summary and generation timestamp
    pub fn report_with_summary(&self, results: &[ScoredResume], stats: &AggregateStats) -> String {
        let output = JsonOutput {
            generated_at: chrono::Utc::now().to_rfc3339(),
            results,
            summary: stats,
        };
        self.render(&output, "{}")
    }

    fn render<T: Serialize + ?Sized>(&self, value: &T, fallback: &str) -> String {
        let rendered = if self.pretty {
            serde_json::to_string_pretty(value)
        } else {
            serde_json::to_string(value)
        };
        rendered.unwrap_or_else(|_| fallback.to_string())
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonOutput<'a> {
    generated_at: String,
    results: &'a [ScoredResume],
    summary: &'a AggregateStats,
}
