//! Console reporter with colored output

use crate::analyzer::AggregateStats;
use crate::{Criterion, ScoredResume};
use colored::{Color, Colorize};
use std::fmt::Write;

/// Reporter for terminal output
pub struct ConsoleReporter {
    /// Whether to use colors
    use_colors: bool,
    /// Whether to show per-criterion feedback lines
    verbose: bool,
}

impl ConsoleReporter {
    /// Create a new console reporter
    pub fn new() -> Self {
        Self {
            use_colors: true,
            verbose: false,
        }
    }

    /// Disable colors
    pub fn without_colors(mut self) -> Self {
        self.use_colors = false;
        self
    }

    /// Enable verbose output
    pub fn verbose(mut self) -> Self {
        self.verbose = true;
        self
    }

    /// Report a single scored resume
    pub fn report(&self, result: &ScoredResume) {
        print!("{}", self.render(result));
    }

    /// Report multiple results with summary
    pub fn report_many(&self, results: &[ScoredResume], stats: &AggregateStats) {
        for result in results {
            self.report(result);
            println!("{}", "─".repeat(60));
        }
        print!("{}", self.render_summary(stats));
    }

    /// Report in quiet mode (just score)
    pub fn report_quiet(&self, result: &ScoredResume) {
        println!("{}", self.render_quiet(result));
    }

    pub fn render_quiet(&self, result: &ScoredResume) -> String {
        let score = result.report.total_score;
        format!(
            "{}: {} ({})",
            result.file_path.display(),
            score,
            self.paint(&result.report.band().to_string(), score_color(score))
        )
    }

    /// Full report for one file
    pub fn render(&self, result: &ScoredResume) -> String {
        let mut out = String::new();
        let report = &result.report;

        let _ = writeln!(out);
        let _ = writeln!(
            out,
            "{}",
            self.bold(&format!("📄 ATS Resume Analysis: {}", result.file_path.display()))
        );
        let _ = writeln!(out, "   Words: {}", result.word_count);
        let _ = writeln!(out);

        let _ = writeln!(
            out,
            "   Score: {} {}",
            self.create_score_bar(report.total_score),
            self.bold(&self.paint(&report.band().to_string(), score_color(report.total_score)))
        );
        let _ = writeln!(out, "   {}", self.dim(&report.summary));
        let _ = writeln!(out);

        let _ = writeln!(out, "   {}", self.bold("Criteria:"));
        for criterion in &report.criteria {
            self.render_criterion(&mut out, criterion);
        }
        let _ = writeln!(out);

        if !report.strengths.is_empty() {
            let _ = writeln!(out, "   {}", self.bold("Strengths:"));
            for strength in &report.strengths {
                let _ = writeln!(out, "   {} {}", self.paint("✓", Color::Green), strength);
            }
            let _ = writeln!(out);
        }

        if !report.improvements.is_empty() {
            let _ = writeln!(out, "   {}", self.bold("Improvements:"));
            for improvement in &report.improvements {
                let _ = writeln!(out, "   {} {}", self.paint("→", Color::Cyan), improvement);
            }
            let _ = writeln!(out);
        }

        if let Some(ref narrative) = result.narrative {
            let _ = writeln!(out, "   {}", self.bold("AI Analysis:"));
            for line in narrative.lines() {
                let _ = writeln!(out, "   {}", line);
            }
            let _ = writeln!(out);
        }

        out
    }

    fn render_criterion(&self, out: &mut String, criterion: &Criterion) {
        let bar = self.create_mini_bar(criterion.score, criterion.max_score);
        let score_str = format!("{:>2}/{:<2}", criterion.score, criterion.max_score);
        let color = if criterion.passed { Color::Green } else { Color::Red };
        let _ = writeln!(
            out,
            "   {} {} {}",
            bar,
            self.paint(&score_str, color),
            criterion.name
        );
        if self.verbose || !criterion.passed {
            let _ = writeln!(out, "         {} {}", self.dim("↳"), self.dim(&criterion.feedback));
        }
    }

    pub fn render_summary(&self, stats: &AggregateStats) -> String {
        let mut out = String::new();
        let _ = writeln!(out);
        let _ = writeln!(out, "{}", "═".repeat(60));
        let _ = writeln!(out, "{}", self.bold("Summary"));
        let _ = writeln!(out, "{}", "═".repeat(60));
        let _ = writeln!(out, "   Files scored:    {}", self.bold(&stats.files_scored.to_string()));
        let _ = writeln!(
            out,
            "   Average score:   {} ({})",
            self.bold(&stats.average_score.to_string()),
            self.paint(&stats.average_band.to_string(), score_color(stats.average_score))
        );
        let _ = writeln!(out, "   Criteria passed: {}", stats.passed_criteria);
        let _ = writeln!(out, "   Criteria failed: {}", stats.failed_criteria);
        let _ = writeln!(out);
        out
    }

    fn paint(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn bold(&self, text: &str) -> String {
        if self.use_colors {
            text.bold().to_string()
        } else {
            text.to_string()
        }
    }

    fn dim(&self, text: &str) -> String {
        if self.use_colors {
            text.dimmed().to_string()
        } else {
            text.to_string()
        }
    }

    fn create_score_bar(&self, score: u8) -> String {
        let filled = (score.min(100) as usize * 20) / 100;
        let empty = 20 - filled;
        let bar = format!("[{}{}] {:>3}%", "█".repeat(filled), "░".repeat(empty), score);
        self.paint(&bar, score_color(score))
    }

    fn create_mini_bar(&self, score: u8, max: u8) -> String {
        let filled = if max == 0 {
            0
        } else {
            (score.min(max) as usize * 10) / max as usize
        };
        let empty = 10 - filled;
        format!("[{}{}]", "▓".repeat(filled), "░".repeat(empty))
    }
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new()
    }
}

/// Display color tier for a total score
pub fn score_color(score: u8) -> Color {
    match score {
        85.. => Color::Green,
        70..=84 => Color::Blue,
        55..=69 => Color::Yellow,
        _ => Color::Red,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::ScoringEngine;
    use std::path::PathBuf;

    fn make_result(text: &str) -> ScoredResume {
        ScoredResume {
            file_path: PathBuf::from("resumes/jane.txt"),
            word_count: crate::count_words(text),
            report: crate::score(text),
            narrative: None,
        }
    }

    #[test]
    fn test_score_color_tiers() {
        assert_eq!(score_color(100), Color::Green);
        assert_eq!(score_color(85), Color::Green);
        assert_eq!(score_color(84), Color::Blue);
        assert_eq!(score_color(70), Color::Blue);
        assert_eq!(score_color(69), Color::Yellow);
        assert_eq!(score_color(55), Color::Yellow);
        assert_eq!(score_color(54), Color::Red);
        assert_eq!(score_color(0), Color::Red);
    }

    #[test]
    fn test_quiet_line() {
        let result = make_result("");
        let line = ConsoleReporter::new().without_colors().render_quiet(&result);
        assert_eq!(
            line,
            format!("resumes/jane.txt: {} (Needs Improvement)", result.report.total_score)
        );
    }

    #[test]
    fn test_render_lists_every_criterion() {
        let result = make_result("");
        let out = ConsoleReporter::new().without_colors().render(&result);
        assert!(out.contains("ATS Resume Analysis: resumes/jane.txt"));
        for criterion in &result.report.criteria {
            assert!(out.contains(&criterion.name), "missing {}", criterion.name);
        }
        assert!(out.contains(" 0/8 "));
        assert!(out.contains("Improvements:"));
        assert!(!out.contains("AI Analysis:"));
    }

    #[test]
    fn test_render_includes_narrative() {
        let mut result = make_result("");
        result.narrative = Some("**OVERVIEW**\nSolid start.".to_string());
        let out = ConsoleReporter::new().without_colors().render(&result);
        assert!(out.contains("AI Analysis:"));
        assert!(out.contains("   Solid start."));
    }

    #[test]
    fn test_feedback_shown_for_failures_only_unless_verbose() {
        let result = make_result("");
        let plain = ConsoleReporter::new().without_colors().render(&result);
        let formatting = result.report.criterion(crate::CriterionKey::Formatting).unwrap();
        assert!(!formatting.passed);
        assert!(plain.contains(&formatting.feedback));

        let text = "Experience Education Skills Summary";
        let passing = make_result(text);
        let formatting = passing.report.criterion(crate::CriterionKey::Formatting).unwrap();
        assert!(formatting.passed);
        let quiet = ConsoleReporter::new().without_colors().render(&passing);
        let verbose = ConsoleReporter::new().without_colors().verbose().render(&passing);
        assert!(!quiet.contains(&formatting.feedback));
        assert!(verbose.contains(&formatting.feedback));
    }

    #[test]
    fn test_summary_block() {
        let results = vec![make_result(""), make_result("")];
        let stats = ScoringEngine::aggregate_stats(&results);
        let out = ConsoleReporter::new().without_colors().render_summary(&stats);
        assert!(out.contains("Files scored:    2"));
        assert!(out.contains("Criteria failed:"));
    }

    #[test]
    fn test_score_bar_bounds() {
        let reporter = ConsoleReporter::new().without_colors();
        assert_eq!(reporter.create_score_bar(0), format!("[{}]   0%", "░".repeat(20)));
        assert_eq!(reporter.create_score_bar(100), format!("[{}] 100%", "█".repeat(20)));
        assert_eq!(reporter.create_mini_bar(4, 8), "[▓▓▓▓▓░░░░░]");
    }
}
