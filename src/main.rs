//! atscore: ATS Resume Scorer CLI

use anyhow::{Context, Result};
use atscore::analyzer::{catalog, ScoringEngine};
use atscore::config::{build_ignore_set, default_config_json, is_ignored, load_config, Config, CONFIG_FILENAME};
use atscore::extract::extract_file;
use atscore::narrative::{self, is_ai_available, GeminiClient, NarrativeError, NarrativeGenerator};
use atscore::reporter::{ConsoleReporter, JsonReporter};
use atscore::{CriterionKey, ScoredResume};
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{debug, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use walkdir::WalkDir;

/// atscore: ATS compatibility scorer for resumes
#[derive(Parser, Debug)]
#[command(name = "atscore")]
#[command(author, version, about, long_about = None)]
#[command(args_conflicts_with_subcommands = true, subcommand_negates_reqs = true)]
struct Args {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Resume file or directory to score (omit when using a subcommand)
    #[arg(required = true)]
    path: Option<PathBuf>,

    /// Output format as JSON
    #[arg(long, short)]
    json: bool,

    /// Minimum score threshold (exit 1 if below)
    #[arg(long, short)]
    threshold: Option<u8>,

    /// Quiet mode (one line per file)
    #[arg(long, short)]
    quiet: bool,

    /// Verbose output (feedback for every criterion, debug logs)
    #[arg(long, short)]
    verbose: bool,

    /// Path to config file (default: search .atscorerc.json in current dir and parents)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Request a language-model critique for each resume (requires the `ai` feature)
    #[arg(long)]
    narrative: bool,

    /// Score files in parallel (default for directories with many files)
    #[arg(long)]
    parallel: bool,

    /// Number of parallel threads (default: number of CPU cores)
    #[arg(long, value_name = "N")]
    jobs: Option<usize>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Create .atscorerc.json with sensible defaults
    Init {
        /// Minimum score threshold (e.g. 65)
        #[arg(long)]
        threshold: Option<u8>,

        /// Directory in which to create config (default: current)
        #[arg(long)]
        dir: Option<PathBuf>,
    },

    /// Ask the language model for suggestions on one criterion
    Suggest {
        /// Resume file
        file: PathBuf,

        /// Criterion key (contact, keywords, experience, education, formatting, length, actionVerbs, summary)
        #[arg(long, short)]
        criterion: CriterionKey,
    },

    /// Ask the language model how to tailor the resume for a role
    Tailor {
        /// Resume file
        file: PathBuf,

        /// Target role (e.g. "Data Engineer")
        #[arg(long, short)]
        role: String,
    },
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    match run(args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", "Error".red().bold(), e);
            ExitCode::from(2)
        }
    }
}

/// Logs go to stderr so JSON on stdout stays clean
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new(format!("{}=debug", env!("CARGO_CRATE_NAME")))
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(format!("{}=warn", env!("CARGO_CRATE_NAME"))))
    };
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run(args: Args) -> Result<ExitCode> {
    if let Some(cmd) = args.command {
        return match cmd {
            Commands::Init { threshold, dir } => run_init(threshold, dir.as_deref()),
            Commands::Suggest { file, criterion } => run_suggest(&file, criterion),
            Commands::Tailor { file, role } => run_tailor(&file, &role),
        };
    }

    let path = args
        .path
        .clone()
        .context("A resume file or directory is required")?;

    // Resolve work directory for config search
    let work_dir = work_dir_for(&path);

    // Load config (CLI flags override config file)
    let config = load_config(work_dir, args.config.as_deref())?
        .merge_with_cli(args.threshold, args.narrative);

    let ignore_set = if config.ignore.is_empty() {
        None
    } else {
        Some(build_ignore_set(&config.ignore)?)
    };

    let file_patterns = config.get_file_patterns();
    let files = collect_resume_files(&path, ignore_set.as_ref(), &file_patterns)?;

    if files.is_empty() {
        eprintln!("{}: No resume files found", "Warning".yellow());
        return Ok(ExitCode::from(2));
    }
    debug!(count = files.len(), "collected resume files");

    if let Some(jobs) = args.jobs {
        rayon::ThreadPoolBuilder::new()
            .num_threads(jobs)
            .build_global()
            .ok();
    }

    let engine = ScoringEngine::new().with_limits(config.extract_limits());
    let client = if config.narrative_enabled() {
        let client = narrative_client(&config)?;
        if !args.quiet {
            eprintln!("{}: Requesting critique from {}...", "AI".cyan().bold(), client.model_name());
        }
        Some(client)
    } else {
        None
    };

    let use_parallel = args.parallel || files.len() > 10;
    let generator = client.as_ref().map(|c| c as &dyn NarrativeGenerator);
    let (results, had_errors) = score_files(&engine, &files, use_parallel, args.quiet, generator);

    if results.is_empty() {
        eprintln!("{}: All files failed to score", "Error".red());
        return Ok(ExitCode::from(2));
    }

    let stats = ScoringEngine::aggregate_stats(&results);

    if args.json {
        let reporter = JsonReporter::new().pretty();
        if results.len() == 1 {
            println!("{}", reporter.report(&results[0]));
        } else {
            println!("{}", reporter.report_with_summary(&results, &stats));
        }
    } else if args.quiet {
        let reporter = ConsoleReporter::new();
        for result in &results {
            reporter.report_quiet(result);
        }
    } else {
        let mut reporter = ConsoleReporter::new();
        if args.verbose {
            reporter = reporter.verbose();
        }
        if results.len() == 1 {
            reporter.report(&results[0]);
        } else {
            reporter.report_many(&results, &stats);
        }
    }

    // Check thresholds (CLI value wins over per-path overrides)
    let below: Vec<(&ScoredResume, u8)> = results
        .iter()
        .filter_map(|r| {
            let threshold = args.threshold.or_else(|| config.threshold_for(&r.file_path))?;
            (r.report.total_score < threshold).then_some((r, threshold))
        })
        .collect();

    if !below.is_empty() {
        if !args.quiet && !args.json {
            for (result, threshold) in &below {
                eprintln!(
                    "{}: {} scored {}, below threshold {}",
                    "Failed".red().bold(),
                    result.file_path.display(),
                    result.report.total_score,
                    threshold
                );
            }
        }
        return Ok(ExitCode::from(1));
    }

    if had_errors {
        Ok(ExitCode::from(2))
    } else {
        Ok(ExitCode::SUCCESS)
    }
}

fn work_dir_for(path: &Path) -> &Path {
    if path.is_file() {
        match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    } else {
        path
    }
}

/// Score files, reporting failures without aborting the run.
///
/// With a generator, files are scored one at a time and each critique reuses the
/// text and report that scoring already produced.
fn score_files(
    engine: &ScoringEngine,
    files: &[PathBuf],
    parallel: bool,
    quiet: bool,
    generator: Option<&dyn NarrativeGenerator>,
) -> (Vec<ScoredResume>, bool) {
    let outcomes: Vec<Result<ScoredResume>> = match generator {
        Some(generator) => files
            .iter()
            .map(|file| score_with_narrative(engine, file, generator, quiet))
            .collect(),
        None if parallel => engine.score_parallel(files),
        None => engine.score_many(files),
    };

    let mut results = Vec::with_capacity(files.len());
    let mut had_errors = false;
    for (file, outcome) in files.iter().zip(outcomes) {
        match outcome {
            Ok(result) => results.push(result),
            Err(e) => {
                had_errors = true;
                if !quiet {
                    eprintln!(
                        "{}: Failed to score {}: {:#}",
                        "Error".red(),
                        file.display(),
                        e
                    );
                }
            }
        }
    }
    (results, had_errors)
}

/// Build the Gemini client, failing early when the build or environment cannot support it
fn narrative_client(config: &Config) -> Result<GeminiClient> {
    if !is_ai_available() {
        anyhow::bail!(NarrativeError::FeatureDisabled);
    }
    let client = GeminiClient::from_env()?;
    Ok(match config.narrative.model.as_deref() {
        Some(model) => client.model(model),
        None => client,
    })
}

fn score_with_narrative(
    engine: &ScoringEngine,
    file: &Path,
    generator: &dyn NarrativeGenerator,
    quiet: bool,
) -> Result<ScoredResume> {
    let (mut result, text) = engine.score_file_with_text(file)?;
    match narrative::analyze_report(&text, &result.report, generator) {
        Ok(analysis) => result.narrative = Some(analysis.ai_analysis),
        Err(e) => {
            warn!(path = %file.display(), error = %e, "critique failed");
            if !quiet {
                eprintln!("{}: {}: {}", "AI Error".red(), file.display(), e);
            }
        }
    }
    Ok(result)
}

fn run_init(threshold: Option<u8>, dir: Option<&Path>) -> Result<ExitCode> {
    let cwd = std::env::current_dir().context("Failed to get current directory")?;
    let dir = dir.unwrap_or(&cwd);
    let config_path = dir.join(CONFIG_FILENAME);

    if config_path.exists() {
        eprintln!(
            "{}: {} already exists; use --dir to write elsewhere or remove it first",
            "Warning".yellow(),
            config_path.display()
        );
        return Ok(ExitCode::SUCCESS);
    }

    let threshold_value = threshold.unwrap_or(65);
    let json = default_config_json(threshold_value)?;
    std::fs::write(&config_path, json)
        .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

    println!(
        "{}: Created {} with threshold={}",
        "Done".green().bold(),
        config_path.display(),
        threshold_value
    );
    Ok(ExitCode::SUCCESS)
}

/// Config and extracted text for a single-file subcommand
fn load_single(file: &Path) -> Result<(Config, String)> {
    let config = load_config(work_dir_for(file), None)?;
    let text = extract_file(file, &config.extract_limits())
        .with_context(|| format!("Failed to extract resume text: {}", file.display()))?;
    Ok((config, text))
}

fn run_suggest(file: &Path, criterion: CriterionKey) -> Result<ExitCode> {
    let (config, text) = load_single(file)?;
    let client = narrative_client(&config)?;

    let report = atscore::score(&text);
    let def = catalog::definition(criterion);
    let current = report
        .criterion(criterion)
        .map(|c| c.score)
        .unwrap_or_default();

    println!(
        "{} ({}/{})",
        format!("Suggestions for {}", def.name).bold(),
        current,
        def.max_score
    );
    for suggestion in narrative::improvement_suggestions(&text, def.name, &client) {
        println!("   {} {}", "→".cyan(), suggestion);
    }
    Ok(ExitCode::SUCCESS)
}

fn run_tailor(file: &Path, role: &str) -> Result<ExitCode> {
    let (config, text) = load_single(file)?;
    let client = narrative_client(&config)?;

    println!("{}", format!("Tailoring advice for {}", role).bold());
    println!();
    println!("{}", narrative::tailored_advice(&text, role, &client));
    Ok(ExitCode::SUCCESS)
}

fn collect_resume_files(
    path: &Path,
    ignore_set: Option<&globset::GlobSet>,
    file_patterns: &[&str],
) -> Result<Vec<PathBuf>> {
    if path.is_file() {
        if let Some(set) = ignore_set {
            if is_ignored(path, set) {
                return Ok(vec![]);
            }
        }
        return Ok(vec![path.to_path_buf()]);
    }

    if !path.is_dir() {
        anyhow::bail!("Path does not exist: {}", path.display());
    }

    let mut files = Vec::new();

    for entry in WalkDir::new(path)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let file_path = entry.path();
        if entry.file_type().is_file() && is_resume_file(file_path, file_patterns) {
            if let Some(set) = ignore_set {
                if is_ignored(file_path, set) {
                    continue;
                }
            }
            files.push(file_path.to_path_buf());
        }
    }

    // Sort for consistent output
    files.sort();

    Ok(files)
}

fn is_resume_file(path: &Path, file_patterns: &[&str]) -> bool {
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        return false;
    };

    // Skip VCS internals and office lock files
    if path.components().any(|c| c.as_os_str() == ".git") || name.starts_with("~$") {
        return false;
    }

    let name = name.to_ascii_lowercase();
    file_patterns
        .iter()
        .any(|p| name.ends_with(&p.to_ascii_lowercase()))
}
