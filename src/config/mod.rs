//! Configuration loading for atscore

mod schema;

pub use schema::{Config, ConfigOverride, NarrativeConfig};

use anyhow::{Context, Result};
use globset::{Glob, GlobSet, GlobSetBuilder};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const CONFIG_FILENAME: &str = ".atscorerc.json";

/// Find and load config file with extends resolution. Searches current directory then parents.
pub fn load_config(work_dir: &Path, custom_path: Option<&Path>) -> Result<Config> {
    let path = if let Some(p) = custom_path {
        let path = if p.is_absolute() {
            p.to_path_buf()
        } else {
            work_dir.join(p)
        };
        if path.exists() {
            Some(path)
        } else {
            anyhow::bail!("Config file not found: {}", path.display());
        }
    } else {
        find_config_in_parents(work_dir)
    };

    match path {
        Some(path) => {
            debug!(path = %path.display(), "loading config");
            load_config_with_extends(&path, &mut HashSet::new())
        }
        None => Ok(Config::default()),
    }
}

/// Load a config file and resolve extends chain
fn load_config_with_extends(config_path: &Path, visited: &mut HashSet<PathBuf>) -> Result<Config> {
    let canonical = config_path
        .canonicalize()
        .unwrap_or_else(|_| config_path.to_path_buf());
    if !visited.insert(canonical) {
        anyhow::bail!(
            "Circular extends detected in config: {}",
            config_path.display()
        );
    }

    let content = fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read config: {}", config_path.display()))?;
    let mut config: Config = serde_json::from_str(&content)
        .with_context(|| format!("Invalid JSON in config: {}", config_path.display()))?;

    if let Some(extends) = config.extends.take() {
        let base_config = resolve_extends(config_path, &extends, visited)?;
        config.merge_from(base_config);
    }

    Ok(config)
}

/// Resolve an extends reference relative to the referencing config
fn resolve_extends(
    config_path: &Path,
    extends: &str,
    visited: &mut HashSet<PathBuf>,
) -> Result<Config> {
    let config_dir = config_path.parent().unwrap_or(Path::new("."));
    let extends_path = if Path::new(extends).is_absolute() {
        PathBuf::from(extends)
    } else {
        config_dir.join(extends)
    };

    let extends_path = if extends_path.extension().is_none() {
        extends_path.with_extension("json")
    } else {
        extends_path
    };

    if !extends_path.exists() {
        anyhow::bail!(
            "Extended config not found: {} (referenced from {})",
            extends_path.display(),
            config_path.display()
        );
    }

    load_config_with_extends(&extends_path, visited)
}

/// Search for .atscorerc.json in directory and its parents
fn find_config_in_parents(mut dir: &Path) -> Option<PathBuf> {
    loop {
        let candidate = dir.join(CONFIG_FILENAME);
        if candidate.exists() {
            return Some(candidate);
        }
        dir = dir.parent()?;
    }
}

/// Build a GlobSet from ignore patterns for path matching
pub fn build_ignore_set(patterns: &[String]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let glob =
            Glob::new(pattern).with_context(|| format!("Invalid ignore pattern: {}", pattern))?;
        builder.add(glob);
    }
    builder.build().map_err(|e| anyhow::anyhow!("{}", e))
}

/// Check if a path should be ignored based on config glob patterns
pub fn is_ignored(path: &Path, ignore_set: &GlobSet) -> bool {
    ignore_set.is_match(path)
}

/// Contents written by `atscore init`
pub fn default_config_json(threshold: u8) -> Result<String> {
    let config = Config {
        threshold: Some(threshold),
        ignore: vec!["**/drafts/**".to_string(), "**/archive/**".to_string()],
        file_patterns: vec![".pdf".to_string(), ".txt".to_string(), ".md".to_string()],
        min_text_length: Some(crate::extract::DEFAULT_MIN_TEXT_LENGTH),
        max_file_size_mb: Some(crate::extract::DEFAULT_MAX_FILE_SIZE_MB),
        narrative: NarrativeConfig {
            enabled: Some(false),
            model: None,
        },
        ..Config::default()
    };
    let mut json = serde_json::to_string_pretty(&config).context("Failed to serialize config")?;
    json.push('\n');
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(dir: &Path, name: &str, content: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_no_config_yields_default() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("a/b");
        fs::create_dir_all(&nested).unwrap();
        // A stray config above the temp dir would be picked up; only assert when none exists
        if find_config_in_parents(&nested).is_none() {
            assert_eq!(load_config(&nested, None).unwrap(), Config::default());
        }
    }

    #[test]
    fn test_config_found_in_parent() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), CONFIG_FILENAME, r#"{ "threshold": 72 }"#);
        let nested = dir.path().join("resumes/2024");
        fs::create_dir_all(&nested).unwrap();

        let config = load_config(&nested, None).unwrap();
        assert_eq!(config.threshold, Some(72));
    }

    #[test]
    fn test_custom_path_must_exist() {
        let dir = TempDir::new().unwrap();
        let err = load_config(dir.path(), Some(Path::new("missing.json"))).unwrap_err();
        assert!(err.to_string().contains("Config file not found"));
    }

    #[test]
    fn test_invalid_json_is_reported() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), CONFIG_FILENAME, "{ threshold: }");
        let err = load_config(dir.path(), None).unwrap_err();
        assert!(err.to_string().contains("Invalid JSON in config"));
    }

    #[test]
    fn test_is_ignored_drafts() {
        let set = build_ignore_set(&["**/drafts/**".to_string()]).unwrap();
        assert!(is_ignored(Path::new("resumes/drafts/jane.pdf"), &set));
        assert!(!is_ignored(Path::new("resumes/jane.pdf"), &set));
    }

    #[test]
    fn test_invalid_ignore_pattern() {
        let err = build_ignore_set(&["[".to_string()]).unwrap_err();
        assert!(err.to_string().contains("Invalid ignore pattern"));
    }

    #[test]
    fn test_config_extends() {
        let dir = TempDir::new().unwrap();
        write(
            dir.path(),
            "base.json",
            r#"{
                "threshold": 60,
                "minTextLength": 200,
                "ignore": ["**/archive/**"]
            }"#,
        );
        write(
            dir.path(),
            CONFIG_FILENAME,
            r#"{
                "extends": "./base.json",
                "threshold": 75
            }"#,
        );

        let config = load_config(dir.path(), None).unwrap();
        assert_eq!(config.threshold, Some(75));
        assert_eq!(config.min_text_length, Some(200));
        assert!(config.ignore.contains(&"**/archive/**".to_string()));
        assert!(config.extends.is_none());
    }

    #[test]
    fn test_extends_without_extension() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "team.json", r#"{ "threshold": 55 }"#);
        write(dir.path(), CONFIG_FILENAME, r#"{ "extends": "team" }"#);
        assert_eq!(load_config(dir.path(), None).unwrap().threshold, Some(55));
    }

    #[test]
    fn test_circular_extends_detected() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "a.json", r#"{ "extends": "./b.json" }"#);
        write(dir.path(), "b.json", r#"{ "extends": "./a.json" }"#);
        let err = load_config(dir.path(), Some(Path::new("a.json"))).unwrap_err();
        assert!(format!("{:#}", err).contains("Circular extends"));
    }

    #[test]
    fn test_missing_extends_target() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), CONFIG_FILENAME, r#"{ "extends": "./nope.json" }"#);
        let err = load_config(dir.path(), None).unwrap_err();
        assert!(err.to_string().contains("Extended config not found"));
    }

    #[test]
    fn test_default_config_round_trips() {
        let json = default_config_json(70).unwrap();
        let config: Config = serde_json::from_str(&json).unwrap();
        assert_eq!(config.threshold, Some(70));
        assert_eq!(config.extract_limits(), crate::extract::ExtractLimits::default());
        assert!(!config.narrative_enabled());
    }
}
