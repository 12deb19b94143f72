//! quizrun configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Top-level quizrun configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizrunConfig {
    /// Directory holding predefined exams.
    #[serde(default = "default_exams_dir")]
    pub exams_dir: PathBuf,
    /// Where finished attempts are saved as JSON (None = don't save).
    #[serde(default)]
    pub output_dir: Option<PathBuf>,
    /// Serve predefined exams from `{base_url}/{name}.json` instead of `exams_dir`.
    #[serde(default)]
    pub base_url: Option<String>,
    /// Print correct/incorrect after each answer.
    #[serde(default = "default_true")]
    pub show_feedback: bool,
}

fn default_exams_dir() -> PathBuf {
    PathBuf::from("./exams")
}

fn default_true() -> bool {
    true
}

impl Default for QuizrunConfig {
    fn default() -> Self {
        Self {
            exams_dir: default_exams_dir(),
            output_dir: None,
            base_url: None,
            show_feedback: true,
        }
    }
}

/// Resolve environment variable references like `${VAR_NAME}` in a string.
///
/// Substituted values are not rescanned.
fn resolve_env_vars(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(start) = rest.find("${") {
        let Some(end) = rest[start..].find('}') else {
            break;
        };
        let var_name = &rest[start + 2..start + end];
        result.push_str(&rest[..start]);
        result.push_str(&std::env::var(var_name).unwrap_or_default());
        rest = &rest[start + end + 1..];
    }
    result.push_str(rest);
    result
}

fn resolve_path(path: &Path) -> PathBuf {
    PathBuf::from(resolve_env_vars(&path.to_string_lossy()))
}

/// Load config from an explicit path, or search the default locations.
///
/// Search order:
/// 1. `quizrun.toml` in the current directory
/// 2. `~/.config/quizrun/config.toml`
///
/// Environment variable overrides: `QUIZRUN_EXAMS_DIR`, `QUIZRUN_BASE_URL`.
pub fn load_config_from(path: Option<&Path>) -> Result<QuizrunConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("quizrun.toml");
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|home| home.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let mut config = match config_path {
        Some(path) => {
            tracing::debug!("using config {}", path.display());
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            toml::from_str::<QuizrunConfig>(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => QuizrunConfig::default(),
    };

    // Apply env var overrides
    if let Ok(dir) = std::env::var("QUIZRUN_EXAMS_DIR") {
        config.exams_dir = PathBuf::from(dir);
    }
    if let Ok(url) = std::env::var("QUIZRUN_BASE_URL") {
        config.base_url = Some(url);
    }

    config.exams_dir = resolve_path(&config.exams_dir);
    config.output_dir = config.output_dir.as_deref().map(resolve_path);
    config.base_url = config
        .base_url
        .as_deref()
        .map(resolve_env_vars)
        .filter(|u| !u.is_empty());

    Ok(config)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("quizrun"))
}
