//! Question sources: JSON files, predefined exam directories, and HTTP.
//!
//! Everything here validates before handing questions on, so the engine
//! only ever sees well-formed lists.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde_json::Value;

use crate::error::SourceError;
use crate::model::{Choice, Question};

/// Accepted keys for each required field, canonical name first.
const NUMBER_KEYS: &[&str] = &["number", "numeroPregunta"];
const PROMPT_KEYS: &[&str] = &["prompt", "pregunta"];
const ALTERNATIVES_KEYS: &[&str] = &["alternatives", "alternativas"];
const ANSWER_KEYS: &[&str] = &["correctAnswer", "respuestaCorrecta"];

/// A predefined exam found on disk.
#[derive(Debug, Clone)]
pub struct ExamFile {
    /// File stem, used to pick the exam by name.
    pub name: String,
    pub path: PathBuf,
    pub questions: Vec<Question>,
}

/// Parse a JSON question list. `origin` names the input in error messages.
pub fn parse_questions_str(content: &str, origin: &str) -> Result<Vec<Question>, SourceError> {
    let value: Value = serde_json::from_str(content).map_err(|source| SourceError::Json {
        origin: origin.to_string(),
        source,
    })?;

    let Value::Array(items) = value else {
        return Err(SourceError::NotAnArray(origin.to_string()));
    };
    if items.is_empty() {
        return Err(SourceError::Empty(origin.to_string()));
    }

    items
        .into_iter()
        .enumerate()
        .map(|(i, item)| {
            let index = i + 1;
            check_required_fields(&item).map_err(|reason| SourceError::InvalidQuestion {
                index,
                reason,
            })?;
            serde_json::from_value::<Question>(item).map_err(|e| SourceError::InvalidQuestion {
                index,
                reason: e.to_string(),
            })
        })
        .collect()
}

/// Every required field must be present and non-empty.
fn check_required_fields(item: &Value) -> Result<(), String> {
    let Value::Object(map) = item else {
        return Err("not an object".into());
    };

    for keys in [NUMBER_KEYS, PROMPT_KEYS, ALTERNATIVES_KEYS, ANSWER_KEYS] {
        let present = keys.iter().find_map(|k| map.get(*k));
        if !present.is_some_and(is_filled) {
            return Err(format!("missing or empty field `{}`", keys[0]));
        }
    }
    Ok(())
}

fn is_filled(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !s.trim().is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(_) => true,
    }
}

/// Load a question list from a `.json` file.
pub fn load_question_file(path: &Path) -> Result<Vec<Question>, SourceError> {
    if !path.extension().is_some_and(|ext| ext == "json") {
        return Err(SourceError::NotJson(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path).map_err(|source| SourceError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    parse_questions_str(&content, &path.display().to_string())
}

/// Load every `.json` exam in `dir`, sorted by file name.
///
/// Files that fail to load are skipped with a warning.
pub fn load_exam_directory(dir: &Path) -> anyhow::Result<Vec<ExamFile>> {
    if !dir.is_dir() {
        anyhow::bail!("not a directory: {}", dir.display());
    }

    let mut paths = Vec::new();
    for entry in std::fs::read_dir(dir)
        .with_context(|| format!("failed to read directory: {}", dir.display()))?
    {
        let path = entry?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "json") {
            paths.push(path);
        }
    }
    paths.sort();

    let mut exams = Vec::with_capacity(paths.len());
    for path in paths {
        match load_question_file(&path) {
            Ok(questions) => exams.push(ExamFile {
                name: exam_name(&path),
                path,
                questions,
            }),
            Err(e) => {
                tracing::warn!("skipping {}: {}", path.display(), e);
            }
        }
    }

    Ok(exams)
}

/// Display name of an exam file: its stem.
pub fn exam_name(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Fetch a question list over HTTP.
pub async fn fetch_questions(url: &str) -> Result<Vec<Question>, SourceError> {
    tracing::debug!(url, "fetching questions");

    let response = reqwest::get(url).await.map_err(|e| SourceError::Fetch {
        url: url.to_string(),
        message: e.to_string(),
    })?;

    let status = response.status();
    if !status.is_success() {
        return Err(SourceError::HttpStatus {
            status: status.as_u16(),
            url: url.to_string(),
        });
    }

    let body = response.text().await.map_err(|e| SourceError::Fetch {
        url: url.to_string(),
        message: e.to_string(),
    })?;

    parse_questions_str(&body, url)
}

/// A non-fatal issue found in an otherwise loadable question list.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// The question number (if applicable).
    pub question: Option<u32>,
    /// Warning message.
    pub message: String,
}

/// Check a question list for issues the loader lets through.
pub fn validate_questions(questions: &[Question]) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    // Check for duplicate question numbers
    let mut seen_numbers = HashSet::new();
    for q in questions {
        if !seen_numbers.insert(q.number) {
            warnings.push(ValidationWarning {
                question: Some(q.number),
                message: format!("duplicate question number: {}", q.number),
            });
        }
    }

    for q in questions {
        let mut seen_ids = HashSet::new();
        for alt in &q.alternatives {
            if !seen_ids.insert(alt.id.as_str()) {
                warnings.push(ValidationWarning {
                    question: Some(q.number),
                    message: format!("duplicate alternative id: {}", alt.id),
                });
            }
        }

        for id in q.correct_answer.ids() {
            if q.alternative(id).is_none() {
                warnings.push(ValidationWarning {
                    question: Some(q.number),
                    message: format!("correct answer `{id}` is not one of the alternatives"),
                });
            }
        }

        if let Choice::Multiple(ids) = &q.correct_answer {
            let unique: HashSet<&String> = ids.iter().collect();
            if unique.len() != ids.len() {
                warnings.push(ValidationWarning {
                    question: Some(q.number),
                    message: "correct answer lists the same id more than once".into(),
                });
            }
        }
    }

    warnings
}
