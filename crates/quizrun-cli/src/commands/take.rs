//! The `quizrun take` command.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use quizrun_core::report::ExamReport;
use quizrun_core::source;
use quizrun_core::{ExamEngine, Question};

use crate::config::{load_config_from, QuizrunConfig};
use crate::session::{self, SessionOptions};

/// Where the questions come from. Exactly one must be given.
pub struct ExamSelector {
    pub exam: Option<PathBuf>,
    pub predefined: Option<String>,
    pub url: Option<String>,
}

pub async fn execute(
    selector: ExamSelector,
    config_path: Option<PathBuf>,
    output: Option<PathBuf>,
    no_feedback: bool,
) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;

    let (name, questions) = load_selected(&selector, &config).await?;
    tracing::info!("loaded {} questions from {name}", questions.len());

    let mut engine = ExamEngine::new();
    engine.load_questions(questions);

    let options = SessionOptions {
        show_feedback: config.show_feedback && !no_feedback,
    };
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    let outcome = session::run(&mut engine, stdin.lock(), &mut stdout, &options)?;

    if let Some(dir) = output.or(config.output_dir) {
        for (i, result) in outcome.finished_attempts.into_iter().enumerate() {
            let timestamp = chrono::Utc::now().format("%Y-%m-%dT%H%M%S");
            let path = dir.join(format!("result-{name}-{timestamp}-{}.json", i + 1));
            ExamReport::new(name.clone(), result).save_json(&path)?;
            eprintln!("Result saved to: {}", path.display());
        }
    }

    Ok(())
}

async fn load_selected(
    selector: &ExamSelector,
    config: &QuizrunConfig,
) -> Result<(String, Vec<Question>)> {
    let given = [
        selector.exam.is_some(),
        selector.predefined.is_some(),
        selector.url.is_some(),
    ]
    .iter()
    .filter(|&&b| b)
    .count();
    anyhow::ensure!(
        given == 1,
        "specify exactly one of --exam, --predefined, or --url"
    );

    if let Some(path) = &selector.exam {
        let questions = source::load_question_file(path)
            .with_context(|| format!("failed to load exam {}", path.display()))?;
        return Ok((source::exam_name(path), questions));
    }

    if let Some(url) = &selector.url {
        let questions = source::fetch_questions(url).await?;
        return Ok((url_exam_name(url), questions));
    }

    let name = selector.predefined.as_deref().unwrap_or_default();
    match &config.base_url {
        Some(base) => {
            let url = format!("{}/{name}.json", base.trim_end_matches('/'));
            let questions = source::fetch_questions(&url).await?;
            Ok((name.to_string(), questions))
        }
        None => {
            let questions = load_predefined(&config.exams_dir, name)?;
            Ok((name.to_string(), questions))
        }
    }
}

fn load_predefined(exams_dir: &Path, name: &str) -> Result<Vec<Question>> {
    let exams = source::load_exam_directory(exams_dir)?;
    let available: Vec<&str> = exams.iter().map(|e| e.name.as_str()).collect();
    match exams.iter().find(|e| e.name == name) {
        Some(exam) => Ok(exam.questions.clone()),
        None => anyhow::bail!(
            "predefined exam '{name}' not found in {}. Available: {:?}",
            exams_dir.display(),
            available
        ),
    }
}

/// Last path segment of a URL without its extension.
fn url_exam_name(url: &str) -> String {
    let segment = url
        .split(['?', '#'])
        .next()
        .unwrap_or(url)
        .trim_end_matches('/')
        .rsplit('/')
        .next()
        .unwrap_or(url);
    segment
        .strip_suffix(".json")
        .unwrap_or(segment)
        .to_string()
}
