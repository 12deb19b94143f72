//! The `quizrun list` command.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::{Cell, Table};

use quizrun_core::source;

use crate::config::load_config_from;

pub fn execute(config_path: Option<PathBuf>) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let exams = source::load_exam_directory(&config.exams_dir)?;

    if exams.is_empty() {
        println!("No exams found in {}.", config.exams_dir.display());
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec!["Exam", "Questions", "Multiple choice", "Path"]);
    for exam in &exams {
        let multi = exam
            .questions
            .iter()
            .filter(|q| q.is_multiple_choice())
            .count();
        table.add_row(vec![
            Cell::new(&exam.name),
            Cell::new(exam.questions.len()),
            Cell::new(multi),
            Cell::new(exam.path.display()),
        ]);
    }

    println!("{table}");
    println!("\nRun one with: quizrun take --predefined <exam>");
    Ok(())
}
