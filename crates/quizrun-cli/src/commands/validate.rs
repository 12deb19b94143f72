//! The `quizrun validate` command.

use std::path::PathBuf;

use anyhow::Result;

use quizrun_core::source::{self, ExamFile};

pub fn execute(exam_path: PathBuf) -> Result<()> {
    let exams = if exam_path.is_dir() {
        source::load_exam_directory(&exam_path)?
    } else {
        vec![ExamFile {
            name: source::exam_name(&exam_path),
            questions: source::load_question_file(&exam_path)?,
            path: exam_path.clone(),
        }]
    };

    let mut total_warnings = 0;

    for exam in &exams {
        println!("Exam: {} ({} questions)", exam.name, exam.questions.len());

        let warnings = source::validate_questions(&exam.questions);
        for w in &warnings {
            let prefix = w
                .question
                .map(|n| format!("  [{n}]"))
                .unwrap_or_else(|| "  ".to_string());
            println!("{prefix} WARNING: {}", w.message);
        }
        total_warnings += warnings.len();
    }

    if exams.is_empty() {
        println!("No exams found in {}.", exam_path.display());
    } else if total_warnings == 0 {
        println!("All exams valid.");
    } else {
        println!("\n{total_warnings} warning(s) found.");
    }

    Ok(())
}
