//! Interactive terminal presenter for an exam session.
//!
//! Renders engine state as plain text and turns input lines into engine
//! actions. Generic over reader and writer so tests can script a session.

use std::io::{BufRead, Write};

use anyhow::Result;
use comfy_table::{Cell, Table};

use quizrun_core::{Alternative, Choice, ExamEngine, ExamPhase, ExamResult, Question};

/// Presenter options.
#[derive(Debug, Clone)]
pub struct SessionOptions {
    /// Print correct/incorrect after each answer.
    pub show_feedback: bool,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            show_feedback: true,
        }
    }
}

/// What happened during a session.
#[derive(Debug, Default)]
pub struct SessionOutcome {
    /// Result of every attempt that reached the end, in order.
    pub finished_attempts: Vec<ExamResult>,
    /// The user left mid-exam.
    pub abandoned: bool,
}

/// Drive `engine` from `input` until the user quits or abandons.
pub fn run<R: BufRead, W: Write>(
    engine: &mut ExamEngine,
    mut input: R,
    out: &mut W,
    options: &SessionOptions,
) -> Result<SessionOutcome> {
    let mut outcome = SessionOutcome::default();

    loop {
        match engine.phase() {
            ExamPhase::Empty => return Ok(outcome),
            ExamPhase::InProgress => {
                let Some(question) = engine.current_question().cloned() else {
                    return Ok(outcome);
                };
                let (position, total) = engine.progress();
                render_question(out, &question, position, total)?;

                let Some(selection) = read_selection(&mut input, out, &question)? else {
                    engine.clear_exam();
                    writeln!(out, "Exam abandoned.")?;
                    outcome.abandoned = true;
                    return Ok(outcome);
                };

                let correct = engine.submit_answer(selection);
                if options.show_feedback {
                    if correct {
                        writeln!(out, "Correct!")?;
                    } else {
                        writeln!(
                            out,
                            "Incorrect. Correct answer: {}",
                            question.correct_answer
                        )?;
                    }
                }
                writeln!(out)?;
                engine.next_question();
            }
            ExamPhase::Finished => {
                let result = engine.exam_result();
                render_result(out, &result)?;
                outcome.finished_attempts.push(result);

                write!(out, "Press r to restart, anything else to quit: ")?;
                out.flush()?;
                let line = read_line(&mut input)?;
                if line.as_deref().map(str::trim) == Some("r") {
                    engine.reset_exam();
                    writeln!(out)?;
                } else {
                    return Ok(outcome);
                }
            }
        }
    }
}

fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}

/// Typed at any prompt to abandon the exam.
pub const QUIT_COMMAND: &str = ":q";

/// Prompt until a usable selection arrives. `None` means the user quit.
///
/// `:q` always quits. A bare `q` quits too, unless the question has an
/// alternative it would select.
fn read_selection<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    question: &Question,
) -> Result<Option<Choice>> {
    loop {
        write!(out, "> ")?;
        out.flush()?;

        let Some(line) = read_line(input)? else {
            return Ok(None);
        };
        let line = line.trim();
        if line == QUIT_COMMAND
            || (line.eq_ignore_ascii_case("q") && resolve_id(question, line).is_err())
        {
            return Ok(None);
        }

        match parse_selection(question, line) {
            Ok(choice) => return Ok(Some(choice)),
            Err(message) => writeln!(out, "{message}")?,
        }
    }
}

/// Find the alternative a typed id refers to.
///
/// An exact match wins. Otherwise the id matches ignoring ASCII case, but
/// only when that is unambiguous.
fn resolve_id<'q>(question: &'q Question, token: &str) -> Result<&'q Alternative, String> {
    if let Some(alt) = question.alternatives.iter().find(|a| a.id == token) {
        return Ok(alt);
    }

    let mut folded = question
        .alternatives
        .iter()
        .filter(|a| a.id.eq_ignore_ascii_case(token));
    match (folded.next(), folded.next()) {
        (Some(alt), None) => Ok(alt),
        (Some(_), Some(_)) => Err(format!(
            "Option `{token}` is ambiguous, type it with its exact case."
        )),
        (None, _) => Err(format!("Unknown option `{token}`.")),
    }
}

/// Map a typed line onto the question's alternatives.
///
/// The whole line is tried as a single id first, so ids containing spaces
/// or commas stay selectable. Otherwise the line is split on commas and
/// whitespace and each piece resolved with [`resolve_id`].
pub fn parse_selection(question: &Question, line: &str) -> Result<Choice, String> {
    let mut ids: Vec<String> = Vec::new();
    if let Some(alt) = question.alternatives.iter().find(|a| a.id == line) {
        ids.push(alt.id.clone());
    } else {
        for token in line
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|t| !t.is_empty())
        {
            let alt = resolve_id(question, token)?;
            if !ids.contains(&alt.id) {
                ids.push(alt.id.clone());
            }
        }
    }

    if ids.is_empty() {
        return Err("Select an option first.".into());
    }

    if question.is_multiple_choice() {
        Ok(Choice::Multiple(ids))
    } else if ids.len() == 1 {
        Ok(Choice::Single(ids.remove(0)))
    } else {
        Err("This question takes a single option.".into())
    }
}

fn render_question<W: Write>(
    out: &mut W,
    question: &Question,
    position: usize,
    total: usize,
) -> Result<()> {
    writeln!(out, "Question {position} / {total}")?;
    writeln!(out, "{}. {}", question.number, question.prompt)?;
    if question.is_multiple_choice() {
        writeln!(out, "(select all that apply, e.g. A,C)")?;
    }
    for alt in &question.alternatives {
        writeln!(out, "  {}) {}", alt.id, alt.text)?;
    }
    Ok(())
}

fn render_result<W: Write>(out: &mut W, result: &ExamResult) -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec!["Questions", "Correct", "Incorrect", "Score"]);
    table.add_row(vec![
        Cell::new(result.total_questions),
        Cell::new(result.correct_answers),
        Cell::new(result.incorrect_answers),
        Cell::new(format!("{:.2}%", result.percentage)),
    ]);

    writeln!(out, "Exam finished.")?;
    writeln!(out, "{table}")?;
    writeln!(out, "{}", result.grade().message())?;
    writeln!(out)?;

    for answer in &result.details {
        let mark = if answer.is_correct { "ok" } else { "x" };
        write!(
            out,
            "[{mark}] {}. {} (your answer: {}",
            answer.question_number, answer.question_text, answer.selected_answer
        )?;
        if !answer.is_correct {
            write!(out, "; correct: {}", answer.correct_answer)?;
        }
        writeln!(out, ")")?;
    }
    writeln!(out)?;
    Ok(())
}
