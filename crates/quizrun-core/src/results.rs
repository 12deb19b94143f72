//! Answer records and exam result scoring.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::model::{Alternative, Choice, Question};

/// Record of one submitted answer.
///
/// Snapshots the question at submit time so a result stays self-contained
/// even after the exam is cleared.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserAnswer {
    pub question_number: u32,
    pub question_text: String,
    pub alternatives: Vec<Alternative>,
    /// What the user submitted.
    pub selected_answer: Choice,
    pub is_correct: bool,
    /// The answer key at submit time.
    pub correct_answer: Choice,
    pub is_multiple_choice: bool,
}

impl UserAnswer {
    /// Judge `selection` against `question` and capture the outcome.
    pub fn record(question: &Question, selection: Choice) -> Self {
        let is_correct = question.correct_answer.accepts(&selection);
        Self {
            question_number: question.number,
            question_text: question.prompt.clone(),
            alternatives: question.alternatives.clone(),
            selected_answer: selection,
            is_correct,
            correct_answer: question.correct_answer.clone(),
            is_multiple_choice: question.is_multiple_choice(),
        }
    }
}

/// Scored summary of an exam attempt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExamResult {
    pub total_questions: usize,
    pub correct_answers: usize,
    /// `total_questions - correct_answers`; unanswered questions count here.
    pub incorrect_answers: usize,
    /// Share of correct answers in percent, rounded to 2 decimals.
    pub percentage: f64,
    /// Answers in the order they were given.
    pub details: Vec<UserAnswer>,
}

impl ExamResult {
    /// Score `answers` against an exam of `total_questions`.
    pub fn compute(total_questions: usize, answers: &[UserAnswer]) -> Self {
        let correct_answers = answers.iter().filter(|a| a.is_correct).count();
        let percentage = if total_questions > 0 {
            round2(correct_answers as f64 / total_questions as f64 * 100.0)
        } else {
            0.0
        };

        Self {
            total_questions,
            correct_answers,
            incorrect_answers: total_questions.saturating_sub(correct_answers),
            percentage,
            details: answers.to_vec(),
        }
    }

    pub fn grade(&self) -> Grade {
        Grade::from_percentage(self.percentage)
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Performance band for a result percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Grade {
    Excellent,
    Good,
    Regular,
    Poor,
}

impl Grade {
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage >= 80.0 {
            Grade::Excellent
        } else if percentage >= 60.0 {
            Grade::Good
        } else if percentage >= 40.0 {
            Grade::Regular
        } else {
            Grade::Poor
        }
    }

    /// Message shown alongside a finished result.
    pub fn message(&self) -> &'static str {
        match self {
            Grade::Excellent => "Excellent",
            Grade::Good => "Good",
            Grade::Regular => "Fair",
            Grade::Poor => "Needs improvement",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Grade::Excellent => write!(f, "excellent"),
            Grade::Good => write!(f, "good"),
            Grade::Regular => write!(f, "regular"),
            Grade::Poor => write!(f, "poor"),
        }
    }
}
