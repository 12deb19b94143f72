//! Exam session state machine.
//!
//! An [`ExamEngine`] holds one exam attempt in memory: the loaded questions,
//! the position of the current question, and the answers given so far.
//! Callers drive it one action at a time and read state back for display.

use serde::{Deserialize, Serialize};

use crate::model::{Choice, Question};
use crate::results::{ExamResult, UserAnswer};

/// Coarse lifecycle phase of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExamPhase {
    /// No questions loaded.
    Empty,
    InProgress,
    /// The user advanced past the last question.
    Finished,
}

/// Single-session exam engine.
///
/// Input is trusted: questions are expected to have been validated by
/// [`crate::source`] before [`ExamEngine::load_questions`] is called.
#[derive(Debug, Clone, Default)]
pub struct ExamEngine {
    questions: Vec<Question>,
    current_index: usize,
    answers: Vec<UserAnswer>,
    finished: bool,
}

impl ExamEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole session with a fresh attempt at `questions`.
    pub fn load_questions(&mut self, questions: Vec<Question>) {
        tracing::debug!(count = questions.len(), "loading questions");
        self.questions = questions;
        self.current_index = 0;
        self.answers.clear();
        self.finished = false;
    }

    /// The question awaiting an answer, if any.
    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.current_index)
    }

    /// Judge `selection` against the current question and record it.
    ///
    /// Returns `false` without touching state when there is no current
    /// question. Does not advance; see [`ExamEngine::next_question`].
    pub fn submit_answer(&mut self, selection: Choice) -> bool {
        let Some(question) = self.current_question() else {
            tracing::debug!("submit ignored, no current question");
            return false;
        };

        let answer = UserAnswer::record(question, selection);
        let is_correct = answer.is_correct;
        tracing::debug!(
            question = answer.question_number,
            correct = is_correct,
            "answer submitted"
        );
        self.answers.push(answer);
        is_correct
    }

    /// Move to the next question, or mark the exam finished at the last one.
    pub fn next_question(&mut self) {
        if self.current_index + 1 < self.questions.len() {
            self.current_index += 1;
            tracing::debug!(index = self.current_index, "advanced");
        } else {
            self.finished = true;
            tracing::debug!(answered = self.answers.len(), "exam finished");
        }
    }

    /// Score the session as it stands now.
    pub fn exam_result(&self) -> ExamResult {
        ExamResult::compute(self.questions.len(), &self.answers)
    }

    /// Restart the same exam from the first question.
    pub fn reset_exam(&mut self) {
        tracing::debug!("exam reset");
        self.current_index = 0;
        self.answers.clear();
        self.finished = false;
    }

    /// Drop the exam entirely, returning to the empty state.
    pub fn clear_exam(&mut self) {
        tracing::debug!("exam cleared");
        self.questions.clear();
        self.current_index = 0;
        self.answers.clear();
        self.finished = false;
    }

    pub fn has_questions(&self) -> bool {
        !self.questions.is_empty()
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn answers(&self) -> &[UserAnswer] {
        &self.answers
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn phase(&self) -> ExamPhase {
        if self.questions.is_empty() {
            ExamPhase::Empty
        } else if self.finished {
            ExamPhase::Finished
        } else {
            ExamPhase::InProgress
        }
    }

    /// 1-based position of the current question and the question count.
    ///
    /// `(0, 0)` when no exam is loaded.
    pub fn progress(&self) -> (usize, usize) {
        if self.questions.is_empty() {
            return (0, 0);
        }
        (self.current_index + 1, self.questions.len())
    }
}
