//! Core data model types for quizrun.
//!
//! These are the types every other module builds on: questions, their
//! alternatives, and the scalar-or-set answer shape shared by answer keys
//! and user selections.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One selectable option of a question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alternative {
    /// Identifier the user types to select this option (e.g. "A").
    pub id: String,
    /// Display text.
    #[serde(alias = "texto")]
    pub text: String,
}

impl Alternative {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
        }
    }
}

/// An answer shape: one alternative id, or a set of ids.
///
/// Used both for a question's answer key and for what the user submitted.
/// In JSON this is either a string or an array of strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Choice {
    Single(String),
    Multiple(Vec<String>),
}

impl Choice {
    /// Build a multi-select choice from any iterator of ids.
    pub fn multiple<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Choice::Multiple(ids.into_iter().map(Into::into).collect())
    }

    pub fn is_multiple(&self) -> bool {
        matches!(self, Choice::Multiple(_))
    }

    /// All ids referenced by this choice.
    pub fn ids(&self) -> Vec<&str> {
        match self {
            Choice::Single(id) => vec![id.as_str()],
            Choice::Multiple(ids) => ids.iter().map(String::as_str).collect(),
        }
    }

    /// Whether the choice carries anything at all (non-blank id or non-empty set).
    pub fn is_empty(&self) -> bool {
        match self {
            Choice::Single(id) => id.trim().is_empty(),
            Choice::Multiple(ids) => ids.is_empty(),
        }
    }

    /// Judge `selection` against `self` used as the answer key.
    ///
    /// Sets compare order-independently; a shape mismatch is never correct.
    pub fn accepts(&self, selection: &Choice) -> bool {
        match (self, selection) {
            (Choice::Single(key), Choice::Single(picked)) => key == picked,
            (Choice::Multiple(key), Choice::Multiple(picked)) => {
                if key.len() != picked.len() {
                    return false;
                }
                let mut key: Vec<&str> = key.iter().map(String::as_str).collect();
                let mut picked: Vec<&str> = picked.iter().map(String::as_str).collect();
                key.sort_unstable();
                picked.sort_unstable();
                key == picked
            }
            _ => false,
        }
    }
}

impl From<&str> for Choice {
    fn from(id: &str) -> Self {
        Choice::Single(id.to_string())
    }
}

impl From<String> for Choice {
    fn from(id: String) -> Self {
        Choice::Single(id)
    }
}

impl From<Vec<String>> for Choice {
    fn from(ids: Vec<String>) -> Self {
        Choice::Multiple(ids)
    }
}

impl From<Vec<&str>> for Choice {
    fn from(ids: Vec<&str>) -> Self {
        Choice::multiple(ids)
    }
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Choice::Single(id) => write!(f, "{id}"),
            Choice::Multiple(ids) => write!(f, "{}", ids.join(", ")),
        }
    }
}

/// A single exam question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// Question number as given by the exam author.
    #[serde(alias = "numeroPregunta")]
    pub number: u32,
    /// The question text.
    #[serde(alias = "pregunta")]
    pub prompt: String,
    /// Selectable options, in display order.
    #[serde(alias = "alternativas")]
    pub alternatives: Vec<Alternative>,
    /// The answer key. A set makes this a multiple-choice question.
    #[serde(rename = "correctAnswer", alias = "respuestaCorrecta")]
    pub correct_answer: Choice,
}

impl Question {
    pub fn is_multiple_choice(&self) -> bool {
        self.correct_answer.is_multiple()
    }

    /// Look up an alternative by id.
    pub fn alternative(&self, id: &str) -> Option<&Alternative> {
        self.alternatives.iter().find(|a| a.id == id)
    }
}
