//! quizrun-core — Exam engine, scoring, and question sources.
//!
//! This crate defines the question model, the single-session exam state
//! machine, result scoring, and the loaders that turn files or HTTP
//! responses into validated question lists.

pub mod engine;
pub mod error;
pub mod model;
pub mod report;
pub mod results;
pub mod source;

pub use engine::{ExamEngine, ExamPhase};
pub use error::SourceError;
pub use model::{Alternative, Choice, Question};
pub use results::{ExamResult, Grade, UserAnswer};
