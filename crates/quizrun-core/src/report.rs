//! Exported exam reports with JSON persistence.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::results::ExamResult;

/// A finished attempt, ready to be written to disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExamReport {
    /// Unique report identifier.
    pub id: Uuid,
    /// When the report was created.
    pub created_at: DateTime<Utc>,
    /// Which exam was taken.
    pub exam: ExamSummary,
    pub result: ExamResult,
}

/// Summary of an exam (without the questions themselves).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExamSummary {
    pub name: String,
    pub question_count: usize,
}

impl ExamReport {
    pub fn new(exam_name: impl Into<String>, result: ExamResult) -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            exam: ExamSummary {
                name: exam_name.into(),
                question_count: result.total_questions,
            },
            result,
        }
    }

    /// Save the report as JSON to a file.
    pub fn save_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("failed to serialize report")?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, json)
            .with_context(|| format!("failed to write report to {}", path.display()))?;
        Ok(())
    }

    /// Load a report from a JSON file.
    pub fn load_json(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read report from {}", path.display()))?;
        let report: ExamReport =
            serde_json::from_str(&content).context("failed to parse report JSON")?;
        Ok(report)
    }
}
