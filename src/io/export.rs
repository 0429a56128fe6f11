//! Export an interpreted summary to JSON.
//!
//! The export wraps the four buckets with enough metadata to tell runs apart.
//! The schema is defined by `SummaryFile`.

use std::fs::File;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::Summary;
use crate::error::AppError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryFile {
    pub tool: String,
    pub generated: DateTime<Utc>,
    /// Document path or response file the summary came from.
    pub source: String,
    pub processing_time: Option<f64>,
    pub summary: Summary,
}

impl SummaryFile {
    pub fn new(source: impl Into<String>, processing_time: Option<f64>, summary: Summary) -> Self {
        Self {
            tool: "autoform".to_string(),
            generated: Utc::now(),
            source: source.into(),
            processing_time,
            summary,
        }
    }
}

/// Write a summary export file.
pub fn write_summary_json(path: &Path, file: &SummaryFile) -> Result<(), AppError> {
    let out = File::create(path)
        .map_err(|e| AppError::usage(format!("Failed to create export JSON '{}': {e}", path.display())))?;
    serde_json::to_writer_pretty(out, file)
        .map_err(|e| AppError::usage(format!("Failed to write export JSON: {e}")))
}
