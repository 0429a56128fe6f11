//! Shared "upload -> interpret" pipeline used by both CLI and TUI front ends.
//!
//! The front ends only differ in presentation (printing vs widgets).

use std::path::Path;

use tracing::{debug, warn};

use crate::domain::{ExtractionResponse, Summary};
use crate::error::AppError;
use crate::interpret::{dropped_field_names, interpret};
use crate::io::SummaryFile;
use crate::report::RunMeta;
use crate::upload::ExtractionClient;

/// All outputs of a single run.
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub response: ExtractionResponse,
    pub summary: Summary,
    pub meta: RunMeta,
}

impl RunOutput {
    pub fn to_summary_file(&self) -> SummaryFile {
        SummaryFile::new(
            self.meta.source.clone(),
            self.meta.processing_time,
            self.summary.clone(),
        )
    }
}

/// Upload a document and interpret the answer.
pub fn run_upload(client: &ExtractionClient, path: &Path) -> Result<RunOutput, AppError> {
    let response = client.process_document(path)?;
    Ok(run_with_response(response, path.display().to_string()))
}

/// Interpret an already-obtained response.
pub fn run_with_response(response: ExtractionResponse, source: impl Into<String>) -> RunOutput {
    let dropped = dropped_field_names(&response);
    if !dropped.is_empty() {
        debug!(fields = ?dropped, "fields not shown in any bucket");
    }

    let summary = interpret(&response);
    if summary.is_empty() {
        warn!(
            fields = response.matched_fields.len(),
            "no displayable fields in the response"
        );
    }
    let meta = RunMeta {
        source: source.into(),
        processing_time: response.processing_time,
    };

    RunOutput {
        response,
        summary,
        meta,
    }
}
