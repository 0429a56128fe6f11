//! Read/write raw extraction responses.
//!
//! Saving the service's answer lets a run be replayed offline with
//! `autoform show --response <file>`.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::domain::ExtractionResponse;
use crate::error::AppError;

/// Read a saved response JSON file.
pub fn read_response_json(path: &Path) -> Result<ExtractionResponse, AppError> {
    let file = File::open(path)
        .map_err(|e| AppError::usage(format!("Failed to open response JSON '{}': {e}", path.display())))?;
    serde_json::from_reader(BufReader::new(file))
        .map_err(|e| AppError::usage(format!("Invalid response JSON '{}': {e}", path.display())))
}

/// Write a response as pretty-printed JSON.
pub fn write_response_json(path: &Path, response: &ExtractionResponse) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::usage(format!("Failed to create response JSON '{}': {e}", path.display())))?;
    serde_json::to_writer_pretty(file, response)
        .map_err(|e| AppError::usage(format!("Failed to write response JSON: {e}")))
}
