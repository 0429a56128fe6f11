//! HTTP client for the document extraction service.

use std::fs;
use std::path::{Path, PathBuf};

use reqwest::blocking::Client;
use reqwest::blocking::multipart::{Form, Part};
use tracing::{debug, info};

use crate::config::Settings;
use crate::domain::ExtractionResponse;
use crate::error::AppError;

/// Multipart part name the service reads the document from.
const FILE_PART: &str = "file";
const PDF_MIME: &str = "application/pdf";

pub struct ExtractionClient {
    client: Client,
    api_url: String,
    max_file_size: u64,
}

impl ExtractionClient {
    pub fn from_settings(settings: &Settings) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(settings.timeout)
            .build()
            .map_err(|e| AppError::remote(format!("Failed to build HTTP client: {e}")))?;
        Ok(Self {
            client,
            api_url: settings.api_url.clone(),
            max_file_size: settings.max_file_size,
        })
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Upload a PDF and return the service's parsed answer.
    pub fn process_document(&self, path: &Path) -> Result<ExtractionResponse, AppError> {
        let path = validate_document(path, self.max_file_size)?;
        let bytes = fs::read(&path)
            .map_err(|e| AppError::usage(format!("Failed to read '{}': {e}", path.display())))?;

        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("document.pdf")
            .to_string();
        info!(file = %file_name, bytes = bytes.len(), url = %self.api_url, "uploading document");

        let part = Part::bytes(bytes)
            .file_name(file_name)
            .mime_str(PDF_MIME)
            .map_err(|e| AppError::remote(format!("Invalid upload content type: {e}")))?;
        let form = Form::new().part(FILE_PART, part);

        let resp = self
            .client
            .post(&self.api_url)
            .multipart(form)
            .send()
            .map_err(|e| AppError::remote(format!("Extraction request failed: {e}")))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().unwrap_or_default();
            debug!(%status, body = %body, "extraction service rejected upload");
            return Err(AppError::remote(format!(
                "Extraction request failed with status {status}."
            )));
        }

        let response: ExtractionResponse = resp
            .json()
            .map_err(|e| AppError::remote(format!("Failed to parse extraction response: {e}")))?;

        info!(
            fields = response.matched_fields.len(),
            sections = response.sections.len(),
            "extraction response received"
        );
        Ok(response)
    }
}

/// Check a path is an existing `.pdf` file no larger than `max_size` bytes.
pub fn validate_document(path: &Path, max_size: u64) -> Result<PathBuf, AppError> {
    if !path.exists() {
        return Err(AppError::usage(format!("File not found: {}", path.display())));
    }
    if path.is_dir() {
        return Err(AppError::usage(format!(
            "Expected a file, got a directory: {}",
            path.display()
        )));
    }
    if !is_pdf_path(path) {
        return Err(AppError::usage(format!(
            "Only PDF files are allowed (got: {}).",
            path.display()
        )));
    }

    let size = fs::metadata(path)
        .map_err(|e| AppError::usage(format!("Failed to stat '{}': {e}", path.display())))?
        .len();
    if size > max_size {
        return Err(AppError::usage(format!(
            "{} is {size} bytes; the limit is {max_size} bytes.",
            path.display()
        )));
    }

    Ok(path.to_path_buf())
}

pub fn is_pdf_path(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("pdf"))
        == Some(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EXIT_USAGE;

    #[test]
    fn pdf_extension_is_case_insensitive() {
        assert!(is_pdf_path(Path::new("cv.pdf")));
        assert!(is_pdf_path(Path::new("dir/CV.PDF")));
        assert!(!is_pdf_path(Path::new("cv.docx")));
        assert!(!is_pdf_path(Path::new("pdf")));
    }

    #[test]
    fn validate_accepts_small_pdf() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resume.pdf");
        fs::write(&path, b"%PDF-1.4\n").unwrap();
        assert_eq!(validate_document(&path, 1024).unwrap(), path);
    }

    #[test]
    fn validate_rejects_bad_inputs() {
        let dir = tempfile::tempdir().unwrap();

        let missing = dir.path().join("missing.pdf");
        assert_eq!(validate_document(&missing, 1024).unwrap_err().exit_code(), EXIT_USAGE);

        assert!(validate_document(dir.path(), 1024).is_err());

        let txt = dir.path().join("notes.txt");
        fs::write(&txt, b"hello").unwrap();
        let err = validate_document(&txt, 1024).unwrap_err();
        assert!(err.message().contains("Only PDF files"));

        let big = dir.path().join("big.pdf");
        fs::write(&big, vec![0u8; 64]).unwrap();
        let err = validate_document(&big, 32).unwrap_err();
        assert!(err.message().contains("limit is 32 bytes"));
    }

    #[test]
    fn client_rejects_non_pdf_before_sending() {
        let dir = tempfile::tempdir().unwrap();
        let txt = dir.path().join("notes.txt");
        fs::write(&txt, b"hello").unwrap();

        let settings = Settings {
            api_url: "http://127.0.0.1:9/unused".to_string(),
            ..Settings::default()
        };
        let client = ExtractionClient::from_settings(&settings).unwrap();
        let err = client.process_document(&txt).unwrap_err();
        assert_eq!(err.exit_code(), EXIT_USAGE);
    }
}
