//! Upload side: sending a document to the extraction service.

pub mod client;

pub use client::{ExtractionClient, is_pdf_path, validate_document};
