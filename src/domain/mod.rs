//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - the extraction service contract (`ExtractionResponse`, `ExtractedField`)
//! - routing decisions (`Bucket`, `Route`)
//! - the view model handed to renderers (`Summary`, `RenderedItem`, `ProjectRecord`)

pub mod types;

pub use types::*;
