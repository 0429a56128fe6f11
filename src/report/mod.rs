//! Rendering of interpreted summaries.
//!
//! Renderers never reach into the interpretation stage; they receive the finished
//! `Summary` and run metadata as explicit arguments.

use std::io::Write;

use crate::domain::Summary;
use crate::error::AppError;

pub mod format;

pub use format::{EMPTY_BUCKET, NO_PROJECTS, format_projects, format_sections, format_summary};

/// Where a summary came from.
#[derive(Debug, Clone, PartialEq)]
pub struct RunMeta {
    pub source: String,
    pub processing_time: Option<f64>,
}

/// A consumer of interpreted summaries.
pub trait Render {
    fn render(&mut self, summary: &Summary, meta: &RunMeta) -> Result<(), AppError>;
}

/// Plain-text renderer over any writer (stdout in the CLI).
pub struct TextRender<W: Write> {
    out: W,
}

impl<W: Write> TextRender<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Render for TextRender<W> {
    fn render(&mut self, summary: &Summary, meta: &RunMeta) -> Result<(), AppError> {
        write!(self.out, "{}", format_summary(summary, meta))
            .and_then(|_| self.out.flush())
            .map_err(|e| AppError::remote(format!("Failed to write summary: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_render_writes_report() {
        let mut render = TextRender::new(Vec::new());
        let meta = RunMeta {
            source: "saved.json".to_string(),
            processing_time: None,
        };
        render.render(&Summary::default(), &meta).unwrap();

        let text = String::from_utf8(render.into_inner()).unwrap();
        assert!(text.starts_with("=== autoform - Document Summary ===\nSource: saved.json\n"));
        assert!(!text.contains("Processing time"));
    }
}
