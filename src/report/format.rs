//! Formatted terminal output for an interpreted summary.
//!
//! Formatting lives here so placeholder text and layout changes stay in one place.

use std::collections::BTreeMap;

use crate::domain::{Bucket, ProjectRecord, Section, Summary};

use super::RunMeta;

/// Shown when the projects bucket is empty.
pub const NO_PROJECTS: &str = "No projects found";
/// Shown for an empty label/value bucket.
pub const EMPTY_BUCKET: &str = "(none)";

const PREVIEW_CHARS: usize = 72;

/// Format the full summary: header, then one block per bucket.
pub fn format_summary(summary: &Summary, meta: &RunMeta) -> String {
    let mut out = String::new();

    out.push_str("=== autoform - Document Summary ===\n");
    out.push_str(&format!("Source: {}\n", meta.source));
    if let Some(secs) = meta.processing_time {
        out.push_str(&format!("Processing time: {secs:.2}s\n"));
    }

    for bucket in Bucket::ALL {
        out.push('\n');
        out.push_str(bucket.display_name());
        out.push_str(":\n");
        match bucket {
            Bucket::Projects => out.push_str(&format_projects(&summary.projects)),
            _ => out.push_str(&format_items(summary, bucket)),
        }
    }

    out
}

fn format_items(summary: &Summary, bucket: Bucket) -> String {
    let items = summary.items(bucket);
    if items.is_empty() {
        return format!("  {EMPTY_BUCKET}\n");
    }

    let width = items.iter().map(|i| i.label.chars().count()).max().unwrap_or(0);
    let mut out = String::new();
    for item in items {
        out.push_str(&format!("  {:<width$}  {}\n", item.label, item.value));
    }
    out
}

/// Format the project list, or the empty placeholder.
pub fn format_projects(projects: &[ProjectRecord]) -> String {
    if projects.is_empty() {
        return format!("  {NO_PROJECTS}\n");
    }

    let mut out = String::new();
    for p in projects {
        out.push_str(&format!("  - {}\n", p.title));
        if let Some(desc) = p.description.as_deref().filter(|d| !d.is_empty()) {
            out.push_str(&format!("    {desc}\n"));
        }
    }
    out
}

/// Format the raw document sections the service detected (sorted by name).
pub fn format_sections(sections: &BTreeMap<String, Section>) -> String {
    let mut out = String::from("Detected sections:\n");
    if sections.is_empty() {
        out.push_str(&format!("  {EMPTY_BUCKET}\n"));
        return out;
    }

    let width = sections.keys().map(|k| k.chars().count()).max().unwrap_or(0);
    for (name, section) in sections {
        out.push_str(&format!(
            "  {name:<width$}  {:>4.2}  {}\n",
            section.confidence,
            truncate(&section.content, PREVIEW_CHARS)
        ));
    }
    out
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let mut out: String = s.chars().take(max.saturating_sub(1)).collect();
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RenderedItem;

    fn meta() -> RunMeta {
        RunMeta {
            source: "resume.pdf".to_string(),
            processing_time: Some(0.5),
        }
    }

    #[test]
    fn empty_summary_shows_placeholders() {
        let text = format_summary(&Summary::default(), &meta());
        assert!(text.contains("Source: resume.pdf"));
        assert!(text.contains("Processing time: 0.50s"));
        assert!(text.contains("Personal Information:\n  (none)\n"));
        assert!(text.contains("Projects:\n  No projects found\n"));
    }

    #[test]
    fn buckets_render_in_order() {
        let summary = Summary {
            personal: vec![
                RenderedItem {
                    label: "Full Name".to_string(),
                    value: "Jane Doe".to_string(),
                },
                RenderedItem {
                    label: "Email".to_string(),
                    value: "Not found".to_string(),
                },
            ],
            projects: vec![
                ProjectRecord::new("API", Some("Built REST API")),
                ProjectRecord::new("Bare", None),
            ],
            ..Summary::default()
        };

        let text = format_summary(&summary, &meta());
        assert!(text.contains("  Full Name  Jane Doe\n  Email      Not found\n"));
        assert!(text.contains("  - API\n    Built REST API\n  - Bare\n"));

        let personal = text.find("Personal Information").unwrap();
        let education = text.find("Education:").unwrap();
        let skills = text.find("Skills:").unwrap();
        let projects = text.find("Projects:").unwrap();
        assert!(personal < education && education < skills && skills < projects);
    }

    #[test]
    fn sections_are_previewed() {
        let mut sections = BTreeMap::new();
        sections.insert(
            "skills".to_string(),
            Section {
                content: "x".repeat(100),
                confidence: 0.95,
            },
        );
        let text = format_sections(&sections);
        assert!(text.starts_with("Detected sections:\n  skills  0.95  "));
        assert!(text.trim_end().ends_with('…'));
        assert_eq!(format_sections(&BTreeMap::new()), "Detected sections:\n  (none)\n");
    }
}
