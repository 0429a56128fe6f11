//! Decoder for the packed `projects` field.
//!
//! The extraction service joins every project it finds into a single string:
//!
//! ```text
//! value   := segment (" • " segment)*
//! segment := title (": " description)?
//! ```
//!
//! Both delimiters are defined here and nowhere else.

use crate::domain::ProjectRecord;

/// Separates one project from the next.
pub const PROJECT_SEPARATOR: &str = " • ";
/// Separates a project's title from its description (first occurrence only).
pub const TITLE_SEPARATOR: &str = ": ";

/// Decode a raw `projects` value into records, in input order.
///
/// Never fails: absent or empty input gives an empty list, and a segment without
/// a title separator becomes a record with no description.
pub fn decode_projects(raw: Option<&str>) -> Vec<ProjectRecord> {
    let Some(raw) = raw else {
        return Vec::new();
    };

    raw.split(PROJECT_SEPARATOR)
        .filter(|segment| !segment.is_empty())
        .map(decode_segment)
        .collect()
}

fn decode_segment(segment: &str) -> ProjectRecord {
    match segment.split_once(TITLE_SEPARATOR) {
        Some((title, description)) => ProjectRecord::new(title, Some(description)),
        None => ProjectRecord::new(segment, None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_or_empty_is_empty() {
        assert!(decode_projects(None).is_empty());
        assert!(decode_projects(Some("")).is_empty());
    }

    #[test]
    fn keeps_segment_order() {
        let got = decode_projects(Some("Site: A personal site • App: A mobile app"));
        assert_eq!(
            got,
            vec![
                ProjectRecord::new("Site", Some("A personal site")),
                ProjectRecord::new("App", Some("A mobile app")),
            ]
        );
    }

    #[test]
    fn missing_title_separator_degrades() {
        assert_eq!(
            decode_projects(Some("NoColonSegment")),
            vec![ProjectRecord::new("NoColonSegment", None)]
        );
    }

    #[test]
    fn splits_on_first_separator_only() {
        assert_eq!(
            decode_projects(Some("A: B: C")),
            vec![ProjectRecord::new("A", Some("B: C"))]
        );
        assert_eq!(
            decode_projects(Some("Built: a thing: with colon")),
            vec![ProjectRecord::new("Built", Some("a thing: with colon"))]
        );
    }

    #[test]
    fn drops_empty_segments() {
        let got = decode_projects(Some(" • A: x •  • B: y • "));
        assert_eq!(
            got,
            vec![ProjectRecord::new("A", Some("x")), ProjectRecord::new("B", Some("y"))]
        );
    }

    #[test]
    fn passes_description_through_verbatim() {
        // Bare bullets and mojibake are not delimiters.
        let got = decode_projects(Some("Chat (Live): uses •sockets and â€¢ tokens"));
        assert_eq!(
            got,
            vec![ProjectRecord::new("Chat (Live)", Some("uses •sockets and â€¢ tokens"))]
        );
    }

    #[test]
    fn empty_description_is_present() {
        assert_eq!(decode_projects(Some("Title: ")), vec![ProjectRecord::new("Title", Some(""))]);
    }
}
