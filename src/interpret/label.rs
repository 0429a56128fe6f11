//! Field-name labels.

/// Turn a snake_case field name into a display label.
///
/// Each `_`-separated segment gets its first character uppercased; the rest of
/// the segment is kept as-is (`graduation_year` -> `Graduation Year`,
/// `gpa_in_CS` -> `Gpa In CS`).
pub fn format_field_name(name: &str) -> String {
    name.split('_').map(capitalize).collect::<Vec<_>>().join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
