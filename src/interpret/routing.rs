//! Field routing table.

use crate::domain::{FieldBucket, Route};

/// Fields that are extracted but never shown.
const EXCLUDED: &[&str] = &["location"];

const PROJECTS: &str = "projects";

const PERSONAL: &[&str] = &["full_name", "email", "phone"];
const EDUCATION: &[&str] = &["college_name", "course_name", "graduation_year"];
const SKILLS: &[&str] = &["skills", "languages"];

/// Decide where a field goes from its name alone. Unknown names are dropped.
pub fn route(field_name: &str) -> Route {
    if EXCLUDED.contains(&field_name) {
        return Route::Drop;
    }
    if field_name == PROJECTS {
        return Route::Projects;
    }

    let table: [(&[&str], FieldBucket); 3] = [
        (PERSONAL, FieldBucket::Personal),
        (EDUCATION, FieldBucket::Education),
        (SKILLS, FieldBucket::Skills),
    ];
    table
        .iter()
        .find(|(names, _)| names.contains(&field_name))
        .map(|&(_, bucket)| Route::Field(bucket))
        .unwrap_or(Route::Drop)
}
