//! Field classifier: raw field records -> bucketed `Summary`.

use crate::domain::{ExtractedField, RenderedItem, Route, Summary};

use super::label::format_field_name;
use super::projects::decode_projects;
use super::routing::route;

/// Shown when a field was matched but carries no value.
pub const MISSING_VALUE: &str = "Not found";

/// Classify field records into buckets.
///
/// Single pass; each bucket keeps the input order of its records. Unknown and
/// excluded field names are ignored rather than reported.
pub fn classify(fields: &[ExtractedField]) -> Summary {
    let mut summary = Summary::default();

    for field in fields {
        match route(&field.field_name) {
            Route::Drop => {}
            Route::Projects => summary
                .projects
                .extend(decode_projects(field.suggested_value.as_deref())),
            Route::Field(bucket) => summary.items_mut(bucket).push(render_field(field)),
        }
    }

    summary
}

/// Label/value pair for a non-project field.
pub fn render_field(field: &ExtractedField) -> RenderedItem {
    let value = match field.suggested_value.as_deref() {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => MISSING_VALUE.to_string(),
    };
    RenderedItem {
        label: format_field_name(&field.field_name),
        value,
    }
}
