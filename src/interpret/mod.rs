//! Result interpretation: turn an extraction response into a bucketed summary.
//!
//! Everything in here is pure. Routing depends on the field name only, and no
//! input ever makes interpretation fail.

pub mod classifier;
pub mod label;
pub mod projects;
pub mod routing;

pub use classifier::{MISSING_VALUE, classify, render_field};
pub use label::format_field_name;
pub use projects::decode_projects;
pub use routing::route;

use crate::domain::{ExtractionResponse, Route, Summary};

/// Classify the matched fields of a response.
pub fn interpret(response: &ExtractionResponse) -> Summary {
    classify(&response.matched_fields)
}

/// Names of the fields a response carries that no bucket will show, in input order.
pub fn dropped_field_names(response: &ExtractionResponse) -> Vec<&str> {
    response
        .matched_fields
        .iter()
        .filter(|f| route(&f.field_name) == Route::Drop)
        .map(|f| f.field_name.as_str())
        .collect()
}
