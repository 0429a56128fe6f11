//! Shared domain types.
//!
//! Two groups live here:
//!
//! - the input contract returned by the extraction service (`ExtractionResponse`,
//!   `ExtractedField`, `Section`)
//! - the bucketed view model handed to renderers (`Summary`, `RenderedItem`,
//!   `ProjectRecord`)
//!
//! Everything is transient: a new response always produces a fresh `Summary`.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

/// Full JSON body returned by the extraction service.
///
/// Only `matched_fields` is required. Unknown keys are ignored so the service can
/// grow its payload without breaking the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractionResponse {
    pub matched_fields: Vec<ExtractedField>,
    /// `null` reads as no sections.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub sections: BTreeMap<String, Section>,
    /// Server-side processing time in seconds.
    #[serde(default)]
    pub processing_time: Option<f64>,
}

/// One field hypothesis produced by the extraction service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractedField {
    pub field_name: String,
    /// `null`, a missing key and `""` are all possible.
    #[serde(default)]
    pub suggested_value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
}

impl ExtractedField {
    pub fn new(field_name: impl Into<String>, suggested_value: Option<&str>) -> Self {
        Self {
            field_name: field_name.into(),
            suggested_value: suggested_value.map(str::to_string),
            confidence: None,
        }
    }
}

/// A raw text section detected in the document (e.g. `education`, `skills`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub confidence: f64,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<BTreeMap<String, Section>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<BTreeMap<String, Section>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Display grouping for classified fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Bucket {
    Personal,
    Education,
    Skills,
    Projects,
}

impl Bucket {
    /// Render order.
    pub const ALL: [Bucket; 4] = [Bucket::Personal, Bucket::Education, Bucket::Skills, Bucket::Projects];

    /// Heading used by the renderers.
    pub fn display_name(self) -> &'static str {
        match self {
            Bucket::Personal => "Personal Information",
            Bucket::Education => "Education",
            Bucket::Skills => "Skills",
            Bucket::Projects => "Projects",
        }
    }
}

/// The buckets that hold plain label/value items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldBucket {
    Personal,
    Education,
    Skills,
}

impl From<FieldBucket> for Bucket {
    fn from(value: FieldBucket) -> Self {
        match value {
            FieldBucket::Personal => Bucket::Personal,
            FieldBucket::Education => Bucket::Education,
            FieldBucket::Skills => Bucket::Skills,
        }
    }
}

/// Where a field record goes, decided from its name alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Drop,
    /// Decoded by the projects decoder into the `projects` bucket.
    Projects,
    /// Rendered as a plain label/value pair in one of the field buckets.
    Field(FieldBucket),
}

/// A label/value pair ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderedItem {
    pub label: String,
    pub value: String,
}

/// One decoded entry of the packed `projects` value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRecord {
    pub title: String,
    /// `None` when the segment had no title separator.
    pub description: Option<String>,
}

impl ProjectRecord {
    pub fn new(title: impl Into<String>, description: Option<&str>) -> Self {
        Self {
            title: title.into(),
            description: description.map(str::to_string),
        }
    }
}

/// The bucketed view model for one response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub personal: Vec<RenderedItem>,
    pub education: Vec<RenderedItem>,
    pub skills: Vec<RenderedItem>,
    pub projects: Vec<ProjectRecord>,
}

impl Summary {
    /// Label/value items of a field bucket. `Bucket::Projects` has none.
    pub fn items(&self, bucket: Bucket) -> &[RenderedItem] {
        match bucket {
            Bucket::Personal => &self.personal,
            Bucket::Education => &self.education,
            Bucket::Skills => &self.skills,
            Bucket::Projects => &[],
        }
    }

    /// Mutable item list of a field bucket.
    pub fn items_mut(&mut self, bucket: FieldBucket) -> &mut Vec<RenderedItem> {
        match bucket {
            FieldBucket::Personal => &mut self.personal,
            FieldBucket::Education => &mut self.education,
            FieldBucket::Skills => &mut self.skills,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.personal.is_empty()
            && self.education.is_empty()
            && self.skills.is_empty()
            && self.projects.is_empty()
    }
}
