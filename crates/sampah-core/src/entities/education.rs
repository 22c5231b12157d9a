use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// An entry in the recycling education feed.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct EducationItem {
    pub title: String,
    pub category: String,
    /// Relative publication label, e.g. `4 hari yang lalu`.
    pub published: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_id: Option<String>,
}

impl EducationItem {
    #[must_use]
    pub fn video_url(&self) -> Option<String> {
        self.video_id
            .as_deref()
            .map(|id| format!("https://www.youtube.com/watch?v={id}"))
    }
}
