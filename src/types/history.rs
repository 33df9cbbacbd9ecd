use serde::{Deserialize, Serialize};

/// One entry in the recently-viewed list.
///
/// Field names on the wire match the persisted payload layout
/// (`{ title, type, image, timestamp, url }`), so data written by any prior
/// session deserializes without loss. `image` and `url` default when absent;
/// a record missing `title` or `timestamp` fails the schema and the whole
/// payload is treated as empty by the loader.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisitRecord {
    pub title: String,
    /// Open classification label ("Project", "Experience", ...). Used only
    /// for icon selection, never validated against an enum.
    #[serde(rename = "type", default)]
    pub category: String,
    /// Thumbnail reference; empty string means "no image".
    #[serde(rename = "image", default)]
    pub image_url: String,
    /// Milliseconds since the UNIX epoch of the last visit.
    #[serde(rename = "timestamp")]
    pub visited_at: i64,
    /// Navigation target; `None` means the record is not clickable.
    #[serde(rename = "url", default)]
    pub target_url: Option<String>,
}

impl VisitRecord {
    /// Whether this record matches the upsert key `(title, target_url)`.
    /// Strict equality on both parts; `None` matches `None`.
    pub fn matches_key(&self, title: &str, target_url: Option<&str>) -> bool {
        self.title == title && self.target_url.as_deref() == target_url
    }
}
