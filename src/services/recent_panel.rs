//! Recent panel view-model.
//!
//! Shapes visit records into display rows for the recently-viewed panel:
//! icon choice by category, thumbnail fallback, and relative-age labels.
//! Produces data only; markup is the render layer's problem.

use crate::managers::history_manager::relative_age;
use crate::types::history::VisitRecord;

/// Placeholder the render layer shows when the list is empty.
pub const EMPTY_STATE_MESSAGE: &str = "No recent items yet. Start exploring!";

/// Icon shown for a record that has no thumbnail image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecentIcon {
    /// Code icon, used for project entries.
    Code,
    /// Briefcase icon, used for everything else.
    Briefcase,
}

impl RecentIcon {
    /// Picks the icon for a category label, case-insensitively.
    pub fn for_category(category: &str) -> Self {
        if category.eq_ignore_ascii_case("project") {
            RecentIcon::Code
        } else {
            RecentIcon::Briefcase
        }
    }
}

/// One display row of the recently-viewed panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelRow {
    pub title: String,
    pub category: String,
    pub icon: RecentIcon,
    /// Thumbnail to show instead of the icon; `None` when the record has no image.
    pub thumbnail: Option<String>,
    /// Relative-age label, e.g. "Just now" or "5m ago".
    pub age: String,
    /// Navigation target; `None` rows are not clickable.
    pub target_url: Option<String>,
}

/// Builds panel rows from the ordered record list, ages computed against `now`.
///
/// An empty input yields no rows; the render layer substitutes
/// [`EMPTY_STATE_MESSAGE`] in that case.
pub fn panel_rows(records: &[VisitRecord], now: i64) -> Vec<PanelRow> {
    records
        .iter()
        .map(|record| PanelRow {
            title: record.title.clone(),
            category: record.category.clone(),
            icon: RecentIcon::for_category(&record.category),
            thumbnail: if record.image_url.is_empty() {
                None
            } else {
                Some(record.image_url.clone())
            },
            age: relative_age(record.visited_at, now),
            target_url: record.target_url.clone(),
        })
        .collect()
}
