//! History Manager — the recently-viewed tracking core.
//!
//! Maintains the capped, deduplicated recency list and keeps it durable
//! across sessions through a `LocalStorageTrait` backend. UI click handlers
//! record visits; panel render code reads the ordered list back.

use std::time::{SystemTime, UNIX_EPOCH};

use crate::storage::LocalStorageTrait;
use crate::types::errors::HistoryError;
use crate::types::history::VisitRecord;

/// Fixed key the serialized list is stored under.
pub const STORAGE_KEY: &str = "recentlyViewed";

/// Maximum number of records kept; inserting beyond this evicts the oldest.
pub const MAX_RECENT: usize = 10;

const MINUTE_MS: i64 = 60_000;
const HOUR_MS: i64 = 3_600_000;
const DAY_MS: i64 = 86_400_000;

/// Trait defining recently-viewed history operations.
pub trait HistoryManagerTrait {
    fn load(&self) -> Vec<VisitRecord>;
    fn record_visit(
        &mut self,
        title: &str,
        category: &str,
        image: &str,
        url: Option<&str>,
    ) -> Result<Vec<VisitRecord>, HistoryError>;
    fn record_visit_at(
        &mut self,
        title: &str,
        category: &str,
        image: &str,
        url: Option<&str>,
        visited_at: i64,
    ) -> Result<Vec<VisitRecord>, HistoryError>;
    fn clear_all(&mut self);
    fn len(&self) -> usize;
    fn is_empty(&self) -> bool;
}

/// History manager over any local-storage backend.
///
/// Construction reads the stored payload exactly once; afterwards the
/// in-memory list is the source of truth and every mutation persists the
/// full list synchronously. Storage failures are absorbed: a failed write
/// skips persistence for that call, a failed or malformed read yields the
/// empty list. The only surfaced error is an empty `title`, rejected before
/// any state changes.
pub struct HistoryManager<S: LocalStorageTrait> {
    storage: S,
    entries: Vec<VisitRecord>,
}

impl<S: LocalStorageTrait> HistoryManager<S> {
    /// Creates a manager over `storage`, loading whatever list it holds.
    ///
    /// A missing key, an unreadable backend, or a payload that fails the
    /// record schema all produce the empty list; none is an error.
    pub fn new(storage: S) -> Self {
        let entries = match storage.get_item(STORAGE_KEY) {
            Ok(Some(raw)) => serde_json::from_str(&raw).unwrap_or_default(),
            _ => Vec::new(),
        };
        Self { storage, entries }
    }

    /// Returns the current UNIX timestamp in milliseconds.
    fn now() -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as i64
    }

    /// Serializes the full list and writes it under the storage key.
    /// A backend failure skips persistence; the in-memory list stands.
    fn persist(&mut self) {
        if let Ok(raw) = serde_json::to_string(&self.entries) {
            let _ = self.storage.set_item(STORAGE_KEY, &raw);
        }
    }
}

impl<S: LocalStorageTrait> HistoryManagerTrait for HistoryManager<S> {
    /// Returns the ordered list, newest first.
    ///
    /// Reads the in-memory state; repeated calls without an intervening
    /// mutation return identical lists.
    fn load(&self) -> Vec<VisitRecord> {
        self.entries.clone()
    }

    /// Records a visit stamped with the current wall-clock time.
    fn record_visit(
        &mut self,
        title: &str,
        category: &str,
        image: &str,
        url: Option<&str>,
    ) -> Result<Vec<VisitRecord>, HistoryError> {
        self.record_visit_at(title, category, image, url, Self::now())
    }

    /// Records a visit with an explicit timestamp.
    ///
    /// Upsert keyed by `(title, url)`: an existing record with the same key
    /// is removed before the new record is inserted at the front, so a
    /// repeat visit moves to the top instead of duplicating. The list is
    /// then truncated to [`MAX_RECENT`] and written through to storage.
    /// Returns the updated list.
    fn record_visit_at(
        &mut self,
        title: &str,
        category: &str,
        image: &str,
        url: Option<&str>,
        visited_at: i64,
    ) -> Result<Vec<VisitRecord>, HistoryError> {
        if title.is_empty() {
            return Err(HistoryError::EmptyTitle);
        }

        self.entries.retain(|r| !r.matches_key(title, url));

        self.entries.insert(
            0,
            VisitRecord {
                title: title.to_string(),
                category: category.to_string(),
                image_url: image.to_string(),
                visited_at,
                target_url: url.map(str::to_string),
            },
        );

        self.entries.truncate(MAX_RECENT);
        self.persist();

        Ok(self.entries.clone())
    }

    /// Removes the stored key and resets the in-memory list to empty.
    fn clear_all(&mut self) {
        self.entries.clear();
        let _ = self.storage.remove_item(STORAGE_KEY);
    }

    /// Number of records currently in the list.
    fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the list is empty.
    fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Formats the elapsed time since `visited_at` as a short age label.
///
/// Pure function over milliseconds: under a minute is `"Just now"`, then
/// `"<m>m ago"`, `"<h>h ago"`, `"<d>d ago"` by floor division. Timestamps
/// in the future clamp to `"Just now"`.
pub fn relative_age(visited_at: i64, now: i64) -> String {
    let delta = (now - visited_at).max(0);

    if delta < MINUTE_MS {
        "Just now".to_string()
    } else if delta < HOUR_MS {
        format!("{}m ago", delta / MINUTE_MS)
    } else if delta < DAY_MS {
        format!("{}h ago", delta / HOUR_MS)
    } else {
        format!("{}d ago", delta / DAY_MS)
    }
}
