//! App core.
//!
//! Central struct owning the shared database and the single history manager
//! instance for the session. UI event handlers borrow the manager; nothing
//! else touches its storage key.

use std::sync::Arc;

use crate::database::Database;
use crate::managers::history_manager::HistoryManager;
use crate::platform;
use crate::storage::LocalStorage;

/// Central application struct.
///
/// The history manager is constructed exactly once per session, over storage
/// shared with the database handle. Callers record visits and read panel
/// data through `app.history`.
pub struct App {
    pub db: Arc<Database>,
    pub history: HistoryManager<LocalStorage>,
}

impl App {
    /// Creates a new App over the database at `db_path`.
    ///
    /// Opening the database runs migrations; constructing the manager loads
    /// whatever list the previous session persisted.
    pub fn new(db_path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let db = Arc::new(Database::open(db_path)?);
        let history = HistoryManager::new(LocalStorage::new(db.clone()));
        Ok(Self { db, history })
    }

    /// Creates a new App over the platform-default database location,
    /// creating the data directory if needed.
    pub fn open_default() -> Result<Self, Box<dyn std::error::Error>> {
        let dir = platform::get_data_dir();
        std::fs::create_dir_all(&dir)?;
        let path = dir.join("recents.db");
        Self::new(&path.to_string_lossy())
    }
}
