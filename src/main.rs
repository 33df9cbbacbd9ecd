//! recents — recently-viewed tracking engine.
//!
//! Entry point: runs an interactive console demo of each component.

fn main() {
    println!();
    println!("╔══════════════════════════════════════════════════════════════╗");
    println!("║                recents v{} — Demo Mode                    ║", env!("CARGO_PKG_VERSION"));
    println!("║     Recently-viewed tracking with durable local storage    ║");
    println!("╚══════════════════════════════════════════════════════════════╝");
    println!();

    demo_database();
    demo_local_storage();
    demo_history();
    demo_panel();
    demo_app_core();

    println!();
    println!("═══════════════════════════════════════════════════════════════");
    println!("  ✅ All components demonstrated successfully!");
    println!("═══════════════════════════════════════════════════════════════");
}

fn section(name: &str) {
    println!("───────────────────────────────────────────────────────────────");
    println!("  📦 {}", name);
    println!("───────────────────────────────────────────────────────────────");
}

fn demo_database() {
    use recents::database::Database;
    section("Database Layer");

    let db = Database::open_in_memory().expect("Failed to open database");
    let tables: Vec<String> = {
        let conn = db.connection();
        let mut stmt = conn
            .prepare("SELECT name FROM sqlite_master WHERE type='table' ORDER BY name")
            .unwrap();
        stmt.query_map([], |row| row.get(0))
            .unwrap()
            .filter_map(|r| r.ok())
            .collect()
    };
    println!("  Created {} tables: {}", tables.len(), tables.join(", "));
    println!("  ✓ Database + migrations OK");
    println!();
}

fn demo_local_storage() {
    use std::sync::Arc;
    use recents::database::Database;
    use recents::storage::{LocalStorage, LocalStorageTrait};
    section("Local Storage");

    let db = Arc::new(Database::open_in_memory().unwrap());
    let mut storage = LocalStorage::new(db);

    storage.set_item("greeting", "hello").unwrap();
    println!("  Stored 'greeting' = {:?}", storage.get_item("greeting").unwrap());

    storage.set_item("greeting", "hello again").unwrap();
    println!("  Overwrote 'greeting' = {:?}", storage.get_item("greeting").unwrap());

    storage.remove_item("greeting").unwrap();
    println!("  Removed 'greeting' -> {:?}", storage.get_item("greeting").unwrap());
    println!("  ✓ LocalStorage OK");
    println!();
}

fn demo_history() {
    use std::sync::Arc;
    use recents::database::Database;
    use recents::managers::history_manager::{
        relative_age, HistoryManager, HistoryManagerTrait, MAX_RECENT,
    };
    use recents::storage::LocalStorage;
    section("History Manager");

    let db = Arc::new(Database::open_in_memory().unwrap());
    let mut mgr = HistoryManager::new(LocalStorage::new(db));

    mgr.record_visit("Spotify Clone", "Project", "img/spotify.png", Some("#projects"))
        .unwrap();
    mgr.record_visit("Backend Internship", "Experience", "", Some("#experience"))
        .unwrap();
    mgr.record_visit("Spotify Clone", "Project", "img/spotify.png", Some("#projects"))
        .unwrap(); // repeat visit
    println!("  Recorded 3 visits (2 unique items), list length = {}", mgr.len());
    println!("  Front of list: {}", mgr.load()[0].title);

    for i in 0..12 {
        mgr.record_visit(&format!("Project {}", i), "Project", "", None)
            .unwrap();
    }
    println!("  Recorded 12 more; capacity holds at {} (max {})", mgr.len(), MAX_RECENT);

    let now = 1_700_000_000_000;
    println!("  Ages: 30s -> {:?}, 2h -> {:?}, 3d -> {:?}",
        relative_age(now - 30_000, now),
        relative_age(now - 7_200_000, now),
        relative_age(now - 259_200_000, now));

    mgr.clear_all();
    println!("  Cleared all history: {} entries", mgr.len());
    println!("  ✓ HistoryManager OK");
    println!();
}

fn demo_panel() {
    use std::sync::Arc;
    use recents::database::Database;
    use recents::managers::history_manager::{HistoryManager, HistoryManagerTrait};
    use recents::services::recent_panel::{panel_rows, EMPTY_STATE_MESSAGE};
    use recents::storage::LocalStorage;
    section("Recent Panel");

    let db = Arc::new(Database::open_in_memory().unwrap());
    let mut mgr = HistoryManager::new(LocalStorage::new(db));

    let empty = panel_rows(&mgr.load(), 0);
    println!("  Empty list -> {} rows, placeholder: \"{}\"", empty.len(), EMPTY_STATE_MESSAGE);

    mgr.record_visit("Spotify Clone", "Project", "img/spotify.png", Some("#projects"))
        .unwrap();
    mgr.record_visit("Backend Internship", "Experience", "", None)
        .unwrap();

    let now = 1_700_000_000_000;
    let rows = panel_rows(&mgr.load(), now);
    for row in &rows {
        println!(
            "  [{:?}] {} ({}) — {}{}",
            row.icon,
            row.title,
            row.category,
            row.age,
            if row.target_url.is_some() { "" } else { " (not clickable)" }
        );
    }
    println!("  ✓ RecentPanel OK");
    println!();
}

fn demo_app_core() {
    use recents::app::App;
    use recents::managers::history_manager::HistoryManagerTrait;
    section("App Core");

    let mut app = App::new(":memory:").unwrap();
    println!("  Initialized App (shared db + one history manager)");

    app.history
        .record_visit("Certificates", "Achievement", "", None)
        .unwrap();
    println!("  Recorded a visit through the app: {} entry", app.history.len());
    println!("  ✓ App Core OK");
}
