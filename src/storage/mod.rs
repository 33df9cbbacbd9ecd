// Key-value storage surface over the database layer.

pub mod local_storage;

pub use local_storage::{LocalStorage, LocalStorageTrait};
