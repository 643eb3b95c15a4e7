pub mod json_store;
pub mod sqlite_store;

pub use json_store::JsonFileHistoryStore;
pub use sqlite_store::SqliteHistoryStore;
