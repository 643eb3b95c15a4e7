mod ban_source;
mod history_store;

pub use ban_source::BanSource;
pub use history_store::HistoryStore;

// Re-export for convenience
pub use jailwatch_domain::{HistorySnapshot, RawBanTime, SourceStatus};
