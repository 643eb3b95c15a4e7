//! Jailwatch Domain Layer
pub mod ban_record;
pub mod ban_source;
pub mod config;
pub mod errors;
pub mod history;

pub use ban_record::{abuse_url, BanKey, BanRecord, BannedAt};
pub use ban_source::{RawBanTime, SourceStatus};
pub use config::{CliOverrides, Config, HistoryBackend};
pub use errors::DomainError;
pub use history::{HistorySnapshot, JailCount};
