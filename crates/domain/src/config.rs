pub mod display;
pub mod errors;
pub mod fail2ban;
pub mod history;
pub mod logging;
pub mod root;
pub mod scheduler;
pub mod server;

pub use display::DisplayConfig;
pub use errors::ConfigError;
pub use fail2ban::Fail2banConfig;
pub use history::{HistoryBackend, HistoryConfig, MAX_RETENTION_DAYS};
pub use logging::{LogFormat, LoggingConfig};
pub use root::{CliOverrides, Config};
pub use scheduler::SchedulerConfig;
pub use server::ServerConfig;
