pub mod banned_ips;
pub mod health;
pub mod refresh;
pub mod status;

pub use banned_ips::get_banned_ips;
pub use health::{get_version, health_check};
pub use refresh::refresh_bans;
pub use status::get_status;
