pub mod ban;
pub mod refresh;
pub mod status;

pub use ban::{BanRecordDto, BannedIpsQuery, BannedIpsResponse};
pub use refresh::RefreshResponse;
pub use status::{HealthResponse, StatusResponse, VersionResponse};
