use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use jailwatch_domain::BannedAt;

const DISPLAY_FORMAT: &str = "%m/%d/%Y %I:%M:%S %p %Z";

/// `03/01/2024 06:00:00 AM CST` style rendering in `tz`.
pub fn format_instant(at: DateTime<Utc>, tz: Tz) -> String {
    at.with_timezone(&tz).format(DISPLAY_FORMAT).to_string()
}

/// Unparsed ban times are shown exactly as stored.
pub fn format_banned_at(banned_at: &BannedAt, tz: Tz) -> String {
    match banned_at {
        BannedAt::At(at) => format_instant(*at, tz),
        BannedAt::Unparsed(raw) => raw.clone(),
    }
}
