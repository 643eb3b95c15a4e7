use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;
use tracing::debug;

/// Date/time layouts tried in order once the two raw fields are joined.
const CANDIDATE_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S",
    "%m/%d/%Y %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%m/%d/%Y %H:%M",
];

const NANOS_DIGITS: usize = 9;

/// Turns the daemon's raw ban-time fields into an instant.
///
/// Resolution order:
/// 1. a primary field made only of digits (and at most one `.`) is a Unix
///    epoch in seconds; the secondary field is ignored,
/// 2. otherwise `"{primary} {secondary}"` is matched against
///    [`CANDIDATE_FORMATS`] and read as local time in `source_tz`,
/// 3. anything else resolves to `now`.
///
/// Never fails: garbage in always yields a usable instant.
#[derive(Debug, Clone, Copy)]
pub struct TimestampResolver {
    source_tz: Tz,
}

impl TimestampResolver {
    pub fn new(source_tz: Tz) -> Self {
        Self { source_tz }
    }

    pub fn utc() -> Self {
        Self::new(Tz::UTC)
    }

    pub fn resolve(&self, primary: &str, secondary: &str, now: DateTime<Utc>) -> DateTime<Utc> {
        match self.try_resolve(primary, secondary) {
            Some(resolved) => resolved,
            None => {
                debug!(primary, secondary, "Unrecognised ban time, assuming now");
                now
            }
        }
    }

    pub fn try_resolve(&self, primary: &str, secondary: &str) -> Option<DateTime<Utc>> {
        let primary = primary.trim();

        if is_epoch_literal(primary) {
            return parse_epoch(primary);
        }

        let combined = format!("{} {}", primary, secondary.trim());
        let combined = combined.trim();

        let naive = CANDIDATE_FORMATS
            .iter()
            .find_map(|format| NaiveDateTime::parse_from_str(combined, format).ok())?;

        self.source_tz
            .from_local_datetime(&naive)
            .earliest()
            .map(|local| local.with_timezone(&Utc))
    }
}

impl Default for TimestampResolver {
    fn default() -> Self {
        Self::utc()
    }
}

fn is_epoch_literal(value: &str) -> bool {
    !value.is_empty()
        && value.bytes().all(|b| b.is_ascii_digit() || b == b'.')
        && value.bytes().filter(|&b| b == b'.').count() <= 1
        && value.bytes().any(|b| b.is_ascii_digit())
}

/// Exact decimal parse, no float rounding. Out-of-range values yield `None`.
fn parse_epoch(value: &str) -> Option<DateTime<Utc>> {
    let (whole, fraction) = value.split_once('.').unwrap_or((value, ""));

    let secs: i64 = if whole.is_empty() { 0 } else { whole.parse().ok()? };

    let nanos: u32 = if fraction.is_empty() {
        0
    } else {
        let digits: String = fraction
            .chars()
            .chain(std::iter::repeat('0'))
            .take(NANOS_DIGITS)
            .collect();
        digits.parse().ok()?
    };

    DateTime::from_timestamp(secs, nanos)
}
