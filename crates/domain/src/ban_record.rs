use chrono::{DateTime, NaiveDateTime, SecondsFormat, Utc};
use serde::ser::SerializeStruct;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::fmt;

const ABUSE_CHECK_BASE_URL: &str = "https://abuseipdb.com/check/";

/// Naive layouts accepted when reading back stored ban times (assumed UTC).
const NAIVE_STORED_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Reputation lookup link for an address. Always derived, never stored.
pub fn abuse_url(ip_address: &str) -> String {
    format!("{}{}", ABUSE_CHECK_BASE_URL, ip_address)
}

/// Natural key of a ban record: one address in one jail.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BanKey {
    pub ip_address: String,
    pub jail: String,
}

impl BanKey {
    pub fn new(ip_address: impl Into<String>, jail: impl Into<String>) -> Self {
        Self {
            ip_address: ip_address.into(),
            jail: jail.into(),
        }
    }
}

impl fmt::Display for BanKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.ip_address, self.jail)
    }
}

/// Best-known start of a ban.
///
/// History written by older deployments may carry strings we can no longer
/// interpret; those are kept verbatim as `Unparsed` so they survive
/// expiration instead of being silently dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BannedAt {
    At(DateTime<Utc>),
    Unparsed(String),
}

impl BannedAt {
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();

        if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
            return BannedAt::At(dt.with_timezone(&Utc));
        }

        for format in NAIVE_STORED_FORMATS {
            if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, format) {
                return BannedAt::At(naive.and_utc());
            }
        }

        BannedAt::Unparsed(raw.to_string())
    }

    pub fn instant(&self) -> Option<DateTime<Utc>> {
        match self {
            BannedAt::At(at) => Some(*at),
            BannedAt::Unparsed(_) => None,
        }
    }

    /// Strictly before `cutoff`. Unparsed values are never considered old.
    pub fn is_before(&self, cutoff: DateTime<Utc>) -> bool {
        match self {
            BannedAt::At(at) => *at < cutoff,
            BannedAt::Unparsed(_) => false,
        }
    }

    pub fn to_storage_string(&self) -> String {
        match self {
            BannedAt::At(at) => at.to_rfc3339_opts(SecondsFormat::AutoSi, true),
            BannedAt::Unparsed(raw) => raw.clone(),
        }
    }
}

impl From<DateTime<Utc>> for BannedAt {
    fn from(at: DateTime<Utc>) -> Self {
        BannedAt::At(at)
    }
}

impl Serialize for BannedAt {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_storage_string())
    }
}

/// Never fails: a non-string value is kept as `Unparsed` holding its JSON text.
impl<'de> Deserialize<'de> for BannedAt {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match Value::deserialize(deserializer)? {
            Value::String(raw) => BannedAt::parse(&raw),
            other => BannedAt::Unparsed(other.to_string()),
        })
    }
}

fn missing_banned_at() -> BannedAt {
    BannedAt::Unparsed(String::new())
}

/// One observed ban of one address in one jail.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BanRecord {
    pub ip_address: String,
    pub jail: String,
    #[serde(default = "missing_banned_at")]
    pub banned_at: BannedAt,
}

impl BanRecord {
    pub fn new(
        ip_address: impl Into<String>,
        jail: impl Into<String>,
        banned_at: impl Into<BannedAt>,
    ) -> Self {
        Self {
            ip_address: ip_address.into(),
            jail: jail.into(),
            banned_at: banned_at.into(),
        }
    }

    pub fn key(&self) -> BanKey {
        BanKey::new(self.ip_address.clone(), self.jail.clone())
    }

    pub fn abuse_url(&self) -> String {
        abuse_url(&self.ip_address)
    }
}

impl Serialize for BanRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("BanRecord", 4)?;
        state.serialize_field("ip_address", &self.ip_address)?;
        state.serialize_field("jail", &self.jail)?;
        state.serialize_field("banned_at", &self.banned_at)?;
        state.serialize_field("abuse_url", &self.abuse_url())?;
        state.end()
    }
}
