use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::hash::{Hash, Hasher};

pub const CHINA: &str = "china";
pub const EAST_INDIES: &str = "east-indies";

/// Route identifier for a voyage or a past trip.
///
/// Parsing is exact and case-sensitive: `"China"` is not [`Zone::China`].
/// Callers that want case-insensitive matching normalize first with
/// [`Zone::parse_normalized`].
///
/// Build zones with [`Zone::parse`]. Equality and hashing compare the tag
/// text, so a hand-built `Zone::Other("china".into())` still equals
/// [`Zone::China`].
#[derive(Debug, Clone)]
pub enum Zone {
    China,
    EastIndies,
    Other(String),
}

impl Zone {
    pub fn parse(raw: &str) -> Self {
        match raw {
            CHINA => Self::China,
            EAST_INDIES => Self::EastIndies,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn parse_normalized(raw: &str) -> Self {
        Self::parse(&raw.trim().to_ascii_lowercase())
    }

    pub fn as_str(&self) -> &str {
        match self {
            Zone::China => CHINA,
            Zone::EastIndies => EAST_INDIES,
            Zone::Other(value) => value,
        }
    }

    /// True for a tag that names a known route only after normalization,
    /// e.g. `"China"` or `" east-indies"`.
    pub fn is_near_miss(&self) -> bool {
        let raw = self.as_str();
        matches!(Self::parse(raw), Zone::Other(_))
            && !matches!(Self::parse_normalized(raw), Zone::Other(_))
    }
}

impl PartialEq for Zone {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for Zone {}

impl Hash for Zone {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_str().hash(state);
    }
}

impl Default for Zone {
    fn default() -> Self {
        Self::Other(String::new())
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for Zone {
    fn from(value: &str) -> Self {
        Self::parse(value)
    }
}

impl Serialize for Zone {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Zone {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::parse(&raw))
    }
}

/// One planned trip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Voyage {
    pub zone: Zone,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length: Option<u32>,
}

impl Voyage {
    pub fn new(zone: impl Into<Zone>, length: Option<u32>) -> Self {
        Self {
            zone: zone.into(),
            length,
        }
    }

    /// Length used for threshold comparisons; unknown counts as zero.
    pub fn effective_length(&self) -> i64 {
        i64::from(self.length.unwrap_or(0))
    }

    pub fn is_to(&self, zone: &Zone) -> bool {
        &self.zone == zone
    }

    pub fn normalize_zone(&mut self) {
        self.zone = Zone::parse_normalized(self.zone.as_str());
    }
}

/// A completed trip from the captain's record.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct HistoryEntry {
    #[serde(default)]
    pub zone: Zone,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profit: Option<f64>,
}

impl HistoryEntry {
    pub fn new(zone: impl Into<Zone>, profit: Option<f64>) -> Self {
        Self {
            zone: zone.into(),
            profit,
        }
    }

    /// Missing profit is never a loss.
    pub fn is_loss(&self) -> bool {
        self.profit.map(|profit| profit < 0.0).unwrap_or(false)
    }

    pub fn normalize_zone(&mut self) {
        self.zone = Zone::parse_normalized(self.zone.as_str());
    }
}

/// Final letter grade for a voyage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Grade {
    A,
    B,
}

impl Grade {
    pub fn label(&self) -> &'static str {
        match self {
            Grade::A => "A",
            Grade::B => "B",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
