//! Package version identifiers
//!
//! A version is one or more dot-separated numeric segments with an optional
//! `-qualifier` (`1.2.0`, `7.3.1.1234`, `1.2.0-SNAPSHOT`). Ordering only looks
//! at the numeric segments, missing trailing segments count as zero, and the
//! qualifier is kept for display and snapshot detection.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

/// Qualifier marking an in-progress build of a version
pub const SNAPSHOT_QUALIFIER: &str = "SNAPSHOT";

/// Malformed version string
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VersionError {
    #[error("version string is empty")]
    Empty,

    #[error("version '{input}' has an empty segment")]
    EmptySegment { input: String },

    #[error("version '{input}' has a non-numeric segment '{segment}'")]
    NonNumericSegment { input: String, segment: String },

    #[error("version '{input}' has a segment that is too large: '{segment}'")]
    SegmentOverflow { input: String, segment: String },

    #[error("version '{input}' ends with an empty qualifier")]
    EmptyQualifier { input: String },
}

/// A parsed, comparable version
#[derive(Debug, Clone, Serialize)]
#[serde(into = "String")]
pub struct Version {
    segments: Vec<u64>,
    qualifier: Option<String>,
    raw: String,
}

impl Version {
    /// Parse a version string, failing on anything that is not a version
    pub fn parse(input: &str) -> Result<Self, VersionError> {
        let raw = input.trim();
        if raw.is_empty() {
            return Err(VersionError::Empty);
        }

        let (numeric, qualifier) = match raw.split_once('-') {
            Some((numeric, qualifier)) => {
                if qualifier.is_empty() {
                    return Err(VersionError::EmptyQualifier {
                        input: raw.to_string(),
                    });
                }
                (numeric, Some(qualifier.to_string()))
            }
            None => (raw, None),
        };

        let segments = numeric
            .split('.')
            .map(|segment| parse_segment(raw, segment))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            segments,
            qualifier,
            raw: raw.to_string(),
        })
    }

    /// Text after the first `-`, if any
    pub fn qualifier(&self) -> Option<&str> {
        self.qualifier.as_deref()
    }

    /// Whether the qualifier marks an in-progress build
    ///
    /// Matches `SNAPSHOT` case-insensitively, also as the tail of a longer
    /// qualifier such as `20240101-SNAPSHOT`.
    pub fn is_snapshot(&self) -> bool {
        self.qualifier
            .as_deref()
            .is_some_and(|q| q.to_ascii_uppercase().ends_with(SNAPSHOT_QUALIFIER))
    }
}

fn parse_segment(input: &str, segment: &str) -> Result<u64, VersionError> {
    if segment.is_empty() {
        return Err(VersionError::EmptySegment {
            input: input.to_string(),
        });
    }
    if !segment.bytes().all(|b| b.is_ascii_digit()) {
        return Err(VersionError::NonNumericSegment {
            input: input.to_string(),
            segment: segment.to_string(),
        });
    }
    segment
        .parse::<u64>()
        .map_err(|_| VersionError::SegmentOverflow {
            input: input.to_string(),
            segment: segment.to_string(),
        })
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        let len = self.segments.len().max(other.segments.len());
        for i in 0..len {
            let left = self.segments.get(i).copied().unwrap_or(0);
            let right = other.segments.get(i).copied().unwrap_or(0);
            match left.cmp(&right) {
                Ordering::Equal => continue,
                unequal => return unequal,
            }
        }
        Ordering::Equal
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// Equality follows the numeric ordering, so `1.2` == `1.2.0-SNAPSHOT`.
impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Version {}

impl FromStr for Version {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl<'de> Deserialize<'de> for Version {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(VersionVisitor)
    }
}

/// Accepts strings and bare integers (`version: 2` in YAML)
struct VersionVisitor;

impl Visitor<'_> for VersionVisitor {
    type Value = Version;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a version string such as \"1.2.0\"")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Version, E> {
        Version::parse(v).map_err(E::custom)
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Version, E> {
        Ok(Version {
            segments: vec![v],
            qualifier: None,
            raw: v.to_string(),
        })
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Version, E> {
        u64::try_from(v)
            .map_err(|_| E::custom(format!("version '{v}' is negative")))
            .and_then(|v| self.visit_u64(v))
    }

    // `1.10` would read back as 1.1, so a float is never trusted
    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Version, E> {
        Err(E::custom(format!(
            "version {v} was read as a number; quote it, e.g. \"{v}\""
        )))
    }
}

impl From<Version> for String {
    fn from(version: Version) -> Self {
        version.raw
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}
