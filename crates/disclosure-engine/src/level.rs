use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::warn;

/// A numeric disclosure tier in the closed range `0..=4`.
///
/// Higher levels reveal more.  The range is enforced at every boundary:
/// construction via [`DisclosureLevel::new`], deserialization (out-of-range
/// values are rejected), and external string input via
/// [`DisclosureLevel::parse`], which never fails and instead falls back to a
/// caller-supplied default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct DisclosureLevel(u8);

impl DisclosureLevel {
    /// The most restrictive level: nothing above threshold 0 is shown.
    pub const MIN: Self = Self(0);
    /// Full disclosure.  Also the default when external input is invalid.
    pub const MAX: Self = Self(4);

    /// Construct a level, returning `None` when `value` is out of range.
    pub fn new(value: u8) -> Option<Self> {
        (value <= Self::MAX.0).then_some(Self(value))
    }

    /// The raw numeric tier.
    pub fn value(self) -> u8 {
        self.0
    }

    /// Strict parse of an external string: trimmed, base-10, in range.
    pub fn try_parse(input: &str) -> Option<Self> {
        input.trim().parse::<u8>().ok().and_then(Self::new)
    }

    /// Parse an external string (environment variable, CLI flag), falling
    /// back to `fallback` on any invalid input.
    ///
    /// Invalid input is logged as a warning and never propagates; an
    /// operator typo must not take the build down with it.
    pub fn parse(input: &str, fallback: Self) -> Self {
        match Self::try_parse(input) {
            Some(level) => level,
            None => {
                warn!(
                    input,
                    fallback = fallback.0,
                    "invalid disclosure level; falling back"
                );
                fallback
            }
        }
    }
}

impl TryFrom<u8> for DisclosureLevel {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
            .ok_or_else(|| format!("disclosure level {value} is outside the supported range 0..=4"))
    }
}

impl From<DisclosureLevel> for u8 {
    fn from(level: DisclosureLevel) -> u8 {
        level.0
    }
}

impl fmt::Display for DisclosureLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
