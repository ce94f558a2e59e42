//! Design schema versioning.
//!
//! Every persisted design carries a [`DesignSchemaVersion`]. The loader
//! compares it against the supported range before trusting the document:
//! versions below [`DesignSchemaVersion::MIN_SUPPORTED`] are unreadable,
//! versions between the minimum and [`DesignSchemaVersion::CURRENT`]
//! require migration, and zero is the invalid sentinel.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A monotonic integer schema version.
#[derive(
    Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default, Serialize, Deserialize,
)]
pub struct DesignSchemaVersion(u32);

impl DesignSchemaVersion {
    /// The invalid sentinel version.
    pub const INVALID: Self = Self(0);

    /// The oldest version this build can still read.
    pub const MIN_SUPPORTED: Self = Self(1);

    /// The version written by this build.
    pub const CURRENT: Self = Self(3);

    /// Creates a version from a raw integer.
    pub fn new(value: u32) -> Self {
        Self(value)
    }

    /// Returns the raw integer value.
    pub fn value(self) -> u32 {
        self.0
    }

    /// Returns `true` if this is not the invalid sentinel.
    pub fn is_valid(self) -> bool {
        self.0 != 0
    }

    /// Returns `true` if this version is within the supported range.
    pub fn is_supported(self) -> bool {
        self.is_valid() && self >= Self::MIN_SUPPORTED && self <= Self::CURRENT
    }

    /// Returns `true` if this version is readable but older than current.
    pub fn requires_migration(self) -> bool {
        self.is_valid() && self < Self::CURRENT
    }
}

impl fmt::Display for DesignSchemaVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error type for parsing schema version text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid schema version: '{input}'")]
pub struct ParseVersionError {
    /// The input string that failed to parse.
    pub input: String,
}

impl FromStr for DesignSchemaVersion {
    type Err = ParseVersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let err = || ParseVersionError {
            input: trimmed.to_string(),
        };

        let digits = trimmed.strip_prefix(['v', 'V']).unwrap_or(trimmed);
        if !digits.chars().all(|c| c.is_ascii_digit()) || digits.is_empty() {
            return Err(err());
        }
        let value: u32 = digits.parse().map_err(|_| err())?;
        if value == 0 {
            return Err(err());
        }
        Ok(Self(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_invalid() {
        let v = DesignSchemaVersion::default();
        assert_eq!(v, DesignSchemaVersion::INVALID);
        assert!(!v.is_valid());
        assert!(!v.is_supported());
        assert!(!v.requires_migration());
    }

    #[test]
    fn current_is_supported_and_needs_no_migration() {
        let v = DesignSchemaVersion::CURRENT;
        assert!(v.is_valid());
        assert!(v.is_supported());
        assert!(!v.requires_migration());
    }

    #[test]
    fn older_supported_version_requires_migration() {
        let v = DesignSchemaVersion::MIN_SUPPORTED;
        assert!(v.is_supported());
        assert!(v.requires_migration());
    }

    #[test]
    fn future_version_is_unsupported() {
        let v = DesignSchemaVersion::new(DesignSchemaVersion::CURRENT.value() + 1);
        assert!(v.is_valid());
        assert!(!v.is_supported());
        assert!(!v.requires_migration());
    }

    #[test]
    fn display_roundtrip() {
        let v = DesignSchemaVersion::new(2);
        assert_eq!(v.to_string(), "2");
        let back: DesignSchemaVersion = v.to_string().parse().unwrap();
        assert_eq!(v, back);
    }

    #[test]
    fn parse_accepts_v_prefix() {
        assert_eq!(
            "v3".parse::<DesignSchemaVersion>().unwrap(),
            DesignSchemaVersion::new(3)
        );
        assert_eq!(
            "V1".parse::<DesignSchemaVersion>().unwrap(),
            DesignSchemaVersion::new(1)
        );
    }

    #[test]
    fn parse_rejects_bad_input() {
        assert!("0".parse::<DesignSchemaVersion>().is_err());
        assert!("v0".parse::<DesignSchemaVersion>().is_err());
        assert!("-1".parse::<DesignSchemaVersion>().is_err());
        assert!("+2".parse::<DesignSchemaVersion>().is_err());
        assert!("abc".parse::<DesignSchemaVersion>().is_err());
        assert!("".parse::<DesignSchemaVersion>().is_err());
        assert!("99999999999".parse::<DesignSchemaVersion>().is_err());
    }

    #[test]
    fn serde_roundtrip() {
        let v = DesignSchemaVersion::CURRENT;
        let json = serde_json::to_string(&v).unwrap();
        let back: DesignSchemaVersion = serde_json::from_str(&json).unwrap();
        assert_eq!(v, back);
    }
}
