//! Type-tagged opaque identifiers.
//!
//! A [`StrongId`] is a 128-bit random value parameterized by a zero-sized
//! tag type, one tag per entity kind. Identifiers with different tags are
//! distinct types and never convert into each other, so a block id can
//! never be passed where a port id is expected. Ids are `Copy`, `Hash`,
//! totally ordered bit-for-bit, and round-trip through a canonical
//! lowercase hyphenated text form.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::Hash;
use std::marker::PhantomData;
use std::str::FromStr;
use uuid::Uuid;

/// Marker trait for the zero-sized tag types that distinguish id kinds.
///
/// Tag types carry no data; they exist only to make differently-tagged
/// [`StrongId`]s incompatible at the type level.
pub trait IdTag: Copy + Clone + PartialEq + Eq + PartialOrd + Ord + Hash + fmt::Debug {}

/// A type-tagged 128-bit opaque identifier.
///
/// The all-zero value is the *null* id and represents "absent". Every
/// other value is produced by [`StrongId::new`] and is unique with
/// overwhelming probability. Equality, ordering, and hashing are defined
/// bit-for-bit over the underlying 128-bit value, independent of the tag's
/// text form.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent, bound = "")]
pub struct StrongId<T: IdTag> {
    value: Uuid,
    #[serde(skip)]
    _tag: PhantomData<T>,
}

impl<T: IdTag> StrongId<T> {
    /// Generates a fresh random id.
    pub fn new() -> Self {
        Self::from_uuid(Uuid::new_v4())
    }

    /// Returns the null (all-zero) id, representing "absent".
    pub fn null() -> Self {
        Self::from_uuid(Uuid::nil())
    }

    /// Wraps an existing UUID value.
    pub fn from_uuid(value: Uuid) -> Self {
        Self {
            value,
            _tag: PhantomData,
        }
    }

    /// Returns `true` if this is the null id.
    pub fn is_null(&self) -> bool {
        self.value.is_nil()
    }

    /// Returns the underlying UUID value.
    pub fn uuid(&self) -> Uuid {
        self.value
    }

    /// Returns the canonical text form wrapped in braces.
    pub fn braced(&self) -> String {
        format!("{{{}}}", self.value.hyphenated())
    }
}

impl<T: IdTag> Default for StrongId<T> {
    fn default() -> Self {
        Self::null()
    }
}

impl<T: IdTag> fmt::Display for StrongId<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value.hyphenated())
    }
}

impl<T: IdTag> fmt::Debug for StrongId<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StrongId({})", self.value.hyphenated())
    }
}

/// Error type for parsing identifier text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid identifier text: '{input}'")]
pub struct ParseIdError {
    /// The input string that failed to parse.
    pub input: String,
}

impl<T: IdTag> FromStr for StrongId<T> {
    type Err = ParseIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let err = || ParseIdError {
            input: trimmed.to_string(),
        };

        if let Ok(value) = Uuid::try_parse(trimmed) {
            return Ok(Self::from_uuid(value));
        }

        // Retry after stripping one optional surrounding brace pair.
        let bare = trimmed
            .strip_prefix('{')
            .and_then(|rest| rest.strip_suffix('}'))
            .ok_or_else(err)?;
        Uuid::try_parse(bare.trim())
            .map(Self::from_uuid)
            .map_err(|_| err())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
    struct TestTag;
    impl IdTag for TestTag {}

    type TestId = StrongId<TestTag>;

    #[test]
    fn fresh_ids_are_unique() {
        let a = TestId::new();
        let b = TestId::new();
        assert_ne!(a, b);
        assert!(!a.is_null());
    }

    #[test]
    fn null_is_default() {
        let id = TestId::default();
        assert!(id.is_null());
        assert_eq!(id, TestId::null());
    }

    #[test]
    fn display_roundtrip() {
        let id = TestId::new();
        let text = id.to_string();
        let back: TestId = text.parse().unwrap();
        assert_eq!(id, back);
    }

    #[test]
    fn braced_roundtrip() {
        let id = TestId::new();
        let back: TestId = id.braced().parse().unwrap();
        assert_eq!(id, back);
    }

    #[test]
    fn parse_trims_whitespace() {
        let id = TestId::new();
        let padded = format!("  {id}  ");
        let back: TestId = padded.parse().unwrap();
        assert_eq!(id, back);
    }

    #[test]
    fn parse_garbage_fails() {
        assert!("not-an-id".parse::<TestId>().is_err());
        assert!("".parse::<TestId>().is_err());
        assert!("{unbalanced".parse::<TestId>().is_err());
    }

    #[test]
    fn ordering_is_bitwise() {
        let low = TestId::from_uuid(Uuid::from_u128(1));
        let high = TestId::from_uuid(Uuid::from_u128(u128::MAX));
        assert!(low < high);
        assert!(TestId::null() < low);
    }

    #[test]
    fn usable_as_map_key() {
        let mut set = HashSet::new();
        let id = TestId::new();
        set.insert(id);
        set.insert(TestId::new());
        set.insert(id);
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn serde_roundtrip() {
        let id = TestId::new();
        let json = serde_json::to_string(&id).unwrap();
        let back: TestId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, back);
    }

    #[test]
    fn serializes_as_canonical_text() {
        let id = TestId::from_uuid(Uuid::from_u128(0xfeed));
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{id}\""));
    }
}
