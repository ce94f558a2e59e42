//! Descriptive design metadata.
//!
//! A [`DesignMetadata`] records who authored a design and when. The
//! creation timestamp is always held in UTC: assigning a timestamp from
//! any other zone converts it (same instant, different representation)
//! rather than rejecting it, so the `DateTime<Utc>` field type makes the
//! normalization invariant unbreakable.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use trellis_common::ProfileSignature;

/// Descriptive record attached to every design document.
#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub struct DesignMetadata {
    /// The design name.
    pub name: String,
    /// The design author.
    pub author: String,
    /// Creation timestamp, normalized to UTC. `None` until stamped.
    pub created: Option<DateTime<Utc>>,
    /// Free-form notes.
    pub notes: String,
    /// Signature of the device profile the design was authored against.
    pub profile_signature: Option<ProfileSignature>,
}

impl DesignMetadata {
    /// Creates metadata stamped with the current UTC time.
    pub fn create_new(name: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            author: author.into(),
            created: Some(Utc::now()),
            notes: String::new(),
            profile_signature: None,
        }
    }

    /// Assigns the creation timestamp, converting from any zone to UTC.
    pub fn set_created<Tz: TimeZone>(&mut self, timestamp: DateTime<Tz>) {
        self.created = Some(timestamp.with_timezone(&Utc));
    }

    /// Attaches notes, consuming and returning `self`.
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }

    /// Attaches a profile signature, consuming and returning `self`.
    pub fn with_profile_signature(mut self, signature: ProfileSignature) -> Self {
        self.profile_signature = Some(signature);
        self
    }

    /// Returns the UTC creation timestamp, if stamped.
    pub fn created_utc(&self) -> Option<DateTime<Utc>> {
        self.created
    }

    /// Returns `true` if the creation timestamp is set.
    pub fn is_valid(&self) -> bool {
        self.created.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    #[test]
    fn default_metadata_is_invalid() {
        let metadata = DesignMetadata::default();
        assert!(metadata.created_utc().is_none());
        assert!(!metadata.is_valid());
    }

    #[test]
    fn create_new_stamps_now() {
        let metadata = DesignMetadata::create_new("fir_filter", "ada");
        assert!(metadata.is_valid());
        assert_eq!(metadata.name, "fir_filter");
        assert_eq!(metadata.author, "ada");
    }

    #[test]
    fn set_created_normalizes_to_utc() {
        let offset = FixedOffset::east_opt(5 * 3600).unwrap();
        let local = offset.with_ymd_and_hms(2026, 3, 14, 15, 9, 26).unwrap();

        let mut metadata = DesignMetadata::default();
        metadata.set_created(local);

        let created = metadata.created_utc().unwrap();
        assert_eq!(created.timezone(), Utc);
        // Same instant, shifted representation.
        assert_eq!(created, local);
        assert_eq!(created.to_rfc3339(), "2026-03-14T10:09:26+00:00");
    }

    #[test]
    fn builder_helpers() {
        let signature = ProfileSignature::of_text("xcve2302");
        let metadata = DesignMetadata::create_new("beamformer", "grace")
            .with_notes("16-channel variant")
            .with_profile_signature(signature);
        assert_eq!(metadata.notes, "16-channel variant");
        assert_eq!(metadata.profile_signature, Some(signature));
    }

    #[test]
    fn serde_roundtrip() {
        let metadata = DesignMetadata::create_new("doc", "author")
            .with_profile_signature(ProfileSignature::of_text("profile"));
        let json = serde_json::to_string(&metadata).unwrap();
        let back: DesignMetadata = serde_json::from_str(&json).unwrap();
        assert_eq!(metadata, back);
    }
}
