//! Shared foundational types for the Trellis dataflow design editor.
//!
//! This crate provides the value vocabulary used by every layer of the
//! editor core: type-tagged opaque identifiers, tile-grid coordinates and
//! tile role kinds, the design schema version, and profile signatures.

#![warn(missing_docs)]

pub mod signature;
pub mod strong_id;
pub mod tile;
pub mod version;

pub use signature::ProfileSignature;
pub use strong_id::{IdTag, ParseIdError, StrongId};
pub use tile::{ParseTileCoordError, ParseTileKindError, TileCoord, TileKind};
pub use version::{DesignSchemaVersion, ParseVersionError};
