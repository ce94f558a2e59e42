//! Annotation definitions — free-text metadata attached to design entities.

use crate::ids::{AnnotationId, BlockId, LinkId, PortId};
use serde::{Deserialize, Serialize};
use trellis_common::TileCoord;

/// The kind of an annotation.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
pub enum AnnotationKind {
    /// A short label rendered next to its targets.
    Label,
    /// A longer free-form note.
    Note,
    /// A machine-readable tag.
    Tag,
    /// An unclassified annotation.
    #[default]
    Unknown,
}

/// Free-text metadata attached to any combination of blocks, ports, links,
/// and tiles.
///
/// Target lists are stored verbatim; nothing checks that the referenced
/// entities exist in the document.
#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub struct Annotation {
    /// The unique id of this annotation.
    pub id: AnnotationId,
    /// The annotation kind.
    pub kind: AnnotationKind,
    /// The annotation text (non-empty when valid).
    pub text: String,
    /// Target blocks.
    pub blocks: Vec<BlockId>,
    /// Target ports.
    pub ports: Vec<PortId>,
    /// Target links.
    pub links: Vec<LinkId>,
    /// Target tiles.
    pub tiles: Vec<TileCoord>,
    /// Free-text categorization tag.
    pub tag: String,
}

impl Annotation {
    /// Returns `true` if the id is non-null, the kind is known, and the
    /// text is non-empty.
    pub fn is_valid(&self) -> bool {
        !self.id.is_null() && self.kind != AnnotationKind::Unknown && !self.text.is_empty()
    }
}
