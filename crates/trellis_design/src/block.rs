//! Block definitions — the placed units of a dataflow design.
//!
//! A [`Block`] occupies a rectangular region of the tile grid described by
//! its [`Placement`] and owns an ordered list of ports. Construction never
//! fails; malformed blocks are representable and report themselves through
//! [`Block::is_valid`].

use crate::ids::{BlockId, PortId};
use serde::{Deserialize, Serialize};
use trellis_common::TileCoord;

/// The functional type of a block.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
pub enum BlockType {
    /// A compute kernel block.
    Compute,
    /// A local memory block.
    Memory,
    /// A shim block interfacing the array to the outside world.
    ShimInterface,
    /// An external DDR memory block.
    Ddr,
    /// An unclassified block.
    #[default]
    Unknown,
}

/// A block's position on the tile grid: an anchor plus row/column spans.
///
/// The occupied region is the rectangle of `row_span * col_span` tiles
/// whose top-left corner is the anchor.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
pub struct Placement {
    /// The anchor tile of the occupied rectangle.
    pub anchor: TileCoord,
    /// Number of rows spanned (>= 1 when valid).
    pub row_span: u32,
    /// Number of columns spanned (>= 1 when valid).
    pub col_span: u32,
}

impl Placement {
    /// Creates a placement from an anchor and spans.
    pub fn new(anchor: TileCoord, row_span: u32, col_span: u32) -> Self {
        Self {
            anchor,
            row_span,
            col_span,
        }
    }

    /// Creates a single-tile placement at the given anchor.
    pub fn single(anchor: TileCoord) -> Self {
        Self::new(anchor, 1, 1)
    }

    /// Returns `true` if the anchor is valid and both spans are at least 1.
    pub fn is_valid(&self) -> bool {
        self.anchor.is_valid() && self.row_span >= 1 && self.col_span >= 1
    }

    /// Returns the occupied tiles in row-major order.
    pub fn tiles(&self) -> Vec<TileCoord> {
        let mut tiles = Vec::with_capacity(self.row_span as usize * self.col_span as usize);
        for r in 0..self.row_span {
            for c in 0..self.col_span {
                tiles.push(TileCoord::new(
                    self.anchor.row + r as i32,
                    self.anchor.col + c as i32,
                ));
            }
        }
        tiles
    }
}

/// A placed design unit owning an ordered list of ports.
///
/// The port list is append-only and its order is significant: downstream
/// code generation binds kernel arguments by port position.
#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub struct Block {
    /// The unique id of this block.
    pub id: BlockId,
    /// The functional type of this block.
    pub block_type: BlockType,
    /// Where this block sits on the tile grid.
    pub placement: Placement,
    /// Optional user-facing display name.
    pub display_name: Option<String>,
    /// The ports owned by this block, in creation order.
    pub ports: Vec<PortId>,
}

impl Block {
    /// Returns `true` if the id is non-null, the type is known, and the
    /// placement is valid.
    pub fn is_valid(&self) -> bool {
        !self.id.is_null() && self.block_type != BlockType::Unknown && self.placement.is_valid()
    }
}
