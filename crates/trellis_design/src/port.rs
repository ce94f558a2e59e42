//! Port definitions — the typed attachment points of blocks.

use crate::ids::{BlockId, PortId};
use serde::{Deserialize, Serialize};

/// The direction of data flow through a port.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
pub enum PortDirection {
    /// Data flows into the block.
    #[default]
    Input,
    /// Data flows out of the block.
    Output,
    /// Data flows both ways.
    InOut,
}

/// The transport kind of a port type.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default, Serialize, Deserialize)]
pub enum PortTypeKind {
    /// A streaming data connection.
    Stream,
    /// A packet-switched connection.
    Packet,
    /// A DMA channel.
    Dma,
    /// A control/configuration connection.
    Control,
    /// An unclassified port type.
    #[default]
    Unknown,
}

/// A port's type: a transport kind plus a free-text payload description.
///
/// Ordered first by kind, then by payload text.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default, Serialize, Deserialize)]
pub struct PortType {
    /// The transport kind.
    pub kind: PortTypeKind,
    /// Free-text payload description (element type, width, etc.).
    pub payload: String,
}

impl PortType {
    /// Creates a port type from a kind and payload text.
    pub fn new(kind: PortTypeKind, payload: impl Into<String>) -> Self {
        Self {
            kind,
            payload: payload.into(),
        }
    }

    /// Returns `true` if the kind is known.
    pub fn is_valid(&self) -> bool {
        self.kind != PortTypeKind::Unknown
    }
}

/// A typed, directional attachment point owned by exactly one block.
#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub struct Port {
    /// The unique id of this port.
    pub id: PortId,
    /// The block that owns this port.
    pub owner: BlockId,
    /// The direction of data flow.
    pub direction: PortDirection,
    /// The port's type.
    pub port_type: PortType,
    /// The port name.
    pub name: String,
    /// Channel capacity (>= 1 when valid).
    pub capacity: u32,
}

impl Port {
    /// Returns `true` if the id and owner are non-null, the type is valid,
    /// and the capacity is at least 1.
    pub fn is_valid(&self) -> bool {
        !self.id.is_null() && !self.owner.is_null() && self.port_type.is_valid() && self.capacity >= 1
    }
}
