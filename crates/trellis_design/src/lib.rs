//! Trellis design-graph document model.
//!
//! This crate is the core of the Trellis dataflow design editor: an
//! immutable, versioned in-memory representation of a design (blocks
//! placed on a tile grid, ports, links, nets, routes, annotations)
//! together with the builder that mutates it and the derived index that
//! answers adjacency and occupancy queries.
//!
//! # Model
//!
//! - All mutation goes through a [`DesignBuilder`]; readers only ever see
//!   completed, indexed [`DesignDocument`] snapshots.
//! - Construction never fails. Malformed entities are stored verbatim and
//!   report themselves through their own `is_valid`; parse helpers return
//!   errors the caller branches on. Nothing in this crate panics on bad
//!   input.
//! - A frozen document is reference-counted and safe to share read-only
//!   across threads; a builder is an ordinary mutable value.
//!
//! # Usage
//!
//! ```
//! use trellis_common::TileCoord;
//! use trellis_design::{
//!     BlockType, DesignBuilder, Placement, PortDirection, PortType, PortTypeKind,
//! };
//!
//! let mut builder = DesignBuilder::new();
//! let mac = builder.create_block(
//!     BlockType::Compute,
//!     Placement::single(TileCoord::new(1, 1)),
//!     Some("mac0".to_string()),
//! );
//! let out = builder.create_port(
//!     mac,
//!     PortDirection::Output,
//!     PortType::new(PortTypeKind::Stream, "int32"),
//!     "out0",
//!     1,
//! );
//! let doc = builder.freeze();
//! assert_eq!(doc.index().ports_for_block(mac), &[out]);
//! assert_eq!(doc.index().block_at_tile(TileCoord::new(1, 1)), mac);
//! ```

#![warn(missing_docs)]

pub mod annotation;
pub mod block;
pub mod builder;
pub mod document;
pub mod ids;
pub mod index;
pub mod link;
pub mod metadata;
pub mod net;
pub mod port;
pub mod route;
mod tables;

pub use annotation::{Annotation, AnnotationKind};
pub use block::{Block, BlockType, Placement};
pub use builder::DesignBuilder;
pub use document::DesignDocument;
pub use ids::{AnnotationId, BlockId, LinkId, NetId, PortId, RouteId};
pub use index::DesignIndex;
pub use link::{Link, RouteOverride, Waypoint};
pub use metadata::DesignMetadata;
pub use net::Net;
pub use port::{Port, PortDirection, PortType, PortTypeKind};
pub use route::Route;
