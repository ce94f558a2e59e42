//! The mutable accumulator that constructs and edits design documents.
//!
//! A [`DesignBuilder`] starts empty or seeded from an existing snapshot,
//! accumulates create/remove operations against its private entity tables,
//! and publishes an immutable [`DesignDocument`] through
//! [`DesignBuilder::freeze`]. A builder is an ordinary mutable value and
//! is not meant to be shared across threads; the published documents are.
//!
//! Creation never validates its input. Malformed entities are stored
//! verbatim and detectable afterwards through their own `is_valid`; the
//! editor relies on being able to construct edge cases and inspect them.

use crate::annotation::{Annotation, AnnotationKind};
use crate::block::{Block, BlockType, Placement};
use crate::document::DesignDocument;
use crate::ids::{AnnotationId, BlockId, LinkId, NetId, PortId, RouteId};
use crate::index::DesignIndex;
use crate::link::{Link, RouteOverride};
use crate::metadata::DesignMetadata;
use crate::net::Net;
use crate::port::{Port, PortDirection, PortType};
use crate::route::Route;
use crate::tables::EntityTables;
use std::collections::HashSet;
use tracing::debug;
use trellis_common::{DesignSchemaVersion, TileCoord};

/// Mutable accumulator for constructing or editing a design document.
#[derive(Debug, Default)]
pub struct DesignBuilder {
    tables: EntityTables,
    schema_version: DesignSchemaVersion,
    metadata: DesignMetadata,
}

impl DesignBuilder {
    /// Creates an empty builder at the current schema version.
    pub fn new() -> Self {
        Self {
            tables: EntityTables::default(),
            schema_version: DesignSchemaVersion::CURRENT,
            metadata: DesignMetadata::default(),
        }
    }

    /// Creates a builder seeded with a deep copy of a snapshot's entity
    /// tables and metadata. Edits never affect the source document.
    pub fn from_document(document: &DesignDocument) -> Self {
        Self {
            tables: document.tables().clone(),
            schema_version: document.schema_version(),
            metadata: document.metadata().clone(),
        }
    }

    /// Replaces the document metadata.
    pub fn set_metadata(&mut self, metadata: DesignMetadata) {
        self.metadata = metadata;
    }

    /// Returns the current metadata.
    pub fn metadata(&self) -> &DesignMetadata {
        &self.metadata
    }

    /// Creates a block and returns its fresh id.
    ///
    /// The type and placement are stored as given; a malformed placement
    /// is only detectable later through [`Block::is_valid`].
    pub fn create_block(
        &mut self,
        block_type: BlockType,
        placement: Placement,
        display_name: Option<String>,
    ) -> BlockId {
        let id = BlockId::new();
        self.tables.blocks.insert(
            id,
            Block {
                id,
                block_type,
                placement,
                display_name,
                ports: Vec::new(),
            },
        );
        self.tables.block_order.push(id);
        id
    }

    /// Creates a port on the given owner and returns its fresh id.
    ///
    /// The new port is appended to the owning block's port list when that
    /// block exists; the append order is significant downstream. A port
    /// created against an unknown owner is stored dangling.
    pub fn create_port(
        &mut self,
        owner: BlockId,
        direction: PortDirection,
        port_type: PortType,
        name: impl Into<String>,
        capacity: u32,
    ) -> PortId {
        let id = PortId::new();
        self.tables.ports.insert(
            id,
            Port {
                id,
                owner,
                direction,
                port_type,
                name: name.into(),
                capacity,
            },
        );
        self.tables.port_order.push(id);
        if let Some(block) = self.tables.blocks.get_mut(&owner) {
            block.ports.push(id);
        }
        id
    }

    /// Creates a link between two ports and returns its fresh id.
    pub fn create_link(&mut self, from: PortId, to: PortId, label: Option<String>) -> LinkId {
        let id = LinkId::new();
        self.tables.links.insert(
            id,
            Link {
                id,
                from,
                to,
                label,
                route_override: None,
            },
        );
        self.tables.link_order.push(id);
        id
    }

    /// Replaces (or clears) a link's routing override.
    ///
    /// Returns `false` if the link is unknown or the new value equals the
    /// current one; `true` if the override actually changed.
    pub fn set_link_route_override(
        &mut self,
        id: LinkId,
        route_override: Option<RouteOverride>,
    ) -> bool {
        let Some(link) = self.tables.links.get_mut(&id) else {
            return false;
        };
        if link.route_override == route_override {
            return false;
        }
        link.route_override = route_override;
        true
    }

    /// Creates a net over the given member links and returns its fresh id.
    ///
    /// Members are stored verbatim; their existence is not checked.
    pub fn create_net(&mut self, name: Option<String>, members: Vec<LinkId>) -> NetId {
        let id = NetId::new();
        self.tables.nets.insert(id, Net { id, name, members });
        self.tables.net_order.push(id);
        id
    }

    /// Creates an annotation and returns its fresh id.
    ///
    /// Target lists are stored verbatim; their existence is not checked.
    #[allow(clippy::too_many_arguments)]
    pub fn create_annotation(
        &mut self,
        kind: AnnotationKind,
        text: impl Into<String>,
        blocks: Vec<BlockId>,
        ports: Vec<PortId>,
        links: Vec<LinkId>,
        tiles: Vec<TileCoord>,
        tag: impl Into<String>,
    ) -> AnnotationId {
        let id = AnnotationId::new();
        self.tables.annotations.insert(
            id,
            Annotation {
                id,
                kind,
                text: text.into(),
                blocks,
                ports,
                links,
                tiles,
                tag: tag.into(),
            },
        );
        self.tables.annotation_order.push(id);
        id
    }

    /// Creates an explicit route for a link and returns its fresh id.
    pub fn create_route(&mut self, link: LinkId, waypoints: Vec<TileCoord>) -> RouteId {
        let id = RouteId::new();
        self.tables.routes.insert(
            id,
            Route {
                id,
                link,
                waypoints,
            },
        );
        self.tables.route_order.push(id);
        id
    }

    /// Removes a link. Returns `true` iff it existed.
    pub fn remove_link(&mut self, id: LinkId) -> bool {
        if self.tables.links.remove(&id).is_none() {
            return false;
        }
        self.tables.link_order.retain(|link_id| *link_id != id);
        true
    }

    /// Removes a block, cascading to its owned ports and every link whose
    /// endpoint was among those ports. Returns `true` iff the block
    /// existed. Unrelated entities are untouched.
    pub fn remove_block(&mut self, id: BlockId) -> bool {
        let Some(block) = self.tables.blocks.remove(&id) else {
            return false;
        };
        let doomed_ports: HashSet<PortId> = block.ports.iter().copied().collect();
        let doomed_links: Vec<LinkId> = self
            .tables
            .link_order
            .iter()
            .copied()
            .filter(|link_id| {
                self.tables
                    .links
                    .get(link_id)
                    .is_some_and(|link| {
                        doomed_ports.contains(&link.from) || doomed_ports.contains(&link.to)
                    })
            })
            .collect();

        for link_id in &doomed_links {
            self.tables.links.remove(link_id);
        }
        self.tables
            .link_order
            .retain(|link_id| self.tables.links.contains_key(link_id));
        for port_id in &doomed_ports {
            self.tables.ports.remove(port_id);
        }
        self.tables
            .port_order
            .retain(|port_id| !doomed_ports.contains(port_id));
        self.tables.block_order.retain(|block_id| *block_id != id);

        debug!(
            block = %id,
            ports = doomed_ports.len(),
            links = doomed_links.len(),
            "cascading block removal"
        );
        true
    }

    /// Removes a net. Returns `true` iff it existed.
    pub fn remove_net(&mut self, id: NetId) -> bool {
        if self.tables.nets.remove(&id).is_none() {
            return false;
        }
        self.tables.net_order.retain(|net_id| *net_id != id);
        true
    }

    /// Removes an annotation. Returns `true` iff it existed.
    pub fn remove_annotation(&mut self, id: AnnotationId) -> bool {
        if self.tables.annotations.remove(&id).is_none() {
            return false;
        }
        self.tables
            .annotation_order
            .retain(|annotation_id| *annotation_id != id);
        true
    }

    /// Removes a route. Returns `true` iff it existed.
    pub fn remove_route(&mut self, id: RouteId) -> bool {
        if self.tables.routes.remove(&id).is_none() {
            return false;
        }
        self.tables.route_order.retain(|route_id| *route_id != id);
        true
    }

    /// Publishes an immutable snapshot of the current state, computing a
    /// fresh [`DesignIndex`] over it.
    ///
    /// The builder remains usable; further edits never affect documents
    /// that were already frozen.
    pub fn freeze(&self) -> DesignDocument {
        let tables = self.tables.clone();
        let index = DesignIndex::build(&tables);
        debug!(
            blocks = tables.blocks.len(),
            ports = tables.ports.len(),
            links = tables.links.len(),
            collisions = index.colliding_tiles().len(),
            "froze design document"
        );
        DesignDocument::from_parts(tables, self.schema_version, self.metadata.clone(), index)
    }
}
