//! The immutable design document snapshot.
//!
//! A [`DesignDocument`] is published by [`DesignBuilder::freeze`] and
//! never changes afterwards. Cloning a document is cheap (the backing
//! store is shared behind an `Arc`), and a frozen document can be read
//! from any number of threads without locking because no writer retains a
//! mutable alias into it. All further edits go through a new builder
//! seeded from the snapshot.
//!
//! [`DesignBuilder::freeze`]: crate::builder::DesignBuilder::freeze

use crate::annotation::Annotation;
use crate::block::Block;
use crate::ids::{AnnotationId, BlockId, LinkId, NetId, PortId, RouteId};
use crate::index::DesignIndex;
use crate::link::Link;
use crate::metadata::DesignMetadata;
use crate::net::Net;
use crate::port::Port;
use crate::route::Route;
use crate::tables::EntityTables;
use std::sync::Arc;
use trellis_common::DesignSchemaVersion;

#[derive(Debug, Default)]
struct DocumentStore {
    tables: EntityTables,
    schema_version: DesignSchemaVersion,
    metadata: DesignMetadata,
    index: DesignIndex,
}

/// An immutable, reference-counted snapshot of a dataflow design.
#[derive(Debug, Clone, Default)]
pub struct DesignDocument {
    store: Arc<DocumentStore>,
}

impl DesignDocument {
    pub(crate) fn from_parts(
        tables: EntityTables,
        schema_version: DesignSchemaVersion,
        metadata: DesignMetadata,
        index: DesignIndex,
    ) -> Self {
        Self {
            store: Arc::new(DocumentStore {
                tables,
                schema_version,
                metadata,
                index,
            }),
        }
    }

    pub(crate) fn tables(&self) -> &EntityTables {
        &self.store.tables
    }

    /// Looks up a block by id.
    pub fn try_block(&self, id: BlockId) -> Option<&Block> {
        self.store.tables.blocks.get(&id)
    }

    /// Looks up a port by id.
    pub fn try_port(&self, id: PortId) -> Option<&Port> {
        self.store.tables.ports.get(&id)
    }

    /// Looks up a link by id.
    pub fn try_link(&self, id: LinkId) -> Option<&Link> {
        self.store.tables.links.get(&id)
    }

    /// Looks up a net by id.
    pub fn try_net(&self, id: NetId) -> Option<&Net> {
        self.store.tables.nets.get(&id)
    }

    /// Looks up an annotation by id.
    pub fn try_annotation(&self, id: AnnotationId) -> Option<&Annotation> {
        self.store.tables.annotations.get(&id)
    }

    /// Looks up a route by id.
    pub fn try_route(&self, id: RouteId) -> Option<&Route> {
        self.store.tables.routes.get(&id)
    }

    /// Returns all block ids, in creation order.
    pub fn block_ids(&self) -> &[BlockId] {
        &self.store.tables.block_order
    }

    /// Returns all port ids, in creation order.
    pub fn port_ids(&self) -> &[PortId] {
        &self.store.tables.port_order
    }

    /// Returns all link ids, in creation order.
    pub fn link_ids(&self) -> &[LinkId] {
        &self.store.tables.link_order
    }

    /// Returns all net ids, in creation order.
    pub fn net_ids(&self) -> &[NetId] {
        &self.store.tables.net_order
    }

    /// Returns all annotation ids, in creation order.
    pub fn annotation_ids(&self) -> &[AnnotationId] {
        &self.store.tables.annotation_order
    }

    /// Returns all route ids, in creation order.
    pub fn route_ids(&self) -> &[RouteId] {
        &self.store.tables.route_order
    }

    /// Returns the number of blocks.
    pub fn block_count(&self) -> usize {
        self.store.tables.blocks.len()
    }

    /// Returns the number of ports.
    pub fn port_count(&self) -> usize {
        self.store.tables.ports.len()
    }

    /// Returns the number of links.
    pub fn link_count(&self) -> usize {
        self.store.tables.links.len()
    }

    /// Returns the number of nets.
    pub fn net_count(&self) -> usize {
        self.store.tables.nets.len()
    }

    /// Returns the number of annotations.
    pub fn annotation_count(&self) -> usize {
        self.store.tables.annotations.len()
    }

    /// Returns the number of routes.
    pub fn route_count(&self) -> usize {
        self.store.tables.routes.len()
    }

    /// Returns the schema version this document was built with.
    pub fn schema_version(&self) -> DesignSchemaVersion {
        self.store.schema_version
    }

    /// Returns the document metadata.
    pub fn metadata(&self) -> &DesignMetadata {
        &self.store.metadata
    }

    /// Returns the derived adjacency and occupancy index.
    pub fn index(&self) -> &DesignIndex {
        &self.store.index
    }

    /// Returns `true` if the document holds no entities.
    pub fn is_empty(&self) -> bool {
        self.store.tables.is_empty()
    }

    /// Returns `true` if the backing store is non-empty.
    ///
    /// This says nothing about the validity of individual entities; those
    /// must be checked through each entity's own `is_valid`.
    pub fn is_valid(&self) -> bool {
        !self.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::{BlockType, Placement};
    use crate::builder::DesignBuilder;
    use trellis_common::TileCoord;

    #[test]
    fn default_document_is_empty_and_invalid() {
        let doc = DesignDocument::default();
        assert!(doc.is_empty());
        assert!(!doc.is_valid());
        assert!(doc.block_ids().is_empty());
        assert!(doc.index().is_empty());
    }

    #[test]
    fn lookups_miss_with_none() {
        let doc = DesignDocument::default();
        assert!(doc.try_block(BlockId::new()).is_none());
        assert!(doc.try_port(PortId::new()).is_none());
        assert!(doc.try_link(LinkId::new()).is_none());
        assert!(doc.try_net(NetId::new()).is_none());
        assert!(doc.try_annotation(AnnotationId::new()).is_none());
        assert!(doc.try_route(RouteId::new()).is_none());
    }

    #[test]
    fn clone_shares_the_backing_store() {
        let mut builder = DesignBuilder::new();
        builder.create_block(
            BlockType::Compute,
            Placement::single(TileCoord::new(0, 0)),
            None,
        );
        let doc = builder.freeze();
        let copy = doc.clone();
        assert_eq!(doc.block_count(), copy.block_count());
        assert!(Arc::ptr_eq(&doc.store, &copy.store));
    }

    #[test]
    fn frozen_document_reports_current_schema() {
        let doc = DesignBuilder::new().freeze();
        assert_eq!(doc.schema_version(), DesignSchemaVersion::CURRENT);
    }

    #[test]
    fn document_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<DesignDocument>();
    }
}
