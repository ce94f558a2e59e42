//! The derived adjacency and occupancy index.
//!
//! A [`DesignIndex`] is computed exactly once, from the finished entity
//! tables at freeze time, and never changes afterwards. All queries are
//! pure lookups: absence is an empty slice or a null id, never an error.
//!
//! Collision detection is advisory. Overlapping placements do not block
//! document construction; the first claimant (in block creation order)
//! wins each contested tile and the contested coordinates are surfaced
//! through [`DesignIndex::colliding_tiles`] for the editor to flag.

use crate::ids::{BlockId, LinkId, PortId};
use crate::tables::EntityTables;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use trellis_common::TileCoord;

/// Read-only adjacency and spatial-occupancy index over a frozen document.
#[derive(Debug, Clone, Default)]
pub struct DesignIndex {
    ports_by_block: HashMap<BlockId, Vec<PortId>>,
    links_by_port: HashMap<PortId, Vec<LinkId>>,
    tile_owner: HashMap<TileCoord, BlockId>,
    tiles_by_block: HashMap<BlockId, Vec<TileCoord>>,
    colliding_tiles: Vec<TileCoord>,
}

impl DesignIndex {
    /// Builds the index from finished (post-cascade) entity tables.
    pub(crate) fn build(tables: &EntityTables) -> Self {
        let mut index = Self::default();

        // Ports by block: each block's surviving ports, in the block's own
        // port order. Blocks with no surviving ports are omitted.
        for block_id in &tables.block_order {
            let Some(block) = tables.blocks.get(block_id) else {
                continue;
            };
            let surviving: Vec<PortId> = block
                .ports
                .iter()
                .copied()
                .filter(|port_id| tables.ports.contains_key(port_id))
                .collect();
            if !surviving.is_empty() {
                index.ports_by_block.insert(*block_id, surviving);
            }
        }

        // Link adjacency: individually-valid links whose endpoints exist
        // in the port table. Self-referential and dangling links are
        // skipped.
        for link_id in &tables.link_order {
            let Some(link) = tables.links.get(link_id) else {
                continue;
            };
            if !link.is_valid()
                || !tables.ports.contains_key(&link.from)
                || !tables.ports.contains_key(&link.to)
            {
                continue;
            }
            index.links_by_port.entry(link.from).or_default().push(*link_id);
            index.links_by_port.entry(link.to).or_default().push(*link_id);
        }

        // Tile occupancy: first claimant in creation order wins each tile;
        // contested tiles go on the collision list.
        for block_id in &tables.block_order {
            let Some(block) = tables.blocks.get(block_id) else {
                continue;
            };
            if !block.is_valid() {
                continue;
            }
            for tile in block.placement.tiles() {
                match index.tile_owner.entry(tile) {
                    Entry::Vacant(slot) => {
                        slot.insert(*block_id);
                        index.tiles_by_block.entry(*block_id).or_default().push(tile);
                    }
                    Entry::Occupied(_) => index.colliding_tiles.push(tile),
                }
            }
        }
        index.colliding_tiles.sort();
        index.colliding_tiles.dedup();

        index
    }

    /// Returns the block's surviving owned ports, in the block's own order.
    pub fn ports_for_block(&self, id: BlockId) -> &[PortId] {
        self.ports_by_block.get(&id).map_or(&[], Vec::as_slice)
    }

    /// Returns the valid links touching the given port, in link creation
    /// order.
    pub fn links_for_port(&self, id: PortId) -> &[LinkId] {
        self.links_by_port.get(&id).map_or(&[], Vec::as_slice)
    }

    /// Returns the block occupying the given tile, or the null id if the
    /// tile is unclaimed.
    pub fn block_at_tile(&self, coord: TileCoord) -> BlockId {
        self.tile_owner
            .get(&coord)
            .copied()
            .unwrap_or_else(BlockId::null)
    }

    /// Returns the tiles the block won under first-claimant occupancy.
    pub fn tiles_for_block(&self, id: BlockId) -> &[TileCoord] {
        self.tiles_by_block.get(&id).map_or(&[], Vec::as_slice)
    }

    /// Returns the contested tiles, deduplicated and in row-major order.
    pub fn colliding_tiles(&self) -> &[TileCoord] {
        &self.colliding_tiles
    }

    /// Returns `true` if the index holds no adjacency or occupancy data.
    pub fn is_empty(&self) -> bool {
        self.ports_by_block.is_empty()
            && self.links_by_port.is_empty()
            && self.tile_owner.is_empty()
            && self.colliding_tiles.is_empty()
    }
}
