//! Opaque ID types for all design entities.
//!
//! Each entity kind gets its own zero-sized tag type and a [`StrongId`]
//! alias. The tag makes ids of different kinds incompatible at the type
//! level: the same UUID value under two different tags is unrelated.

use trellis_common::{IdTag, StrongId};

macro_rules! define_entity_id {
    ($(#[$meta:meta])* $tag:ident => $alias:ident) => {
        /// Zero-sized tag type distinguishing this id kind.
        #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
        pub struct $tag;

        impl IdTag for $tag {}

        $(#[$meta])*
        pub type $alias = StrongId<$tag>;
    };
}

define_entity_id!(
    /// Opaque 128-bit id for a placed block.
    BlockTag => BlockId
);

define_entity_id!(
    /// Opaque 128-bit id for a port on a block.
    PortTag => PortId
);

define_entity_id!(
    /// Opaque 128-bit id for a link between two ports.
    LinkTag => LinkId
);

define_entity_id!(
    /// Opaque 128-bit id for a net grouping links.
    NetTag => NetId
);

define_entity_id!(
    /// Opaque 128-bit id for an annotation.
    AnnotationTag => AnnotationId
);

define_entity_id!(
    /// Opaque 128-bit id for an explicit route.
    RouteTag => RouteId
);
