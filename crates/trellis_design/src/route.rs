//! Route definitions — explicit tile paths for links.

use crate::ids::{LinkId, RouteId};
use serde::{Deserialize, Serialize};
use trellis_common::TileCoord;

/// An explicit tile-path for a link, overriding automatic routing.
#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub struct Route {
    /// The unique id of this route.
    pub id: RouteId,
    /// The link this route carries.
    pub link: LinkId,
    /// The tile waypoints, in path order.
    pub waypoints: Vec<TileCoord>,
}

impl Route {
    /// Returns `true` if the route and link ids are non-null.
    pub fn is_valid(&self) -> bool {
        !self.id.is_null() && !self.link.is_null()
    }
}
