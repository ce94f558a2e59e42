//! Net definitions — named groupings of links.

use crate::ids::{LinkId, NetId};
use serde::{Deserialize, Serialize};

/// A named grouping of links.
///
/// Membership is stored verbatim in caller order; nothing checks that the
/// member links exist in the document.
#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub struct Net {
    /// The unique id of this net.
    pub id: NetId,
    /// Optional net name.
    pub name: Option<String>,
    /// The member links, in caller order.
    pub members: Vec<LinkId>,
}

impl Net {
    /// Returns `true` if the id is non-null.
    pub fn is_valid(&self) -> bool {
        !self.id.is_null()
    }
}
