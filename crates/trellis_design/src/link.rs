//! Link definitions — directed connections between ports.

use crate::ids::{LinkId, PortId};
use serde::{Deserialize, Serialize};

/// A world-space waypoint on a manually drawn route.
#[derive(Clone, Copy, PartialEq, Debug, Default, Serialize, Deserialize)]
pub struct Waypoint {
    /// Horizontal position in canvas units.
    pub x: f64,
    /// Vertical position in canvas units.
    pub y: f64,
}

impl Waypoint {
    /// Creates a waypoint from canvas coordinates.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns `true` if both coordinates are finite.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// A manual routing override for a link: an ordered waypoint polyline.
///
/// When `authoritative` is set, automatic routing must not deviate from
/// the waypoints; otherwise they are treated as hints.
#[derive(Clone, PartialEq, Debug, Default, Serialize, Deserialize)]
pub struct RouteOverride {
    /// The waypoint sequence, in drawing order.
    pub waypoints: Vec<Waypoint>,
    /// Whether the waypoints are binding rather than advisory.
    pub authoritative: bool,
}

impl RouteOverride {
    /// Creates an override from a waypoint sequence.
    pub fn new(waypoints: Vec<Waypoint>, authoritative: bool) -> Self {
        Self {
            waypoints,
            authoritative,
        }
    }

    /// Returns `true` if the sequence is non-empty and every coordinate is
    /// finite.
    pub fn is_valid(&self) -> bool {
        !self.waypoints.is_empty() && self.waypoints.iter().all(Waypoint::is_finite)
    }
}

/// A directed connection between two ports.
///
/// A link does not verify that its endpoints exist in the document; that
/// is the index's and builder's responsibility.
#[derive(Clone, PartialEq, Debug, Default, Serialize, Deserialize)]
pub struct Link {
    /// The unique id of this link.
    pub id: LinkId,
    /// The source port.
    pub from: PortId,
    /// The destination port.
    pub to: PortId,
    /// Optional user-facing label.
    pub label: Option<String>,
    /// Optional manual routing override.
    pub route_override: Option<RouteOverride>,
}

impl Link {
    /// Returns `true` if all ids are non-null and the endpoints differ.
    pub fn is_valid(&self) -> bool {
        !self.id.is_null() && !self.from.is_null() && !self.to.is_null() && self.from != self.to
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_link_is_invalid() {
        assert!(!Link::default().is_valid());
    }

    #[test]
    fn valid_link() {
        let link = Link {
            id: LinkId::new(),
            from: PortId::new(),
            to: PortId::new(),
            label: None,
            route_override: None,
        };
        assert!(link.is_valid());
    }

    #[test]
    fn same_endpoint_is_invalid() {
        let port = PortId::new();
        let link = Link {
            id: LinkId::new(),
            from: port,
            to: port,
            label: None,
            route_override: None,
        };
        assert!(!link.is_valid());
    }

    #[test]
    fn override_requires_waypoints() {
        assert!(!RouteOverride::default().is_valid());
        let route = RouteOverride::new(vec![Waypoint::new(0.0, 0.0)], false);
        assert!(route.is_valid());
    }

    #[test]
    fn override_rejects_non_finite() {
        let route = RouteOverride::new(
            vec![Waypoint::new(1.0, 2.0), Waypoint::new(f64::NAN, 0.0)],
            true,
        );
        assert!(!route.is_valid());
        let route = RouteOverride::new(vec![Waypoint::new(f64::INFINITY, 0.0)], false);
        assert!(!route.is_valid());
    }

    #[test]
    fn serde_roundtrip() {
        let link = Link {
            id: LinkId::new(),
            from: PortId::new(),
            to: PortId::new(),
            label: Some("dma in".to_string()),
            route_override: Some(RouteOverride::new(
                vec![Waypoint::new(10.5, 20.0), Waypoint::new(30.0, 20.0)],
                true,
            )),
        };
        let json = serde_json::to_string(&link).unwrap();
        let back: Link = serde_json::from_str(&json).unwrap();
        assert_eq!(link, back);
    }
}
