//! Tile-grid coordinates and tile role kinds.
//!
//! The device fabric is a discrete grid of tiles addressed by
//! `(row, column)`. A [`TileCoord`] is valid when both components are
//! non-negative; negative components are representable so that callers can
//! construct and inspect out-of-grid coordinates. [`TileKind`] classifies
//! what a tile is for.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A discrete `(row, column)` position on the tile grid.
///
/// Ordered row-major: first by row, then by column.
#[derive(
    Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default, Serialize, Deserialize,
)]
pub struct TileCoord {
    /// Row index (0-based, non-negative when valid).
    pub row: i32,
    /// Column index (0-based, non-negative when valid).
    pub col: i32,
}

impl TileCoord {
    /// Creates a coordinate from row and column indices.
    pub fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Returns `true` if both row and column are non-negative.
    pub fn is_valid(&self) -> bool {
        self.row >= 0 && self.col >= 0
    }
}

impl fmt::Display for TileCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.row, self.col)
    }
}

/// Error type for parsing tile coordinate text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid tile coordinate: '{input}'")]
pub struct ParseTileCoordError {
    /// The input string that failed to parse.
    pub input: String,
}

impl FromStr for TileCoord {
    type Err = ParseTileCoordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let err = || ParseTileCoordError {
            input: trimmed.to_string(),
        };

        // Exactly one comma, a valid integer on each side, and a valid
        // (non-negative) result.
        let (row_text, col_text) = trimmed.split_once(',').ok_or_else(err)?;
        if col_text.contains(',') {
            return Err(err());
        }
        let row: i32 = row_text.trim().parse().map_err(|_| err())?;
        let col: i32 = col_text.trim().parse().map_err(|_| err())?;
        let coord = Self { row, col };
        if !coord.is_valid() {
            return Err(err());
        }
        Ok(coord)
    }
}

/// The role of a tile in the device fabric.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
pub enum TileKind {
    /// A compute tile (AI engine).
    Aie,
    /// A local memory tile.
    Mem,
    /// A shim tile interfacing the array to the outside world.
    Shim,
    /// An unclassified tile.
    #[default]
    Unknown,
}

impl TileKind {
    /// Returns the canonical text form of this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            TileKind::Aie => "AIE",
            TileKind::Mem => "MEM",
            TileKind::Shim => "SHIM",
            TileKind::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for TileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error type for parsing tile kind text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid tile kind: '{input}'")]
pub struct ParseTileKindError {
    /// The input string that failed to parse.
    pub input: String,
}

impl FromStr for TileKind {
    type Err = ParseTileKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("AIE") {
            Ok(TileKind::Aie)
        } else if trimmed.eq_ignore_ascii_case("MEM") {
            Ok(TileKind::Mem)
        } else if trimmed.eq_ignore_ascii_case("SHIM") {
            Ok(TileKind::Shim)
        } else if trimmed.eq_ignore_ascii_case("UNKNOWN") {
            Ok(TileKind::Unknown)
        } else {
            Err(ParseTileKindError {
                input: trimmed.to_string(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validity() {
        assert!(TileCoord::new(0, 0).is_valid());
        assert!(TileCoord::new(3, 7).is_valid());
        assert!(!TileCoord::new(-1, 0).is_valid());
        assert!(!TileCoord::new(0, -1).is_valid());
    }

    #[test]
    fn row_major_ordering() {
        let a = TileCoord::new(1, 9);
        let b = TileCoord::new(2, 0);
        let c = TileCoord::new(2, 1);
        assert!(a < b);
        assert!(b < c);
    }

    #[test]
    fn display_roundtrip() {
        let coord = TileCoord::new(4, 12);
        assert_eq!(coord.to_string(), "4,12");
        let back: TileCoord = coord.to_string().parse().unwrap();
        assert_eq!(coord, back);
    }

    #[test]
    fn parse_trims_whitespace() {
        let coord: TileCoord = " 2 , 3 ".parse().unwrap();
        assert_eq!(coord, TileCoord::new(2, 3));
    }

    #[test]
    fn parse_rejects_malformed() {
        assert!("".parse::<TileCoord>().is_err());
        assert!("4".parse::<TileCoord>().is_err());
        assert!("4,5,6".parse::<TileCoord>().is_err());
        assert!("a,b".parse::<TileCoord>().is_err());
        assert!("4,".parse::<TileCoord>().is_err());
    }

    #[test]
    fn parse_rejects_negative() {
        assert!("-1,2".parse::<TileCoord>().is_err());
        assert!("2,-1".parse::<TileCoord>().is_err());
    }

    #[test]
    fn kind_text_roundtrip() {
        for kind in [TileKind::Aie, TileKind::Mem, TileKind::Shim, TileKind::Unknown] {
            let back: TileKind = kind.as_str().parse().unwrap();
            assert_eq!(kind, back);
        }
    }

    #[test]
    fn kind_parse_case_insensitive() {
        assert_eq!("aie".parse::<TileKind>().unwrap(), TileKind::Aie);
        assert_eq!("Mem".parse::<TileKind>().unwrap(), TileKind::Mem);
        assert_eq!("shim".parse::<TileKind>().unwrap(), TileKind::Shim);
        assert_eq!("unknown".parse::<TileKind>().unwrap(), TileKind::Unknown);
    }

    #[test]
    fn kind_parse_rejects_unrecognized() {
        assert!("DDR".parse::<TileKind>().is_err());
        assert!("".parse::<TileKind>().is_err());
    }

    #[test]
    fn serde_roundtrip() {
        let coord = TileCoord::new(5, 6);
        let json = serde_json::to_string(&coord).unwrap();
        let back: TileCoord = serde_json::from_str(&json).unwrap();
        assert_eq!(coord, back);

        let kind = TileKind::Shim;
        let json = serde_json::to_string(&kind).unwrap();
        let back: TileKind = serde_json::from_str(&json).unwrap();
        assert_eq!(kind, back);
    }
}
