//! Entity definitions: board positions, owners, and property records.

mod owner;
mod property;

pub use owner::*;
pub use property::*;

use serde::{Deserialize, Serialize};

/// Number of tiles on the board. Valid positions are `0..TILES`.
pub const TILES: u8 = 40;

/// A position on the board.
///
/// Not every position holds a purchasable property (Go, Jail, tax tiles and
/// the like are outside this crate's scope); the [`catalog`](crate::catalog)
/// decides which positions do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TileIndex(pub u8);

impl TileIndex {
    /// Whether this position lies on the board at all.
    pub fn is_on_board(&self) -> bool {
        self.0 < TILES
    }
}

impl std::fmt::Display for TileIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u8> for TileIndex {
    fn from(index: u8) -> Self {
        Self(index)
    }
}

/// Stable identity of a game participant that can own property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OwnerId(pub u8);

impl std::fmt::Display for OwnerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
