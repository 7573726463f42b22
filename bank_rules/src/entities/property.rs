//! Property records: passive ownership and monetary state for one tile.
//!
//! No method here enforces game rules; all rule enforcement lives in the
//! [`Bank`](crate::bank::Bank).

use serde::{Deserialize, Serialize};

use super::{OwnerId, TileIndex};

/// Housing level that encodes a hotel. Levels 0-4 are plain house counts.
pub const HOTEL_LEVEL: u8 = 5;

/// What kind of purchasable tile a property is.
///
/// Streets carry building state; railroads and utilities never support
/// building operations. A tagged variant instead of a subtype hierarchy, so
/// street-only operations can match instead of downcasting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PropertyKind {
    Street {
        /// 0-4 = that many houses, 5 = one hotel.
        housing: u8,
        /// Cost of one build step (house or hotel).
        build_cost: u32,
    },
    Railroad,
    Utility,
}

/// A single purchasable board tile.
///
/// `index` and `price` are fixed at catalog load; `owner`, the mortgage flag,
/// and street housing are the only mutable fields, and they mutate exclusively
/// through [`Bank`](crate::bank::Bank) operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Property {
    pub index: TileIndex,
    pub price: u32,
    pub owner: Option<OwnerId>,
    pub mortgaged: bool,
    pub kind: PropertyKind,
}

impl Property {
    /// Create an unowned, unmortgaged street.
    pub fn street(index: TileIndex, price: u32, build_cost: u32) -> Self {
        Self {
            index,
            price,
            owner: None,
            mortgaged: false,
            kind: PropertyKind::Street {
                housing: 0,
                build_cost,
            },
        }
    }

    /// Create an unowned railroad.
    pub fn railroad(index: TileIndex, price: u32) -> Self {
        Self {
            index,
            price,
            owner: None,
            mortgaged: false,
            kind: PropertyKind::Railroad,
        }
    }

    /// Create an unowned utility.
    pub fn utility(index: TileIndex, price: u32) -> Self {
        Self {
            index,
            price,
            owner: None,
            mortgaged: false,
            kind: PropertyKind::Utility,
        }
    }

    /// A property is for sale exactly while nobody owns it.
    pub fn is_for_sale(&self) -> bool {
        self.owner.is_none()
    }

    pub fn is_street(&self) -> bool {
        matches!(self.kind, PropertyKind::Street { .. })
    }

    /// Current housing level (0 for non-streets).
    pub fn housing(&self) -> u8 {
        match self.kind {
            PropertyKind::Street { housing, .. } => housing,
            _ => 0,
        }
    }

    /// Houses standing on this tile. A hotel counts as zero houses.
    pub fn houses(&self) -> u8 {
        match self.housing() {
            HOTEL_LEVEL => 0,
            houses => houses,
        }
    }

    /// Hotels standing on this tile (0 or 1).
    pub fn hotels(&self) -> u8 {
        (self.housing() == HOTEL_LEVEL) as u8
    }

    /// Cash received when mortgaging: half the purchase price.
    pub fn mortgage_value(&self) -> u32 {
        self.price / 2
    }

    /// Cash required to lift a mortgage: the mortgage value plus a 10%
    /// interest premium, in integer arithmetic.
    pub fn unmortgage_cost(&self) -> u32 {
        let value = self.mortgage_value();
        value + value / 10
    }
}
