//! The Bank: the canonical ledger of ownership, mortgages, and buildings.
//!
//! Every rule-governed mutation of property or owner cash goes through a
//! method here. Each transactional operation validates all of its
//! preconditions against current ledger state, then applies all of its
//! mutations; a precondition failure returns `Ok(false)` and leaves every
//! piece of state untouched. Only an unknown board index is an error.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

use crate::catalog::Catalog;
use crate::entities::{OwnerId, Property, PropertyKind, PropertyOwner, TileIndex, HOTEL_LEVEL};

/// Houses in the shared pool at the start of a game.
pub const STARTING_HOUSES: u8 = 32;

/// Hotels in the shared pool at the start of a game.
pub const STARTING_HOTELS: u8 = 12;

/// Errors raised by ledger lookups.
///
/// Precondition failures (wrong owner, insufficient funds, exhausted pools,
/// housing limits) are not errors; operations report those as `Ok(false)`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BankError {
    #[error("no property exists at board index {0}")]
    UnknownIndex(TileIndex),
}

/// The ledger for one game session.
///
/// Owns every property record and the two finite building pools shared by
/// all players. Construct one per game and hand it to the turn-managing
/// layer; there is no ambient global instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bank {
    houses: u8,
    hotels: u8,
    properties: BTreeMap<TileIndex, Property>,
}

impl Bank {
    /// A fresh ledger over the standard board.
    pub fn new() -> Self {
        Self::with_catalog(&Catalog::builtin())
    }

    /// A fresh ledger over a custom board catalog.
    pub fn with_catalog(catalog: &Catalog) -> Self {
        Self {
            houses: STARTING_HOUSES,
            hotels: STARTING_HOTELS,
            properties: catalog
                .properties()
                .map(|property| (property.index, property))
                .collect(),
        }
    }

    /// Houses left in the shared pool.
    pub fn houses(&self) -> u8 {
        self.houses
    }

    /// Hotels left in the shared pool.
    pub fn hotels(&self) -> u8 {
        self.hotels
    }

    /// Resolve a property by board index, street or not.
    pub fn property(&self, index: TileIndex) -> Result<&Property, BankError> {
        self.properties
            .get(&index)
            .ok_or(BankError::UnknownIndex(index))
    }

    fn property_mut(&mut self, index: TileIndex) -> Result<&mut Property, BankError> {
        self.properties
            .get_mut(&index)
            .ok_or(BankError::UnknownIndex(index))
    }

    /// All properties in board order.
    pub fn properties(&self) -> impl Iterator<Item = &Property> {
        self.properties.values()
    }

    /// Current owner of the property at `index`, if any.
    pub fn owner_of(&self, index: TileIndex) -> Result<Option<OwnerId>, BankError> {
        Ok(self.property(index)?.owner)
    }

    /// Purchase price of the property at `index`.
    pub fn price_of(&self, index: TileIndex) -> Result<u32, BankError> {
        Ok(self.property(index)?.price)
    }

    /// Whether `owner` could buy the property at `index` right now: it is
    /// for sale and the owner can cover the price. Pure check, no mutation.
    pub fn can_purchase(
        &self,
        owner: &impl PropertyOwner,
        index: TileIndex,
    ) -> Result<bool, BankError> {
        let property = self.property(index)?;
        Ok(property.is_for_sale() && owner.liquid_assets() >= i64::from(property.price))
    }

    /// Transfer the property at `index` to `owner` against its price.
    pub fn purchase(
        &mut self,
        owner: &mut impl PropertyOwner,
        index: TileIndex,
    ) -> Result<bool, BankError> {
        let property = self.property_mut(index)?;
        if !property.is_for_sale() || owner.liquid_assets() < i64::from(property.price) {
            return Ok(false);
        }
        owner.debit(i64::from(property.price));
        property.owner = Some(owner.index());
        Ok(true)
    }

    /// Mortgage the property at `index`, crediting its mortgage value.
    ///
    /// A street must be clear of housing before it can be mortgaged.
    pub fn mortgage(
        &mut self,
        owner: &mut impl PropertyOwner,
        index: TileIndex,
    ) -> Result<bool, BankError> {
        let property = self.property_mut(index)?;
        if property.owner != Some(owner.index()) || property.mortgaged || property.housing() > 0 {
            return Ok(false);
        }
        owner.credit(i64::from(property.mortgage_value()));
        property.mortgaged = true;
        Ok(true)
    }

    /// Lift the mortgage on the property at `index` against the unmortgage
    /// cost (mortgage value plus interest).
    pub fn unmortgage(
        &mut self,
        owner: &mut impl PropertyOwner,
        index: TileIndex,
    ) -> Result<bool, BankError> {
        let property = self.property_mut(index)?;
        if property.owner != Some(owner.index())
            || !property.mortgaged
            || owner.liquid_assets() < i64::from(property.unmortgage_cost())
        {
            return Ok(false);
        }
        owner.debit(i64::from(property.unmortgage_cost()));
        property.mortgaged = false;
        Ok(true)
    }

    /// Add one house to the street at `index`, or promote four houses to a
    /// hotel. Streets only; the required pool must have stock.
    pub fn build(
        &mut self,
        owner: &mut impl PropertyOwner,
        index: TileIndex,
    ) -> Result<bool, BankError> {
        let property = self
            .properties
            .get_mut(&index)
            .ok_or(BankError::UnknownIndex(index))?;
        if property.owner != Some(owner.index()) || property.mortgaged {
            return Ok(false);
        }
        let PropertyKind::Street { housing, build_cost } = &mut property.kind else {
            return Ok(false);
        };
        let cost = *build_cost;
        if *housing >= HOTEL_LEVEL || owner.liquid_assets() < i64::from(cost) {
            return Ok(false);
        }
        // Promoting from four houses consumes a hotel; any lower level
        // consumes a house. The two pools are checked exclusively.
        if *housing == HOTEL_LEVEL - 1 {
            if self.hotels == 0 {
                return Ok(false);
            }
            self.hotels -= 1;
        } else {
            if self.houses == 0 {
                return Ok(false);
            }
            self.houses -= 1;
        }
        owner.debit(i64::from(cost));
        *housing += 1;
        Ok(true)
    }

    /// Remove one housing step from the street at `index`, refunding half
    /// the build cost (rounded down).
    pub fn demolish(
        &mut self,
        owner: &mut impl PropertyOwner,
        index: TileIndex,
    ) -> Result<bool, BankError> {
        let property = self
            .properties
            .get_mut(&index)
            .ok_or(BankError::UnknownIndex(index))?;
        if property.owner != Some(owner.index()) || property.mortgaged {
            return Ok(false);
        }
        let PropertyKind::Street { housing, build_cost } = &mut property.kind else {
            return Ok(false);
        };
        if *housing == 0 {
            return Ok(false);
        }
        // A demolished hotel returns a hotel to the pool, not four houses;
        // the four houses come back one by one as the street is cleared.
        if *housing == HOTEL_LEVEL {
            self.hotels += 1;
        } else {
            self.houses += 1;
        }
        owner.credit(i64::from(*build_cost / 2));
        *housing -= 1;
        Ok(true)
    }
}

impl Default for Bank {
    fn default() -> Self {
        Self::new()
    }
}
