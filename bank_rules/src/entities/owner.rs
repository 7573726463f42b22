//! The owner capability: the only contract the Bank depends on.

use serde::{Deserialize, Serialize};

use super::OwnerId;

/// Capability surface of any participant that can hold property.
///
/// The Bank reads the identity for ownership comparisons and moves cash
/// through the balance accessors. It depends on nothing else a participant
/// might do (movement, cards, turn order).
pub trait PropertyOwner {
    /// Stable identity used on property records.
    fn index(&self) -> OwnerId;

    /// Current cash balance. Signed: demolition refunds and forced payments
    /// outside this crate may leave it transiently negative.
    fn liquid_assets(&self) -> i64;

    fn set_liquid_assets(&mut self, amount: i64);

    /// Add cash to the balance.
    fn credit(&mut self, amount: i64) {
        self.set_liquid_assets(self.liquid_assets() + amount);
    }

    /// Remove cash from the balance.
    fn debit(&mut self, amount: i64) {
        self.set_liquid_assets(self.liquid_assets() - amount);
    }
}

/// A minimal concrete participant.
///
/// Game layers with richer player state can implement [`PropertyOwner`] on
/// their own types instead; the Bank does not care which it gets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: OwnerId,
    pub name: String,
    pub liquid_assets: i64,
}

impl Player {
    pub fn new(id: OwnerId, name: impl Into<String>, liquid_assets: i64) -> Self {
        Self {
            id,
            name: name.into(),
            liquid_assets,
        }
    }
}

impl PropertyOwner for Player {
    fn index(&self) -> OwnerId {
        self.id
    }

    fn liquid_assets(&self) -> i64 {
        self.liquid_assets
    }

    fn set_liquid_assets(&mut self, amount: i64) {
        self.liquid_assets = amount;
    }
}
