//! The board catalog: which tiles are purchasable, and at what price.
//!
//! The catalog is data, not code. The standard board ships embedded as TOML;
//! a custom board can be loaded from any TOML string and is validated before
//! use.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

use crate::entities::{Property, TileIndex};

/// The standard board shipped with the crate.
const BUILTIN_BOARD: &str = include_str!("board.toml");

/// Errors raised while loading a board catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("invalid catalog TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("duplicate board index {0}")]
    DuplicateIndex(TileIndex),

    #[error("board index {0} is outside the board")]
    OffBoard(TileIndex),
}

/// Catalog entry for a street.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StreetEntry {
    pub index: u8,
    pub price: u32,
    pub build_cost: u32,
}

/// Catalog entry for a railroad or utility.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropertyEntry {
    pub index: u8,
    pub price: u32,
}

/// The full set of purchasable tiles for one board.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub streets: Vec<StreetEntry>,
    #[serde(default)]
    pub railroads: Vec<PropertyEntry>,
    #[serde(default)]
    pub utilities: Vec<PropertyEntry>,
}

impl Catalog {
    /// The standard board. The embedded document is covered by tests, so a
    /// parse failure here is a packaging bug.
    pub fn builtin() -> Self {
        Self::from_toml_str(BUILTIN_BOARD).expect("embedded board catalog is valid")
    }

    /// Parse and validate a catalog from a TOML document.
    pub fn from_toml_str(document: &str) -> Result<Self, CatalogError> {
        let catalog: Self = toml::from_str(document)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Every index must be on the board and appear exactly once across all
    /// three entry lists.
    fn validate(&self) -> Result<(), CatalogError> {
        let mut seen = HashSet::new();
        for index in self.indices() {
            if !index.is_on_board() {
                return Err(CatalogError::OffBoard(index));
            }
            if !seen.insert(index) {
                return Err(CatalogError::DuplicateIndex(index));
            }
        }
        Ok(())
    }

    /// All board indices named by this catalog, streets first.
    pub fn indices(&self) -> impl Iterator<Item = TileIndex> + '_ {
        self.streets
            .iter()
            .map(|entry| TileIndex(entry.index))
            .chain(self.railroads.iter().map(|entry| TileIndex(entry.index)))
            .chain(self.utilities.iter().map(|entry| TileIndex(entry.index)))
    }

    /// Fresh, unowned property records for every entry.
    pub fn properties(&self) -> impl Iterator<Item = Property> + '_ {
        let streets = self
            .streets
            .iter()
            .map(|entry| Property::street(TileIndex(entry.index), entry.price, entry.build_cost));
        let railroads = self
            .railroads
            .iter()
            .map(|entry| Property::railroad(TileIndex(entry.index), entry.price));
        let utilities = self
            .utilities
            .iter()
            .map(|entry| Property::utility(TileIndex(entry.index), entry.price));
        streets.chain(railroads).chain(utilities)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_board_parses() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.streets.len(), 22);
        assert_eq!(catalog.railroads.len(), 4);
        assert_eq!(catalog.utilities.len(), 2);
    }

    #[test]
    fn test_builtin_board_prices() {
        let catalog = Catalog::builtin();
        let first = &catalog.streets[0];
        assert_eq!(first.index, 1);
        assert_eq!(first.price, 60);
        assert_eq!(first.build_cost, 50);

        let last = catalog.streets.last().unwrap();
        assert_eq!(last.index, 39);
        assert_eq!(last.price, 400);
        assert_eq!(last.build_cost, 200);

        assert!(catalog.railroads.iter().all(|entry| entry.price == 200));
        assert!(catalog.utilities.iter().all(|entry| entry.price == 150));
    }

    #[test]
    fn test_duplicate_index_rejected() {
        let document = r#"
            [[streets]]
            index = 1
            price = 60
            build_cost = 50

            [[railroads]]
            index = 1
            price = 200
        "#;
        let result = Catalog::from_toml_str(document);
        assert!(matches!(
            result,
            Err(CatalogError::DuplicateIndex(TileIndex(1)))
        ));
    }

    #[test]
    fn test_off_board_index_rejected() {
        let document = r#"
            [[utilities]]
            index = 40
            price = 150
        "#;
        let result = Catalog::from_toml_str(document);
        assert!(matches!(result, Err(CatalogError::OffBoard(TileIndex(40)))));
    }

    #[test]
    fn test_malformed_document_rejected() {
        assert!(matches!(
            Catalog::from_toml_str("streets = 12"),
            Err(CatalogError::Parse(_))
        ));
    }
}
