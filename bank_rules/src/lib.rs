//! # Bank Rules
//!
//! The economic ruleset of a Monopoly-style board game. This crate is the
//! single source of truth for property ownership, pricing, mortgages, and the
//! shared building inventory; it contains no turn sequencing, movement, rent,
//! or UI logic. Those layers call into [`Bank`] and react to its results.
//!
//! ## Core Components
//!
//! - **entities**: Property records, the owner capability trait, id newtypes
//! - **catalog**: The fixed board catalog, stored as validated TOML data
//! - **bank**: The ledger and its transactional operations

pub mod bank;
pub mod catalog;
pub mod entities;

pub use bank::*;
pub use catalog::*;
pub use entities::*;
