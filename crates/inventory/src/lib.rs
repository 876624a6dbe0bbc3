//! Pantry inventory domain module.
//!
//! This crate contains the ingredient identity, the quantity ledger and the
//! ingredients-file loader. Apart from reading the ingredients file it performs
//! no IO.

pub mod ingredient;
pub mod loader;
pub mod pantry;

pub use ingredient::Ingredient;
pub use loader::{LineError, LoadError, LoadReport, SkippedLine, parse_record};
pub use pantry::{Pantry, Quantity};
