//! `pantry-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns).

pub mod caseless;
pub mod error;
pub mod value_object;

pub use caseless::{cmp_ignore_case, eq_ignore_case, hash_ignore_case};
pub use error::{DomainError, DomainResult};
pub use value_object::ValueObject;
