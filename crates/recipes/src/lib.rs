//! Recipe catalog domain module.
//!
//! Recipes are plain immutable descriptors. Deciding whether a pantry can cook
//! one is left to callers, who can walk `ingredients_needed()` against
//! `Pantry::quantity`.

pub mod recipe;

pub use recipe::Recipe;
