use core::cmp::Ordering;

use indexmap::IndexMap;

use pantry_core::{ValueObject, cmp_ignore_case};
use pantry_inventory::{Ingredient, Quantity};

/// A recipe: what it needs and how likely it is to turn out well.
#[derive(Debug, Clone, PartialEq)]
pub struct Recipe {
    name: String,
    ingredients_needed: IndexMap<Ingredient, Quantity>,
    success_rate: f64,
}

impl Recipe {
    /// Build a recipe from its own copy of the required ingredients.
    ///
    /// `success_rate` is stored as given. If `ingredients_needed` repeats an
    /// identity, the last quantity wins.
    pub fn new(
        name: impl Into<String>,
        ingredients_needed: impl IntoIterator<Item = (Ingredient, Quantity)>,
        success_rate: f64,
    ) -> Self {
        Self {
            name: name.into(),
            ingredients_needed: ingredients_needed.into_iter().collect(),
            success_rate,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn ingredients_needed(&self) -> &IndexMap<Ingredient, Quantity> {
        &self.ingredients_needed
    }

    pub fn success_rate(&self) -> f64 {
        self.success_rate
    }

    /// Case-insensitive ordering by name, for `sort_by`.
    pub fn cmp_by_name(&self, other: &Recipe) -> Ordering {
        cmp_ignore_case(&self.name, &other.name)
    }

    /// Order against a possibly absent recipe; a recipe sorts after nothing.
    pub fn compare_to(&self, other: Option<&Recipe>) -> Ordering {
        match other {
            Some(other) => self.cmp_by_name(other),
            None => Ordering::Greater,
        }
    }
}

impl ValueObject for Recipe {}
