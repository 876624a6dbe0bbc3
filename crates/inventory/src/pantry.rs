use indexmap::IndexMap;
use tracing::debug;

use pantry_core::{DomainError, DomainResult};

use crate::ingredient::Ingredient;

/// On-hand amount of an ingredient. Negative amounts are unrepresentable.
pub type Quantity = u32;

/// The pantry: every ingredient on hand and how much of it there is.
///
/// Invariants:
/// - every stored ingredient has a quantity of at least 1 (reaching zero removes
///   the entry);
/// - ingredients are unique under case-insensitive identity.
///
/// Iteration follows insertion order. Removing an entry keeps the relative order
/// of the others; adding to or overwriting an existing entry keeps both its
/// position and the casing it was first stored with.
///
/// There is no internal locking: callers sharing a pantry across threads must
/// synchronize access themselves.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pantry {
    ingredients: IndexMap<Ingredient, Quantity>,
}

impl Pantry {
    pub fn new() -> Self {
        Self::default()
    }

    /// All distinct ingredients currently stored.
    pub fn ingredients(&self) -> impl Iterator<Item = &Ingredient> + '_ {
        self.ingredients.keys()
    }

    /// Stored quantity, or `0` if the ingredient is not in the pantry.
    pub fn quantity(&self, ingredient: &Ingredient) -> Quantity {
        self.ingredients.get(ingredient).copied().unwrap_or(0)
    }

    pub fn contains(&self, ingredient: &Ingredient) -> bool {
        self.ingredients.contains_key(ingredient)
    }

    pub fn len(&self) -> usize {
        self.ingredients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ingredients.is_empty()
    }

    /// Add `quantity` of an ingredient, accumulating onto any existing amount.
    ///
    /// Rejects a zero quantity and totals that would overflow [`Quantity`]; the
    /// pantry is left unchanged on error.
    pub fn add_ingredient(&mut self, ingredient: Ingredient, quantity: Quantity) -> DomainResult<()> {
        if quantity == 0 {
            return Err(DomainError::validation("quantity must be positive"));
        }

        match self.ingredients.get_mut(&ingredient) {
            Some(stored) => {
                *stored = stored
                    .checked_add(quantity)
                    .ok_or_else(|| DomainError::invariant("quantity overflow"))?;
                debug!(ingredient = %ingredient, added = quantity, total = *stored, "ingredient added");
            }
            None => {
                debug!(ingredient = %ingredient, added = quantity, total = quantity, "ingredient added");
                self.ingredients.insert(ingredient, quantity);
            }
        }
        Ok(())
    }

    /// Remove `quantity` of an ingredient.
    ///
    /// Returns `Ok(false)` without touching the pantry when the ingredient is
    /// absent or there is not enough of it. An entry consumed down to zero is
    /// removed. A zero quantity is rejected.
    pub fn consume_ingredient(&mut self, ingredient: &Ingredient, quantity: Quantity) -> DomainResult<bool> {
        if quantity == 0 {
            return Err(DomainError::validation("quantity must be positive"));
        }

        let Some(stored) = self.ingredients.get_mut(ingredient) else {
            debug!(ingredient = %ingredient, requested = quantity, "ingredient not in pantry");
            return Ok(false);
        };

        if *stored < quantity {
            debug!(
                ingredient = %ingredient,
                requested = quantity,
                available = *stored,
                "not enough of ingredient"
            );
            return Ok(false);
        }

        *stored -= quantity;
        let remaining = *stored;
        if remaining == 0 {
            self.ingredients.shift_remove(ingredient);
        }
        debug!(ingredient = %ingredient, consumed = quantity, remaining, "ingredient consumed");
        Ok(true)
    }

    /// Read-only view of every ingredient and its quantity.
    pub fn all_ingredients(&self) -> &IndexMap<Ingredient, Quantity> {
        &self.ingredients
    }

    /// First stored ingredient (in iteration order) whose name equals `name`.
    ///
    /// Unlike identity equality this is case-sensitive and ignores the type, so
    /// `Milk/Dairy` and `Milk/Beverage` both answer to `"Milk"`.
    pub fn ingredient_by_name(&self, name: &str) -> Option<&Ingredient> {
        self.ingredients.keys().find(|ingredient| ingredient.name() == name)
    }

    /// Overwrite the stored quantity. Zero removes the entry.
    pub(crate) fn set_quantity(&mut self, ingredient: Ingredient, quantity: Quantity) {
        if quantity == 0 {
            debug!(ingredient = %ingredient, "ingredient cleared");
            self.ingredients.shift_remove(&ingredient);
            return;
        }
        debug!(ingredient = %ingredient, quantity, "ingredient quantity set");
        self.ingredients.insert(ingredient, quantity);
    }
}
