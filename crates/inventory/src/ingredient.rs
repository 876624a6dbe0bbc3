use core::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use pantry_core::{ValueObject, eq_ignore_case, hash_ignore_case};

/// Ingredient identity: a name and a type, compared case-insensitively.
///
/// Both fields are kept verbatim for display. Equality and hashing ignore case
/// (ordinal, not locale-aware), so `Flour/Grain` and `FLOUR/grain` are the same
/// pantry entry. Empty strings are legal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ingredient {
    name: String,
    #[serde(rename = "type")]
    kind: String,
}

impl Ingredient {
    pub fn new(name: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: kind.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The ingredient type (e.g. `Dairy`, `Grain`).
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Identity comparison against a possibly absent ingredient.
    pub fn matches(&self, other: Option<&Ingredient>) -> bool {
        other.is_some_and(|o| self == o)
    }
}

impl PartialEq for Ingredient {
    fn eq(&self, other: &Self) -> bool {
        eq_ignore_case(&self.name, &other.name) && eq_ignore_case(&self.kind, &other.kind)
    }
}

impl Eq for Ingredient {}

impl Hash for Ingredient {
    fn hash<H: Hasher>(&self, state: &mut H) {
        hash_ignore_case(&self.name, state);
        hash_ignore_case(&self.kind, state);
    }
}

impl core::fmt::Display for Ingredient {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} ({})", self.name, self.kind)
    }
}

impl ValueObject for Ingredient {}
