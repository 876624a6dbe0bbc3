//! Value object trait: equality by value, not identity.
//!
//! Value objects have **no identity** of their own - they are defined entirely
//! by their attribute values. Two value objects with the same values are equal.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "modify" one,
/// build a new one. Implementors expose getters only, never setters, so that
/// equality and hashing stay stable for the lifetime of the value (a pantry
/// keys its ledger on them).
///
/// ## Usage Pattern
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// struct Unit {
///     symbol: String,
/// }
///
/// impl ValueObject for Unit {}
///
/// let g1 = Unit { symbol: "g".to_string() };
/// let g2 = Unit { symbol: "g".to_string() };
/// assert_eq!(g1, g2);
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
