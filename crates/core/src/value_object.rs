//! Value object trait: equality by value, not identity.
//!
//! Filter selections, price labels and card descriptors are value objects:
//! two selections with the same checked boxes are the same selection, no
//! matter which UI event produced them.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "modify" one,
/// build a new one.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq)]
/// struct PriceTag {
///     amount: f64,
///     currency: String,
/// }
///
/// impl ValueObject for PriceTag {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
