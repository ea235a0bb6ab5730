//! Value object trait: equality by value, not identity.
//!
//! Value objects have **no identity**: they are defined entirely by their
//! attribute values, so two value objects with the same values are equal.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "modify" one,
/// build a new one with the new values; nothing in this workspace mutates a
/// value object in place.
///
/// ## Design Constraints
///
/// The trait requires:
/// - **Clone**: value objects are passed around as values
/// - **Eq**: equality is total and structural
/// - **Hash**: equal values hash equally, so value objects can key maps and sets
/// - **Debug**: value objects show up in logs and test failures
///
/// ## Usage Pattern
///
/// ```
/// use cambio_core::ValueObject;
///
/// #[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// struct Money {
///     amount: i64,
///     currency: String,
/// }
///
/// impl ValueObject for Money {}
///
/// let m1 = Money { amount: 100, currency: "USD".to_string() };
/// let m2 = Money { amount: 100, currency: "USD".to_string() };
/// assert_eq!(m1, m2);
/// ```
pub trait ValueObject: Clone + Eq + core::hash::Hash + core::fmt::Debug {}
