//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects have **no identity**: two instances with the same attribute
/// values are the same value. Shop items are modelled this way; an item is its
/// name plus its current `sell_in` and `quality`, nothing more.
///
/// The trait requires:
/// - **Clone**: values can be copied freely (snapshots before/after a day)
/// - **PartialEq**: comparison is by attribute values
/// - **Debug**: values show up in logs and test failures
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct Item {
///     name: String,
///     sell_in: i32,
///     quality: i32,
/// }
///
/// impl ValueObject for Item {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
