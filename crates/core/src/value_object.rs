//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects have no identity of their own; two values with the same
/// attributes are interchangeable. In this workspace that covers closed sets
/// such as item categories.
///
/// ```ignore
/// #[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// enum Unit { Kilogram, Metre }
///
/// impl ValueObject for Unit {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
