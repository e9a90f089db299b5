//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Two value objects with the same attribute values are interchangeable. To
/// "modify" one, build a new value.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct Draft {
///     name: String,
///     quantity: u32,
/// }
///
/// impl ValueObject for Draft {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
