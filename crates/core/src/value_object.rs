//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects have no identity of their own: two payloads with the same
/// fields are interchangeable. Request bodies sent to the API (scalar fields,
/// per-language translation content) are modelled this way.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
