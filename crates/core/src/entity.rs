//! Entity trait: identity + continuity across updates.

/// Entity marker + minimal interface.
///
/// Implemented by records the backend assigns an identifier to.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier, if the backend has assigned one yet.
    fn id(&self) -> Option<&Self::Id>;
}
