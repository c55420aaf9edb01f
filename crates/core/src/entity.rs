//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// An entity's identifier is vacant until the repository persists it; the
/// repository owns identifier assignment.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Copy + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier, if the entity has been persisted.
    fn id(&self) -> Option<Self::Id>;
}

/// An entity a store can persist: cloneable, and able to take on the
/// identifier the store assigns at insert time.
pub trait Persistable: Entity + Clone {
    /// Attach the store-assigned identifier.
    fn with_id(self, id: Self::Id) -> Self;
}
