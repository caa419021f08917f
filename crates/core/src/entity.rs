//! Entity trait: identity that survives replacement.
//!
//! Records in this domain are replaced wholesale when upstream data arrives;
//! the identifier is what ties successive snapshots to the same tracked thing.

/// Entity marker + minimal interface.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Copy + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> Self::Id;
}
