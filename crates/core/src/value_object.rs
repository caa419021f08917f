//! Value object trait: equality by value, not identity.

/// Marker trait for immutable, value-compared domain objects.
///
/// A price observation or a statistics window has no identity of its own;
/// two with the same attribute values are interchangeable. Value objects are
/// never mutated in place — "changing" one means constructing a new value.
///
/// Requirements: `Clone` (values are copied freely), `PartialEq` (compared
/// attribute-by-attribute), `Debug` (logging and test output).
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
