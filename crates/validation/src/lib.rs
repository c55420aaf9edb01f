//! `wastenot-validation` — the shared rule specification and field checks.

pub mod checks;
pub mod specification;

pub use specification::Specification;
