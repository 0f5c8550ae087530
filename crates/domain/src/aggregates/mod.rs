//! Aggregates - entities with identity and encapsulated invariants

pub mod department;

pub use department::Department;
