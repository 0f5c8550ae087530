//! Departments domain types.
//!
//! Identifiers, validated value objects and the `Department` aggregate.
//! Nothing here performs I/O or draws randomness.

extern crate self as departments_domain;

pub mod aggregates;
pub mod error;
pub mod ids;
pub mod value_objects;

pub use aggregates::Department;
pub use error::DomainError;
pub use ids::DepartmentId;
pub use value_objects::DepartmentName;
