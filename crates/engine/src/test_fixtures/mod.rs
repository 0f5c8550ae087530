//! Shared test helpers.

mod departments;

pub use departments::InMemoryDepartmentRepo;
