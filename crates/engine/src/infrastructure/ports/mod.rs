//! Port traits for infrastructure boundaries.
//!
//! These are the ONLY abstractions in the engine. Everything else is concrete types.
//! Ports exist for:
//! - Database access (could swap SQLite -> a document store)
//! - Clock/Random (for testing)

mod error;
mod repos;
mod testing;

pub use error::RepoError;
pub use repos::DepartmentRepo;
pub use testing::{ClockPort, RandomPort};

#[cfg(test)]
pub use repos::MockDepartmentRepo;
#[cfg(test)]
pub use testing::MockRandomPort;
