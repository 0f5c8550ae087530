//! Departments Engine library.
//!
//! Server-side code for the departments REST resource.
//!
//! ## Structure
//!
//! - `use_cases/` - Operations over the departments collection, including random pick
//! - `infrastructure/` - External dependency implementations (ports + adapters)
//! - `api/` - HTTP entry points
//! - `app` - Application composition
//! - `config` - Environment configuration

pub mod api;
pub mod app;
pub mod config;
pub mod infrastructure;
pub mod use_cases;

/// In-memory fakes shared by unit tests.
#[cfg(test)]
pub mod test_fixtures;

pub use app::App;
