//! API layer - HTTP entry points.

pub mod http;
pub mod layers;

pub use http::routes;
pub use layers::build_router;
