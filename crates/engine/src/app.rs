//! Application state and composition.

use std::sync::Arc;

use crate::infrastructure::ports::{ClockPort, DepartmentRepo, RandomPort};
use crate::use_cases::DepartmentUseCases;

/// Main application state.
///
/// Passed to HTTP handlers via Axum state.
pub struct App {
    pub use_cases: UseCases,
}

/// Container for all use cases.
pub struct UseCases {
    pub departments: DepartmentUseCases,
}

impl App {
    pub fn new(
        department: Arc<dyn DepartmentRepo>,
        clock: Arc<dyn ClockPort>,
        random: Arc<dyn RandomPort>,
    ) -> Self {
        Self {
            use_cases: UseCases {
                departments: DepartmentUseCases::new(department, clock, random),
            },
        }
    }
}
