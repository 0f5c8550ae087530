//! Use cases - user story orchestration over the ports.

pub mod departments;

pub use departments::{
    DepartmentCrud, DepartmentError, DepartmentUseCases, RandomDepartment, RandomPickError,
};
