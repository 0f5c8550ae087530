//! Value objects - Immutable objects defined by their attributes

mod names;

pub use names::DepartmentName;
