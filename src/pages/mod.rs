//! Route-level page components.

pub mod students;
