//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`filters`, `student`, `bulk_menu`, `display`)
//! so each component depends on a small focused model. Every type here is
//! plain data; components wrap it in signals.

pub mod bulk_menu;
pub mod display;
pub mod filters;
pub mod student;
