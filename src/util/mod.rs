//! Utility helpers shared across component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser and formatting concerns from component
//! logic so the logic stays testable without a DOM.

pub mod dates;
pub mod dismiss;
