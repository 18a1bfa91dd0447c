//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render dashboard chrome from props and report user intent
//! through callbacks. None of them reads shared state except the display
//! configuration context.

pub mod bulk_actions_toolbar;
pub mod filter_panel;
pub mod profile_header;
