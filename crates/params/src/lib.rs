//! Constant values for tlskex key-exchange operations
//!
//! Named finite-field groups and digest sizes shared across the workspace.

pub mod traditional;
pub mod utils;
