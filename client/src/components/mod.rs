//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the layout chrome and the question views while
//! reading/writing shared state from Leptos context providers.

pub mod header;
pub mod questions;
pub mod sidebar;
pub mod toast_container;
