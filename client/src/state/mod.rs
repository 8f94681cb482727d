//! Client-side stores provided through Leptos context.
//!
//! DESIGN
//! ======
//! Each store is a plain value wrapped in an `RwSignal` by the app shell.
//! Transitions are ordinary methods so they can be tested without a
//! reactive runtime.

pub mod app;
pub mod theme;
pub mod toast;
