//! Reusable Dioxus components and role themes for the dashboard.

pub mod components;
pub mod theme;

pub use components::*;
pub use theme::*;
