//! Core, DOM-free primitives for the page controller.
pub mod services;
pub mod state;
pub mod theme;
pub mod visibility;
