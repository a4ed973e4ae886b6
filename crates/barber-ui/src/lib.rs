#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::multiple_crate_versions)]
//! Barbershop site page controller.
//! Binds to the server-rendered templates and drives the mobile menu, theme
//! switch, service form, service filters, dropdown, and delete modal.

pub mod config;
pub mod controller;
pub mod core;
pub mod error;
pub mod page;
pub mod render;
pub mod telemetry;

pub use config::PageConfig;
pub use controller::UiController;
pub use error::{Result, UiError};

#[cfg(target_arch = "wasm32")]
mod app;

#[cfg(target_arch = "wasm32")]
pub use app::{
    close_dropdown, filter_services, hide_delete_modal, run_app, show_delete_modal,
    toggle_dropdown, toggle_mobile_menu, toggle_theme, update_custom_service_field,
};
