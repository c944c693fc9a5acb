//! Core library for the `weatherpane` desktop app.
//!
//! This crate defines:
//! - The fetch handler: one GET against a user-supplied URL
//! - Payload interpretation (weather fields, alerts, or nothing)
//! - View-state rendering and failure-to-dialog mapping
//!
//! It is used by `weatherpane-gui`, but carries no window code itself.

pub mod fetch;
pub mod model;
pub mod view;

pub use fetch::{FetchFailure, WeatherFetcher};
pub use model::WeatherSnapshot;
pub use view::{Notification, Severity, ViewState};
