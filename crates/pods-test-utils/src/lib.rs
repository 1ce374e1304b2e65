//! Shared test utilities for the flutter-pods workspace.
//!
//! This crate is a dev-dependency only, never published.
//!
//! # Modules
//!
//! - [`app`] — [`app::TestApp`] builder for a Flutter application with an
//!   `ios/` project and plugin sources

pub mod app;
