//! Chat route
//!
//! The chat section of an Axum + HTMX + Web Components application: a
//! full-height layout carrying the section's page metadata, and a full-page
//! chat screen whose close action navigates back to the application root.
//!
//! # Architecture
//!
//! - **Server**: Axum router rendering HTML server-side
//! - **UI**: String-templated screens mounting the `<full-page-chat>` Web Component
//! - **Navigation**: Screens get a [`navigation::Navigator`]; the server answers
//!   close requests with an HTMX `HX-Location` instruction
//!
//! # Modules
//!
//! - [`config`]: CLI, file and environment configuration
//! - [`navigation`]: Navigation capability and its implementations
//! - [`routes`]: Route path constants
//! - [`server`]: Router and handlers
//! - [`ui`]: Layout, chat page and widget mounting

// Axum handlers are async by contract even when they never await
#![allow(clippy::unused_async)]

pub mod config;
pub mod error;
pub mod navigation;
pub mod routes;
pub mod server;
pub mod telemetry;
pub mod ui;
