//! `autoform` library crate.
//!
//! The binary (`autoform`) is a thin wrapper around this library so that:
//!
//! - result interpretation is testable without a network or a terminal
//! - the CLI and the TUI share one upload/interpret pipeline
//!
//! The interesting logic lives in [`interpret`]; the other modules are plumbing
//! around it.

pub mod app;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod interpret;
pub mod io;
pub mod logging;
pub mod report;
pub mod tui;
pub mod upload;
