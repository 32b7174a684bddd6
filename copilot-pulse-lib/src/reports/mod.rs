//! Dashboard rendering
//!
//! This module turns a [`Dashboard`] into output for humans and for other programs.
//!
//! # Implementation Model
//!
//! Two generators are provided, each accessed through a `generate` function:
//! - **Console**: Terminal output with ANSI colors, metric cards, a bar chart of the
//!   daily acceptance rate, and the adoption assessment
//! - **JSON**: Machine-readable structured data, including whether the figures are live
//!   or synthetic
//!
//! Both generators operate on the same input so callers can produce several formats from
//! one fetch. Shared formatting lives in the `common` module.

mod common;
mod console;
mod dashboard;
mod json;

pub use console::{ConsoleOutputMode, generate as generate_console};
pub use dashboard::{Dashboard, DataSource};
pub use json::generate as generate_json;
