//! Command-line interface and orchestration for copilot-pulse
//!
//! This module implements the CLI commands and ties the other modules together to
//! fetch Copilot data, summarize it, and render the dashboard.
//!
//! # Implementation Model
//!
//! ## Commands
//!
//! - **show**: Fetch usage and seat data, derive the summary, and render the dashboard
//!   to the console and/or a JSON file
//! - **init**: Generate a default configuration file
//! - **validate**: Check a configuration file
//!
//! ## Execution Flow
//!
//! The `run` function parses command-line arguments using clap and routes to the
//! appropriate command handler. `show` then:
//!
//! 1. Initializes logging and loads configuration, letting flags override file values
//! 2. Fetches live data with the `facts` fetcher
//! 3. Applies the configured fetch-error policy: surface the error, or substitute a
//!    synthetic summary and mark the dashboard accordingly
//! 4. Generates the requested reports
//!
//! The GitHub token is read from the environment once, by clap, and passed down
//! explicitly from there.

mod common;
mod config;
mod host;
mod init;
mod run;
mod show;
mod validate;

pub use config::{Config, FetchErrorPolicy};
pub use host::Host;
pub use init::{InitArgs, init_config};
pub use run::run;
pub use show::{ShowArgs, apply_fetch_policy, show_dashboard};
pub use validate::{ValidateArgs, validate_config};
