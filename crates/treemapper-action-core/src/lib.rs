//! # treemapper-action-core
//!
//! Shared building blocks for the treemapper GitHub Action.
//!
//! ## Modules
//!
//! - `annotation`: GitHub workflow commands
//! - `config`: Inputs and runner environment
//! - `error`: Error type carrying process exit codes
//! - `logging`: tracing subscriber setup

pub mod annotation;
pub mod config;
pub mod error;
pub mod logging;

pub use config::{ActionConfig, ActionEnv, Inputs, OutputFormat};
pub use error::{ActionError, ActionResult};
