//! Runs treemapper for a diff range and publishes its summary
//!
//! The pipeline registers the checkout as a safe git directory, invokes
//! the extractor, summarizes its output and appends step outputs for
//! later workflow steps.

mod git;
mod invoke;
mod output;
mod pipeline;
mod summary;

pub use git::GitHelper;
pub use invoke::{ToolInvocation, ToolOutput};
pub use output::{context_outputs, emit, GithubOutput, CONTEXT_DELIMITER};
pub use pipeline::{run, RunReport};
pub use summary::{count_fragments, scan_diagnostics, summarize, Diagnostics, Summary};
