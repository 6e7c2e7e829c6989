//! End-to-end action run

use crate::git::GitHelper;
use crate::invoke::ToolInvocation;
use crate::output;
use crate::summary::{summarize, Summary};
use std::fs;
use treemapper_action_core::{annotation, ActionConfig, ActionError, ActionResult};
use treemapper_action_diff::{resolve_diff_range, DiffRange};

/// What a successful run produced
#[derive(Debug, Clone)]
pub struct RunReport {
    pub diff_range: DiffRange,
    pub context_file: String,
    pub summary: Summary,
    /// Whether step outputs were written to `GITHUB_OUTPUT`
    pub outputs_written: bool,
}

/// Detect the range, run treemapper and publish its summary.
///
/// A failing tool yields `ActionError::ToolFailed` with the tool's exit
/// code; no step outputs are written in that case.
pub fn run(config: &ActionConfig) -> ActionResult<RunReport> {
    let env = &config.env;
    let diff_range = resolve_diff_range(
        config.inputs.diff_range.as_deref(),
        &env.event_name,
        env.event_path.as_deref(),
    );

    let repo_path = config.repo_path();
    GitHelper::add_safe_directory(&repo_path);

    let invocation = ToolInvocation::new(config, diff_range.as_str());
    println!("Running: {}", invocation.command_line());

    let result = invocation.run()?;
    println!("{}", result.stdout);
    if !result.stderr.is_empty() {
        eprintln!("{}", result.stderr);
    }

    if !result.success() {
        return Err(ActionError::ToolFailed {
            code: result.failure_code(),
        });
    }

    let output_file = config.output_file();
    let context = fs::read_to_string(&output_file).map_err(|source| ActionError::ReadOutput {
        path: output_file.clone(),
        source,
    })?;

    let summary = summarize(&config.inputs.output_format, &context, &result.stderr);
    tracing::debug!(
        fragments = summary.fragment_count,
        tokens = summary.token_count,
        size = %summary.size,
        "Summarized extractor output"
    );

    let context_file = config.context_file_name();
    let outputs_written = output::emit(
        env.github_output.as_deref(),
        &context_file,
        &summary,
        &context,
    )?;

    annotation::notice(&format!(
        "Extracted {} fragments (~{} tokens)",
        summary.fragment_count, summary.token_count
    ));

    Ok(RunReport {
        diff_range,
        context_file,
        summary,
        outputs_written,
    })
}
