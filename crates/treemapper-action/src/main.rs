use clap::Parser;
use std::process::ExitCode;
use treemapper_action_core::logging::{init_logging, is_runner_debug};
use treemapper_action_core::{annotation, ActionConfig};

mod cli;

use cli::ActionArgs;

fn main() -> ExitCode {
    let args = ActionArgs::parse();
    init_logging(is_runner_debug(args.runner_debug.as_deref()));

    let config = ActionConfig::from(args);
    tracing::debug!(?config, "Resolved action configuration");

    match treemapper_action_run::run(&config) {
        Ok(report) => {
            tracing::debug!(
                range = %report.diff_range,
                context_file = %report.context_file,
                fragments = report.summary.fragment_count,
                tokens = report.summary.token_count,
                outputs_written = report.outputs_written,
                "Action finished"
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            annotation::error(&e.to_string());
            e.exit_code()
        }
    }
}
