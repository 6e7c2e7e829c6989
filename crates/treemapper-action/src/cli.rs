use clap::Parser;
use std::ffi::OsString;
use std::path::{self, PathBuf};
use treemapper_action_core::config::{self, DEFAULT_TOOL, DEFAULT_WORKSPACE};
use treemapper_action_core::{ActionConfig, ActionEnv, Inputs, OutputFormat};

/// Extract diff-focused code context with treemapper and publish it as
/// GitHub Actions step outputs.
#[derive(Debug, Parser)]
#[command(name = "treemapper-action", version, about)]
pub struct ActionArgs {
    /// Diff range to analyze (auto-detected from the event when empty)
    pub diff_range: Option<String>,

    /// Path to analyze, relative to the workspace
    #[arg(default_value = ".")]
    pub path: String,

    /// Token budget
    #[arg(default_value = "50000")]
    pub budget: String,

    /// Output format: yaml, yml, json, ...
    #[arg(default_value = "yaml")]
    pub output_format: String,

    /// Relevance decay parameter
    #[arg(default_value = "0.60")]
    pub alpha: String,

    /// Relevance threshold parameter
    #[arg(default_value = "0.08")]
    pub tau: String,

    /// Include full file contents ("true" to enable)
    #[arg(default_value = "false")]
    pub full: String,

    /// Omit fragment contents ("true" to enable)
    #[arg(default_value = "false")]
    pub no_content: String,

    /// Name of the triggering event
    #[arg(long, env = "GITHUB_EVENT_NAME", default_value = "", hide = true)]
    pub event_name: String,

    /// Path of the event payload JSON
    #[arg(long, env = "GITHUB_EVENT_PATH", hide = true)]
    pub event_path: Option<OsString>,

    /// Workspace checkout directory
    #[arg(long, env = "GITHUB_WORKSPACE", hide = true)]
    pub workspace: Option<OsString>,

    /// Step output file
    #[arg(long, env = "GITHUB_OUTPUT", hide = true)]
    pub github_output: Option<OsString>,

    /// Extractor program
    #[arg(long, env = "TREEMAPPER_BIN", default_value = DEFAULT_TOOL, hide = true)]
    pub tool: String,

    /// Step debug logging switch
    #[arg(long, env = "RUNNER_DEBUG", hide = true)]
    pub runner_debug: Option<String>,
}

impl From<ActionArgs> for ActionConfig {
    fn from(args: ActionArgs) -> Self {
        let inputs = Inputs {
            diff_range: args.diff_range.filter(|r| !r.is_empty()),
            path: args.path,
            budget: args.budget,
            output_format: OutputFormat::parse(&args.output_format),
            alpha: args.alpha,
            tau: args.tau,
            full: config::parse_flag(&args.full),
            no_content: config::parse_flag(&args.no_content),
        };

        let env = ActionEnv {
            event_name: args.event_name,
            event_path: non_empty_path(args.event_path),
            workspace: workspace_path(args.workspace),
            github_output: non_empty_path(args.github_output),
            tool: args.tool,
        };

        ActionConfig { inputs, env }
    }
}

// Runner variables may be exported but empty; treat those as unset.
fn non_empty_path(value: Option<OsString>) -> Option<PathBuf> {
    value.filter(|v| !v.is_empty()).map(PathBuf::from)
}

/// Absolute workspace path. The extractor runs inside the repository while
/// this process reads its output, so both must agree on one base.
fn workspace_path(value: Option<OsString>) -> PathBuf {
    let workspace = non_empty_path(value).unwrap_or_else(|| PathBuf::from(DEFAULT_WORKSPACE));
    path::absolute(&workspace).unwrap_or(workspace)
}
