//! Run configuration for the treemapper action
//!
//! Everything the action reads from its invocation and environment is
//! collected here once, so the rest of the pipeline never touches
//! process-global state:
//! - `Inputs` - the positional action inputs
//! - `ActionEnv` - GitHub runner environment values
//! - `ActionConfig` - both of the above

use std::fmt;
use std::path::PathBuf;

/// Workspace used when `GITHUB_WORKSPACE` is not set (the container default)
pub const DEFAULT_WORKSPACE: &str = "/github/workspace";

/// Program name of the external context extractor
pub const DEFAULT_TOOL: &str = "treemapper";

/// Basename of the file the tool writes, before the format extension
pub const CONTEXT_FILE_STEM: &str = "treemapper-context";

/// Output format of the extractor. Unknown formats are forwarded as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputFormat {
    Yaml,
    Yml,
    Json,
    Other(String),
}

impl OutputFormat {
    pub fn parse(value: &str) -> Self {
        match value {
            "yaml" => OutputFormat::Yaml,
            "yml" => OutputFormat::Yml,
            "json" => OutputFormat::Json,
            other => OutputFormat::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            OutputFormat::Yaml => "yaml",
            OutputFormat::Yml => "yml",
            OutputFormat::Json => "json",
            OutputFormat::Other(other) => other,
        }
    }

    pub fn is_yaml(&self) -> bool {
        matches!(self, OutputFormat::Yaml | OutputFormat::Yml)
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Positional inputs of the action
#[derive(Debug, Clone)]
pub struct Inputs {
    /// Explicit diff range; `None` means auto-detect from the event
    pub diff_range: Option<String>,

    /// Path to analyze, relative to the workspace
    pub path: String,

    /// Token budget, forwarded verbatim
    pub budget: String,

    pub output_format: OutputFormat,

    /// Tuning parameters, forwarded verbatim
    pub alpha: String,
    pub tau: String,

    pub full: bool,
    pub no_content: bool,
}

impl Default for Inputs {
    fn default() -> Self {
        Self {
            diff_range: None,
            path: default_path(),
            budget: default_budget(),
            output_format: OutputFormat::parse(&default_output_format()),
            alpha: default_alpha(),
            tau: default_tau(),
            full: false,
            no_content: false,
        }
    }
}

/// GitHub runner environment
#[derive(Debug, Clone)]
pub struct ActionEnv {
    /// `GITHUB_EVENT_NAME`
    pub event_name: String,

    /// `GITHUB_EVENT_PATH`
    pub event_path: Option<PathBuf>,

    /// `GITHUB_WORKSPACE`
    pub workspace: PathBuf,

    /// `GITHUB_OUTPUT`; outputs are skipped when absent
    pub github_output: Option<PathBuf>,

    /// Extractor program to run
    pub tool: String,
}

impl Default for ActionEnv {
    fn default() -> Self {
        Self {
            event_name: String::new(),
            event_path: None,
            workspace: PathBuf::from(DEFAULT_WORKSPACE),
            github_output: None,
            tool: DEFAULT_TOOL.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ActionConfig {
    pub inputs: Inputs,
    pub env: ActionEnv,
}

impl ActionConfig {
    /// Directory the extractor runs in
    pub fn repo_path(&self) -> PathBuf {
        if self.inputs.path == "." {
            self.env.workspace.clone()
        } else {
            self.env.workspace.join(&self.inputs.path)
        }
    }

    /// File name reported to later workflow steps
    pub fn context_file_name(&self) -> String {
        format!("{}.{}", CONTEXT_FILE_STEM, self.inputs.output_format)
    }

    /// Absolute location the extractor writes to
    pub fn output_file(&self) -> PathBuf {
        self.env.workspace.join(self.context_file_name())
    }
}

/// Interpret an action boolean input; only `true` (any case) enables it
pub fn parse_flag(value: &str) -> bool {
    value.eq_ignore_ascii_case("true")
}

pub fn default_path() -> String {
    ".".to_string()
}

pub fn default_budget() -> String {
    "50000".to_string()
}

pub fn default_output_format() -> String {
    "yaml".to_string()
}

pub fn default_alpha() -> String {
    "0.60".to_string()
}

pub fn default_tau() -> String {
    "0.08".to_string()
}
