//! treemapper command construction and execution

use std::path::PathBuf;
use std::process::{Command, Stdio};
use treemapper_action_core::{ActionConfig, ActionError, ActionResult};

/// A fully resolved treemapper command
#[derive(Debug, Clone)]
pub struct ToolInvocation {
    pub program: String,
    pub current_dir: PathBuf,
    pub args: Vec<String>,
}

/// Captured result of a finished child process
#[derive(Debug, Clone)]
pub struct ToolOutput {
    /// `None` when the child was terminated by a signal
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl ToolOutput {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }

    /// Exit code to report for a failed run
    pub fn failure_code(&self) -> i32 {
        self.code.unwrap_or(1)
    }
}

impl ToolInvocation {
    pub fn new(config: &ActionConfig, diff_range: &str) -> Self {
        let inputs = &config.inputs;
        let mut args = vec![
            ".".to_string(),
            "--diff".to_string(),
            diff_range.to_string(),
            "--budget".to_string(),
            inputs.budget.clone(),
            "--alpha".to_string(),
            inputs.alpha.clone(),
            "--tau".to_string(),
            inputs.tau.clone(),
            "-f".to_string(),
            inputs.output_format.to_string(),
            "-o".to_string(),
            config.output_file().to_string_lossy().to_string(),
        ];

        if inputs.full {
            args.push("--full".to_string());
        }
        if inputs.no_content {
            args.push("--no-content".to_string());
        }

        Self {
            program: config.env.tool.clone(),
            current_dir: config.repo_path(),
            args,
        }
    }

    /// Space-joined command line, for display
    pub fn command_line(&self) -> String {
        let mut line = self.program.clone();
        for arg in &self.args {
            line.push(' ');
            line.push_str(arg);
        }
        line
    }

    /// Run to completion, capturing stdout and stderr as text
    pub fn run(&self) -> ActionResult<ToolOutput> {
        tracing::debug!(
            program = %self.program,
            cwd = %self.current_dir.display(),
            "Spawning extractor"
        );

        let output = Command::new(&self.program)
            .args(&self.args)
            .current_dir(&self.current_dir)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .map_err(|source| ActionError::Spawn {
                program: self.program.clone(),
                cwd: self.current_dir.clone(),
                source,
            })?;

        Ok(ToolOutput {
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }
}
