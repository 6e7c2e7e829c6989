use std::path::PathBuf;
use std::process::ExitCode;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ActionError {
    #[error("TreeMapper failed with exit code {code}")]
    ToolFailed { code: i32 },

    #[error("Failed to execute {program} in {}: {source}", .cwd.display())]
    Spawn {
        program: String,
        cwd: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read output file {}: {source}", .path.display())]
    ReadOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write GitHub output {}: {source}", .path.display())]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ActionError {
    /// Process exit code for this failure. A failing tool hands its own
    /// code through; everything else is a generic failure.
    pub fn exit_code(&self) -> ExitCode {
        match self {
            ActionError::ToolFailed { code } => ExitCode::from(clamp_code(*code)),
            _ => ExitCode::FAILURE,
        }
    }
}

// Exit codes outside 1..=255 cannot be reported faithfully; keep them non-zero.
fn clamp_code(code: i32) -> u8 {
    match u8::try_from(code) {
        Ok(0) | Err(_) => 1,
        Ok(code) => code,
    }
}

pub type ActionResult<T> = Result<T, ActionError>;
