//! Writer for the `$GITHUB_OUTPUT` file

use crate::summary::Summary;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;
use treemapper_action_core::{ActionError, ActionResult};

/// Heredoc delimiter for the multi-line `context` output
pub const CONTEXT_DELIMITER: &str = "EOF_CONTEXT_DELIMITER";

/// Buffered set of step outputs, appended to the output file in one go
#[derive(Debug, Default)]
pub struct GithubOutput {
    buffer: String,
}

impl GithubOutput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: &str, value: &str) -> &mut Self {
        self.buffer.push_str(&format!("{}={}\n", key, value));
        self
    }

    /// Add a multi-line value. The value always ends with a newline before
    /// the closing delimiter.
    pub fn set_multiline(&mut self, key: &str, delimiter: &str, value: &str) -> &mut Self {
        self.buffer.push_str(&format!("{}<<{}\n", key, delimiter));
        self.buffer.push_str(value);
        if !value.ends_with('\n') {
            self.buffer.push('\n');
        }
        self.buffer.push_str(delimiter);
        self.buffer.push('\n');
        self
    }

    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    /// Append all entries to `path`, creating the file if needed
    pub fn append_to(&self, path: &Path) -> ActionResult<()> {
        append(path, self.as_str()).map_err(|source| ActionError::WriteOutput {
            path: path.to_path_buf(),
            source,
        })
    }
}

fn append(path: &Path, content: &str) -> io::Result<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    file.write_all(content.as_bytes())?;
    file.flush()
}

/// Outputs published by the action
pub fn context_outputs(context_file: &str, summary: &Summary, context: &str) -> GithubOutput {
    let mut output = GithubOutput::new();
    output
        .set("context-file", context_file)
        .set("fragment-count", &summary.fragment_count.to_string())
        .set("token-count", &summary.token_count.to_string())
        .set("size", &summary.size)
        .set_multiline("context", CONTEXT_DELIMITER, context);
    output
}

/// Write the action outputs when the runner provides an output file
pub fn emit(
    target: Option<&Path>,
    context_file: &str,
    summary: &Summary,
    context: &str,
) -> ActionResult<bool> {
    let Some(path) = target else {
        tracing::debug!("GITHUB_OUTPUT not set, skipping step outputs");
        return Ok(false);
    };

    context_outputs(context_file, summary, context).append_to(path)?;
    tracing::debug!("Wrote step outputs to {}", path.display());
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn summary() -> Summary {
        Summary {
            fragment_count: 2,
            token_count: 1234,
            size: "4.8 KB".to_string(),
        }
    }

    #[test]
    fn test_context_outputs_layout() {
        let output = context_outputs("treemapper-context.yaml", &summary(), "fragments: []\n");
        assert_eq!(
            output.as_str(),
            "context-file=treemapper-context.yaml\n\
             fragment-count=2\n\
             token-count=1234\n\
             size=4.8 KB\n\
             context<<EOF_CONTEXT_DELIMITER\n\
             fragments: []\n\
             EOF_CONTEXT_DELIMITER\n"
        );
    }

    #[test]
    fn test_multiline_value_gets_trailing_newline() {
        let mut output = GithubOutput::new();
        output.set_multiline("context", "EOF", "no newline");
        assert_eq!(output.as_str(), "context<<EOF\nno newline\nEOF\n");
    }

    #[test]
    fn test_empty_multiline_value() {
        let mut output = GithubOutput::new();
        output.set_multiline("context", "EOF", "");
        assert_eq!(output.as_str(), "context<<EOF\n\nEOF\n");
    }

    #[test]
    fn test_emit_appends_to_existing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("github_output");
        fs::write(&path, "previous=1\n").unwrap();

        let written = emit(Some(path.as_path()), "treemapper-context.json", &summary(), "{}").unwrap();
        assert!(written);

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("previous=1\ncontext-file=treemapper-context.json\n"));
        assert!(content.ends_with("context<<EOF_CONTEXT_DELIMITER\n{}\nEOF_CONTEXT_DELIMITER\n"));
    }

    #[test]
    fn test_emit_creates_missing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out");

        emit(Some(path.as_path()), "treemapper-context.yaml", &summary(), "x\n").unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_emit_without_target() {
        let written = emit(None, "treemapper-context.yaml", &summary(), "x").unwrap();
        assert!(!written);
    }

    #[test]
    fn test_emit_into_missing_directory_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join("out");

        let err = emit(Some(path.as_path()), "f", &summary(), "x").unwrap_err();
        assert!(matches!(err, ActionError::WriteOutput { .. }));
    }
}
