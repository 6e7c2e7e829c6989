//! GitHub workflow commands (`::notice::`, `::warning::`, `::error::`)
//!
//! These are part of the action's user-facing output and always go to
//! stdout, independent of the tracing log level.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Notice,
    Warning,
    Error,
}

impl Level {
    pub fn as_str(&self) -> &str {
        match self {
            Level::Notice => "notice",
            Level::Warning => "warning",
            Level::Error => "error",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Render a workflow command line for `message`
pub fn format_annotation(level: Level, message: &str) -> String {
    format!("::{}::{}", level, escape_data(message))
}

/// Escape command data so multi-line messages stay on one command line
pub fn escape_data(message: &str) -> String {
    message
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

pub fn notice(message: &str) {
    println!("{}", format_annotation(Level::Notice, message));
}

pub fn warning(message: &str) {
    println!("{}", format_annotation(Level::Warning, message));
}

pub fn error(message: &str) {
    println!("{}", format_annotation(Level::Error, message));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_annotation() {
        assert_eq!(
            format_annotation(Level::Notice, "Using fallback diff: HEAD~1..HEAD"),
            "::notice::Using fallback diff: HEAD~1..HEAD"
        );
        assert_eq!(
            format_annotation(Level::Error, "TreeMapper failed with exit code 2"),
            "::error::TreeMapper failed with exit code 2"
        );
    }

    #[test]
    fn test_multiline_message_is_escaped() {
        assert_eq!(
            format_annotation(Level::Warning, "fatal: bad config\r\nline 2"),
            "::warning::fatal: bad config%0D%0Aline 2"
        );
    }

    #[test]
    fn test_percent_is_escaped_first() {
        assert_eq!(escape_data("100%\n"), "100%25%0A");
    }
}
