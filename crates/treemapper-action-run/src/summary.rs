//! Metrics extracted from treemapper's output file and diagnostics

use regex::Regex;
use std::sync::LazyLock;
use treemapper_action_core::OutputFormat;

/// A fragment entry in YAML output: an indented `- path:` list item
static YAML_FRAGMENT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^\s+- path:").expect("valid fragment regex"));

static TOKENS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([\d,]+)\s+tokens").expect("valid tokens regex"));

static SIZE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([\d.]+\s*[KMG]?B)").expect("valid size regex"));

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub fragment_count: usize,
    pub token_count: u64,
    /// Human-formatted size as printed by the tool, e.g. `12.3 KB`
    pub size: String,
}

impl Default for Summary {
    fn default() -> Self {
        Self {
            fragment_count: 0,
            token_count: 0,
            size: "0".to_string(),
        }
    }
}

/// Token count and size scraped from the tool's stderr
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostics {
    pub token_count: u64,
    pub size: String,
}

pub fn summarize(format: &OutputFormat, context: &str, stderr: &str) -> Summary {
    let diagnostics = scan_diagnostics(stderr);
    Summary {
        fragment_count: count_fragments(format, context),
        token_count: diagnostics.token_count,
        size: diagnostics.size,
    }
}

/// Number of fragments in the tool output; 0 when it cannot be determined
pub fn count_fragments(format: &OutputFormat, context: &str) -> usize {
    match format {
        format if format.is_yaml() => YAML_FRAGMENT_RE.find_iter(context).count(),
        OutputFormat::Json => count_json_fragments(context),
        _ => 0,
    }
}

fn count_json_fragments(context: &str) -> usize {
    let document: serde_json::Value = match serde_json::from_str(context) {
        Ok(document) => document,
        Err(e) => {
            tracing::debug!("Output is not valid JSON: {}", e);
            return 0;
        }
    };

    document
        .get("fragments")
        .and_then(|fragments| fragments.as_array())
        .map_or(0, Vec::len)
}

/// Scan free-form stderr for `<n> tokens` and a size such as `4.2 KB`.
///
/// This is the only place that knows the tool's diagnostic wording.
/// Missing matches yield `0` / `"0"`.
pub fn scan_diagnostics(stderr: &str) -> Diagnostics {
    let token_count = TOKENS_RE
        .captures(stderr)
        .and_then(|caps| caps[1].replace(',', "").parse().ok())
        .unwrap_or(0);

    let size = SIZE_RE
        .captures(stderr)
        .map(|caps| caps[1].to_string())
        .unwrap_or_else(|| "0".to_string());

    Diagnostics { token_count, size }
}
