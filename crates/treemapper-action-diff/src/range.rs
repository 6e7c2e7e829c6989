//! Diff range selection

use crate::event::{load_event, EventPayload};
use std::fmt;
use std::path::Path;
use treemapper_action_core::annotation;

/// Range used when the event does not identify one
pub const FALLBACK_RANGE: &str = "HEAD~1..HEAD";

/// `before` SHA GitHub sends for the push that creates a ref
pub const NULL_SHA: &str = "0000000000000000000000000000000000000000";

const SHORT_SHA_LEN: usize = 7;

/// Where a diff range came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeSource {
    Explicit,
    PullRequest,
    Push,
    Fallback,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffRange {
    pub range: String,
    pub source: RangeSource,
}

impl DiffRange {
    fn between(from: &str, to: &str, source: RangeSource) -> Self {
        Self {
            range: format!("{}..{}", from, to),
            source,
        }
    }

    fn fallback() -> Self {
        Self {
            range: FALLBACK_RANGE.to_string(),
            source: RangeSource::Fallback,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.range
    }

    /// Human-readable note on how the range was chosen, with short SHAs
    pub fn describe(&self) -> String {
        match self.source {
            RangeSource::Explicit => format!("Using diff range: {}", self.range),
            RangeSource::PullRequest => format!("Auto-detected PR diff: {}", self.short()),
            RangeSource::Push => format!("Auto-detected push diff: {}", self.short()),
            RangeSource::Fallback => format!("Using fallback diff: {}", self.range),
        }
    }

    fn short(&self) -> String {
        match self.range.split_once("..") {
            Some((from, to)) => format!("{}..{}", short_sha(from), short_sha(to)),
            None => self.range.clone(),
        }
    }
}

impl fmt::Display for DiffRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.range)
    }
}

fn short_sha(sha: &str) -> &str {
    match sha.char_indices().nth(SHORT_SHA_LEN) {
        Some((idx, _)) => &sha[..idx],
        None => sha,
    }
}

/// Determine the range to diff for `event_name` and its payload
pub fn detect_diff_range(event_name: &str, payload: &EventPayload) -> DiffRange {
    if matches!(event_name, "pull_request" | "pull_request_target") {
        if let Some((base, head)) = payload.pull_request_shas() {
            return DiffRange::between(base, head, RangeSource::PullRequest);
        }
    }

    if event_name == "push" {
        if let Some((before, after)) = payload.push_shas() {
            if before != NULL_SHA {
                return DiffRange::between(before, after, RangeSource::Push);
            }
        }
    }

    DiffRange::fallback()
}

/// Use `explicit` when given, otherwise detect from the event on disk.
///
/// Auto-detection is announced with a notice annotation.
pub fn resolve_diff_range(
    explicit: Option<&str>,
    event_name: &str,
    event_path: Option<&Path>,
) -> DiffRange {
    if let Some(range) = explicit.filter(|r| !r.is_empty()) {
        let explicit = DiffRange {
            range: range.to_string(),
            source: RangeSource::Explicit,
        };
        tracing::debug!("{}", explicit.describe());
        return explicit;
    }

    let payload = load_event(event_path);
    let detected = detect_diff_range(event_name, &payload);
    tracing::debug!(event = event_name, source = ?detected.source, "Detected diff range");
    annotation::notice(&detected.describe());
    detected
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const BASE: &str = "1a2b3c4d5e6f7a8b9c0d1a2b3c4d5e6f7a8b9c0d";
    const HEAD: &str = "f0e9d8c7b6a5f4e3d2c1b0a9f8e7d6c5b4a3f2e1";

    fn payload(json: &str) -> EventPayload {
        EventPayload::from_json(json).unwrap()
    }

    fn pr_payload() -> EventPayload {
        payload(&format!(
            r#"{{"pull_request": {{"base": {{"sha": "{BASE}"}}, "head": {{"sha": "{HEAD}"}}}}}}"#
        ))
    }

    #[test]
    fn test_pull_request_range() {
        let range = detect_diff_range("pull_request", &pr_payload());
        assert_eq!(range.as_str(), format!("{BASE}..{HEAD}"));
        assert_eq!(range.source, RangeSource::PullRequest);
    }

    #[test]
    fn test_pull_request_target_range() {
        let range = detect_diff_range("pull_request_target", &pr_payload());
        assert_eq!(range.as_str(), format!("{BASE}..{HEAD}"));
    }

    #[test]
    fn test_push_range() {
        let event = payload(&format!(r#"{{"before": "{BASE}", "after": "{HEAD}"}}"#));
        let range = detect_diff_range("push", &event);
        assert_eq!(range.as_str(), format!("{BASE}..{HEAD}"));
        assert_eq!(range.source, RangeSource::Push);
    }

    #[test]
    fn test_push_creating_ref_falls_back() {
        let event = payload(&format!(r#"{{"before": "{NULL_SHA}", "after": "{HEAD}"}}"#));
        let range = detect_diff_range("push", &event);
        assert_eq!(range.as_str(), FALLBACK_RANGE);
        assert_eq!(range.source, RangeSource::Fallback);
    }

    #[test]
    fn test_null_sha_is_forty_zeros() {
        assert_eq!(NULL_SHA.len(), 40);
        assert!(NULL_SHA.chars().all(|c| c == '0'));
    }

    #[test]
    fn test_push_missing_after_falls_back() {
        let event = payload(&format!(r#"{{"before": "{BASE}"}}"#));
        assert_eq!(detect_diff_range("push", &event).as_str(), FALLBACK_RANGE);
    }

    #[test]
    fn test_pull_request_missing_base_falls_back() {
        let event = payload(&format!(r#"{{"pull_request": {{"head": {{"sha": "{HEAD}"}}}}}}"#));
        assert_eq!(
            detect_diff_range("pull_request", &event).as_str(),
            FALLBACK_RANGE
        );
    }

    #[test]
    fn test_unknown_event_falls_back() {
        let range = detect_diff_range("workflow_dispatch", &pr_payload());
        assert_eq!(range.as_str(), FALLBACK_RANGE);

        let range = detect_diff_range("", &EventPayload::default());
        assert_eq!(range.as_str(), FALLBACK_RANGE);
    }

    #[test]
    fn test_event_name_selects_rule() {
        // A push payload under a PR event name is not a PR range
        let event = payload(&format!(r#"{{"before": "{BASE}", "after": "{HEAD}"}}"#));
        assert_eq!(
            detect_diff_range("pull_request", &event).as_str(),
            FALLBACK_RANGE
        );
    }

    #[test]
    fn test_describe_uses_short_shas() {
        let range = detect_diff_range("pull_request", &pr_payload());
        assert_eq!(range.describe(), "Auto-detected PR diff: 1a2b3c4..f0e9d8c");

        let fallback = detect_diff_range("schedule", &EventPayload::default());
        assert_eq!(fallback.describe(), "Using fallback diff: HEAD~1..HEAD");
    }

    #[test]
    fn test_short_sha_keeps_short_values() {
        assert_eq!(short_sha("abc"), "abc");
        assert_eq!(short_sha("abcdefgh"), "abcdefg");
    }

    #[test]
    fn test_resolve_prefers_explicit_range() {
        let range = resolve_diff_range(Some("v1.0..v1.1"), "push", None);
        assert_eq!(range.as_str(), "v1.0..v1.1");
        assert_eq!(range.source, RangeSource::Explicit);
        assert_eq!(range.describe(), "Using diff range: v1.0..v1.1");
    }

    #[test]
    fn test_resolve_empty_explicit_range_detects() {
        let range = resolve_diff_range(Some(""), "push", None);
        assert_eq!(range.as_str(), FALLBACK_RANGE);
    }

    #[test]
    fn test_resolve_reads_event_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"before": "{BASE}", "after": "{HEAD}"}}"#).unwrap();

        let range = resolve_diff_range(None, "push", Some(file.path()));
        assert_eq!(range.as_str(), format!("{BASE}..{HEAD}"));
    }
}
