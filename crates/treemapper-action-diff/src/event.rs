//! GitHub event payload loading

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use std::fs;
use std::path::Path;

/// The subset of a webhook payload used for range detection.
///
/// Every field is optional and lenient: a field with an unexpected shape
/// reads as absent instead of failing the whole payload.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EventPayload {
    #[serde(default, deserialize_with = "lenient")]
    pub pull_request: Option<PullRequest>,

    /// Commit the ref pointed to before a push
    #[serde(default, deserialize_with = "lenient")]
    pub before: Option<String>,

    /// Commit the ref points to after a push
    #[serde(default, deserialize_with = "lenient")]
    pub after: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PullRequest {
    #[serde(default, deserialize_with = "lenient")]
    pub base: Option<PullRequestRef>,

    #[serde(default, deserialize_with = "lenient")]
    pub head: Option<PullRequestRef>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PullRequestRef {
    #[serde(default, deserialize_with = "lenient")]
    pub sha: Option<String>,
}

impl EventPayload {
    pub fn from_json(content: &str) -> serde_json::Result<Self> {
        serde_json::from_str(content)
    }

    /// Base and head SHAs of a pull request, when both are present
    pub fn pull_request_shas(&self) -> Option<(&str, &str)> {
        let pr = self.pull_request.as_ref()?;
        let base = non_empty(pr.base.as_ref()?.sha.as_deref())?;
        let head = non_empty(pr.head.as_ref()?.sha.as_deref())?;
        Some((base, head))
    }

    /// Before and after SHAs of a push, when both are present
    pub fn push_shas(&self) -> Option<(&str, &str)> {
        let before = non_empty(self.before.as_deref())?;
        let after = non_empty(self.after.as_deref())?;
        Some((before, after))
    }
}

/// Read the event payload at `path`.
///
/// A missing path, unreadable file or malformed document yields an empty
/// payload, which makes detection fall back to the default range.
pub fn load_event(path: Option<&Path>) -> EventPayload {
    let Some(path) = path else {
        tracing::debug!("No event payload path provided");
        return EventPayload::default();
    };

    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            tracing::debug!("Event payload {} not readable: {}", path.display(), e);
            return EventPayload::default();
        }
    };

    match EventPayload::from_json(&content) {
        Ok(payload) => payload,
        Err(e) => {
            tracing::warn!("Ignoring malformed event payload {}: {}", path.display(), e);
            EventPayload::default()
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}
