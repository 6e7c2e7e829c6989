//! Diff range detection for the treemapper action
//!
//! Picks the revision range to analyze from the triggering GitHub event:
//! pull requests diff base against head, pushes diff before against after,
//! and anything else falls back to the last commit.

mod event;
mod range;

pub use event::{load_event, EventPayload, PullRequest, PullRequestRef};
pub use range::{
    detect_diff_range, resolve_diff_range, DiffRange, RangeSource, FALLBACK_RANGE, NULL_SHA,
};
