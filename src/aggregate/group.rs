use std::collections::{BTreeMap, HashSet};

use serde_json::Value;

use super::path::{AttributePath, Resolution, resolve};
use crate::datadog::types::RumEvent;

/// Group key used when the grouping dimension does not resolve.
/// A real attribute value of `"unknown"` lands in the same bucket.
pub const UNKNOWN_GROUP: &str = "unknown";

const SESSION_ID_PATH: &[&str] = &["session", "id"];

/// Count distinct sessions per value of `group_by`.
///
/// Every group that at least one event resolved to is present in the result,
/// including groups whose events carried no session id (count 0).
pub fn count_sessions_by(events: &[RumEvent], group_by: &AttributePath) -> BTreeMap<String, usize> {
    let mut sessions: BTreeMap<String, HashSet<String>> = BTreeMap::new();

    for event in events {
        let Some(root) = event.attribute_root() else {
            continue;
        };

        let key = match resolve(root, group_by.segments()) {
            Resolution::Found(value) => group_key(value),
            Resolution::Missing => UNKNOWN_GROUP.to_string(),
        };

        let members = sessions.entry(key).or_default();
        if let Some(session_id) = session_id(root) {
            members.insert(session_id);
        }
    }

    sessions
        .into_iter()
        .map(|(key, members)| (key, members.len()))
        .collect()
}

fn group_key(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn session_id(root: &Value) -> Option<String> {
    match resolve(root, SESSION_ID_PATH).value()? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
