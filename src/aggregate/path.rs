use std::fmt;

use serde_json::Value;

/// Dot-delimited attribute path, e.g. `view.load_time`.
/// Literal dots inside a key cannot be expressed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributePath {
    segments: Vec<String>,
}

impl AttributePath {
    pub fn parse(raw: &str) -> Self {
        if raw.is_empty() {
            return Self { segments: Vec::new() };
        }
        Self {
            segments: raw.split('.').map(str::to_string).collect(),
        }
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }
}

impl fmt::Display for AttributePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segments.join("."))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Resolution<'a> {
    Found(&'a Value),
    Missing,
}

impl<'a> Resolution<'a> {
    pub fn value(self) -> Option<&'a Value> {
        match self {
            Resolution::Found(v) => Some(v),
            Resolution::Missing => None,
        }
    }
}

/// Walk `path` from `root`. Missing keys and non-object intermediates yield
/// `Missing`; an empty path yields the root itself.
pub fn resolve<'a, S: AsRef<str>>(root: &'a Value, path: &[S]) -> Resolution<'a> {
    let mut current = root;
    for segment in path {
        match current {
            Value::Object(map) => match map.get(segment.as_ref()) {
                Some(next) => current = next,
                None => return Resolution::Missing,
            },
            _ => return Resolution::Missing,
        }
    }
    Resolution::Found(current)
}
