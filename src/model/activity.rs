use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

/// Severity/sentiment tag on an activity feed entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
    Good,
    Warn,
    Bad,
}

impl ActivityKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ActivityKind::Good => "good",
            ActivityKind::Warn => "warn",
            ActivityKind::Bad => "bad",
        }
    }
}

impl fmt::Display for ActivityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActivityEvent {
    pub id: String,
    pub ts: DateTime<Utc>,
    pub title: String,
    pub detail: String,
    pub kind: ActivityKind,
}
