use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A citizen-reported issue. Field names on disk follow the portal's
/// original blob layout (`desc`, `loc`, `createdAt`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    pub id: i64,
    pub title: String,
    #[serde(rename = "desc")]
    pub description: String,
    #[serde(rename = "loc", default)]
    pub location: String,
    pub status: IssueStatus,
    #[serde(rename = "createdAt", with = "iso_millis")]
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum IssueStatus {
    #[default]
    Open,
    #[serde(rename = "In Progress")]
    InProgress,
    Resolved,
}

impl IssueStatus {
    pub const ALL: [IssueStatus; 3] = [
        IssueStatus::Open,
        IssueStatus::InProgress,
        IssueStatus::Resolved,
    ];

    pub fn label(self) -> &'static str {
        match self {
            IssueStatus::Open => "Open",
            IssueStatus::InProgress => "In Progress",
            IssueStatus::Resolved => "Resolved",
        }
    }
}

impl fmt::Display for IssueStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for IssueStatus {
    type Err = String;

    /// Accepts the display label or a CLI-friendly slug
    /// (`open`, `in-progress`, `in_progress`, `resolved`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "open" => Ok(IssueStatus::Open),
            "in progress" | "in-progress" | "in_progress" | "inprogress" => {
                Ok(IssueStatus::InProgress)
            }
            "resolved" => Ok(IssueStatus::Resolved),
            _ => Err(format!(
                "Invalid status '{}'. Must be one of: open, in-progress, resolved",
                s
            )),
        }
    }
}

/// Current time truncated to the millisecond, the precision ids and
/// timestamps are stored with.
pub(crate) fn now_millis() -> DateTime<Utc> {
    let now = Utc::now();
    DateTime::from_timestamp_millis(now.timestamp_millis()).unwrap_or(now)
}

/// `createdAt` as written by JS `Date.toISOString()`: always three
/// fractional digits and a `Z` suffix.
mod iso_millis {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(dt: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&dt.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
        DateTime::<Utc>::deserialize(deserializer)
    }
}

/// Evidence that someone completed the mock login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub email: String,
    pub token: String,
    #[serde(rename = "loggedAt", with = "chrono::serde::ts_milliseconds")]
    pub logged_at: DateTime<Utc>,
}
