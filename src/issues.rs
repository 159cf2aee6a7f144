//! The issue record store.
//!
//! The whole collection is stored as one JSON array, newest first, and
//! every mutation rewrites the entire array. Two processes writing at once
//! get last-writer-wins over the whole collection; nothing here locks.

use tracing::{debug, info, warn};

use crate::blob::BlobStore;
use crate::error::{Error, Result};
use crate::models::{now_millis, Issue, IssueStatus};

pub const ISSUES_KEY: &str = "smartcity-issues";

pub struct IssueStore<'a> {
    blobs: &'a dyn BlobStore,
}

impl<'a> IssueStore<'a> {
    pub fn new(blobs: &'a dyn BlobStore) -> Self {
        IssueStore { blobs }
    }

    /// All issues, newest first. Missing or unparsable data reads as empty.
    pub fn list_all(&self) -> Result<Vec<Issue>> {
        let Some(raw) = self.blobs.read(ISSUES_KEY)? else {
            return Ok(Vec::new());
        };

        match serde_json::from_str::<Vec<Issue>>(&raw) {
            Ok(issues) => {
                debug!(count = issues.len(), "loaded issues");
                Ok(issues)
            }
            Err(e) => {
                warn!(error = %e, "ignoring malformed issue data");
                Ok(Vec::new())
            }
        }
    }

    pub fn find(&self, id: i64) -> Result<Option<Issue>> {
        Ok(self.list_all()?.into_iter().find(|i| i.id == id))
    }

    pub fn create(&self, title: &str, description: &str, location: &str) -> Result<Issue> {
        if title.trim().is_empty() {
            return Err(Error::validation("title", "must not be empty"));
        }
        if description.trim().is_empty() {
            return Err(Error::validation("description", "must not be empty"));
        }

        let mut issues = self.list_all()?;
        let now = now_millis();
        let newest = issues.iter().map(|i| i.id).max();

        let issue = Issue {
            id: next_id(now.timestamp_millis(), newest),
            title: title.to_string(),
            description: description.to_string(),
            location: location.to_string(),
            status: IssueStatus::Open,
            created_at: now,
        };

        issues.insert(0, issue.clone());
        self.persist(&issues)?;
        info!(id = issue.id, "created issue");
        Ok(issue)
    }

    /// Sets the status of the issue with `id` and returns the full
    /// collection. An unknown id changes nothing but is not an error.
    pub fn update_status(&self, id: i64, status: IssueStatus) -> Result<Vec<Issue>> {
        let mut issues = self.list_all()?;

        match issues.iter_mut().find(|i| i.id == id) {
            Some(issue) => {
                issue.status = status;
                info!(id, %status, "updated issue status");
            }
            None => debug!(id, "status update for unknown issue"),
        }

        self.persist(&issues)?;
        Ok(issues)
    }

    /// Empties the collection. Asking the user first is the caller's job.
    pub fn clear_all(&self) -> Result<()> {
        self.persist(&[])?;
        info!("cleared all issues");
        Ok(())
    }

    fn persist(&self, issues: &[Issue]) -> Result<()> {
        let json = serde_json::to_string(issues)?;
        self.blobs.write(ISSUES_KEY, &json)
    }
}

fn next_id(now_ms: i64, newest: Option<i64>) -> i64 {
    match newest {
        Some(newest) if newest >= now_ms => newest.saturating_add(1),
        _ => now_ms,
    }
}
