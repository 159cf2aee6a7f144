use anyhow::Result;

use smartcity::issues::IssueStore;
use smartcity::models::IssueStatus;

/// Admin status change. The store ignores unknown ids, so only the message
/// differs when nothing matched.
pub fn run(issues: &IssueStore<'_>, id: i64, status: IssueStatus) -> Result<()> {
    let updated = issues.update_status(id, status)?;

    if updated.iter().any(|i| i.id == id) {
        println!("Issue #{} is now {}", id, status);
    } else {
        println!("No issue #{}; nothing changed.", id);
    }
    Ok(())
}
