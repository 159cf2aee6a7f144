use anyhow::Result;

use smartcity::issues::IssueStore;
use smartcity::models::{Issue, IssueStatus};

pub fn run(issues: &IssueStore<'_>, status: Option<IssueStatus>) -> Result<()> {
    let issues = filter_issues(issues.list_all()?, status);

    if issues.is_empty() {
        println!("No issues reported.");
        return Ok(());
    }

    for issue in &issues {
        println!("{}", format_issue(issue));
    }

    Ok(())
}

/// Keeps store order (newest first). `None` keeps everything.
fn filter_issues(issues: Vec<Issue>, status: Option<IssueStatus>) -> Vec<Issue> {
    issues
        .into_iter()
        .filter(|i| status.map_or(true, |s| i.status == s))
        .collect()
}

fn format_issue(issue: &Issue) -> String {
    let status_display = format!("[{}]", issue.status);
    let mut out = format!(
        "#{:<14} {:13} {:<40} {}",
        issue.id,
        status_display,
        truncate(&issue.title, 40),
        issue.created_at.format("%Y-%m-%d %H:%M")
    );
    if !issue.location.is_empty() {
        out.push_str(&format!("\n    @ {}", issue.location));
    }
    for line in issue.description.lines() {
        out.push_str(&format!("\n    {}", line));
    }
    out
}

fn truncate(s: &str, max_chars: usize) -> String {
    let char_count = s.chars().count();
    if char_count <= max_chars {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max_chars - 3).collect();
        format!("{}...", truncated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use smartcity::blob::MemoryBlobStore;

    #[test]
    fn test_list_empty() {
        let blobs = MemoryBlobStore::new();
        let issues = IssueStore::new(&blobs);
        assert!(run(&issues, None).is_ok());
    }

    #[test]
    fn test_list_with_filter() {
        let blobs = MemoryBlobStore::new();
        let issues = IssueStore::new(&blobs);
        let a = issues.create("A", "a", "").unwrap();
        let b = issues.create("B", "b", "").unwrap();
        issues.update_status(a.id, IssueStatus::Resolved).unwrap();
        let all = issues.list_all().unwrap();

        let resolved = filter_issues(all.clone(), Some(IssueStatus::Resolved));
        assert_eq!(resolved.len(), 1);
        assert_eq!(resolved[0].id, a.id);
        assert_eq!(resolved[0].status, IssueStatus::Resolved);

        assert!(filter_issues(all.clone(), Some(IssueStatus::InProgress)).is_empty());

        let ids: Vec<i64> = filter_issues(all, None).iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![b.id, a.id]);

        assert!(run(&issues, Some(IssueStatus::Resolved)).is_ok());
    }

    #[test]
    fn test_filter_keeps_newest_first() {
        let blobs = MemoryBlobStore::new();
        let issues = IssueStore::new(&blobs);
        let a = issues.create("A", "a", "").unwrap();
        issues.create("B", "b", "").unwrap();
        let c = issues.create("C", "c", "").unwrap();

        let open = filter_issues(issues.list_all().unwrap(), Some(IssueStatus::Open));
        let ids: Vec<i64> = open.iter().map(|i| i.id).collect();
        assert_eq!(ids.len(), 3);
        assert_eq!(ids.first(), Some(&c.id));
        assert_eq!(ids.last(), Some(&a.id));
    }

    #[test]
    fn test_format_issue_shows_location_and_description() {
        let blobs = MemoryBlobStore::new();
        let issues = IssueStore::new(&blobs);
        let issue = issues
            .create("Flooded underpass", "Water up to\nthe knees", "Ward 7")
            .unwrap();

        let out = format_issue(&issue);
        assert!(out.contains("[Open]"));
        assert!(out.contains("@ Ward 7"));
        assert!(out.contains("    the knees"));
    }

    #[test]
    fn test_format_issue_without_location() {
        let blobs = MemoryBlobStore::new();
        let issues = IssueStore::new(&blobs);
        let issue = issues.create("A", "a", "").unwrap();
        assert!(!format_issue(&issue).contains('@'));
    }

    #[test]
    fn test_truncate_short() {
        assert_eq!(truncate("short", 10), "short");
    }

    #[test]
    fn test_truncate_long() {
        assert_eq!(truncate("this is a long title", 10), "this is...");
    }

    #[test]
    fn test_truncate_multibyte() {
        let s = "日本語のタイトルがとても長い";
        let t = truncate(s, 8);
        assert_eq!(t.chars().count(), 8);
        assert!(t.ends_with("..."));
    }

    proptest! {
        #[test]
        fn prop_truncate_never_exceeds(s in "\\PC{0,100}", max in 4usize..60) {
            prop_assert!(truncate(&s, max).chars().count() <= max);
        }
    }
}
