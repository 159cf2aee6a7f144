use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{self, Write};

use smartcity::issues::IssueStore;
use smartcity::models::{Issue, IssueStatus};

#[derive(Serialize, Deserialize)]
pub struct ExportData {
    pub version: i32,
    pub exported_at: String,
    pub issues: Vec<Issue>,
}

pub fn run_json(issues: &IssueStore<'_>, output_path: Option<&str>) -> Result<()> {
    let data = ExportData {
        version: 1,
        exported_at: chrono::Utc::now().to_rfc3339(),
        issues: issues.list_all()?,
    };

    let json = serde_json::to_string_pretty(&data)?;
    write_output(&json, output_path, data.issues.len())
}

pub fn run_markdown(issues: &IssueStore<'_>, output_path: Option<&str>) -> Result<()> {
    let all = issues.list_all()?;
    let mut md = String::new();

    md.push_str("# SmartCity Issues Export\n\n");
    md.push_str(&format!(
        "Exported: {}\n\n",
        chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
    ));

    for status in IssueStatus::ALL {
        let group: Vec<_> = all.iter().filter(|i| i.status == status).collect();
        if group.is_empty() {
            continue;
        }
        md.push_str(&format!("## {}\n\n", status));
        for issue in group {
            write_issue_md(&mut md, issue);
        }
    }

    write_output(&md, output_path, all.len())
}

fn write_issue_md(md: &mut String, issue: &Issue) {
    let checkbox = if issue.status == IssueStatus::Resolved {
        "[x]"
    } else {
        "[ ]"
    };

    md.push_str(&format!("### {} #{}: {}\n\n", checkbox, issue.id, issue.title));
    md.push_str(&format!("- **Status:** {}\n", issue.status));
    if !issue.location.is_empty() {
        md.push_str(&format!("- **Location:** {}\n", issue.location));
    }
    md.push_str(&format!(
        "- **Reported:** {}\n",
        issue.created_at.format("%Y-%m-%d %H:%M")
    ));
    md.push_str(&format!("\n{}\n", issue.description));
    md.push_str("\n---\n\n");
}

fn write_output(content: &str, output_path: Option<&str>, count: usize) -> Result<()> {
    match output_path {
        Some(path) => {
            fs::write(path, content).context("Failed to write export file")?;
            eprintln!("Exported {} issues to {}", count, path);
        }
        None => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{}", content)?;
        }
    }
    Ok(())
}
