use anyhow::Result;

use smartcity::issues::IssueStore;

pub fn run(issues: &IssueStore<'_>, title: &str, description: &str, location: &str) -> Result<()> {
    let issue = issues.create(title, description, location)?;
    println!("Reported issue #{}", issue.id);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use smartcity::blob::MemoryBlobStore;
    use smartcity::models::IssueStatus;

    #[test]
    fn test_report_issue() {
        let blobs = MemoryBlobStore::new();
        let issues = IssueStore::new(&blobs);

        run(&issues, "Broken street light", "Dark since Monday", "Elm St 4").unwrap();

        let all = issues.list_all().unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].title, "Broken street light");
        assert_eq!(all[0].location, "Elm St 4");
        assert_eq!(all[0].status, IssueStatus::Open);
    }

    #[test]
    fn test_report_without_location() {
        let blobs = MemoryBlobStore::new();
        let issues = IssueStore::new(&blobs);
        run(&issues, "Graffiti", "On the bridge", "").unwrap();
        assert_eq!(issues.list_all().unwrap()[0].location, "");
    }

    #[test]
    fn test_report_missing_fields() {
        let blobs = MemoryBlobStore::new();
        let issues = IssueStore::new(&blobs);

        let err = run(&issues, "", "desc", "").unwrap_err();
        assert!(err.to_string().contains("Invalid title"));
        let err = run(&issues, "title", "  ", "").unwrap_err();
        assert!(err.to_string().contains("Invalid description"));
        assert!(issues.list_all().unwrap().is_empty());
    }

    proptest! {
        #[test]
        fn prop_report_unicode(title in "[\\p{L}\\p{N}]{1,30}", desc in "[\\p{L}\\p{N} ]{0,60}[\\p{L}]") {
            let blobs = MemoryBlobStore::new();
            let issues = IssueStore::new(&blobs);
            run(&issues, &title, &desc, "").unwrap();
            let all = issues.list_all().unwrap();
            prop_assert_eq!(&all[0].title, &title);
            prop_assert_eq!(&all[0].description, &desc);
        }
    }
}
