use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use smartcity::db::Database;

use crate::config::DB_FILE_NAME;

pub fn run(data_dir: &Path) -> Result<()> {
    let db_path = data_dir.join(DB_FILE_NAME);

    if db_path.exists() {
        println!("Already initialized at {}", data_dir.display());
        return Ok(());
    }

    fs::create_dir_all(data_dir).context("Failed to create data directory")?;
    Database::open(&db_path)?;
    println!("Created {}", data_dir.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use smartcity::blob::BlobStore;
    use tempfile::tempdir;

    #[test]
    fn test_init_creates_database() {
        let dir = tempdir().unwrap();
        let data_dir = dir.path().join(".smartcity");

        run(&data_dir).unwrap();
        assert!(data_dir.join(DB_FILE_NAME).exists());
    }

    #[test]
    fn test_init_twice_keeps_data() {
        let dir = tempdir().unwrap();
        let data_dir = dir.path().join(".smartcity");
        run(&data_dir).unwrap();

        let db = Database::open(&data_dir.join(DB_FILE_NAME)).unwrap();
        db.write("k", "v").unwrap();
        drop(db);

        run(&data_dir).unwrap();
        let db = Database::open(&data_dir.join(DB_FILE_NAME)).unwrap();
        assert_eq!(db.read("k").unwrap().as_deref(), Some("v"));
    }
}
