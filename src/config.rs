use anyhow::{bail, Result};
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DATA_DIR_NAME: &str = ".smartcity";
pub const DB_FILE_NAME: &str = "portal.db";

/// Where the portal keeps its data and how login behaves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub data_dir: PathBuf,
    pub login_delay: Duration,
}

impl Config {
    /// Uses `dir_override` when given (the `--dir` flag or `SMARTCITY_DIR`),
    /// otherwise the nearest `.smartcity` directory at or above `start`.
    pub fn resolve(dir_override: Option<&Path>, start: &Path, login_delay_ms: u64) -> Result<Self> {
        let data_dir = match dir_override {
            Some(dir) => dir.to_path_buf(),
            None => find_data_dir(start)?,
        };

        Ok(Config {
            data_dir,
            login_delay: Duration::from_millis(login_delay_ms),
        })
    }

    pub fn db_path(&self) -> PathBuf {
        self.data_dir.join(DB_FILE_NAME)
    }
}

pub fn find_data_dir(start: &Path) -> Result<PathBuf> {
    let mut current = start.to_path_buf();

    loop {
        let candidate = current.join(DATA_DIR_NAME);
        if candidate.is_dir() {
            return Ok(candidate);
        }

        if !current.pop() {
            bail!("Not a smartcity portal (or any parent). Run 'smartcity init' first.");
        }
    }
}
