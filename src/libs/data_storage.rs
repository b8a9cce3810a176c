//! Location of playdesk's files in the platform data directory.

use crate::libs::config::CONFIG_FILE_NAME;
use anyhow::Result;
use std::env::{consts::OS, var};
use std::fs;
use std::path::{Path, PathBuf};

pub const VENDOR_NAME: &str = "playdesk";
pub const APP_NAME: &str = "playdesk";

#[derive(Debug, Clone)]
pub struct DataStorage {
    base_path: PathBuf,
}

impl DataStorage {
    pub fn new() -> Self {
        Self {
            base_path: platform_data_dir().join(VENDOR_NAME).join(APP_NAME),
        }
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Path of `file_name` inside the data directory, creating the directory
    /// on first use.
    pub fn get_path(&self, file_name: &str) -> Result<PathBuf> {
        fs::create_dir_all(&self.base_path)?;
        Ok(self.base_path.join(file_name))
    }

    /// Where [`Config`](crate::libs::config::Config) is read from and saved to.
    pub fn config_path(&self) -> Result<PathBuf> {
        self.get_path(CONFIG_FILE_NAME)
    }
}

impl Default for DataStorage {
    fn default() -> Self {
        Self::new()
    }
}

fn platform_data_dir() -> PathBuf {
    let home = || PathBuf::from(var("HOME").unwrap_or_else(|_| ".".into()));
    match OS {
        "windows" => PathBuf::from(var("LOCALAPPDATA").unwrap_or_else(|_| ".".into())),
        "macos" => home().join("Library").join("Application Support"),
        _ => home().join(".local").join("share"),
    }
}
