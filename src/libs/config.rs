//! Configuration for the dashboard core.
//!
//! Settings live in `config.json` in the platform data directory:
//!
//! - **Windows**: `%LOCALAPPDATA%\playdesk\playdesk\config.json`
//! - **macOS**: `~/Library/Application Support/playdesk/playdesk/config.json`
//! - **Linux**: `~/.local/share/playdesk/playdesk/config.json`
//!
//! A missing file is not an error; defaults apply. On top of the file,
//! [`Config::load`] reads a `.env` file and these environment variables:
//!
//! | Variable              | Overrides              |
//! |-----------------------|------------------------|
//! | `PLAYDESK_API_URL`    | `api.api_url`          |
//! | `PLAYDESK_TOKEN`      | `api.auth_token`       |
//! | `PLAYDESK_BRANCH_ID`  | `api.branch_id`        |
//! | `PLAYDESK_PAGE_SIZE`  | `list.page_size`       |
//!
//! ```rust,no_run
//! use playdesk::libs::config::Config;
//!
//! let config = Config::load()?;
//! let session = config.session();
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use crate::libs::list::DEFAULT_PAGE_SIZE;
use crate::libs::messages::Message;
use crate::libs::session::SessionContext;
use crate::msg_warning;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs::{self, File};

pub const CONFIG_FILE_NAME: &str = "config.json";

pub const ENV_API_URL: &str = "PLAYDESK_API_URL";
pub const ENV_TOKEN: &str = "PLAYDESK_TOKEN";
pub const ENV_BRANCH_ID: &str = "PLAYDESK_BRANCH_ID";
pub const ENV_PAGE_SIZE: &str = "PLAYDESK_PAGE_SIZE";

/// Connection settings for the REST backend.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ApiConfig {
    /// Base URL, without a trailing resource path.
    ///
    /// Example: `https://play.example.com/api`
    pub api_url: String,

    /// Bearer token issued by the backend's login flow.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth_token: Option<String>,

    /// Branch preselected in every list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub branch_id: Option<i64>,
}

/// List defaults.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ListConfig {
    pub page_size: u32,
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api: Option<ApiConfig>,

    #[serde(default)]
    pub list: ListConfig,
}

impl Config {
    /// Reads `config.json`, or the default configuration when there is none.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().config_path()?;

        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    /// Writes the configuration as pretty-printed JSON.
    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().config_path()?;

        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// File configuration with `.env` and environment overrides applied.
    pub fn load() -> Result<Config> {
        dotenv::dotenv().ok();
        let mut config = Self::read()?;
        config.apply_env();
        Ok(config)
    }

    /// Applies `PLAYDESK_*` environment overrides. Unparseable numbers are
    /// reported and ignored.
    pub fn apply_env(&mut self) {
        if let Ok(api_url) = env::var(ENV_API_URL) {
            match self.api.as_mut() {
                Some(api) => api.api_url = api_url,
                None => {
                    self.api = Some(ApiConfig {
                        api_url,
                        auth_token: None,
                        branch_id: None,
                    })
                }
            }
        }

        if let Some(api) = self.api.as_mut() {
            if let Ok(token) = env::var(ENV_TOKEN) {
                api.auth_token = Some(token);
            }
            if let Ok(branch_id) = env::var(ENV_BRANCH_ID) {
                match branch_id.trim().parse() {
                    Ok(id) => api.branch_id = Some(id),
                    Err(_) => msg_warning!(Message::ConfigEnvIgnored(ENV_BRANCH_ID.to_string(), branch_id)),
                }
            }
        }

        if let Ok(page_size) = env::var(ENV_PAGE_SIZE) {
            match page_size.trim().parse() {
                Ok(size) => self.list.page_size = size,
                Err(_) => msg_warning!(Message::ConfigEnvIgnored(ENV_PAGE_SIZE.to_string(), page_size)),
            }
        }
    }

    /// Session context built from the configured token and branch.
    pub fn session(&self) -> SessionContext {
        match &self.api {
            Some(api) => SessionContext::new(api.auth_token.clone(), api.branch_id),
            None => SessionContext::anonymous(),
        }
    }
}
