//! Configuration command.
//!
//! Stores the backend URL, token, default branch and page size in
//! `config.json`. Options that are not given keep their saved value.

use crate::{
    libs::{
        config::{ApiConfig, Config},
        messages::Message,
    },
    msg_print, msg_success,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ConfigArgs {
    /// Base URL of the REST backend
    #[arg(long)]
    api_url: Option<String>,

    /// Bearer token for the backend
    #[arg(long)]
    token: Option<String>,

    /// Branch preselected in every list
    #[arg(long)]
    branch_id: Option<i64>,

    /// Default rows per page
    #[arg(long)]
    page_size: Option<u32>,

    /// Print the effective configuration instead of saving
    #[arg(long)]
    show: bool,
}

pub fn cmd(args: ConfigArgs) -> Result<()> {
    if args.show {
        let config = Config::load()?;
        msg_print!(Message::ConfigShow(serde_json::to_string_pretty(&config)?));
        return Ok(());
    }

    let mut config = Config::read()?;
    config.api = merge_api(config.api.take(), &args);
    if let Some(page_size) = args.page_size {
        config.list.page_size = page_size;
    }
    config.save()?;

    msg_success!(Message::ConfigSaved);
    Ok(())
}

fn merge_api(current: Option<ApiConfig>, args: &ConfigArgs) -> Option<ApiConfig> {
    let mut api = match (current, &args.api_url) {
        (Some(api), _) => api,
        (None, Some(api_url)) => ApiConfig {
            api_url: api_url.clone(),
            auth_token: None,
            branch_id: None,
        },
        (None, None) => return None,
    };

    if let Some(api_url) = &args.api_url {
        api.api_url = api_url.clone();
    }
    if let Some(token) = &args.token {
        api.auth_token = Some(token.clone());
    }
    if let Some(branch_id) = args.branch_id {
        api.branch_id = Some(branch_id);
    }
    Some(api)
}
