//! REST transport for list controllers.
//!
//! Issues `GET {api_url}/{resource}` with the sanitized filters plus
//! `page`/`skip`/`limit`, authenticated with the session's bearer token.
//! Non-2xx answers become [`PlaydeskError::Transport`]; the request is dropped
//! as soon as the cancel token fires.

use super::resources::Resource;
use super::{Page, PageTransport};
use crate::libs::cancel::CancelToken;
use crate::libs::config::ApiConfig;
use crate::libs::error::{PlaydeskError, Result};
use crate::libs::params::ListQuery;
use crate::libs::session::SessionContext;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::marker::PhantomData;
use tracing::debug;

/// Longest response body quoted back in a transport error.
const MAX_ERROR_BODY: usize = 200;

#[derive(Debug)]
pub struct RestTransport<T> {
    client: Client,
    api_url: String,
    session: SessionContext,
    resource: Resource,
    _rows: PhantomData<fn() -> T>,
}

impl<T> RestTransport<T> {
    pub fn new(config: &ApiConfig, session: SessionContext, resource: Resource) -> Self {
        Self {
            client: Client::new(),
            api_url: config.api_url.trim_end_matches('/').to_string(),
            session,
            resource,
            _rows: PhantomData,
        }
    }

    pub fn url(&self) -> String {
        format!("{}/{}", self.api_url, self.resource.path())
    }

    pub fn session(&self) -> &SessionContext {
        &self.session
    }
}

impl<T: DeserializeOwned> PageTransport<T> for RestTransport<T> {
    async fn fetch_page(&self, query: &ListQuery, cancel: &CancelToken) -> Result<Page<T>> {
        let url = self.url();
        let mut request = self.client.get(&url).query(&query.to_pairs());
        if let Some(token) = self.session.token() {
            request = request.bearer_auth(token);
        }

        debug!(url = %url, page = query.page, "GET");
        let response = cancel.guard(request.send()).await??;

        let status = response.status();
        if !status.is_success() {
            let body = cancel.guard(response.text()).await?.unwrap_or_default();
            let body: String = body.chars().take(MAX_ERROR_BODY).collect();
            return Err(PlaydeskError::Transport(format!("{} answered {}: {}", url, status, body)));
        }

        Ok(cancel.guard(response.json::<Page<T>>()).await??)
    }

    fn resource(&self) -> &str {
        self.resource.name()
    }
}
