//! Transports that feed list controllers.
//!
//! A [`PageTransport`] turns a [`ListQuery`] into one page of rows. The list
//! controller only depends on this trait, so dashboards can run against the
//! REST backend ([`rest::RestTransport`]) while tests substitute in-memory or
//! scripted transports.
//!
//! ## Response shape
//!
//! Backend resources disagree on naming: some answer `{"data": [...], "total": n}`,
//! others `{"results": [...], "count": n}`. [`Page`] accepts both.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use playdesk::api::{resources::{Barcode, Resource}, rest::RestTransport};
//! use playdesk::libs::{config::ApiConfig, list::ListController, params::Params, session::SessionContext};
//!
//! # async fn run(api: ApiConfig, session: SessionContext) -> anyhow::Result<()> {
//! let transport = RestTransport::<Barcode>::new(&api, session, Resource::Barcodes);
//! let barcodes = ListController::<Barcode, _>::new(transport, Params::new());
//! barcodes.refresh(None).await;
//! # Ok(())
//! # }
//! ```

use crate::libs::cancel::CancelToken;
use crate::libs::error::Result;
use crate::libs::params::ListQuery;
use serde::{Deserialize, Serialize};

pub mod resources;
pub mod rest;

/// One page of rows plus the backend's total for the whole filtered set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    #[serde(rename = "data", alias = "results", default = "Vec::new")]
    pub rows: Vec<T>,
    #[serde(rename = "total", alias = "count", default)]
    pub total_count: u64,
}

impl<T> Page<T> {
    pub fn new(rows: Vec<T>, total_count: u64) -> Self {
        Self { rows, total_count }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new(), 0)
    }
}

/// Fetches pages of `T` for a list controller.
#[allow(async_fn_in_trait)]
pub trait PageTransport<T> {
    /// Fetches the page described by `query`.
    ///
    /// Implementations should stop early and return
    /// [`PlaydeskError::Cancelled`](crate::libs::error::PlaydeskError::Cancelled)
    /// once `cancel` fires; the controller discards the result of a cancelled
    /// request either way.
    async fn fetch_page(&self, query: &ListQuery, cancel: &CancelToken) -> Result<Page<T>>;

    /// Resource name used in log events.
    fn resource(&self) -> &str {
        "list"
    }
}
