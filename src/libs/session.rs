//! Explicit session context handed to transports.
//!
//! The signed-in user's token and selected branch are passed around as a value
//! instead of being read from ambient storage. Authentication itself happens
//! elsewhere; this crate only carries the result.

use crate::libs::params::Params;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Filter key carrying the selected branch.
pub const BRANCH_PARAM: &str = "branch_id";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionContext {
    /// Bearer token for the REST backend.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    /// Branch the user is working in, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branch_id: Option<i64>,
}

impl SessionContext {
    pub fn new(token: Option<String>, branch_id: Option<i64>) -> Self {
        Self { token, branch_id }
    }

    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref().filter(|t| !t.is_empty())
    }

    /// Initial list filters implied by the session: the selected branch.
    pub fn default_params(&self) -> Params {
        let mut params = Params::new();
        if let Some(branch_id) = self.branch_id {
            params.set(BRANCH_PARAM, Value::from(branch_id));
        }
        params
    }
}
