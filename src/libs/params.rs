//! Filter parameters and the query they turn into.
//!
//! A [`Params`] map holds whatever filters a page has set (search text, branch,
//! date range, status...). Values are kept as `serde_json::Value` so callers can
//! set strings, numbers and booleans alike. Before anything leaves the process the
//! map is sanitized: `null` values and empty strings are dropped, so a cleared
//! filter is omitted instead of being sent as `branch_id=` or `branch_id=null`.
//!
//! ```rust
//! use playdesk::libs::params::Params;
//! use serde_json::json;
//!
//! let mut params = Params::new();
//! params.set("branch_id", json!(3));
//! params.set("search", json!(""));
//! assert_eq!(params.sanitized().len(), 1);
//! ```

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Filter parameters keyed by backend query name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Params(BTreeMap<String, Value>);

impl Params {
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Sets a single value. A `null` removes the key.
    pub fn set(&mut self, key: impl Into<String>, value: Value) {
        let key = key.into();
        if value.is_null() {
            self.0.remove(&key);
        } else {
            self.0.insert(key, value);
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.0.remove(key)
    }

    /// Merges `other` into `self`, later values winning. `null` in `other`
    /// removes the key.
    pub fn merge(&mut self, other: &Params) {
        for (key, value) in &other.0 {
            self.set(key.clone(), value.clone());
        }
    }

    /// Returns a merged copy without mutating `self`.
    pub fn merged(&self, other: &Params) -> Params {
        let mut merged = self.clone();
        merged.merge(other);
        merged
    }

    /// Drops `null` and empty-string values and renders the rest as query
    /// strings.
    pub fn sanitized(&self) -> BTreeMap<String, String> {
        self.0
            .iter()
            .filter_map(|(key, value)| to_query_value(value).map(|v| (key.clone(), v)))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        let mut params = Params::new();
        for (key, value) in iter {
            params.0.insert(key.into(), value);
        }
        params
    }
}

fn to_query_value(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        // Arrays go out comma-joined, with their own empties dropped.
        Value::Array(items) => {
            let joined: Vec<String> = items.iter().filter_map(to_query_value).collect();
            if joined.is_empty() {
                None
            } else {
                Some(joined.join(","))
            }
        }
        Value::Object(_) => Some(value.to_string()),
    }
}

/// Sanitized filters plus pagination, ready for a transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    pub filters: BTreeMap<String, String>,
    /// 1-based page index.
    pub page: u32,
    pub page_size: u32,
}

impl ListQuery {
    pub fn new(params: &Params, page: u32, page_size: u32) -> Self {
        Self {
            filters: params.sanitized(),
            page: page.max(1),
            page_size,
        }
    }

    /// Offset for backends using skip/limit pagination.
    pub fn skip(&self) -> u64 {
        u64::from(self.page.saturating_sub(1)) * u64::from(self.page_size)
    }

    pub fn limit(&self) -> u32 {
        self.page_size
    }

    /// Query pairs as sent over the wire: filters first, then pagination.
    /// `page` rides along for backends that paginate by page number.
    pub fn to_pairs(&self) -> Vec<(String, String)> {
        let mut pairs: Vec<(String, String)> = self.filters.iter().map(|(k, v)| (k.clone(), v.clone())).collect();
        pairs.push(("page".to_string(), self.page.to_string()));
        pairs.push(("skip".to_string(), self.skip().to_string()));
        pairs.push(("limit".to_string(), self.limit().to_string()));
        pairs
    }
}
