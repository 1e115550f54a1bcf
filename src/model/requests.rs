/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use crate::model::responses::Metadata;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Free-form request content for resources whose fields are defined by the server
pub type Content = Map<String, Value>;

/// Request body in the `{"content": ..., "metadata": ...}` convention
///
/// Absent parts are omitted from the serialized body.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct EnvelopeRequest<C> {
    /// Resource specific payload
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<C>,
    /// Free-form annotations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

impl<C> EnvelopeRequest<C> {
    /// Content plus metadata; missing metadata is sent as `{}`
    pub fn new(content: C, metadata: Option<Metadata>) -> Self {
        Self {
            content: Some(content),
            metadata: Some(metadata.unwrap_or_default()),
        }
    }

    /// Content only, no metadata key at all
    pub fn content_only(content: C) -> Self {
        Self {
            content: Some(content),
            metadata: None,
        }
    }
}

impl EnvelopeRequest<Content> {
    /// Metadata only; missing metadata is sent as `{}`
    pub fn metadata_only(metadata: Option<Metadata>) -> Self {
        Self {
            content: None,
            metadata: Some(metadata.unwrap_or_default()),
        }
    }
}

/// Lifecycle state of a resource, as used in state transition requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResourceState {
    /// Resource is active
    Enabled,
    /// Resource was switched off
    Disabled,
    /// Invoice was cancelled
    Cancelled,
}

/// Content of a PATCH request that only changes the state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StateChange {
    /// Target state
    pub state: ResourceState,
}

impl StateChange {
    /// `{"state": "DISABLED"}`
    #[must_use]
    pub fn disabled() -> Self {
        Self {
            state: ResourceState::Disabled,
        }
    }
}

/// Query parameters of list and search requests
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListParams {
    /// Maximum number of items per page
    pub limit: Option<u32>,
    /// Continuation token returned in the previous page's pagination block
    pub token: Option<String>,
    /// Additional resource specific filters
    pub filters: Vec<(String, String)>,
}

impl ListParams {
    /// Empty parameter set
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the page size
    #[must_use]
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Sets the continuation token
    #[must_use]
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Adds a filter
    #[must_use]
    pub fn with_filter(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.filters.push((key.into(), value.into()));
        self
    }

    /// Flattens the parameters into query string pairs
    #[must_use]
    pub fn to_query(&self) -> Vec<(String, String)> {
        let mut query = Vec::with_capacity(self.filters.len() + 2);
        if let Some(limit) = self.limit {
            query.push(("limit".to_string(), limit.to_string()));
        }
        if let Some(token) = &self.token {
            query.push(("token".to_string(), token.clone()));
        }
        query.extend(self.filters.iter().cloned());
        query
    }
}
