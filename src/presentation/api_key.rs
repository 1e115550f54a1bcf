/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use crate::application::config::Credentials;
use crate::model::responses::{Extra, null_as_default};
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Whether an API key can be used
#[derive(Debug, Clone, Copy, DisplaySimple, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ApiKeyStatus {
    /// Key is usable
    #[default]
    Enabled,
    /// Key is revoked
    Disabled,
}

/// API key creation payload for the management API
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct ManagedApiKey {
    /// Human readable name
    pub name: String,
    /// Initial status
    pub status: ApiKeyStatus,
    /// Organization that manages the key
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub managed_by_organization_id: Option<String>,
    /// Free-form annotations
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<HashMap<String, String>>,
}

impl ManagedApiKey {
    /// Enabled key with the given name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

/// API key as returned by the management API
///
/// `secret` is only present right after creation or rotation.
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
pub struct ApiKeyResponse {
    /// Key id
    #[serde(rename = "_id")]
    pub id: String,
    /// Server side type tag
    #[serde(rename = "_type", default)]
    pub kind: Option<String>,
    /// Environments the key is valid for
    #[serde(rename = "_envs", default, deserialize_with = "null_as_default")]
    pub envs: Vec<String>,
    /// Public part of the key
    pub key: String,
    /// Secret part, only returned once
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secret: Option<String>,
    /// Human readable name
    #[serde(default)]
    pub name: Option<String>,
    /// Status
    #[serde(default)]
    pub status: Option<ApiKeyStatus>,
    /// Unix timestamp of creation
    #[serde(default)]
    pub created_at: Option<i64>,
    /// Organization that manages the key
    #[serde(default)]
    pub managed_by_organization_id: Option<String>,
    /// User that created the key
    #[serde(default)]
    pub created_by_user: Option<String>,
    /// Free-form annotations
    #[serde(default, deserialize_with = "null_as_default")]
    pub metadata: HashMap<String, String>,
    /// Unknown fields
    #[serde(flatten)]
    pub extra: Extra,
}

impl ApiKeyResponse {
    /// Key and secret as a credential pair, when the secret was returned
    #[must_use]
    pub fn credentials(&self) -> Option<Credentials> {
        self.secret
            .as_ref()
            .filter(|secret| !secret.is_empty() && !self.key.is_empty())
            .map(|secret| Credentials::new(self.key.clone(), secret.clone()))
    }
}
