/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use crate::application::config::Credentials;
use serde::{Deserialize, Serialize};

/// Body of the signing API login request: `{"content": {"api_key", "api_secret"}}`
#[derive(Debug, Clone, Serialize)]
pub struct AuthRequest<'a> {
    /// Credential pair
    pub content: AuthRequestContent<'a>,
}

/// Credential pair as sent to either login endpoint
#[derive(Debug, Clone, Serialize)]
pub struct AuthRequestContent<'a> {
    /// API key
    pub api_key: &'a str,
    /// API secret
    pub api_secret: &'a str,
}

impl<'a> From<&'a Credentials> for AuthRequestContent<'a> {
    fn from(credentials: &'a Credentials) -> Self {
        Self {
            api_key: &credentials.api_key,
            api_secret: &credentials.api_secret,
        }
    }
}

impl<'a> From<&'a Credentials> for AuthRequest<'a> {
    fn from(credentials: &'a Credentials) -> Self {
        Self {
            content: credentials.into(),
        }
    }
}

/// Body of the management API login request, flat with no envelope
pub type ManagementAuthRequest<'a> = AuthRequestContent<'a>;

/// Response of the signing API login endpoint
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthResponse {
    /// Response content
    pub content: AuthResponseContent,
}

/// Content of [`AuthResponse`]
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthResponseContent {
    /// Issued access token
    pub access_token: AccessToken,
}

/// Bearer token issued by the signing API
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AccessToken {
    /// Token to send as `Authorization: Bearer <token>`
    pub bearer: String,
    /// Unix timestamp (seconds) when the token expires
    #[serde(default)]
    pub expires_at: Option<i64>,
}

/// Response of the management API login endpoint
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ManagementAuthResponse {
    /// Bearer token
    pub access_token: String,
    /// Claims embedded in the access token
    pub access_token_claims: AccessTokenClaims,
    /// Seconds until the access token expires
    #[serde(default)]
    pub access_token_expires_in: Option<i64>,
    /// Unix timestamp when the access token expires
    #[serde(default)]
    pub access_token_expires_at: Option<i64>,
    /// Refresh token
    #[serde(default)]
    pub refresh_token: Option<String>,
    /// Seconds until the refresh token expires
    #[serde(default)]
    pub refresh_token_expires_in: Option<i64>,
    /// Unix timestamp when the refresh token expires
    #[serde(default)]
    pub refresh_token_expires_at: Option<i64>,
}

/// Claims of a management access token
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AccessTokenClaims {
    /// Environment the token is valid for (`TEST` or `LIVE`)
    #[serde(default)]
    pub env: Option<String>,
    /// Organization the credentials belong to
    pub organization_id: String,
}
