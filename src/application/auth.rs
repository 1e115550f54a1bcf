/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! Authentication module for the fiskaly APIs
//!
//! This module provides:
//! - [`Session`], the single mutable holder of bearer tokens, organization id
//!   and the active signing API credentials
//! - [`Auth`], the standard and management login flows
//!
//! Tokens are never refreshed automatically. When a call fails because a token
//! expired, log in again.

use crate::application::config::Credentials;
use crate::constants::AUTH_PATH;
use crate::error::AppError;
use crate::model::auth::{AuthRequest, AuthResponse, ManagementAuthRequest, ManagementAuthResponse};
use crate::model::http::{Api, HttpClient, join_url};
use chrono::Utc;
use reqwest::Method;
use std::fmt;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, error, info};

/// Session shared between the façade, the auth flows and every service
pub type SharedSession = Arc<RwLock<Session>>;

/// Bearer token plus its server reported expiry
#[derive(Clone, PartialEq, Eq)]
pub struct BearerToken {
    /// Token value
    pub bearer: String,
    /// Unix timestamp (seconds) when the token expires, if the server said so
    pub expires_at: Option<i64>,
}

impl BearerToken {
    /// Creates a new token
    pub fn new(bearer: impl Into<String>, expires_at: Option<i64>) -> Self {
        Self {
            bearer: bearer.into(),
            expires_at,
        }
    }

    /// Checks if the token is expired or will expire within `margin_seconds`
    ///
    /// A token without a known expiry is never considered expired.
    #[must_use]
    pub fn is_expired(&self, margin_seconds: i64) -> bool {
        match self.expires_at {
            Some(expires_at) => Utc::now().timestamp() + margin_seconds >= expires_at,
            None => false,
        }
    }
}

impl fmt::Debug for BearerToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BearerToken")
            .field("bearer", &"***")
            .field("expires_at", &self.expires_at)
            .finish()
    }
}

/// Mutable session state
///
/// Holds at most one signing API token and at most one management API token.
/// The organization id starts from the configuration and is replaced by the
/// management login. The credential pair starts from the configuration and is
/// replaced when an API key is created or rotated.
#[derive(Debug, Clone)]
pub struct Session {
    bearer_token: Option<BearerToken>,
    management_bearer_token: Option<BearerToken>,
    organization_id: Option<String>,
    credentials: Credentials,
}

impl Session {
    /// Creates an unauthenticated session
    pub fn new(credentials: Credentials, organization_id: Option<String>) -> Self {
        Self {
            bearer_token: None,
            management_bearer_token: None,
            organization_id,
            credentials,
        }
    }

    /// Token used for the given API
    #[must_use]
    pub fn token(&self, api: Api) -> Option<&BearerToken> {
        match api {
            Api::Sign => self.bearer_token.as_ref(),
            Api::Management => self.management_bearer_token.as_ref(),
        }
    }

    /// Current signing API bearer token
    #[must_use]
    pub fn bearer_token(&self) -> Option<&str> {
        self.bearer_token.as_ref().map(|t| t.bearer.as_str())
    }

    /// Stores the signing API bearer token
    pub fn set_bearer_token(&mut self, token: BearerToken) {
        self.bearer_token = Some(token);
    }

    /// Current management API bearer token
    #[must_use]
    pub fn management_bearer_token(&self) -> Option<&str> {
        self.management_bearer_token
            .as_ref()
            .map(|t| t.bearer.as_str())
    }

    /// Stores the management API bearer token
    pub fn set_management_bearer_token(&mut self, token: BearerToken) {
        self.management_bearer_token = Some(token);
    }

    /// Organization the management calls act on
    #[must_use]
    pub fn organization_id(&self) -> Option<&str> {
        self.organization_id.as_deref()
    }

    /// Sets the organization id
    pub fn set_organization_id(&mut self, organization_id: impl Into<String>) {
        self.organization_id = Some(organization_id.into());
    }

    /// Active signing API credentials
    #[must_use]
    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Replaces the signing API credentials used by the next login
    pub fn set_credentials(&mut self, credentials: Credentials) {
        self.credentials = credentials;
    }

    /// Whether the token of the given API is missing or past its expiry
    #[must_use]
    pub fn is_token_expired(&self, api: Api) -> bool {
        self.token(api).is_none_or(|t| t.is_expired(0))
    }

    /// Drops both tokens
    pub fn clear_tokens(&mut self) {
        self.bearer_token = None;
        self.management_bearer_token = None;
    }
}

/// Login flows for both fiskaly APIs
pub struct Auth {
    http: Arc<HttpClient>,
}

impl Auth {
    /// Creates a new Auth instance over the shared façade
    pub fn new(http: Arc<HttpClient>) -> Self {
        Self { http }
    }

    /// Exchanges the signing API key/secret for a bearer token
    ///
    /// The token is stored in the session and attached to every following
    /// signing API request.
    ///
    /// # Returns
    /// * `Ok(String)` - The bearer token
    /// * `Err(AppError::Auth)` - If the request fails or the response has no bearer;
    ///   the previously stored token is left untouched
    pub async fn login(&self) -> Result<String, AppError> {
        let credentials = self.http.session().read().await.credentials().clone();

        debug!(
            "Sending login request to: {}",
            join_url(self.http.base_url(Api::Sign), AUTH_PATH)
        );

        let body = AuthRequest::from(&credentials);
        let response = self
            .http
            .request(Api::Sign, Method::POST, AUTH_PATH, Some(&body), None)
            .await
            .map_err(|e| {
                error!("Login failed: {}", e);
                AppError::auth_caused_by("login failed", e)
            })?;

        let auth: AuthResponse = response.into_json().map_err(|e| {
            error!("Malformed login response: {}", e);
            AppError::auth_caused_by("malformed login response", e)
        })?;

        let access_token = auth.content.access_token;
        if access_token.bearer.is_empty() {
            error!("Login response carried an empty bearer token");
            return Err(AppError::auth("login response carried an empty bearer token"));
        }

        let bearer = access_token.bearer.clone();
        self.http
            .session()
            .write()
            .await
            .set_bearer_token(BearerToken::new(access_token.bearer, access_token.expires_at));

        info!("✓ Login successful");
        Ok(bearer)
    }

    /// Exchanges the management API key/secret for a bearer token
    ///
    /// Stores the token in the management slot and the organization id found
    /// in the token claims in the session.
    ///
    /// # Returns
    /// * `Ok((token, organization_id))`
    /// * `Err(AppError::Auth)` - Missing management credentials, HTTP or
    ///   connection failure, or a malformed response
    pub async fn login_management(&self) -> Result<(String, String), AppError> {
        let credentials = self
            .http
            .config()
            .management_credentials
            .clone()
            .ok_or_else(|| {
                error!("Management login attempted without management credentials");
                AppError::auth("management API credentials are not configured")
            })?;

        debug!(
            "Sending management login request to: {}",
            join_url(self.http.base_url(Api::Management), AUTH_PATH)
        );

        let body = ManagementAuthRequest::from(&credentials);
        let response = self
            .http
            .request(Api::Management, Method::POST, AUTH_PATH, Some(&body), None)
            .await
            .map_err(|e| {
                error!("Management login failed: {}", e);
                AppError::auth_caused_by("management login failed", e)
            })?;

        let auth: ManagementAuthResponse = response.into_json().map_err(|e| {
            error!("Malformed management login response: {}", e);
            AppError::auth_caused_by("malformed management login response", e)
        })?;

        if auth.access_token.is_empty() {
            error!("Management login response carried an empty access token");
            return Err(AppError::auth(
                "management login response carried an empty access token",
            ));
        }

        let organization_id = auth.access_token_claims.organization_id;
        let token = auth.access_token;
        {
            let mut session = self.http.session().write().await;
            session.set_management_bearer_token(BearerToken::new(
                token.clone(),
                auth.access_token_expires_at,
            ));
            session.set_organization_id(organization_id.clone());
        }

        info!("✓ Management login successful, organization: {}", organization_id);
        Ok((token, organization_id))
    }

    /// Clears both tokens from the session
    pub async fn logout(&self) {
        info!("Logging out");
        self.http.session().write().await.clear_tokens();
    }
}
