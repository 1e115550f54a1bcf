/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! Authenticated request façade
//!
//! Every call to either fiskaly API goes through [`HttpClient`]. It composes
//! the URL, attaches the bearer token of the selected API (except on the
//! login endpoint), sends the request with the configured timeout and turns
//! the outcome into either an [`ApiResponse`] or an [`AppError`].

use crate::application::auth::{Session, SharedSession};
use crate::application::config::Config;
use crate::constants::{AUTH_PATH, USER_AGENT};
use crate::error::{AppError, ErrorBody};
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Method, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, error, warn};

/// Flat list of query string parameters
pub type Query = [(String, String)];

/// Which fiskaly service a request targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Api {
    /// Signing/invoicing API (`base_url`)
    Sign,
    /// Management/dashboard API (`management_base_url`)
    Management,
}

/// Successful response body
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResponse {
    /// Parsed body of a JSON response
    Json(Value),
    /// Raw body of any other content type (ZIP, PDF, XML)
    Bytes(Vec<u8>),
}

impl ApiResponse {
    /// Returns the JSON value, if the response was JSON
    #[must_use]
    pub fn as_json(&self) -> Option<&Value> {
        match self {
            ApiResponse::Json(value) => Some(value),
            ApiResponse::Bytes(_) => None,
        }
    }

    /// Returns the raw bytes, if the response was not JSON
    #[must_use]
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            ApiResponse::Json(_) => None,
            ApiResponse::Bytes(bytes) => Some(bytes),
        }
    }

    /// Deserializes a JSON response into `T`
    ///
    /// An empty non-JSON body is treated as `null` so that endpoints answering
    /// `204 No Content` can be read as `serde_json::Value` or `Option<T>`.
    pub fn into_json<T: DeserializeOwned>(self) -> Result<T, AppError> {
        let value = match self {
            ApiResponse::Json(value) => value,
            ApiResponse::Bytes(bytes) if bytes.is_empty() => Value::Null,
            ApiResponse::Bytes(bytes) => {
                return Err(AppError::Deserialization(format!(
                    "expected a JSON response, received {} bytes of another content type",
                    bytes.len()
                )));
            }
        };
        serde_json::from_value(value).map_err(|e| AppError::Deserialization(e.to_string()))
    }
}

/// Returns true when `path` denotes the authentication endpoint
#[must_use]
pub fn is_auth_path(path: &str) -> bool {
    let path = path.split('?').next().unwrap_or_default();
    path.trim_end_matches('/') == AUTH_PATH || path == AUTH_PATH.trim_start_matches('/')
}

/// Encodes a caller supplied id as exactly one URL path segment
///
/// Everything outside the unreserved set is percent-encoded, so `/`, `?`, `#`
/// and `%` cannot change the target endpoint. Empty, `.` and `..` ids are
/// rejected because URL parsing would collapse them into the parent path.
pub fn path_segment(id: &str) -> Result<String, AppError> {
    match id {
        "" | "." | ".." => Err(AppError::InvalidInput(format!(
            "'{id}' is not a valid resource id"
        ))),
        _ => Ok(urlencoding::encode(id).into_owned()),
    }
}

/// Whether a `Content-Type` value denotes a JSON body
///
/// Matches `application/json` and any `+json` suffix type, ignoring case and
/// parameters such as `charset`.
#[must_use]
pub fn is_json_content_type(content_type: &str) -> bool {
    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    essence == "application/json" || essence.ends_with("+json")
}

/// Joins a base URL and a relative endpoint path
#[must_use]
pub fn join_url(base_url: &str, path: &str) -> String {
    let base = base_url.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    format!("{base}/{path}")
}

/// HTTP client shared by the auth flows and every resource service
pub struct HttpClient {
    config: Arc<Config>,
    session: SharedSession,
    http_client: Client,
}

impl HttpClient {
    /// Creates a new façade with an empty session
    ///
    /// # Arguments
    /// * `config` - Configuration containing credentials and API settings
    ///
    /// # Returns
    /// * `Ok(HttpClient)` - Client ready to log in
    /// * `Err(AppError)` - If the underlying HTTP client cannot be built
    pub fn new(config: Config) -> Result<Self, AppError> {
        let session = Session::new(config.credentials.clone(), config.organization_id.clone());

        let http_client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(config.timeout())
            .danger_accept_invalid_certs(!config.rest_api.verify_tls)
            .build()
            .map_err(|e| AppError::InvalidInput(format!("failed to build HTTP client: {e}")))?;

        if !config.rest_api.verify_tls {
            warn!("TLS certificate verification is disabled");
        }

        Ok(Self {
            config: Arc::new(config),
            session: Arc::new(RwLock::new(session)),
            http_client,
        })
    }

    /// Gets the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Gets the shared session
    pub fn session(&self) -> &SharedSession {
        &self.session
    }

    /// Base URL of the given API
    pub fn base_url(&self, api: Api) -> &str {
        match api {
            Api::Sign => &self.config.rest_api.base_url,
            Api::Management => &self.config.rest_api.management_base_url,
        }
    }

    /// Sends a request and returns the parsed JSON or the raw body
    ///
    /// # Arguments
    /// * `api` - Target service
    /// * `method` - HTTP method
    /// * `path` - Endpoint path relative to the service root
    /// * `body` - Optional payload, serialized as JSON
    /// * `query` - Optional query string parameters
    ///
    /// # Returns
    /// * `Ok(ApiResponse::Json)` - When the response content type is JSON
    /// * `Ok(ApiResponse::Bytes)` - For any other content type
    /// * `Err(AppError)` - Missing token, transport failure or non-2xx status
    pub async fn request<B: Serialize + ?Sized>(
        &self,
        api: Api,
        method: Method,
        path: &str,
        body: Option<&B>,
        query: Option<&Query>,
    ) -> Result<ApiResponse, AppError> {
        let response = self.send(api, method, path, body, query).await?;

        let is_json = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(is_json_content_type);

        let bytes = response.bytes().await?;
        if !is_json {
            debug!("Received {} bytes of non-JSON content", bytes.len());
            return Ok(ApiResponse::Bytes(bytes.to_vec()));
        }
        if bytes.is_empty() {
            return Ok(ApiResponse::Json(Value::Null));
        }
        Ok(ApiResponse::Json(serde_json::from_slice(&bytes)?))
    }

    /// Sends a GET request and returns the body exactly as received
    ///
    /// Used for file downloads; no content-type inspection or parsing happens.
    pub async fn download(
        &self,
        api: Api,
        path: &str,
        query: Option<&Query>,
    ) -> Result<Vec<u8>, AppError> {
        let response = self
            .send::<()>(api, Method::GET, path, None, query)
            .await?;
        let bytes = response.bytes().await?;
        debug!("Downloaded {} bytes from {}", bytes.len(), path);
        Ok(bytes.to_vec())
    }

    /// Makes a GET request and deserializes the JSON response
    pub async fn get<T: DeserializeOwned>(
        &self,
        api: Api,
        path: &str,
        query: Option<&Query>,
    ) -> Result<T, AppError> {
        self.request::<()>(api, Method::GET, path, None, query)
            .await?
            .into_json()
    }

    /// Makes a PUT request and deserializes the JSON response
    pub async fn put<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        api: Api,
        path: &str,
        body: &B,
    ) -> Result<T, AppError> {
        self.request(api, Method::PUT, path, Some(body), None)
            .await?
            .into_json()
    }

    /// Makes a PATCH request and deserializes the JSON response
    pub async fn patch<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        api: Api,
        path: &str,
        body: &B,
    ) -> Result<T, AppError> {
        self.request(api, Method::PATCH, path, Some(body), None)
            .await?
            .into_json()
    }

    /// Makes a POST request and deserializes the JSON response
    pub async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        api: Api,
        path: &str,
        body: &B,
    ) -> Result<T, AppError> {
        self.request(api, Method::POST, path, Some(body), None)
            .await?
            .into_json()
    }

    /// Makes a DELETE request and deserializes the JSON response
    pub async fn delete<T: DeserializeOwned>(&self, api: Api, path: &str) -> Result<T, AppError> {
        self.request::<()>(api, Method::DELETE, path, None, None)
            .await?
            .into_json()
    }

    /// Builds headers, attaches the bearer token and sends the request
    async fn send<B: Serialize + ?Sized>(
        &self,
        api: Api,
        method: Method,
        path: &str,
        body: Option<&B>,
        query: Option<&Query>,
    ) -> Result<Response, AppError> {
        let url = join_url(self.base_url(api), path);

        let auth_header_value;
        let mut headers = vec![
            ("Content-Type", "application/json"),
            ("Accept", "application/json"),
        ];

        if !is_auth_path(path) {
            auth_header_value = self.bearer_header(api).await?;
            headers.push(("Authorization", auth_header_value.as_str()));
        }

        make_http_request(&self.http_client, method, &url, headers, body, query).await
    }

    /// Formats the `Authorization` value for the given API
    async fn bearer_header(&self, api: Api) -> Result<String, AppError> {
        let session = self.session.read().await;
        let token = session.token(api).ok_or_else(|| {
            error!("No bearer token for {:?} API, refusing to send request", api);
            AppError::auth(match api {
                Api::Sign => "bearer token not present, call login() first",
                Api::Management => "management bearer token not present, call login_management() first",
            })
        })?;

        if token.is_expired(0) {
            warn!(
                "Bearer token for {:?} API appears expired, the request will likely be rejected",
                api
            );
        }

        Ok(format!("Bearer {}", token.bearer))
    }
}

/// Sends a single HTTP request and classifies the outcome
///
/// Transport failures become [`AppError::Connection`], non-2xx statuses become
/// [`AppError::Api`] carrying the status and the parsed (or raw) error body.
/// Nothing is retried.
///
/// # Arguments
///
/// * `client` - The HTTP client to use for the request
/// * `method` - HTTP method
/// * `url` - Full URL to request
/// * `headers` - Vector of (header_name, header_value) tuples
/// * `body` - Optional request body (serialized to JSON)
/// * `query` - Optional query string parameters
pub async fn make_http_request<B: Serialize + ?Sized>(
    client: &Client,
    method: Method,
    url: &str,
    headers: Vec<(&str, &str)>,
    body: Option<&B>,
    query: Option<&Query>,
) -> Result<Response, AppError> {
    debug!("{} {}", method, url);

    let mut request = client.request(method, url);

    for (name, value) in &headers {
        request = request.header(*name, *value);
    }

    if let Some(params) = query.filter(|q| !q.is_empty()) {
        request = request.query(params);
    }

    if let Some(b) = body {
        request = request.json(b);
    }

    let response = request.send().await.map_err(|e| {
        error!("Request to {} failed: {}", url, e);
        AppError::Connection(e)
    })?;

    let status = response.status();
    debug!("Response status: {}", status);

    if status.is_success() {
        return Ok(response);
    }

    let raw = match response.text().await {
        Ok(raw) => raw,
        Err(e) => {
            warn!("Failed to read error body of {} response: {}", status, e);
            String::new()
        }
    };
    error!("Request failed with status {}: {}", status, raw);
    Err(AppError::Api {
        status,
        body: ErrorBody::parse(&raw),
    })
}
