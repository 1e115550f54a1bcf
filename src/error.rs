/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use reqwest::StatusCode;
use serde_json::Value;
use std::fmt;

/// Body of a non-success response from the remote service
#[derive(Debug, Clone, PartialEq)]
pub enum ErrorBody {
    /// Body parsed as JSON
    Json(Value),
    /// Body that was not valid JSON
    Text(String),
}

impl ErrorBody {
    /// Parses a raw response body, keeping it as text when it is not JSON
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match serde_json::from_str::<Value>(raw) {
            Ok(value) => ErrorBody::Json(value),
            Err(_) => ErrorBody::Text(raw.to_string()),
        }
    }

    /// Returns the JSON body, if the server sent one
    #[must_use]
    pub fn as_json(&self) -> Option<&Value> {
        match self {
            ErrorBody::Json(value) => Some(value),
            ErrorBody::Text(_) => None,
        }
    }
}

impl fmt::Display for ErrorBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorBody::Json(value) => write!(f, "{value}"),
            ErrorBody::Text(text) => write!(f, "{text}"),
        }
    }
}

/// Main error type for the library
#[derive(Debug)]
pub enum AppError {
    /// The request never produced a response (DNS, refused connection, timeout)
    Connection(reqwest::Error),
    /// The remote service answered with a non-success status
    Api {
        /// HTTP status code
        status: StatusCode,
        /// Parsed or raw error body
        body: ErrorBody,
    },
    /// Login failed, or an authenticated call was attempted without a token
    Auth {
        /// Human readable description
        message: String,
        /// Underlying failure, when there is one
        source: Option<Box<AppError>>,
    },
    /// JSON encoding or decoding failure
    Json(serde_json::Error),
    /// Response did not have the expected shape
    Deserialization(String),
    /// Caller supplied or configured an unusable value
    InvalidInput(String),
}

impl AppError {
    /// Builds an auth error without an underlying cause
    pub fn auth(message: impl Into<String>) -> Self {
        AppError::Auth {
            message: message.into(),
            source: None,
        }
    }

    /// Builds an auth error wrapping the failure that caused it
    pub fn auth_caused_by(message: impl Into<String>, cause: AppError) -> Self {
        AppError::Auth {
            message: message.into(),
            source: Some(Box::new(cause)),
        }
    }

    /// HTTP status of an API error
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            AppError::Api { status, .. } => Some(*status),
            AppError::Auth {
                source: Some(cause),
                ..
            } => cause.status(),
            _ => None,
        }
    }

    /// Whether this is an authentication failure
    #[must_use]
    pub fn is_auth(&self) -> bool {
        matches!(self, AppError::Auth { .. })
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Connection(e) => write!(f, "connection error: {e}"),
            AppError::Api { status, body } => write!(f, "api error [{}]: {body}", status.as_u16()),
            AppError::Auth {
                message,
                source: Some(cause),
            } => write!(f, "auth error: {message}: {cause}"),
            AppError::Auth {
                message,
                source: None,
            } => write!(f, "auth error: {message}"),
            AppError::Json(e) => write!(f, "json error: {e}"),
            AppError::Deserialization(msg) => write!(f, "deserialization error: {msg}"),
            AppError::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Connection(e) => Some(e),
            AppError::Json(e) => Some(e),
            AppError::Auth {
                source: Some(cause),
                ..
            } => Some(cause.as_ref()),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(error: reqwest::Error) -> Self {
        AppError::Connection(error)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        AppError::Json(error)
    }
}
