/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! # fiskaly client prelude
//!
//! Brings the commonly used types and the service traits into scope, so
//! resource methods such as `client.clients().create(..)` resolve.
//!
//! ## Usage
//!
//! ```rust
//! use fiskaly_client::prelude::*;
//!
//! let config = Config::with_credentials("key", "secret");
//! let client = Client::new(config).unwrap();
//! assert!(client.config().credentials.api_key == "key");
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Configuration for the fiskaly APIs
pub use crate::application::config::{Config, Credentials, RestApiConfig};

/// Top-level client
pub use crate::application::client::Client;

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Main error type for the library
pub use crate::error::{AppError, ErrorBody};

// ============================================================================
// AUTHENTICATION AND SESSION MANAGEMENT
// ============================================================================

/// Auth flows and session state
pub use crate::application::auth::{Auth, BearerToken, Session, SharedSession};

// ============================================================================
// CORE SERVICES (TRAITS)
// ============================================================================

/// Taxpayer and agreement service traits
pub use crate::application::interfaces::taxpayer::{AgreementService, TaxpayerService};

/// Signer service trait
pub use crate::application::interfaces::signer::SignerService;

/// Client device service trait
pub use crate::application::interfaces::device::DeviceService;

/// Invoice service trait
pub use crate::application::interfaces::invoice::InvoiceService;

/// Export and software service traits
pub use crate::application::interfaces::export::{ExportService, SoftwareService};

/// Management API service traits
pub use crate::application::interfaces::management::{ApiKeyService, OrganizationService};

// ============================================================================
// SERVICE IMPLEMENTATIONS
// ============================================================================

/// Service implementations
pub use crate::application::services::{
    AgreementServiceImpl, ApiKeyServiceImpl, DeviceServiceImpl, ExportServiceImpl,
    InvoiceServiceImpl, OrganizationServiceImpl, SignerServiceImpl, SoftwareServiceImpl,
    TaxpayerServiceImpl,
};

// ============================================================================
// TRANSPORT AND HTTP CLIENT
// ============================================================================

/// Request façade
pub use crate::model::http::{Api, ApiResponse, HttpClient};

// ============================================================================
// REQUEST AND RESPONSE MODELS
// ============================================================================

/// Request helpers
pub use crate::model::requests::{Content, EnvelopeRequest, ListParams, ResourceState};

/// Response containers
pub use crate::model::responses::{ContentList, DataList, Envelope, Metadata, Page, Pagination};

/// Resource models
pub use crate::presentation::*;

// ============================================================================
// UTILITIES
// ============================================================================

/// Logging utilities
pub use crate::utils::logger::setup_logger;

/// Id generation
pub use crate::utils::id::generate_id;

// ============================================================================
// RE-EXPORTS FROM EXTERNAL CRATES
// ============================================================================

/// Re-export commonly used external types
pub use async_trait::async_trait;
pub use reqwest::Method;
pub use serde::{Deserialize, Serialize};
pub use serde_json::{Value, json};
pub use std::sync::Arc;
pub use tokio;
pub use tracing::{debug, error, info, warn};
