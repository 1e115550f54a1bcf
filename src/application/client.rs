/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use crate::application::auth::{Auth, SharedSession};
use crate::application::config::Config;
use crate::application::services::{
    AgreementServiceImpl, ApiKeyServiceImpl, DeviceServiceImpl, ExportServiceImpl,
    InvoiceServiceImpl, OrganizationServiceImpl, SignerServiceImpl, SoftwareServiceImpl,
    TaxpayerServiceImpl,
};
use crate::error::AppError;
use crate::model::http::HttpClient;
use std::sync::Arc;
use tracing::debug;

/// Entry point of the library
///
/// Owns one [`HttpClient`] (and therefore one session) shared by the auth
/// flows and every resource service. Resource calls need a prior
/// [`Auth::login`] (or [`Auth::login_management`] for the management API).
pub struct Client {
    http_client: Arc<HttpClient>,
    auth: Auth,
    taxpayer: TaxpayerServiceImpl,
    agreement: AgreementServiceImpl,
    signers: SignerServiceImpl,
    clients: DeviceServiceImpl,
    invoices: InvoiceServiceImpl,
    exports: ExportServiceImpl,
    software: SoftwareServiceImpl,
    organizations: OrganizationServiceImpl,
    api_keys: ApiKeyServiceImpl,
}

impl Client {
    /// Creates a client with an empty session
    ///
    /// # Errors
    /// Returns [`AppError::InvalidInput`] if the HTTP client cannot be built.
    pub fn new(config: Config) -> Result<Self, AppError> {
        debug!(
            "Creating client for {} (management: {})",
            config.rest_api.base_url, config.rest_api.management_base_url
        );
        let http_client = Arc::new(HttpClient::new(config)?);

        Ok(Self {
            auth: Auth::new(http_client.clone()),
            taxpayer: TaxpayerServiceImpl::new(http_client.clone()),
            agreement: AgreementServiceImpl::new(http_client.clone()),
            signers: SignerServiceImpl::new(http_client.clone()),
            clients: DeviceServiceImpl::new(http_client.clone()),
            invoices: InvoiceServiceImpl::new(http_client.clone()),
            exports: ExportServiceImpl::new(http_client.clone()),
            software: SoftwareServiceImpl::new(http_client.clone()),
            organizations: OrganizationServiceImpl::new(http_client.clone()),
            api_keys: ApiKeyServiceImpl::new(http_client.clone()),
            http_client,
        })
    }

    /// Creates a client from the environment, see [`Config::new`]
    pub fn from_env() -> Result<Self, AppError> {
        Self::new(Config::new())
    }

    /// Login and logout flows
    pub fn auth(&self) -> &Auth {
        &self.auth
    }

    /// Taxpayer resource
    pub fn taxpayer(&self) -> &TaxpayerServiceImpl {
        &self.taxpayer
    }

    /// Taxpayer agreement resource
    pub fn agreement(&self) -> &AgreementServiceImpl {
        &self.agreement
    }

    /// Signer resource
    pub fn signers(&self) -> &SignerServiceImpl {
        &self.signers
    }

    /// Client device resource
    pub fn clients(&self) -> &DeviceServiceImpl {
        &self.clients
    }

    /// Invoice resource, including organization-wide search and XML download
    pub fn invoices(&self) -> &InvoiceServiceImpl {
        &self.invoices
    }

    /// Export resource
    pub fn exports(&self) -> &ExportServiceImpl {
        &self.exports
    }

    /// Registered software resource
    pub fn software(&self) -> &SoftwareServiceImpl {
        &self.software
    }

    /// Organizations on the management API
    pub fn organizations(&self) -> &OrganizationServiceImpl {
        &self.organizations
    }

    /// API keys on the management API
    pub fn api_keys(&self) -> &ApiKeyServiceImpl {
        &self.api_keys
    }

    /// Shared session state (tokens, organization id, credentials)
    pub fn session(&self) -> &SharedSession {
        self.http_client.session()
    }

    /// Configuration the client was built with
    pub fn config(&self) -> &Config {
        self.http_client.config()
    }

    /// Underlying request façade, for endpoints without a typed service
    pub fn http_client(&self) -> &Arc<HttpClient> {
        &self.http_client
    }
}
