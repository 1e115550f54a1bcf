use crate::error::AppError;
use crate::model::requests::{Content, ListParams};
use crate::model::responses::DataList;
use crate::presentation::api_key::{ApiKeyResponse, ManagedApiKey};
use crate::presentation::organization::{Organization, OrganizationResponse};
use async_trait::async_trait;
use serde_json::Value;

/// Interface for organizations on the management API
///
/// Every call requires a prior management login.
#[async_trait]
pub trait OrganizationService: Send + Sync {
    /// Lists organizations
    async fn list(
        &self,
        params: Option<ListParams>,
    ) -> Result<DataList<OrganizationResponse>, AppError>;

    /// Creates an organization
    async fn create(&self, organization: &Organization) -> Result<OrganizationResponse, AppError>;

    /// Gets an organization
    async fn get(&self, organization_id: &str) -> Result<OrganizationResponse, AppError>;

    /// Partially updates an organization
    async fn update(
        &self,
        organization_id: &str,
        changes: Content,
    ) -> Result<OrganizationResponse, AppError>;

    /// Deletes an organization, returning whatever the server answered
    async fn delete(&self, organization_id: &str) -> Result<Value, AppError>;
}

/// Interface for API keys on the management API
///
/// `organization_id` falls back to the session's organization id (set by the
/// configuration or the management login) when `None`.
#[async_trait]
pub trait ApiKeyService: Send + Sync {
    /// Lists the API keys of an organization
    async fn list(
        &self,
        organization_id: Option<&str>,
        params: Option<ListParams>,
    ) -> Result<DataList<ApiKeyResponse>, AppError>;

    /// Creates an API key
    ///
    /// When the response carries both key and secret they become the
    /// credentials used by the next signing API login.
    async fn create(
        &self,
        organization_id: Option<&str>,
        api_key: &ManagedApiKey,
    ) -> Result<ApiKeyResponse, AppError>;

    /// Gets an API key
    async fn get(
        &self,
        organization_id: Option<&str>,
        api_key_id: &str,
    ) -> Result<ApiKeyResponse, AppError>;

    /// Partially updates (or rotates) an API key
    ///
    /// Same credential side effect as [`ApiKeyService::create`].
    async fn update(
        &self,
        organization_id: Option<&str>,
        api_key_id: &str,
        changes: Content,
    ) -> Result<ApiKeyResponse, AppError>;

    /// Deletes an API key
    async fn delete(
        &self,
        organization_id: Option<&str>,
        api_key_id: &str,
    ) -> Result<Value, AppError>;
}
