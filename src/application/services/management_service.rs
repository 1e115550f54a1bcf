use crate::application::interfaces::management::{ApiKeyService, OrganizationService};
use crate::error::AppError;
use crate::model::http::{Api, HttpClient, path_segment};
use crate::model::requests::{Content, ListParams};
use crate::model::responses::DataList;
use crate::presentation::api_key::{ApiKeyResponse, ManagedApiKey};
use crate::presentation::organization::{Organization, OrganizationResponse};
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Implementation of the organization service
pub struct OrganizationServiceImpl {
    client: Arc<HttpClient>,
}

impl OrganizationServiceImpl {
    /// Creates a new instance of the organization service
    pub fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl OrganizationService for OrganizationServiceImpl {
    async fn list(
        &self,
        params: Option<ListParams>,
    ) -> Result<DataList<OrganizationResponse>, AppError> {
        let query = params.unwrap_or_default().to_query();
        debug!("Listing organizations with {:?}", query);

        let result: DataList<OrganizationResponse> = self
            .client
            .get(Api::Management, "/organizations", Some(&query))
            .await?;

        debug!("Organizations obtained: {}", result.data.len());
        Ok(result)
    }

    async fn create(&self, organization: &Organization) -> Result<OrganizationResponse, AppError> {
        info!("Creating organization {}", organization.name);
        let result: OrganizationResponse = self
            .client
            .post(Api::Management, "/organizations", organization)
            .await?;

        info!("Organization created: {}", result.id);
        Ok(result)
    }

    async fn get(&self, organization_id: &str) -> Result<OrganizationResponse, AppError> {
        debug!("Getting organization {}", organization_id);
        self.client
            .get(
                Api::Management,
                &organization_path(organization_id)?,
                None,
            )
            .await
    }

    async fn update(
        &self,
        organization_id: &str,
        changes: Content,
    ) -> Result<OrganizationResponse, AppError> {
        info!("Updating organization {}", organization_id);
        self.client
            .patch(
                Api::Management,
                &organization_path(organization_id)?,
                &changes,
            )
            .await
    }

    async fn delete(&self, organization_id: &str) -> Result<Value, AppError> {
        info!("Deleting organization {}", organization_id);
        self.client
            .delete(Api::Management, &organization_path(organization_id)?)
            .await
    }
}

/// Implementation of the API key service
pub struct ApiKeyServiceImpl {
    client: Arc<HttpClient>,
}

impl ApiKeyServiceImpl {
    /// Creates a new instance of the API key service
    pub fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }

    /// Resolves the organization an API key call targets
    async fn organization_id(&self, organization_id: Option<&str>) -> Result<String, AppError> {
        if let Some(id) = organization_id {
            return Ok(id.to_string());
        }
        let session = self.client.session().read().await;
        session.organization_id().map(str::to_string).ok_or_else(|| {
            AppError::InvalidInput(
                "no organization id given and none known; call login_management() first"
                    .to_string(),
            )
        })
    }

    /// Switches the signing API credentials to a newly issued key pair
    async fn adopt_credentials(&self, api_key: &ApiKeyResponse) {
        match api_key.credentials() {
            Some(credentials) => {
                info!("Using API key {} for subsequent logins", api_key.key);
                self.client.session().write().await.set_credentials(credentials);
            }
            None => debug!("API key {} returned without secret", api_key.id),
        }
    }
}

fn organization_path(organization_id: &str) -> Result<String, AppError> {
    Ok(format!("/organizations/{}", path_segment(organization_id)?))
}

fn api_keys_path(organization_id: &str) -> Result<String, AppError> {
    Ok(format!("{}/api-keys", organization_path(organization_id)?))
}

fn api_key_path(organization_id: &str, api_key_id: &str) -> Result<String, AppError> {
    Ok(format!(
        "{}/{}",
        api_keys_path(organization_id)?,
        path_segment(api_key_id)?
    ))
}

#[async_trait]
impl ApiKeyService for ApiKeyServiceImpl {
    async fn list(
        &self,
        organization_id: Option<&str>,
        params: Option<ListParams>,
    ) -> Result<DataList<ApiKeyResponse>, AppError> {
        let organization_id = self.organization_id(organization_id).await?;
        let query = params.unwrap_or_default().to_query();
        debug!("Listing API keys of organization {}", organization_id);

        self.client
            .get(Api::Management, &api_keys_path(&organization_id)?, Some(&query))
            .await
    }

    async fn create(
        &self,
        organization_id: Option<&str>,
        api_key: &ManagedApiKey,
    ) -> Result<ApiKeyResponse, AppError> {
        let organization_id = self.organization_id(organization_id).await?;
        info!(
            "Creating API key '{}' for organization {}",
            api_key.name, organization_id
        );

        let result: ApiKeyResponse = self
            .client
            .post(Api::Management, &api_keys_path(&organization_id)?, api_key)
            .await?;

        if result.secret.is_none() {
            warn!("API key {} was created but no secret was returned", result.id);
        }
        self.adopt_credentials(&result).await;
        Ok(result)
    }

    async fn get(
        &self,
        organization_id: Option<&str>,
        api_key_id: &str,
    ) -> Result<ApiKeyResponse, AppError> {
        let organization_id = self.organization_id(organization_id).await?;
        debug!("Getting API key {} of organization {}", api_key_id, organization_id);
        self.client
            .get(
                Api::Management,
                &api_key_path(&organization_id, api_key_id)?,
                None,
            )
            .await
    }

    async fn update(
        &self,
        organization_id: Option<&str>,
        api_key_id: &str,
        changes: Content,
    ) -> Result<ApiKeyResponse, AppError> {
        let organization_id = self.organization_id(organization_id).await?;
        info!("Updating API key {} of organization {}", api_key_id, organization_id);

        let result: ApiKeyResponse = self
            .client
            .patch(
                Api::Management,
                &api_key_path(&organization_id, api_key_id)?,
                &changes,
            )
            .await?;

        self.adopt_credentials(&result).await;
        Ok(result)
    }

    async fn delete(
        &self,
        organization_id: Option<&str>,
        api_key_id: &str,
    ) -> Result<Value, AppError> {
        let organization_id = self.organization_id(organization_id).await?;
        info!("Deleting API key {} of organization {}", api_key_id, organization_id);
        self.client
            .delete(
                Api::Management,
                &api_key_path(&organization_id, api_key_id)?,
            )
            .await
    }
}
