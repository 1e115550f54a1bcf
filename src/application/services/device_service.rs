use crate::application::interfaces::device::DeviceService;
use crate::constants::DEFAULT_PAGE_SIZE;
use crate::error::AppError;
use crate::model::http::{Api, HttpClient, path_segment};
use crate::model::requests::{EnvelopeRequest, ListParams, StateChange};
use crate::model::responses::{Metadata, Page};
use crate::presentation::device::DeviceResponse;
use crate::utils::id::id_or_generate;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info};

/// Implementation of the client device service
pub struct DeviceServiceImpl {
    client: Arc<HttpClient>,
}

impl DeviceServiceImpl {
    /// Creates a new instance of the client device service
    pub fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }
}

fn client_path(client_id: &str) -> Result<String, AppError> {
    Ok(format!("/clients/{}", path_segment(client_id)?))
}

#[async_trait]
impl DeviceService for DeviceServiceImpl {
    async fn create(
        &self,
        client_id: Option<&str>,
        metadata: Option<Metadata>,
    ) -> Result<DeviceResponse, AppError> {
        let client_id = id_or_generate(client_id);
        info!("Creating client device {}", client_id);

        let body = EnvelopeRequest::metadata_only(metadata);
        let result: DeviceResponse = self
            .client
            .put(Api::Sign, &client_path(&client_id)?, &body)
            .await?;

        debug!("Client device {} state: {:?}", result.content.id, result.content.state);
        Ok(result)
    }

    async fn disable(
        &self,
        client_id: &str,
        metadata: Option<Metadata>,
    ) -> Result<DeviceResponse, AppError> {
        info!("Disabling client device {}", client_id);
        let body = EnvelopeRequest::new(StateChange::disabled(), metadata);
        self.client
            .patch(Api::Sign, &client_path(&client_id)?, &body)
            .await
    }

    async fn get(&self, client_id: &str) -> Result<DeviceResponse, AppError> {
        debug!("Getting client device {}", client_id);
        self.client
            .get(Api::Sign, &client_path(&client_id)?, None)
            .await
    }

    async fn list(&self, params: Option<ListParams>) -> Result<Page<DeviceResponse>, AppError> {
        let mut params = params.unwrap_or_default();
        params.limit = params.limit.or(Some(DEFAULT_PAGE_SIZE));
        debug!("Listing client devices with {:?}", params);

        let page: Page<DeviceResponse> = self
            .client
            .get(Api::Sign, "/clients", Some(&params.to_query()))
            .await?;

        debug!("Client devices obtained: {} (more: {})", page.len(), page.has_next());
        Ok(page)
    }
}
