use crate::application::interfaces::export::{ExportService, SoftwareService};
use crate::error::AppError;
use crate::model::http::{Api, HttpClient, path_segment};
use crate::model::requests::{Content, EnvelopeRequest, ListParams};
use crate::model::responses::{ContentList, Envelope, Metadata};
use crate::presentation::export::{ExportContent, ExportResponse};
use crate::presentation::software::SoftwareResponse;
use crate::utils::id::id_or_generate;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info};

/// Implementation of the export service
pub struct ExportServiceImpl {
    client: Arc<HttpClient>,
}

impl ExportServiceImpl {
    /// Creates a new instance of the export service
    pub fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }
}

fn export_path(export_id: &str) -> Result<String, AppError> {
    Ok(format!("/exports/{}", path_segment(export_id)?))
}

#[async_trait]
impl ExportService for ExportServiceImpl {
    async fn create(
        &self,
        export_id: Option<&str>,
        content: Option<Content>,
        metadata: Option<Metadata>,
    ) -> Result<ExportResponse, AppError> {
        let export_id = id_or_generate(export_id);
        info!("Creating export {}", export_id);

        let body = EnvelopeRequest::new(content.unwrap_or_default(), metadata);
        self.client
            .put(Api::Sign, &export_path(&export_id)?, &body)
            .await
    }

    async fn get(&self, export_id: &str) -> Result<ExportResponse, AppError> {
        debug!("Getting export {}", export_id);
        self.client
            .get(Api::Sign, &export_path(&export_id)?, None)
            .await
    }

    async fn list(&self, params: Option<ListParams>) -> Result<Vec<ExportResponse>, AppError> {
        let query = params.unwrap_or_default().to_query();
        debug!("Listing exports with {:?}", query);

        let result: ContentList<ExportContent> =
            self.client.get(Api::Sign, "/exports", Some(&query)).await?;

        debug!("Exports obtained: {}", result.content.len());
        Ok(result.content.into_iter().map(Envelope::from_content).collect())
    }

    async fn update_metadata(
        &self,
        export_id: &str,
        content: Content,
        metadata: Option<Metadata>,
    ) -> Result<ExportResponse, AppError> {
        info!("Updating export {}", export_id);
        let body = EnvelopeRequest::new(content, metadata);
        self.client
            .patch(Api::Sign, &export_path(&export_id)?, &body)
            .await
    }

    async fn download_zip(&self, export_id: &str) -> Result<Vec<u8>, AppError> {
        info!("Downloading file of export {}", export_id);
        self.client
            .download(Api::Sign, &format!("{}/file", export_path(export_id)?), None)
            .await
    }
}

/// Implementation of the software service
pub struct SoftwareServiceImpl {
    client: Arc<HttpClient>,
}

impl SoftwareServiceImpl {
    /// Creates a new instance of the software service
    pub fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl SoftwareService for SoftwareServiceImpl {
    async fn get(&self) -> Result<SoftwareResponse, AppError> {
        debug!("Getting registered software");
        self.client.get(Api::Sign, "/software", None).await
    }
}
