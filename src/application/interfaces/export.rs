use crate::error::AppError;
use crate::model::requests::{Content, ListParams};
use crate::model::responses::Metadata;
use crate::presentation::export::ExportResponse;
use crate::presentation::software::SoftwareResponse;
use async_trait::async_trait;

/// Interface for invoice exports
#[async_trait]
pub trait ExportService: Send + Sync {
    /// Starts an export
    ///
    /// # Arguments
    /// * `export_id` - Export id; a random UUID is generated when `None`
    /// * `content` - Export filters; `{}` when `None`
    /// * `metadata` - Optional annotations
    async fn create(
        &self,
        export_id: Option<&str>,
        content: Option<Content>,
        metadata: Option<Metadata>,
    ) -> Result<ExportResponse, AppError>;

    /// Gets an export
    async fn get(&self, export_id: &str) -> Result<ExportResponse, AppError>;

    /// Lists exports
    async fn list(&self, params: Option<ListParams>) -> Result<Vec<ExportResponse>, AppError>;

    /// Updates an export's content and metadata
    async fn update_metadata(
        &self,
        export_id: &str,
        content: Content,
        metadata: Option<Metadata>,
    ) -> Result<ExportResponse, AppError>;

    /// Downloads the export ZIP file exactly as served
    async fn download_zip(&self, export_id: &str) -> Result<Vec<u8>, AppError>;
}

/// Interface for the registered software resource
#[async_trait]
pub trait SoftwareService: Send + Sync {
    /// Gets the registered software information
    async fn get(&self) -> Result<SoftwareResponse, AppError>;
}
