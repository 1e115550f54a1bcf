use crate::error::AppError;
use crate::model::requests::ListParams;
use crate::model::responses::{Metadata, Page};
use crate::presentation::device::DeviceResponse;
use async_trait::async_trait;

/// Interface for the client device resource (`/clients`)
#[async_trait]
pub trait DeviceService: Send + Sync {
    /// Creates a client device
    ///
    /// # Arguments
    /// * `client_id` - Client id; a random UUID is generated when `None`
    /// * `metadata` - Optional annotations
    async fn create(
        &self,
        client_id: Option<&str>,
        metadata: Option<Metadata>,
    ) -> Result<DeviceResponse, AppError>;

    /// Disables a client device
    async fn disable(
        &self,
        client_id: &str,
        metadata: Option<Metadata>,
    ) -> Result<DeviceResponse, AppError>;

    /// Gets a client device
    async fn get(&self, client_id: &str) -> Result<DeviceResponse, AppError>;

    /// Lists client devices, one page at a time
    ///
    /// Without parameters the default page size is requested.
    async fn list(&self, params: Option<ListParams>) -> Result<Page<DeviceResponse>, AppError>;
}
