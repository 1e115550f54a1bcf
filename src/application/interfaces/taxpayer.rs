use crate::error::AppError;
use crate::model::requests::Content;
use crate::model::responses::Metadata;
use crate::presentation::taxpayer::{AgreementResponse, TaxpayerRequest, TaxpayerResponse};
use async_trait::async_trait;

/// Interface for the taxpayer (invoice issuer) resource
#[async_trait]
pub trait TaxpayerService: Send + Sync {
    /// Creates or updates the taxpayer
    ///
    /// # Arguments
    /// * `taxpayer` - Issuer identity and territory
    /// * `metadata` - Optional annotations; omitted from the request when `None`
    async fn set(
        &self,
        taxpayer: TaxpayerRequest,
        metadata: Option<Metadata>,
    ) -> Result<TaxpayerResponse, AppError>;

    /// Gets the current taxpayer
    async fn get(&self) -> Result<TaxpayerResponse, AppError>;

    /// Permanently disables the taxpayer
    async fn disable(&self) -> Result<TaxpayerResponse, AppError>;
}

/// Interface for the taxpayer agreement resource
#[async_trait]
pub trait AgreementService: Send + Sync {
    /// Generates the agreement draft
    async fn generate(
        &self,
        content: Option<Content>,
        metadata: Option<Metadata>,
    ) -> Result<AgreementResponse, AppError>;

    /// Uploads the signed agreement
    async fn upload(
        &self,
        content: Content,
        metadata: Option<Metadata>,
    ) -> Result<AgreementResponse, AppError>;

    /// Gets the agreement
    async fn get(&self) -> Result<AgreementResponse, AppError>;

    /// Downloads the agreement PDF exactly as served
    async fn download_pdf(&self) -> Result<Vec<u8>, AppError>;
}
