use crate::error::AppError;
use crate::model::responses::Metadata;
use crate::presentation::signer::{SignerCertificate, SignerResponse};
use async_trait::async_trait;

/// Interface for the signer resource
#[async_trait]
pub trait SignerService: Send + Sync {
    /// Creates a signer
    ///
    /// # Arguments
    /// * `signer_id` - Signer id; a random UUID is generated when `None`
    /// * `certificate` - Certificate and private key to upload, if any
    /// * `metadata` - Optional annotations
    async fn create(
        &self,
        signer_id: Option<&str>,
        certificate: Option<SignerCertificate>,
        metadata: Option<Metadata>,
    ) -> Result<SignerResponse, AppError>;

    /// Disables a signer
    async fn disable(
        &self,
        signer_id: &str,
        metadata: Option<Metadata>,
    ) -> Result<SignerResponse, AppError>;

    /// Gets a signer
    async fn get(&self, signer_id: &str) -> Result<SignerResponse, AppError>;

    /// Lists all signers of the organization
    async fn list(&self) -> Result<Vec<SignerResponse>, AppError>;
}
