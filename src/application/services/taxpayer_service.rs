use crate::application::interfaces::taxpayer::{AgreementService, TaxpayerService};
use crate::error::AppError;
use crate::model::http::{Api, HttpClient};
use crate::model::requests::{Content, EnvelopeRequest, StateChange};
use crate::model::responses::Metadata;
use crate::presentation::taxpayer::{AgreementResponse, TaxpayerRequest, TaxpayerResponse};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info};

const TAXPAYER_PATH: &str = "/taxpayer";
const AGREEMENT_PATH: &str = "/taxpayer/agreement";
const AGREEMENT_PDF_PATH: &str = "/taxpayer/agreement.pdf";

/// Implementation of the taxpayer service
pub struct TaxpayerServiceImpl {
    client: Arc<HttpClient>,
}

impl TaxpayerServiceImpl {
    /// Creates a new instance of the taxpayer service
    pub fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl TaxpayerService for TaxpayerServiceImpl {
    async fn set(
        &self,
        taxpayer: TaxpayerRequest,
        metadata: Option<Metadata>,
    ) -> Result<TaxpayerResponse, AppError> {
        info!(
            "Setting taxpayer {} in territory {}",
            taxpayer.issuer.tax_number, taxpayer.territory
        );

        let body = EnvelopeRequest {
            content: Some(taxpayer),
            metadata,
        };
        let result: TaxpayerResponse = self.client.put(Api::Sign, TAXPAYER_PATH, &body).await?;

        debug!("Taxpayer state: {:?}", result.content.state);
        Ok(result)
    }

    async fn get(&self) -> Result<TaxpayerResponse, AppError> {
        debug!("Getting taxpayer");
        self.client.get(Api::Sign, TAXPAYER_PATH, None).await
    }

    async fn disable(&self) -> Result<TaxpayerResponse, AppError> {
        info!("Disabling taxpayer");
        let body = EnvelopeRequest::content_only(StateChange::disabled());
        self.client.patch(Api::Sign, TAXPAYER_PATH, &body).await
    }
}

/// Implementation of the taxpayer agreement service
pub struct AgreementServiceImpl {
    client: Arc<HttpClient>,
}

impl AgreementServiceImpl {
    /// Creates a new instance of the agreement service
    pub fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl AgreementService for AgreementServiceImpl {
    async fn generate(
        &self,
        content: Option<Content>,
        metadata: Option<Metadata>,
    ) -> Result<AgreementResponse, AppError> {
        info!("Generating taxpayer agreement");
        let body = EnvelopeRequest::new(content.unwrap_or_default(), metadata);
        self.client.post(Api::Sign, AGREEMENT_PATH, &body).await
    }

    async fn upload(
        &self,
        content: Content,
        metadata: Option<Metadata>,
    ) -> Result<AgreementResponse, AppError> {
        info!("Uploading signed taxpayer agreement");
        let body = EnvelopeRequest::new(content, metadata);
        self.client.put(Api::Sign, AGREEMENT_PATH, &body).await
    }

    async fn get(&self) -> Result<AgreementResponse, AppError> {
        debug!("Getting taxpayer agreement");
        self.client.get(Api::Sign, AGREEMENT_PATH, None).await
    }

    async fn download_pdf(&self) -> Result<Vec<u8>, AppError> {
        info!("Downloading taxpayer agreement PDF");
        self.client.download(Api::Sign, AGREEMENT_PDF_PATH, None).await
    }
}
