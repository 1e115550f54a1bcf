use crate::application::interfaces::signer::SignerService;
use crate::error::AppError;
use crate::model::http::{Api, HttpClient, path_segment};
use crate::model::requests::{EnvelopeRequest, StateChange};
use crate::model::responses::{ContentList, Envelope, Metadata};
use crate::presentation::signer::{SignerCertificate, SignerContent, SignerResponse};
use crate::utils::id::id_or_generate;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info};

/// Implementation of the signer service
pub struct SignerServiceImpl {
    client: Arc<HttpClient>,
}

impl SignerServiceImpl {
    /// Creates a new instance of the signer service
    pub fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }
}

fn signer_path(signer_id: &str) -> Result<String, AppError> {
    Ok(format!("/signers/{}", path_segment(signer_id)?))
}

#[async_trait]
impl SignerService for SignerServiceImpl {
    async fn create(
        &self,
        signer_id: Option<&str>,
        certificate: Option<SignerCertificate>,
        metadata: Option<Metadata>,
    ) -> Result<SignerResponse, AppError> {
        let signer_id = id_or_generate(signer_id);
        info!(
            "Creating signer {} ({})",
            signer_id,
            if certificate.is_some() {
                "with certificate"
            } else {
                "without certificate"
            }
        );

        let body = EnvelopeRequest {
            content: certificate,
            metadata: Some(metadata.unwrap_or_default()),
        };
        self.client
            .put(Api::Sign, &signer_path(&signer_id)?, &body)
            .await
    }

    async fn disable(
        &self,
        signer_id: &str,
        metadata: Option<Metadata>,
    ) -> Result<SignerResponse, AppError> {
        info!("Disabling signer {}", signer_id);
        let body = EnvelopeRequest::new(StateChange::disabled(), metadata);
        self.client
            .patch(Api::Sign, &signer_path(&signer_id)?, &body)
            .await
    }

    async fn get(&self, signer_id: &str) -> Result<SignerResponse, AppError> {
        debug!("Getting signer {}", signer_id);
        self.client
            .get(Api::Sign, &signer_path(&signer_id)?, None)
            .await
    }

    async fn list(&self) -> Result<Vec<SignerResponse>, AppError> {
        debug!("Listing signers");
        let result: ContentList<SignerContent> = self.client.get(Api::Sign, "/signers", None).await?;

        debug!("Signers obtained: {}", result.content.len());
        Ok(result.content.into_iter().map(Envelope::from_content).collect())
    }
}
