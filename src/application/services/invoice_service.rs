use crate::application::interfaces::invoice::InvoiceService;
use crate::error::AppError;
use crate::model::http::{Api, ApiResponse, HttpClient, path_segment};
use crate::model::requests::{Content, EnvelopeRequest, ListParams, ResourceState};
use crate::model::responses::{Metadata, Page};
use crate::presentation::invoice::{AdditionalInvoiceKind, InvoiceResponse};
use crate::utils::id::id_or_generate;
use async_trait::async_trait;
use reqwest::Method;
use serde_json::json;
use std::sync::Arc;
use tracing::{debug, info};

/// Implementation of the invoice service
pub struct InvoiceServiceImpl {
    client: Arc<HttpClient>,
}

impl InvoiceServiceImpl {
    /// Creates a new instance of the invoice service
    pub fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }
}

fn invoices_path(client_id: &str) -> Result<String, AppError> {
    Ok(format!("/clients/{}/invoices", path_segment(client_id)?))
}

fn invoice_path(client_id: &str, invoice_id: &str) -> Result<String, AppError> {
    Ok(format!(
        "{}/{}",
        invoices_path(client_id)?,
        path_segment(invoice_id)?
    ))
}

#[async_trait]
impl InvoiceService for InvoiceServiceImpl {
    async fn create(
        &self,
        client_id: &str,
        invoice_id: Option<&str>,
        content: Content,
        metadata: Option<Metadata>,
    ) -> Result<InvoiceResponse, AppError> {
        let invoice_id = id_or_generate(invoice_id);
        info!("Issuing invoice {} on client {}", invoice_id, client_id);

        let body = EnvelopeRequest::new(content, metadata);
        let result: InvoiceResponse = self
            .client
            .put(Api::Sign, &invoice_path(client_id, &invoice_id)?, &body)
            .await?;

        debug!("Invoice {} state: {:?}", result.content.id, result.content.state);
        Ok(result)
    }

    async fn update(
        &self,
        client_id: &str,
        invoice_id: &str,
        content: Content,
        metadata: Option<Metadata>,
    ) -> Result<InvoiceResponse, AppError> {
        info!("Updating invoice {} on client {}", invoice_id, client_id);
        let body = EnvelopeRequest::new(content, metadata);
        self.client
            .patch(Api::Sign, &invoice_path(client_id, invoice_id)?, &body)
            .await
    }

    async fn cancel(
        &self,
        client_id: &str,
        invoice_id: &str,
        content: Option<Content>,
        metadata: Option<Metadata>,
    ) -> Result<InvoiceResponse, AppError> {
        info!("Cancelling invoice {} on client {}", invoice_id, client_id);

        let mut content = content.unwrap_or_default();
        content.insert("state".to_string(), json!(ResourceState::Cancelled));

        let body = EnvelopeRequest::new(content, metadata);
        self.client
            .patch(Api::Sign, &invoice_path(client_id, invoice_id)?, &body)
            .await
    }

    async fn get(&self, client_id: &str, invoice_id: &str) -> Result<InvoiceResponse, AppError> {
        debug!("Getting invoice {} on client {}", invoice_id, client_id);
        self.client
            .get(Api::Sign, &invoice_path(client_id, invoice_id)?, None)
            .await
    }

    async fn list(
        &self,
        client_id: &str,
        params: Option<ListParams>,
    ) -> Result<Page<InvoiceResponse>, AppError> {
        let query = params.unwrap_or_default().to_query();
        debug!("Listing invoices of client {} with {:?}", client_id, query);

        let page: Page<InvoiceResponse> = self
            .client
            .get(Api::Sign, &invoices_path(client_id)?, Some(&query))
            .await?;

        debug!("Invoices obtained: {} (more: {})", page.len(), page.has_next());
        Ok(page)
    }

    async fn search(&self, params: ListParams) -> Result<Page<InvoiceResponse>, AppError> {
        let query = params.to_query();
        debug!("Searching invoices with {:?}", query);

        let page: Page<InvoiceResponse> =
            self.client.get(Api::Sign, "/invoices", Some(&query)).await?;

        debug!("Invoices found: {}", page.len());
        Ok(page)
    }

    async fn export(
        &self,
        client_id: &str,
        content: Content,
        metadata: Option<Metadata>,
    ) -> Result<ApiResponse, AppError> {
        info!("Exporting invoices of client {}", client_id);

        let body = EnvelopeRequest::new(content, metadata);
        let path = format!("{}/export", invoices_path(client_id)?);
        let response = self
            .client
            .request(Api::Sign, Method::POST, &path, Some(&body), None)
            .await?;

        if let Some(bytes) = response.as_bytes() {
            debug!("Invoice export returned a file of {} bytes", bytes.len());
        }
        Ok(response)
    }

    async fn additional(
        &self,
        client_id: &str,
        kind: AdditionalInvoiceKind,
        content: Content,
        metadata: Option<Metadata>,
    ) -> Result<InvoiceResponse, AppError> {
        info!("Issuing {} invoice on client {}", kind, client_id);
        let body = EnvelopeRequest::new(content, metadata);
        let path = format!("{}/{}", invoices_path(client_id)?, kind.path_segment());
        self.client.post(Api::Sign, &path, &body).await
    }

    async fn download_xml(&self, client_id: &str, invoice_id: &str) -> Result<Vec<u8>, AppError> {
        info!("Downloading XML of invoice {} on client {}", invoice_id, client_id);
        let path = format!("{}/xml", invoice_path(client_id, invoice_id)?);
        self.client.download(Api::Sign, &path, None).await
    }
}
