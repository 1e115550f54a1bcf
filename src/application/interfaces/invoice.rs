use crate::error::AppError;
use crate::model::http::ApiResponse;
use crate::model::requests::{Content, ListParams};
use crate::model::responses::{Metadata, Page};
use crate::presentation::invoice::{AdditionalInvoiceKind, InvoiceResponse};
use async_trait::async_trait;

/// Interface for invoices issued by a client device
#[async_trait]
pub trait InvoiceService: Send + Sync {
    /// Issues an invoice
    ///
    /// # Arguments
    /// * `client_id` - Issuing client device
    /// * `invoice_id` - Invoice id; a random UUID is generated when `None`
    /// * `content` - Invoice body as defined by the API
    /// * `metadata` - Optional annotations
    async fn create(
        &self,
        client_id: &str,
        invoice_id: Option<&str>,
        content: Content,
        metadata: Option<Metadata>,
    ) -> Result<InvoiceResponse, AppError>;

    /// Partially updates an invoice
    async fn update(
        &self,
        client_id: &str,
        invoice_id: &str,
        content: Content,
        metadata: Option<Metadata>,
    ) -> Result<InvoiceResponse, AppError>;

    /// Cancels an invoice
    ///
    /// Sends `state: CANCELLED` merged into the optional extra content.
    async fn cancel(
        &self,
        client_id: &str,
        invoice_id: &str,
        content: Option<Content>,
        metadata: Option<Metadata>,
    ) -> Result<InvoiceResponse, AppError>;

    /// Gets an invoice
    async fn get(&self, client_id: &str, invoice_id: &str) -> Result<InvoiceResponse, AppError>;

    /// Lists the invoices of a client device, one page at a time
    async fn list(
        &self,
        client_id: &str,
        params: Option<ListParams>,
    ) -> Result<Page<InvoiceResponse>, AppError>;

    /// Searches invoices across the whole organization (`GET /invoices`)
    async fn search(&self, params: ListParams) -> Result<Page<InvoiceResponse>, AppError>;

    /// Requests an export of the client's invoices
    ///
    /// Depending on the request the server answers with JSON or a file.
    async fn export(
        &self,
        client_id: &str,
        content: Content,
        metadata: Option<Metadata>,
    ) -> Result<ApiResponse, AppError>;

    /// Issues an additional invoice (enrichment, correcting, remedy, VAT system switch)
    async fn additional(
        &self,
        client_id: &str,
        kind: AdditionalInvoiceKind,
        content: Content,
        metadata: Option<Metadata>,
    ) -> Result<InvoiceResponse, AppError>;

    /// Downloads the XML representation of an invoice exactly as served
    async fn download_xml(&self, client_id: &str, invoice_id: &str) -> Result<Vec<u8>, AppError>;

    /// Shorthand for [`AdditionalInvoiceKind::Enrichment`]
    async fn enrichment(
        &self,
        client_id: &str,
        content: Content,
        metadata: Option<Metadata>,
    ) -> Result<InvoiceResponse, AppError> {
        self.additional(client_id, AdditionalInvoiceKind::Enrichment, content, metadata)
            .await
    }

    /// Shorthand for [`AdditionalInvoiceKind::Correcting`]
    async fn correcting(
        &self,
        client_id: &str,
        content: Content,
        metadata: Option<Metadata>,
    ) -> Result<InvoiceResponse, AppError> {
        self.additional(client_id, AdditionalInvoiceKind::Correcting, content, metadata)
            .await
    }

    /// Shorthand for [`AdditionalInvoiceKind::Remedy`]
    async fn remedy(
        &self,
        client_id: &str,
        content: Content,
        metadata: Option<Metadata>,
    ) -> Result<InvoiceResponse, AppError> {
        self.additional(client_id, AdditionalInvoiceKind::Remedy, content, metadata)
            .await
    }

    /// Shorthand for [`AdditionalInvoiceKind::VatSystemSwitch`]
    async fn vat_system_switch(
        &self,
        client_id: &str,
        content: Content,
        metadata: Option<Metadata>,
    ) -> Result<InvoiceResponse, AppError> {
        self.additional(client_id, AdditionalInvoiceKind::VatSystemSwitch, content, metadata)
            .await
    }
}
