/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use crate::model::responses::{Envelope, Extra};
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Invoice as returned by the server
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
pub struct InvoiceContent {
    /// Invoice id
    pub id: String,
    /// Lifecycle state, e.g. `ISSUED` or `CANCELLED`
    #[serde(default)]
    pub state: Option<String>,
    /// Unknown fields
    #[serde(flatten)]
    pub extra: Extra,
}

/// Response of the invoice endpoints
pub type InvoiceResponse = Envelope<InvoiceContent>;

/// Additional invoicing use cases, each posted to its own endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AdditionalInvoiceKind {
    /// Adds information to an already issued invoice
    Enrichment,
    /// Corrective (rectifying) invoice
    Correcting,
    /// Remedy invoice, recovering from a failed issuance
    Remedy,
    /// Invoice issued when switching VAT system
    VatSystemSwitch,
}

impl AdditionalInvoiceKind {
    /// Last path segment of the endpoint
    #[must_use]
    pub fn path_segment(self) -> &'static str {
        match self {
            AdditionalInvoiceKind::Enrichment => "enrichment",
            AdditionalInvoiceKind::Correcting => "correcting",
            AdditionalInvoiceKind::Remedy => "remedy",
            AdditionalInvoiceKind::VatSystemSwitch => "vat-system-switch",
        }
    }
}

impl fmt::Display for AdditionalInvoiceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path_segment())
    }
}
