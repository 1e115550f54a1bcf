/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use crate::model::responses::{Envelope, Extra};
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};

/// Legal identity of the invoice issuer
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Issuer {
    /// Tax identification number (NIF)
    pub tax_number: String,
    /// Registered legal name
    pub legal_name: String,
}

/// Content of a taxpayer create/update request
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Eq)]
pub struct TaxpayerRequest {
    /// Issuer identity
    pub issuer: Issuer,
    /// Tax territory, e.g. `GIPUZKOA`
    pub territory: String,
}

impl TaxpayerRequest {
    /// Builds the request content from its parts
    pub fn new(
        tax_number: impl Into<String>,
        legal_name: impl Into<String>,
        territory: impl Into<String>,
    ) -> Self {
        Self {
            issuer: Issuer {
                tax_number: tax_number.into(),
                legal_name: legal_name.into(),
            },
            territory: territory.into(),
        }
    }
}

/// Taxpayer as returned by the server
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
pub struct TaxpayerContent {
    /// Issuer identity
    #[serde(default)]
    pub issuer: Option<Issuer>,
    /// Tax territory
    #[serde(default)]
    pub territory: Option<String>,
    /// Lifecycle state
    #[serde(default)]
    pub state: Option<String>,
    /// Unknown fields
    #[serde(flatten)]
    pub extra: Extra,
}

/// Response of the taxpayer endpoints
pub type TaxpayerResponse = Envelope<TaxpayerContent>;

/// Taxpayer agreement as returned by the server
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
pub struct AgreementContent {
    /// Agreement identifier
    #[serde(default)]
    pub agreement_id: Option<String>,
    /// Agreement state
    #[serde(default)]
    pub state: Option<String>,
    /// Unknown fields
    #[serde(flatten)]
    pub extra: Extra,
}

/// Response of the taxpayer agreement endpoints
pub type AgreementResponse = Envelope<AgreementContent>;
