/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use crate::model::responses::{Extra, null_as_default};
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Billing settings of an organization
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct BillingOptions {
    /// Global Location Number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gln: Option<String>,
    /// Only meaningful together with `bill_to_organization`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub withhold_billing: Option<bool>,
    /// UUID of the organization that is billed instead
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bill_to_organization: Option<String>,
}

/// Organization creation payload for the management API
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Organization {
    /// Legal name
    pub name: String,
    /// First address line
    pub address_line1: String,
    /// Postal code
    pub zip: String,
    /// Town
    pub town: String,
    /// ISO 3166-1 alpha-3 country code
    pub country_code: String,
    /// Parent organization
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub managed_by_organization_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vat_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_person_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_line2: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tax_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub economy_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub billing_options: Option<BillingOptions>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub billing_address_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<HashMap<String, String>>,
}

/// Organization as returned by the management API
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
pub struct OrganizationResponse {
    /// Organization id
    #[serde(rename = "_id")]
    pub id: String,
    /// Server side type tag
    #[serde(rename = "_type", default)]
    pub kind: Option<String>,
    /// Environments the organization exists in
    #[serde(rename = "_envs", default, deserialize_with = "null_as_default")]
    pub envs: Vec<String>,
    /// Legal name
    #[serde(default)]
    pub name: Option<String>,
    /// Parent organization
    #[serde(default)]
    pub managed_by_organization_id: Option<String>,
    /// User that created the organization
    #[serde(default)]
    pub created_by_user: Option<String>,
    /// Free-form annotations
    #[serde(default, deserialize_with = "null_as_default")]
    pub metadata: HashMap<String, String>,
    /// Remaining fields (address, billing, managed configuration, ...)
    #[serde(flatten)]
    pub extra: Extra,
}
