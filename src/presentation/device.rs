/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use crate::model::responses::{Envelope, Extra};
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};

/// Reference to the signer a client device issues invoices with
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct SignerRef {
    /// Signer id
    pub id: String,
}

/// Client device (point of sale) as returned by the server
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
pub struct DeviceContent {
    /// Client id
    pub id: String,
    /// Lifecycle state
    #[serde(default)]
    pub state: Option<String>,
    /// Signer bound to this client
    #[serde(default)]
    pub signer: Option<SignerRef>,
    /// Unknown fields
    #[serde(flatten)]
    pub extra: Extra,
}

/// Response of the client device endpoints
pub type DeviceResponse = Envelope<DeviceContent>;
