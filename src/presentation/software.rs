use crate::model::responses::{Envelope, Extra};
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};

/// Registered software information
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
pub struct SoftwareContent {
    /// Software id
    #[serde(default)]
    pub software_id: Option<String>,
    /// Software name
    #[serde(default)]
    pub name: Option<String>,
    /// Unknown fields
    #[serde(flatten)]
    pub extra: Extra,
}

/// Response of the software endpoint
pub type SoftwareResponse = Envelope<SoftwareContent>;
