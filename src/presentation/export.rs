use crate::model::responses::{Envelope, Extra};
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};

/// Export as returned by the server
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
pub struct ExportContent {
    /// Export id
    pub id: String,
    /// Processing state
    #[serde(default)]
    pub state: Option<String>,
    /// Unknown fields
    #[serde(flatten)]
    pub extra: Extra,
}

/// Response of the export endpoints
pub type ExportResponse = Envelope<ExportContent>;
