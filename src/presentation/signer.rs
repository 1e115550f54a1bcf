/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use crate::model::responses::{Envelope, Extra};
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Certificate material uploaded when creating a signer
///
/// Without it the server provisions the signer on its own.
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SignerCertificate {
    /// Base64 encoded X.509 certificate
    pub certificate: String,
    /// Base64 encoded private key
    pub private_key: String,
    /// Password protecting the private key
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private_key_password: Option<String>,
}

impl SignerCertificate {
    /// Certificate and key without a password
    pub fn new(certificate: impl Into<String>, private_key: impl Into<String>) -> Self {
        Self {
            certificate: certificate.into(),
            private_key: private_key.into(),
            private_key_password: None,
        }
    }

    /// Sets the private key password
    #[must_use]
    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.private_key_password = Some(password.into());
        self
    }
}

impl fmt::Debug for SignerCertificate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignerCertificate")
            .field("certificate", &format!("{} chars", self.certificate.len()))
            .field("private_key", &"***")
            .field(
                "private_key_password",
                &self.private_key_password.as_ref().map(|_| "***"),
            )
            .finish()
    }
}

/// Signer as returned by the server
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
pub struct SignerContent {
    /// Signer id
    pub id: String,
    /// Lifecycle state
    #[serde(default)]
    pub state: Option<String>,
    /// Unknown fields
    #[serde(flatten)]
    pub extra: Extra,
}

/// Response of the signer endpoints
pub type SignerResponse = Envelope<SignerContent>;
