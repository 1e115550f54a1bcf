/// Management API key models
pub mod api_key;
/// Client device models
pub mod device;
/// Export models
pub mod export;
/// Invoice models
pub mod invoice;
/// Management API organization models
pub mod organization;
/// Signer models
pub mod signer;
/// Registered software models
pub mod software;
/// Taxpayer and taxpayer agreement models
pub mod taxpayer;

pub use api_key::*;
pub use device::*;
pub use export::*;
pub use invoice::*;
pub use organization::*;
pub use signer::*;
pub use software::*;
pub use taxpayer::*;
