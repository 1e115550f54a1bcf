/// Client device service
pub mod device_service;
/// Export and software services
pub mod export_service;
/// Invoice service, including search and additional invoice kinds
pub mod invoice_service;
/// Organization and API key services of the management API
pub mod management_service;
/// Signer service
pub mod signer_service;
/// Taxpayer and agreement services
pub mod taxpayer_service;

pub use device_service::*;
pub use export_service::*;
pub use invoice_service::*;
pub use management_service::*;
pub use signer_service::*;
pub use taxpayer_service::*;
