/// Client device service interface
pub mod device;
/// Export and software service interfaces
pub mod export;
/// Invoice service interface
pub mod invoice;
/// Management API service interfaces (organizations, API keys)
pub mod management;
/// Signer service interface
pub mod signer;
/// Taxpayer and agreement service interfaces
pub mod taxpayer;
