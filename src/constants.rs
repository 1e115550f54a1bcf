/// Default base URL of the fiskaly SIGN ES signing/invoicing API
pub const DEFAULT_BASE_URL: &str = "https://sign-api.fiskaly.com/api/v1";
/// Base URL of the fiskaly management (dashboard) API
pub const MANAGEMENT_BASE_URL: &str = "https://dashboard.fiskaly.com/api/v0";
/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
/// Authentication endpoint, relative to either API root
pub const AUTH_PATH: &str = "/auth";
/// Default page size for paginated list requests
pub const DEFAULT_PAGE_SIZE: u32 = 10;
/// User agent string used in HTTP requests to identify this client
pub const USER_AGENT: &str = "fiskaly-client/0.1.0";
