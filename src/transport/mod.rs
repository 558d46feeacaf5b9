/// Authenticated request wrapper with single retry on 401
pub mod client;
/// HTTP transport trait and reqwest implementation
pub mod http_client;

pub use client::AuthenticatedClient;
pub use http_client::{HttpResponse, HttpTransport, ReqwestTransport};
