mod server_resolver;
mod tls_connector;

pub use server_resolver::ServerResolver;
pub use tls_connector::{DnsSession, SessionParams, TlsConnector};
