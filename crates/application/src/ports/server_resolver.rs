use async_trait::async_trait;
use dot_query_domain::DomainError;
use std::net::IpAddr;

/// Host-level name lookup, used for the fallback server probe.
#[async_trait]
pub trait ServerResolver: Send + Sync {
    async fn lookup_host(&self, host: &str) -> Result<Vec<IpAddr>, DomainError>;
}
