use async_trait::async_trait;
use dot_query_application::ports::ServerResolver;
use dot_query_domain::DomainError;
use std::net::IpAddr;
use std::time::Duration;
use tracing::debug;

/// Looks names up through the host's configured resolver.
pub struct SystemServerResolver {
    timeout: Duration,
}

impl SystemServerResolver {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }
}

#[async_trait]
impl ServerResolver for SystemServerResolver {
    async fn lookup_host(&self, host: &str) -> Result<Vec<IpAddr>, DomainError> {
        // Port is irrelevant to the lookup; getaddrinfo just needs one.
        let addrs_iter = tokio::time::timeout(self.timeout, tokio::net::lookup_host((host, 0)))
            .await
            .map_err(|_| {
                DomainError::ConnectionError(format!("Timeout resolving {}", host))
            })?
            .map_err(|e| {
                DomainError::ConnectionError(format!("Host lookup failed for {}: {}", host, e))
            })?;

        let addrs: Vec<IpAddr> = addrs_iter.map(|addr| addr.ip()).collect();

        debug!(host = %host, addresses = addrs.len(), "Host lookup completed");
        Ok(addrs)
    }
}
