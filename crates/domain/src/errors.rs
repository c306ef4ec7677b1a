use thiserror::Error;

/// Every way a single query invocation can end short of an answer set.
///
/// Causes coming from the TLS or DNS libraries are flattened to strings so the
/// error stays `Clone` and comparable in tests.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("No domain supplied")]
    MissingDomain,

    #[error("No DNS server available")]
    NoServerAvailable,

    #[error("Invalid cipher suite: {0}")]
    InvalidCipherSuite(String),

    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Query error: {0}")]
    QueryError(String),
}

impl DomainError {
    pub fn is_connection_error(&self) -> bool {
        matches!(self, DomainError::ConnectionError(_))
    }
}
