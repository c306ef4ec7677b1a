use async_trait::async_trait;
use dot_query_domain::{AnswerSet, CipherSuite, DnsQuestion, DomainError, TransportConfig};
use std::sync::Arc;
use std::time::Duration;

/// Everything needed to open one DoT session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionParams {
    pub server: Arc<str>,
    pub port: u16,
    pub cipher_suite: Option<CipherSuite>,
    pub connect_timeout: Duration,
    pub query_timeout: Option<Duration>,
    pub verify_certificates: bool,
}

impl SessionParams {
    pub fn new(server: impl Into<Arc<str>>, transport: &TransportConfig) -> Self {
        Self {
            server: server.into(),
            port: transport.port,
            cipher_suite: None,
            connect_timeout: transport.connect_timeout(),
            query_timeout: transport.query_timeout(),
            verify_certificates: transport.verify_certificates,
        }
    }

    pub fn with_cipher_suite(mut self, cipher_suite: Option<CipherSuite>) -> Self {
        self.cipher_suite = cipher_suite;
        self
    }
}

/// Opens TLS sessions to DoT servers.
#[async_trait]
pub trait TlsConnector: Send + Sync {
    async fn connect(&self, params: &SessionParams) -> Result<Box<dyn DnsSession>, DomainError>;
}

/// One live TLS session. Carries exactly one exchange and is closed once
/// afterwards, whatever the exchange returned.
#[async_trait]
pub trait DnsSession: Send {
    async fn exchange(&mut self, question: &DnsQuestion) -> Result<AnswerSet, DomainError>;

    /// Sends close_notify and shuts the socket down. Calling it again is a no-op.
    async fn close(&mut self);

    fn is_closed(&self) -> bool;

    /// IANA name of the negotiated cipher suite, when known.
    fn cipher_suite(&self) -> Option<&'static str> {
        None
    }
}
