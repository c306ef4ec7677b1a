use crate::ports::{DnsSession, ServerResolver, SessionParams, TlsConnector};
use dot_query_domain::{
    AnswerSet, CipherSuiteRegistry, DnsQuestion, DomainError, QueryConfig, TransportConfig,
};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Probed through the host resolver when no server is configured. A literal
/// address normally resolves to itself, so this checks resolver availability
/// rather than performing a real lookup.
pub const FALLBACK_PROBE_HOST: &str = "8.8.8.8";

/// The server a session is opened against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedServer {
    pub server: String,
    pub via_fallback: bool,
}

/// Runs one DoT query end to end: pick the server, open the session,
/// exchange a single question and release the session.
pub struct RunQueryUseCase {
    resolver: Arc<dyn ServerResolver>,
    connector: Arc<dyn TlsConnector>,
    transport: TransportConfig,
}

impl RunQueryUseCase {
    pub fn new(
        resolver: Arc<dyn ServerResolver>,
        connector: Arc<dyn TlsConnector>,
        transport: TransportConfig,
    ) -> Self {
        Self {
            resolver,
            connector,
            transport,
        }
    }

    pub async fn execute(&self, config: &QueryConfig) -> Result<AnswerSet, DomainError> {
        config.validate()?;

        let start = Instant::now();
        let mut session = self.negotiate(config).await?;

        let question = DnsQuestion::from_config(config);
        let result = session.exchange(&question).await;
        session.close().await;

        match &result {
            Ok(answers) => info!(
                domain = %question.name,
                record_type = %question.record_type,
                answers = answers.len(),
                elapsed_ms = start.elapsed().as_millis() as u64,
                "Query completed"
            ),
            Err(e) => warn!(domain = %question.name, error = %e, "Query failed"),
        }

        result
    }

    /// Opens the TLS session for `config`. Nothing touches the network before
    /// the server and the cipher suite are both settled.
    pub async fn negotiate(
        &self,
        config: &QueryConfig,
    ) -> Result<Box<dyn DnsSession>, DomainError> {
        let resolved = self.resolve_server(config).await?;

        let cipher_suite = config
            .cipher_suite()
            .map(CipherSuiteRegistry::lookup)
            .transpose()?;

        let params = SessionParams::new(resolved.server, &self.transport)
            .with_cipher_suite(cipher_suite);

        debug!(
            server = %params.server,
            port = params.port,
            fallback = resolved.via_fallback,
            cipher_suite = ?params.cipher_suite.map(|s| s.name()),
            verify = params.verify_certificates,
            "Opening DoT session"
        );

        let session = match self.connector.connect(&params).await {
            Ok(session) => session,
            Err(e) => {
                if e.is_connection_error() {
                    warn!(
                        server = %params.server,
                        port = params.port,
                        error = %e,
                        "DoT session could not be opened"
                    );
                }
                return Err(e);
            }
        };

        if let Some(suite) = session.cipher_suite() {
            debug!(server = %params.server, cipher_suite = suite, "TLS session established");
        }

        Ok(session)
    }

    /// Picks the configured server, or probes the host resolver with
    /// [`FALLBACK_PROBE_HOST`] and takes the first address it returns.
    pub async fn resolve_server(
        &self,
        config: &QueryConfig,
    ) -> Result<ResolvedServer, DomainError> {
        if let Some(server) = config.server() {
            return Ok(ResolvedServer {
                server: server.to_string(),
                via_fallback: false,
            });
        }

        let addrs = self
            .resolver
            .lookup_host(FALLBACK_PROBE_HOST)
            .await
            .map_err(|e| {
                warn!(probe = FALLBACK_PROBE_HOST, error = %e, "Fallback server probe failed");
                DomainError::NoServerAvailable
            })?;

        let server = addrs
            .first()
            .map(|ip| ip.to_string())
            .ok_or(DomainError::NoServerAvailable)?;

        debug!(server = %server, "Using fallback server");
        Ok(ResolvedServer {
            server,
            via_fallback: true,
        })
    }
}
