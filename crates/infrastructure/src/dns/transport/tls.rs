//! TLS session setup for DNS-over-TLS (RFC 7858)
//!
//! Builds one rustls `ClientConfig` per session. By default the server's
//! certificate chain and name are not validated (the tool probes servers, it
//! does not authenticate them); handshake signatures are still checked
//! against the presented certificate. Pinning a suite restricts the offer to
//! that single TLS 1.3 suite and to TLS 1.3 only.

use crate::dns::session::TlsDnsSession;
use async_trait::async_trait;
use dot_query_application::ports::{DnsSession, SessionParams, TlsConnector};
use dot_query_domain::{CipherSuite, DomainError};
use rustls::client::danger::{HandshakeSignatureValid, ServerCertVerified, ServerCertVerifier};
use rustls::crypto::{aws_lc_rs, CryptoProvider, WebPkiSupportedAlgorithms};
use rustls::pki_types::{CertificateDer, ServerName, UnixTime};
use rustls::{ClientConfig, DigitallySignedStruct, RootCertStore, SignatureScheme};
use std::sync::Arc;
use tokio::net::TcpStream;
use tracing::debug;

/// Accepts any certificate chain while still verifying handshake signatures.
#[derive(Debug)]
struct AcceptAnyCertificate {
    algorithms: WebPkiSupportedAlgorithms,
}

impl ServerCertVerifier for AcceptAnyCertificate {
    fn verify_server_cert(
        &self,
        _end_entity: &CertificateDer<'_>,
        _intermediates: &[CertificateDer<'_>],
        _server_name: &ServerName<'_>,
        _ocsp_response: &[u8],
        _now: UnixTime,
    ) -> Result<ServerCertVerified, rustls::Error> {
        Ok(ServerCertVerified::assertion())
    }

    fn verify_tls12_signature(
        &self,
        message: &[u8],
        cert: &CertificateDer<'_>,
        dss: &DigitallySignedStruct,
    ) -> Result<HandshakeSignatureValid, rustls::Error> {
        rustls::crypto::verify_tls12_signature(message, cert, dss, &self.algorithms)
    }

    fn verify_tls13_signature(
        &self,
        message: &[u8],
        cert: &CertificateDer<'_>,
        dss: &DigitallySignedStruct,
    ) -> Result<HandshakeSignatureValid, rustls::Error> {
        rustls::crypto::verify_tls13_signature(message, cert, dss, &self.algorithms)
    }

    fn supported_verify_schemes(&self) -> Vec<SignatureScheme> {
        self.algorithms.supported_schemes()
    }
}

/// Restricts `provider` to the single backend suite matching `suite`.
fn pin_cipher_suite(provider: &mut CryptoProvider, suite: CipherSuite) -> Result<(), DomainError> {
    let wanted = rustls::CipherSuite::from(suite.id());

    let supported = provider
        .cipher_suites
        .iter()
        .find(|s| s.suite() == wanted)
        .copied()
        .ok_or_else(|| {
            DomainError::ConnectionError(format!(
                "Cipher suite {} is not supported by the TLS backend",
                suite.name()
            ))
        })?;

    provider.cipher_suites = vec![supported];
    Ok(())
}

/// Build the client configuration for one session.
pub fn build_client_config(
    cipher_suite: Option<CipherSuite>,
    verify_certificates: bool,
) -> Result<Arc<ClientConfig>, DomainError> {
    let mut provider = aws_lc_rs::default_provider();
    let algorithms = provider.signature_verification_algorithms;

    let builder = match cipher_suite {
        Some(suite) => {
            pin_cipher_suite(&mut provider, suite)?;
            ClientConfig::builder_with_provider(Arc::new(provider))
                .with_protocol_versions(&[&rustls::version::TLS13])
        }
        None => ClientConfig::builder_with_provider(Arc::new(provider))
            .with_safe_default_protocol_versions(),
    }
    .map_err(|e| DomainError::ConnectionError(format!("Invalid TLS configuration: {}", e)))?;

    let config = if verify_certificates {
        let mut root_store = RootCertStore::empty();
        root_store.extend(webpki_roots::TLS_SERVER_ROOTS.iter().cloned());
        builder
            .with_root_certificates(root_store)
            .with_no_client_auth()
    } else {
        builder
            .dangerous()
            .with_custom_certificate_verifier(Arc::new(AcceptAnyCertificate { algorithms }))
            .with_no_client_auth()
    };

    Ok(Arc::new(config))
}

/// Opens DoT sessions: bounded TCP connect, then the TLS handshake.
#[derive(Debug, Default)]
pub struct RustlsConnector;

impl RustlsConnector {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl TlsConnector for RustlsConnector {
    async fn connect(&self, params: &SessionParams) -> Result<Box<dyn DnsSession>, DomainError> {
        let config = build_client_config(params.cipher_suite, params.verify_certificates)?;
        let connector = tokio_rustls::TlsConnector::from(config);

        let server_name = ServerName::try_from(params.server.to_string()).map_err(|e| {
            DomainError::ConnectionError(format!("Invalid TLS server name '{}': {}", params.server, e))
        })?;

        let target = (&*params.server, params.port);

        // Only the TCP connect is bounded; the handshake is not.
        let tcp_stream = tokio::time::timeout(params.connect_timeout, TcpStream::connect(target))
            .await
            .map_err(|_| {
                DomainError::ConnectionError(format!(
                    "Timeout connecting to {}:{} after {:?}",
                    params.server, params.port, params.connect_timeout
                ))
            })?
            .map_err(|e| {
                DomainError::ConnectionError(format!(
                    "TCP connect to {}:{} failed: {}",
                    params.server, params.port, e
                ))
            })?;

        tcp_stream.set_nodelay(true).map_err(|e| {
            DomainError::ConnectionError(format!(
                "Failed to set TCP_NODELAY on {}:{}: {}",
                params.server, params.port, e
            ))
        })?;

        let tls_stream = connector
            .connect(server_name, tcp_stream)
            .await
            .map_err(|e| {
                DomainError::ConnectionError(format!(
                    "TLS handshake with {}:{} failed: {}",
                    params.server, params.port, e
                ))
            })?;

        let (_, connection) = tls_stream.get_ref();
        debug!(
            server = %params.server,
            port = params.port,
            version = ?connection.protocol_version(),
            cipher_suite = ?connection.negotiated_cipher_suite().map(|s| s.suite()),
            "TLS connection established"
        );

        Ok(Box::new(TlsDnsSession::new(
            tls_stream,
            params.server.clone(),
            params.query_timeout,
        )))
    }
}
