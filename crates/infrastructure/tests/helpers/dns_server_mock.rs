#![allow(dead_code)]
use rustls::crypto::aws_lc_rs;
use rustls::pki_types::{PrivateKeyDer, PrivatePkcs8KeyDer};
use rustls::{CipherSuite, ProtocolVersion, ServerConfig};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tokio_rustls::TlsAcceptor;

/// How the mock answers the single query it receives.
#[derive(Debug, Clone)]
pub enum MockReply {
    /// A records for the queried name, in this order.
    Answers(Vec<[u8; 4]>),
    /// A well-formed response carrying the wrong message id.
    WrongId,
    /// Never answer; wait for the client to go away.
    Silent,
}

/// What the server observed on its one connection.
#[derive(Debug, Default)]
pub struct ServerReport {
    pub query: Vec<u8>,
    pub version: Option<ProtocolVersion>,
    pub cipher_suite: Option<CipherSuite>,
    pub saw_close_notify: bool,
}

/// Single-connection DoT server on an ephemeral loopback port.
pub struct MockDotServer {
    addr: SocketAddr,
    handle: JoinHandle<ServerReport>,
}

impl MockDotServer {
    pub async fn start(reply: MockReply) -> Self {
        let acceptor = TlsAcceptor::from(Self::server_config());
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let handle = tokio::spawn(async move {
            let mut report = ServerReport::default();

            let Ok((socket, _)) = listener.accept().await else {
                return report;
            };
            let Ok(mut stream) = acceptor.accept(socket).await else {
                return report;
            };

            {
                let (_, connection) = stream.get_ref();
                report.version = connection.protocol_version();
                report.cipher_suite = connection.negotiated_cipher_suite().map(|s| s.suite());
            }

            let mut len_buf = [0u8; 2];
            if stream.read_exact(&mut len_buf).await.is_err() {
                return report;
            }
            let mut query = vec![0u8; u16::from_be_bytes(len_buf) as usize];
            if stream.read_exact(&mut query).await.is_err() {
                return report;
            }

            if let Some(response) = Self::build_response(&query, &reply) {
                let _ = stream
                    .write_all(&(response.len() as u16).to_be_bytes())
                    .await;
                let _ = stream.write_all(&response).await;
                let _ = stream.flush().await;
            }
            report.query = query;

            let mut rest = [0u8; 64];
            report.saw_close_notify = matches!(stream.read(&mut rest).await, Ok(0));
            report
        });

        Self { addr, handle }
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn port(&self) -> u16 {
        self.addr.port()
    }

    pub async fn finish(self) -> ServerReport {
        self.handle.await.unwrap()
    }

    fn server_config() -> Arc<ServerConfig> {
        let rcgen::CertifiedKey { cert, key_pair } =
            rcgen::generate_simple_self_signed(vec!["localhost".to_string()]).unwrap();
        let key = PrivateKeyDer::Pkcs8(PrivatePkcs8KeyDer::from(key_pair.serialize_der()));

        let config = ServerConfig::builder_with_provider(Arc::new(aws_lc_rs::default_provider()))
            .with_safe_default_protocol_versions()
            .unwrap()
            .with_no_client_auth()
            .with_single_cert(vec![cert.der().clone()], key)
            .unwrap();

        Arc::new(config)
    }

    fn build_response(query: &[u8], reply: &MockReply) -> Option<Vec<u8>> {
        if query.len() < 12 {
            return None;
        }

        let addrs: &[[u8; 4]] = match reply {
            MockReply::Answers(addrs) => addrs,
            MockReply::WrongId => &[],
            MockReply::Silent => return None,
        };

        let mut response = Vec::with_capacity(512);

        let id = u16::from_be_bytes([query[0], query[1]]);
        let id = match reply {
            MockReply::WrongId => id.wrapping_add(1),
            _ => id,
        };
        response.extend_from_slice(&id.to_be_bytes());

        // QR + echoed RD, RA
        response.push(0x80 | (query[2] & 0x01));
        response.push(0x80);

        response.extend_from_slice(&[0x00, 0x01]);
        response.extend_from_slice(&(addrs.len() as u16).to_be_bytes());
        response.extend_from_slice(&[0x00, 0x00]);
        response.extend_from_slice(&[0x00, 0x00]);

        response.extend_from_slice(&query[12..]);

        for addr in addrs {
            response.extend_from_slice(&[
                0xc0, 0x0c, // pointer to the question name
                0x00, 0x01, // A
                0x00, 0x01, // IN
                0x00, 0x00, 0x01, 0x2c, // TTL 300
                0x00, 0x04,
            ]);
            response.extend_from_slice(addr);
        }

        Some(response)
    }
}
