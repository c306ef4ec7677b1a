use crate::dns::forwarding::{MessageBuilder, ResponseParser};
use crate::dns::transport::tcp::{read_with_length_prefix, send_with_length_prefix};
use async_trait::async_trait;
use dot_query_application::ports::DnsSession;
use dot_query_domain::{AnswerSet, DnsQuestion, DomainError};
use std::sync::Arc;
use std::time::Duration;
use tokio::io::AsyncWriteExt;
use tokio::net::TcpStream;
use tokio_rustls::client::TlsStream;
use tracing::debug;

/// One established DoT connection.
///
/// The stream is taken out on `close`, so a closed session can neither be
/// closed twice nor reused. Dropping an unclosed session still closes the
/// socket, just without a close_notify.
pub struct TlsDnsSession {
    stream: Option<TlsStream<TcpStream>>,
    server: Arc<str>,
    query_timeout: Option<Duration>,
}

impl TlsDnsSession {
    pub fn new(
        stream: TlsStream<TcpStream>,
        server: Arc<str>,
        query_timeout: Option<Duration>,
    ) -> Self {
        Self {
            stream: Some(stream),
            server,
            query_timeout,
        }
    }
}

#[async_trait]
impl DnsSession for TlsDnsSession {
    async fn exchange(&mut self, question: &DnsQuestion) -> Result<AnswerSet, DomainError> {
        let query_timeout = self.query_timeout;
        let server = self.server.clone();

        let stream = self
            .stream
            .as_mut()
            .ok_or_else(|| DomainError::QueryError("Session already closed".to_string()))?;

        let (id, message_bytes) = MessageBuilder::build_query(question)?;

        let round_trip = async {
            send_with_length_prefix(stream, &message_bytes).await?;
            debug!(
                server = %server,
                domain = %question.name,
                record_type = %question.record_type,
                message_len = message_bytes.len(),
                "DoT query sent"
            );
            read_with_length_prefix(stream).await
        };

        let response_bytes = match query_timeout {
            Some(limit) => tokio::time::timeout(limit, round_trip).await.map_err(|_| {
                DomainError::QueryError(format!(
                    "Timeout waiting for response from {} after {:?}",
                    server, limit
                ))
            })??,
            None => round_trip.await?,
        };

        debug!(
            server = %server,
            response_len = response_bytes.len(),
            "DoT response received"
        );

        ResponseParser::parse(&response_bytes, id)
    }

    async fn close(&mut self) {
        if let Some(mut stream) = self.stream.take() {
            if let Err(e) = stream.shutdown().await {
                debug!(server = %self.server, error = %e, "TLS shutdown failed");
            }
        }
    }

    fn is_closed(&self) -> bool {
        self.stream.is_none()
    }

    fn cipher_suite(&self) -> Option<&'static str> {
        let (_, connection) = self.stream.as_ref()?.get_ref();
        connection.negotiated_cipher_suite()?.suite().as_str()
    }
}
