//! RFC 7858 / RFC 1035 §4.2.2 framing: every message on the stream is
//! preceded by its length as a big-endian u16.

use dot_query_domain::DomainError;
use tokio::io::{AsyncReadExt, AsyncWriteExt};

const MAX_TCP_MESSAGE_SIZE: usize = u16::MAX as usize;

pub(crate) async fn send_with_length_prefix<S>(
    stream: &mut S,
    message_bytes: &[u8],
) -> Result<(), DomainError>
where
    S: AsyncWriteExt + Unpin,
{
    if message_bytes.len() > MAX_TCP_MESSAGE_SIZE {
        return Err(DomainError::QueryError(format!(
            "Query too large: {} bytes (max {})",
            message_bytes.len(),
            MAX_TCP_MESSAGE_SIZE
        )));
    }

    let length_bytes = (message_bytes.len() as u16).to_be_bytes();

    stream.write_all(&length_bytes).await.map_err(|e| {
        DomainError::QueryError(format!("Failed to write length prefix: {}", e))
    })?;
    stream.write_all(message_bytes).await.map_err(|e| {
        DomainError::QueryError(format!("Failed to write DNS message: {}", e))
    })?;
    stream
        .flush()
        .await
        .map_err(|e| DomainError::QueryError(format!("Failed to flush stream: {}", e)))?;

    Ok(())
}

pub(crate) async fn read_with_length_prefix<S>(stream: &mut S) -> Result<Vec<u8>, DomainError>
where
    S: AsyncReadExt + Unpin,
{
    let mut len_buf = [0u8; 2];
    stream.read_exact(&mut len_buf).await.map_err(|e| {
        DomainError::QueryError(format!("Failed to read response length: {}", e))
    })?;

    let response_len = u16::from_be_bytes(len_buf) as usize;

    if response_len == 0 {
        return Err(DomainError::QueryError(
            "Server sent an empty response".to_string(),
        ));
    }

    let mut response = vec![0u8; response_len];
    stream.read_exact(&mut response).await.map_err(|e| {
        DomainError::QueryError(format!("Failed to read response body: {}", e))
    })?;

    Ok(response)
}
