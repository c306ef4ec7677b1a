use dot_query_domain::{AnswerSet, DnsAnswer, DomainError};
use hickory_proto::op::Message;
use hickory_proto::rr::Record;
use tracing::debug;

pub struct ResponseParser;

impl ResponseParser {
    /// Decode one response and project its answer section, in wire order.
    ///
    /// A response carrying a different message id than the query is rejected.
    pub fn parse(response_bytes: &[u8], expected_id: u16) -> Result<AnswerSet, DomainError> {
        if response_bytes.len() < 2 {
            return Err(DomainError::QueryError(format!(
                "DNS response too short: {} bytes",
                response_bytes.len()
            )));
        }

        let response_id = u16::from_be_bytes([response_bytes[0], response_bytes[1]]);
        if response_id != expected_id {
            return Err(DomainError::QueryError(format!(
                "Response id {} does not match query id {}",
                response_id, expected_id
            )));
        }

        let message = Message::from_vec(response_bytes).map_err(|e| {
            DomainError::QueryError(format!("Failed to parse DNS response: {}", e))
        })?;

        debug!(
            rcode = ?message.response_code(),
            answers = message.answers().len(),
            truncated = message.truncated(),
            "DNS response parsed"
        );

        let answers: Vec<DnsAnswer> = message.answers().iter().map(Self::to_answer).collect();
        Ok(AnswerSet::from(answers))
    }

    fn to_answer(record: &Record) -> DnsAnswer {
        DnsAnswer {
            name: record.name().to_string(),
            ttl: record.ttl(),
            class: record.dns_class().to_string(),
            record_type: record.record_type().to_string(),
            rdata: record.data().to_string(),
        }
    }
}
