#![allow(dead_code)]

use async_trait::async_trait;
use dot_query_application::ports::{DnsSession, ServerResolver, SessionParams, TlsConnector};
use dot_query_domain::{AnswerSet, DnsAnswer, DnsQuestion, DomainError};
use std::net::IpAddr;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

pub fn make_answer(name: &str, ttl: u32, rdata: &str) -> DnsAnswer {
    DnsAnswer {
        name: name.to_string(),
        ttl,
        class: "IN".to_string(),
        record_type: "A".to_string(),
        rdata: rdata.to_string(),
    }
}

pub struct MockServerResolver {
    response: Result<Vec<IpAddr>, DomainError>,
    lookups: Arc<Mutex<Vec<String>>>,
}

impl MockServerResolver {
    pub fn with_addrs(addrs: Vec<&str>) -> Self {
        Self {
            response: Ok(addrs.into_iter().map(|a| a.parse().unwrap()).collect()),
            lookups: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn failing() -> Self {
        Self {
            response: Err(DomainError::ConnectionError(
                "resolver unavailable".to_string(),
            )),
            lookups: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn lookups(&self) -> Vec<String> {
        self.lookups.lock().unwrap().clone()
    }
}

#[async_trait]
impl ServerResolver for MockServerResolver {
    async fn lookup_host(&self, host: &str) -> Result<Vec<IpAddr>, DomainError> {
        self.lookups.lock().unwrap().push(host.to_string());
        self.response.clone()
    }
}

/// Shared record of what sessions handed out by `MockTlsConnector` did.
#[derive(Default)]
pub struct SessionLog {
    pub questions: Mutex<Vec<DnsQuestion>>,
    pub close_count: AtomicU64,
}

impl SessionLog {
    pub fn close_count(&self) -> u64 {
        self.close_count.load(Ordering::Relaxed)
    }

    pub fn questions(&self) -> Vec<DnsQuestion> {
        self.questions.lock().unwrap().clone()
    }
}

pub struct MockSession {
    response: Result<AnswerSet, DomainError>,
    log: Arc<SessionLog>,
    closed: bool,
}

#[async_trait]
impl DnsSession for MockSession {
    async fn exchange(&mut self, question: &DnsQuestion) -> Result<AnswerSet, DomainError> {
        self.log.questions.lock().unwrap().push(question.clone());
        self.response.clone()
    }

    async fn close(&mut self) {
        if !self.closed {
            self.closed = true;
            self.log.close_count.fetch_add(1, Ordering::Relaxed);
        }
    }

    fn is_closed(&self) -> bool {
        self.closed
    }

    fn cipher_suite(&self) -> Option<&'static str> {
        Some("TLS13_AES_128_GCM_SHA256")
    }
}

pub struct MockTlsConnector {
    connect_error: Option<DomainError>,
    response: Result<AnswerSet, DomainError>,
    connects: Mutex<Vec<SessionParams>>,
    call_count: AtomicU64,
    log: Arc<SessionLog>,
}

impl MockTlsConnector {
    pub fn answering(records: Vec<DnsAnswer>) -> Self {
        Self {
            connect_error: None,
            response: Ok(AnswerSet::from(records)),
            connects: Mutex::new(Vec::new()),
            call_count: AtomicU64::new(0),
            log: Arc::new(SessionLog::default()),
        }
    }

    pub fn refusing(cause: &str) -> Self {
        Self {
            connect_error: Some(DomainError::ConnectionError(cause.to_string())),
            ..Self::answering(vec![])
        }
    }

    pub fn failing_query(cause: &str) -> Self {
        Self {
            response: Err(DomainError::QueryError(cause.to_string())),
            ..Self::answering(vec![])
        }
    }

    pub fn call_count(&self) -> u64 {
        self.call_count.load(Ordering::Relaxed)
    }

    pub fn connects(&self) -> Vec<SessionParams> {
        self.connects.lock().unwrap().clone()
    }

    pub fn log(&self) -> Arc<SessionLog> {
        self.log.clone()
    }
}

#[async_trait]
impl TlsConnector for MockTlsConnector {
    async fn connect(&self, params: &SessionParams) -> Result<Box<dyn DnsSession>, DomainError> {
        self.call_count.fetch_add(1, Ordering::Relaxed);
        self.connects.lock().unwrap().push(params.clone());

        if let Some(e) = &self.connect_error {
            return Err(e.clone());
        }

        Ok(Box::new(MockSession {
            response: self.response.clone(),
            log: self.log.clone(),
            closed: false,
        }))
    }
}
