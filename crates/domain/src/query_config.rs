use crate::DomainError;

pub const DEFAULT_RECORD_TYPE: &str = "A";

/// One query invocation: what to ask, whom to ask, and how to connect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryConfig {
    pub domain: String,
    pub server: Option<String>,
    pub record_type: String,
    pub recursion_desired: bool,
    pub cipher_suite: Option<String>,
}

impl QueryConfig {
    pub fn new(domain: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            server: None,
            record_type: DEFAULT_RECORD_TYPE.to_string(),
            recursion_desired: true,
            cipher_suite: None,
        }
    }

    pub fn with_server(mut self, server: impl Into<String>) -> Self {
        self.server = Some(server.into());
        self
    }

    pub fn with_record_type(mut self, record_type: impl Into<String>) -> Self {
        self.record_type = record_type.into();
        self
    }

    pub fn with_recursion(mut self, recursion_desired: bool) -> Self {
        self.recursion_desired = recursion_desired;
        self
    }

    pub fn with_cipher_suite(mut self, cipher_suite: impl Into<String>) -> Self {
        self.cipher_suite = Some(cipher_suite.into());
        self
    }

    /// Configured server, with an empty string treated as unset.
    pub fn server(&self) -> Option<&str> {
        self.server.as_deref().map(str::trim).filter(|s| !s.is_empty())
    }

    /// Configured cipher suite name, with an empty string treated as unset.
    pub fn cipher_suite(&self) -> Option<&str> {
        self.cipher_suite.as_deref().filter(|s| !s.is_empty())
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.domain.trim().is_empty() {
            return Err(DomainError::MissingDomain);
        }
        Ok(())
    }
}
