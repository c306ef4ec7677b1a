//! dot-query domain layer
pub mod cipher_suite;
pub mod config;
pub mod dns_question;
pub mod dns_record;
pub mod errors;
pub mod query_config;

pub use cipher_suite::{CipherSuite, CipherSuiteRegistry};
pub use config::{CliOverrides, Config, ConfigError, LoggingConfig, TransportConfig};
pub use dns_question::{fqdn, DnsQuestion};
pub use dns_record::{AnswerSet, DnsAnswer};
pub use errors::DomainError;
pub use query_config::QueryConfig;
