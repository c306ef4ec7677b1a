use crate::QueryConfig;
use std::sync::Arc;

/// A single DNS question, ready to hand to the wire codec.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsQuestion {
    pub name: Arc<str>,
    pub record_type: Arc<str>,
    pub recursion_desired: bool,
}

impl DnsQuestion {
    pub fn new(domain: &str, record_type: &str, recursion_desired: bool) -> Self {
        Self {
            name: fqdn(domain).into(),
            record_type: record_type.into(),
            recursion_desired,
        }
    }

    pub fn from_config(config: &QueryConfig) -> Self {
        Self::new(
            config.domain.trim(),
            &config.record_type,
            config.recursion_desired,
        )
    }
}

/// Fully-qualifies a domain name: exactly one trailing `.`.
pub fn fqdn(domain: &str) -> String {
    let mut name = domain.trim_end_matches('.').to_string();
    name.push('.');
    name
}
