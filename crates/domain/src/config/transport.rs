use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DOT_PORT: u16 = 853;
pub const CONNECT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TransportConfig {
    #[serde(default = "default_port")]
    pub port: u16,

    /// Bounds the TCP connect only, not the handshake or the exchange.
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,

    /// Round-trip bound for the exchange; unbounded when absent.
    #[serde(default)]
    pub query_timeout_secs: Option<u64>,

    #[serde(default)]
    pub verify_certificates: bool,
}

impl TransportConfig {
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    pub fn query_timeout(&self) -> Option<Duration> {
        self.query_timeout_secs.map(Duration::from_secs)
    }
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            connect_timeout_secs: default_connect_timeout_secs(),
            query_timeout_secs: None,
            verify_certificates: false,
        }
    }
}

fn default_port() -> u16 {
    DOT_PORT
}

fn default_connect_timeout_secs() -> u64 {
    CONNECT_TIMEOUT_SECS
}
