//! TLS 1.3 cipher suites that can be pinned for a query.
//!
//! The table is a compile-time constant, so lookups need no initialisation
//! step and no synchronisation.

use crate::DomainError;
use std::fmt;

/// A named TLS 1.3 cipher suite and its IANA identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CipherSuite {
    name: &'static str,
    id: u16,
}

impl CipherSuite {
    const fn new(name: &'static str, id: u16) -> Self {
        Self { name, id }
    }

    pub const fn name(&self) -> &'static str {
        self.name
    }

    pub const fn id(&self) -> u16 {
        self.id
    }
}

impl fmt::Display for CipherSuite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (0x{:04x})", self.name, self.id)
    }
}

// Listing order is the order shown to users on a bad suite name.
const SUITES: [CipherSuite; 5] = [
    CipherSuite::new("TLS_AES_128_GCM_SHA256", 0x1301),
    CipherSuite::new("TLS_AES_256_GCM_SHA384", 0x1302),
    CipherSuite::new("TLS_CHACHA20_POLY1305_SHA256", 0x1303),
    CipherSuite::new("TLS_AES_128_CCM_8_SHA256", 0x1305),
    CipherSuite::new("TLS_AES_128_CCM_SHA256", 0x1304),
];

/// Read-only registry of the TLS 1.3 suites a query may be pinned to.
pub struct CipherSuiteRegistry;

impl CipherSuiteRegistry {
    pub fn all() -> &'static [CipherSuite] {
        &SUITES
    }

    /// Case-sensitive lookup by IANA suite name.
    pub fn lookup(name: &str) -> Result<CipherSuite, DomainError> {
        SUITES
            .iter()
            .find(|suite| suite.name == name)
            .copied()
            .ok_or_else(|| DomainError::InvalidCipherSuite(name.to_string()))
    }

    pub fn names() -> impl Iterator<Item = &'static str> {
        SUITES.iter().map(|suite| suite.name)
    }
}
