//! dot-query infrastructure: rustls sessions, hickory-proto codec, host lookups.
pub mod dns;
pub mod system;
