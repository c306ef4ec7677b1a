//! dot-query application layer: the query pipeline and its ports.
pub mod ports;
pub mod services;
pub mod use_cases;
