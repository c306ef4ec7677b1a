mod errors;
mod logging;
mod root;
mod transport;

pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use root::{CliOverrides, Config};
pub use transport::TransportConfig;
