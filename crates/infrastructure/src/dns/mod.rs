pub mod forwarding;
pub mod session;
pub mod transport;

pub use session::TlsDnsSession;
pub use transport::tls::{build_client_config, RustlsConnector};
