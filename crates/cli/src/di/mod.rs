use dot_query_application::use_cases::RunQueryUseCase;
use dot_query_domain::Config;
use dot_query_infrastructure::dns::RustlsConnector;
use dot_query_infrastructure::system::SystemServerResolver;
use std::sync::Arc;

/// Wire the query pipeline to its rustls and host-resolver adapters.
pub fn build_run_query(config: &Config) -> RunQueryUseCase {
    let resolver = Arc::new(SystemServerResolver::new(
        config.transport.connect_timeout(),
    ));
    let connector = Arc::new(RustlsConnector::new());

    RunQueryUseCase::new(resolver, connector, config.transport.clone())
}
