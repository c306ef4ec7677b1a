use clap::{ArgAction, Parser};
use dot_query_application::services::ResultRenderer;
use dot_query_domain::query_config::DEFAULT_RECORD_TYPE;
use dot_query_domain::{CliOverrides, QueryConfig};
use std::io::Write;
use tracing::debug;

mod bootstrap;
mod di;

#[derive(Parser, Debug)]
#[command(name = "dot-query")]
#[command(version)]
#[command(about = "One-shot DNS-over-TLS query client")]
struct Cli {
    /// The domain to query
    #[arg(long, default_value = "")]
    domain: String,

    /// The DNS server to use (IP address or hostname)
    #[arg(long)]
    server: Option<String>,

    /// The query type (A, MX, NS, etc.)
    #[arg(long = "type", default_value = DEFAULT_RECORD_TYPE)]
    record_type: String,

    /// Enable or disable recursion
    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    recursion: bool,

    /// Pin a TLS 1.3 cipher suite
    #[arg(long)]
    suite: Option<String>,

    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Server port (default 853)
    #[arg(long)]
    port: Option<u16>,

    /// Bound the query round trip, in seconds
    #[arg(long, value_name = "SECS")]
    query_timeout: Option<u64>,

    /// Validate the server certificate against the webpki roots
    #[arg(long)]
    verify: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

impl Cli {
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            port: self.port,
            query_timeout_secs: self.query_timeout,
            verify_certificates: self.verify.then_some(true),
            log_level: self.log_level.clone(),
        }
    }

    fn query_config(&self) -> QueryConfig {
        QueryConfig {
            domain: self.domain.clone(),
            server: self.server.clone(),
            record_type: self.record_type.clone(),
            recursion_desired: self.recursion,
            cipher_suite: self.suite.clone(),
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = bootstrap::load_config(cli.config.as_deref(), cli.overrides())?;
    bootstrap::init_logging(&config)?;

    debug!(
        version = env!("CARGO_PKG_VERSION"),
        config_path = ?cli.config,
        port = config.transport.port,
        verify = config.transport.verify_certificates,
        "Starting dot-query"
    );

    let use_case = di::build_run_query(&config);
    let outcome = use_case.execute(&cli.query_config()).await;

    // Every outcome, failures included, is reported on stdout with exit status 0.
    let mut stdout = std::io::stdout().lock();
    for line in ResultRenderer::render_outcome(&outcome) {
        writeln!(stdout, "{}", line)?;
    }

    Ok(())
}
