use clap::Parser;
use memstore_api::config::{self, Config};
use memstore_api::server::{self, ServiceKind};
use tracing_subscriber::EnvFilter;

/// Minimal in-memory HTTP services.
#[derive(Parser)]
#[command(name = "memstore-api")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Service to run
    #[arg(value_enum, default_value_t = ServiceKind::Shortener)]
    service: ServiceKind,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = config::load_from_env()?;

    init_tracing(&config);
    config.print_summary();

    server::run(config, cli.service).await
}

fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info"));

    if config.is_json_logging() {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}
