use clap::Parser;
use tracing_subscriber::EnvFilter;

use rocketlink::config::{self, Config};

#[derive(Parser)]
#[command(
    name = "rocketlink",
    version,
    about = "Batch-capable URL shortener with expiring links and click analytics"
)]
struct Cli {
    /// Bind address, overriding the LISTEN environment variable.
    #[arg(long)]
    listen: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = config::load_from_env()?;
    if let Some(listen) = cli.listen {
        config.listen_addr = listen;
    }

    init_tracing(&config);
    config.print_summary();

    rocketlink::server::run(config).await
}

fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    if config.log_format == "json" {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}
