use anyhow::Result;
use clap::Parser;
use shorturls::config::Config;
use shorturls::server;
use tracing_subscriber::EnvFilter;

/// In-memory URL shortener with expiring links and click analytics.
#[derive(Parser, Debug)]
#[command(name = "shorturls")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Bind address, overrides `LISTEN`
    #[arg(long)]
    listen: Option<String>,

    /// Prefix of generated short links, overrides `BASE_URL`
    #[arg(long)]
    base_url: Option<String>,
}

impl Cli {
    fn apply(self, config: &mut Config) {
        if let Some(listen) = self.listen {
            config.listen_addr = listen;
        }
        if let Some(base_url) = self.base_url {
            config.base_url = base_url;
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let mut config = Config::from_env();
    Cli::parse().apply(&mut config);
    config.validate()?;

    init_tracing(&config);
    config.print_summary();

    server::run(config).await
}

fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info"));

    if config.log_format == "json" {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}
