use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// Use the library instead of redeclaring modules
use media_channels::{
    config::{Config, LogFormat, LoggingConfig, defaults::DEFAULT_CONFIG_FILE},
    database::Database,
    web::WebServer,
};

#[derive(Parser)]
#[command(name = "media-channels")]
#[command(version)]
#[command(about = "Registry of the media channels posts are published to")]
#[command(long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = DEFAULT_CONFIG_FILE)]
    config: String,

    /// Listening IP address
    #[arg(short = 'H', long, value_name = "IP")]
    host: Option<String>,

    /// Listening port
    #[arg(short, long, value_name = "PORT")]
    port: Option<u16>,

    /// Database URL (overrides config file)
    #[arg(short = 'd', long, value_name = "URL")]
    database_url: Option<String>,

    /// Log level (overrides config file)
    #[arg(short = 'v', long)]
    log_level: Option<String>,
}

impl Cli {
    /// Command line flags win over the file and the environment
    fn apply_overrides(self, config: &mut Config) {
        if let Some(host) = self.host {
            config.web.host = host;
        }
        if let Some(port) = self.port {
            config.web.port = port;
        }
        if let Some(database_url) = self.database_url {
            config.database.url = database_url;
        }
        if let Some(log_level) = self.log_level {
            config.logging.level = log_level;
        }
    }
}

fn init_tracing(logging: &LoggingConfig) {
    let log_filter = format!("media_channels={}", logging.level);
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| log_filter.into());
    let registry = tracing_subscriber::registry().with(filter);

    match logging.format {
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json())
            .init(),
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).init(),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = Config::load_from_file(&cli.config)?;
    let config_file = cli.config.clone();
    cli.apply_overrides(&mut config);

    init_tracing(&config.logging);

    info!(
        "Starting media-channels v{} with config {}",
        env!("CARGO_PKG_VERSION"),
        config_file
    );

    let database = Database::new(&config.database).await?;
    database.migrate().await?;

    let web_server = WebServer::new(config, database)?;
    info!(
        "Web server configured for {}:{}",
        web_server.host(),
        web_server.port()
    );

    let (ready_tx, ready_rx) = tokio::sync::oneshot::channel();
    let server = tokio::spawn(web_server.serve_with_signal(ready_tx));

    match ready_rx.await {
        Ok(Ok(())) => info!("Ready to accept requests"),
        Ok(Err(e)) => return Err(e),
        Err(_) => anyhow::bail!("Web server exited before signalling readiness"),
    }

    server.await??;
    info!("Shutdown complete");
    Ok(())
}
