use anyhow::Result;
use clap::Parser;
use imgresolver::application::{ServerConfig, serve};
use imgresolver::presentation::cli::Cli;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (before clap parses env vars)
    let _ = dotenvy::dotenv();

    init_tracing();

    let cli = Cli::parse();

    let config = ServerConfig {
        backend_timeout: cli.backend_timeout(),
        image_timeout: cli.image_timeout(),
        bind_address: cli.bind_address,
        search_url: cli.search_url,
        max_image_bytes: cli.max_image_bytes,
        log_misses: cli.log_misses,
    };

    serve(config).await
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let use_json = std::env::var("RUST_LOG_FORMAT").is_ok_and(|v| v.eq_ignore_ascii_case("json"));

    let registry = tracing_subscriber::registry().with(env_filter);

    if use_json {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().compact())
            .init();
    }
}
