use std::time::Duration;

use clap::Parser;

pub const DEFAULT_MAX_IMAGE_BYTES: usize = 16 * 1024 * 1024;

#[derive(Debug, Parser)]
#[command(author, version, about = "Resolve ISBNs and record numbers to cover images", long_about = None)]
pub struct Cli {
    /// HTTP serve address; `:port` listens on all interfaces
    #[arg(
        long = "http",
        env = "IMGRESOLVER_HTTP",
        default_value = ":7001",
        value_parser = parse_listen_address
    )]
    pub bind_address: String,

    /// Search backend address
    #[arg(
        long = "es",
        env = "IMGRESOLVER_ES",
        default_value = "http://localhost:9200"
    )]
    pub search_url: String,

    /// Seconds to wait for the search backend
    #[arg(long, env = "IMGRESOLVER_BACKEND_TIMEOUT", default_value_t = 10)]
    pub backend_timeout: u64,

    /// Seconds to wait for an image origin
    #[arg(long, env = "IMGRESOLVER_IMAGE_TIMEOUT", default_value_t = 10)]
    pub image_timeout: u64,

    /// Largest image body, in bytes, that will be proxied
    #[arg(long, env = "IMGRESOLVER_MAX_IMAGE_BYTES", default_value_t = DEFAULT_MAX_IMAGE_BYTES)]
    pub max_image_bytes: usize,

    /// Log every lookup that resolves no image
    #[arg(long, env = "IMGRESOLVER_LOG_MISSES")]
    pub log_misses: bool,
}

impl Cli {
    pub fn backend_timeout(&self) -> Duration {
        Duration::from_secs(self.backend_timeout)
    }

    pub fn image_timeout(&self) -> Duration {
        Duration::from_secs(self.image_timeout)
    }
}

/// Accept Go-style `:port` shorthand alongside `host:port`.
pub fn parse_listen_address(value: &str) -> Result<String, String> {
    let address = if value.starts_with(':') {
        format!("0.0.0.0{value}")
    } else {
        value.to_string()
    };

    match address.rsplit_once(':') {
        Some((host, port)) if !host.is_empty() && port.parse::<u16>().is_ok() => Ok(address),
        _ => Err(format!("invalid listen address: {value} (expected host:port or :port)")),
    }
}
