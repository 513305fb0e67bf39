//! Server configuration and dependency initialization.

mod dependencies;

pub use dependencies::Dependencies;

use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::str::FromStr;
use std::time::Duration;
use tracing::warn;

/// Default address the server binds to.
pub const DEFAULT_SERVER_HOST: IpAddr = IpAddr::V4(Ipv4Addr::new(127, 0, 0, 1));

/// Default port the server listens on.
pub const DEFAULT_SERVER_PORT: u16 = 8080;

/// Default delay applied to every review write, in milliseconds.
pub const DEFAULT_REVIEW_WRITE_DELAY_MS: u64 = 1000;

/// Output format of the log subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable console output.
    #[default]
    Pretty,
    /// One JSON object per event, for log shippers.
    Json,
}

impl LogFormat {
    /// Parse the log format from the `LOG_FORMAT` environment variable.
    ///
    /// Valid values: "json" or "pretty" (case-insensitive).
    /// Defaults to "pretty" if not set or invalid.
    pub fn from_env() -> Self {
        match env::var("LOG_FORMAT") {
            Err(_) => Self::Pretty,
            Ok(raw) => raw.parse().unwrap_or_else(|_| {
                warn!(log_format = %raw, "Invalid LOG_FORMAT, defaulting to 'pretty'");
                Self::Pretty
            }),
        }
    }
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "pretty" | "console" => Ok(Self::Pretty),
            other => Err(format!("unknown log format: {}", other)),
        }
    }
}

/// Settings of the HTTP server and the service behind it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    /// Delay applied to every review write before it is stored.
    pub review_write_delay: Duration,
    pub log_format: LogFormat,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_SERVER_HOST,
            port: DEFAULT_SERVER_PORT,
            review_write_delay: Duration::from_millis(DEFAULT_REVIEW_WRITE_DELAY_MS),
            log_format: LogFormat::default(),
        }
    }
}

impl ServerConfig {
    /// Read the configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `SERVER_HOST`: Address to bind (default: 127.0.0.1)
    /// - `SERVER_PORT`: Port to listen on (default: 8080)
    /// - `REVIEW_WRITE_DELAY_MS`: Review write delay, 0 disables it (default: 1000)
    /// - `LOG_FORMAT`: "json" or "pretty" (default: pretty)
    ///
    /// Invalid values fall back to their defaults.
    pub fn from_env() -> Self {
        let host = parse_env("SERVER_HOST", DEFAULT_SERVER_HOST);
        let port = parse_env("SERVER_PORT", DEFAULT_SERVER_PORT);
        let delay_ms = parse_env("REVIEW_WRITE_DELAY_MS", DEFAULT_REVIEW_WRITE_DELAY_MS);

        Self {
            host,
            port,
            review_write_delay: Duration::from_millis(delay_ms),
            log_format: LogFormat::from_env(),
        }
    }

    /// The socket address the server binds to.
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parse_env<T>(key: &str, default: T) -> T
where
    T: FromStr + std::fmt::Display,
{
    match env::var(key) {
        Err(_) => default,
        Ok(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!(key, value = %raw, default = %default, "Invalid environment value, using default");
            default
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_format_parsing() {
        assert_eq!("json".parse::<LogFormat>(), Ok(LogFormat::Json));
        assert_eq!("JSON".parse::<LogFormat>(), Ok(LogFormat::Json));
        assert_eq!("pretty".parse::<LogFormat>(), Ok(LogFormat::Pretty));
        assert!("xml".parse::<LogFormat>().is_err());
    }

    #[test]
    fn test_default_config() {
        let config = ServerConfig::default();

        assert_eq!(config.socket_addr(), "127.0.0.1:8080".parse().unwrap());
        assert_eq!(config.review_write_delay, Duration::from_secs(1));
        assert_eq!(config.log_format, LogFormat::Pretty);
    }

    #[test]
    fn test_log_format_is_read_into_config() {
        // The only test touching LOG_FORMAT.
        env::set_var("LOG_FORMAT", "json");
        assert_eq!(ServerConfig::from_env().log_format, LogFormat::Json);
        env::remove_var("LOG_FORMAT");
        assert_eq!(ServerConfig::from_env().log_format, LogFormat::Pretty);
    }

    #[test]
    fn test_parse_env_falls_back_on_invalid_value() {
        // Keys are unique to this test so parallel tests don't race on them.
        env::set_var("STARWARS_TEST_PORT_INVALID", "not-a-port");
        env::set_var("STARWARS_TEST_PORT_VALID", " 9090 ");

        assert_eq!(parse_env("STARWARS_TEST_PORT_INVALID", 8080u16), 8080);
        assert_eq!(parse_env("STARWARS_TEST_PORT_VALID", 8080u16), 9090);
        assert_eq!(parse_env("STARWARS_TEST_PORT_UNSET", 8080u16), 8080);
    }
}
