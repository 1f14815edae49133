// Configuration module entry point
// Manages application configuration and shared runtime state

mod state;
mod types;

use std::net::SocketAddr;

// Re-export public types
pub use state::AppState;
pub use types::{Config, LoggingConfig, PageConfig, PageVariant, ServerConfig};

impl Config {
    /// Load configuration with the default config file name ("config.toml")
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from specified file path (without extension)
    ///
    /// The file is optional; built-in defaults cover every key, so the
    /// server runs with no configuration file at all. The hosting
    /// platform's `PORT` environment variable overrides the listen port.
    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        let mut builder = config::Config::builder()
            .add_source(config::File::with_name(config_path).required(false))
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8000)?
            .set_default("server.keep_alive", true)?
            .set_default("logging.access_log", true)?
            .set_default("logging.access_log_format", "common")?
            .set_default("page.variant", "webcam")?;

        // Hosting platforms inject the listen port via PORT
        if let Ok(port) = std::env::var("PORT") {
            builder = builder.set_override("server.port", port)?;
        }

        builder.build()?.try_deserialize()
    }

    pub fn get_socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }
}

/// Hand-built configuration for tests, independent of files and env vars
#[cfg(test)]
pub fn test_config() -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 8000,
            workers: None,
            keep_alive: true,
        },
        logging: LoggingConfig {
            access_log: false,
            access_log_format: "common".to_string(),
            access_log_file: None,
            error_log_file: None,
        },
        page: PageConfig {
            variant: PageVariant::Webcam,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_and_port_override() {
        // No config file present: built-in defaults apply
        let cfg = Config::load_from("no-such-config").unwrap();
        assert_eq!(cfg.server.host, "0.0.0.0");
        assert_eq!(cfg.server.port, 8000);
        assert_eq!(cfg.server.workers, None);
        assert!(cfg.server.keep_alive);
        assert!(cfg.logging.access_log);
        assert_eq!(cfg.logging.access_log_format, "common");
        assert_eq!(cfg.logging.access_log_file, None);
        assert_eq!(cfg.page.variant, PageVariant::Webcam);

        // PORT wins over the default. Both cases live in one test so no
        // parallel test observes the temporary env var.
        std::env::set_var("PORT", "9123");
        let cfg = Config::load_from("no-such-config").unwrap();
        assert_eq!(cfg.server.port, 9123);
        std::env::remove_var("PORT");
    }

    #[test]
    fn test_socket_addr() {
        let cfg = test_config();
        let addr = cfg.get_socket_addr().unwrap();
        assert_eq!(addr.port(), 8000);
        assert!(addr.ip().is_loopback());
    }

    #[test]
    fn test_socket_addr_rejects_bad_host() {
        let mut cfg = test_config();
        cfg.server.host = "not an address".to_string();
        assert!(cfg.get_socket_addr().is_err());
    }
}
