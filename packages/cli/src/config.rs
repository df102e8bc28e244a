use std::env;
use std::net::{AddrParseError, IpAddr, SocketAddr};
use std::num::ParseIntError;
use std::path::PathBuf;
use thiserror::Error;

use bookshelf_config::constants::{
    BOOKSHELF_DATABASE_PATH, BOOKSHELF_DEBUG, BOOKSHELF_HOST, BOOKSHELF_PORT,
};
use bookshelf_core::{DEFAULT_DATABASE_FILE, DEFAULT_HOST, DEFAULT_PORT};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid port number: {0}")]
    InvalidPort(#[from] ParseIntError),
    #[error("Port {0} is out of valid range (1-65535)")]
    PortOutOfRange(u16),
    #[error("Invalid host address: {0}")]
    InvalidHost(#[from] AddrParseError),
    #[error("Invalid debug flag: {0}")]
    InvalidDebugFlag(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    pub database_path: PathBuf,
    pub debug: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST,
            port: DEFAULT_PORT,
            database_path: PathBuf::from(DEFAULT_DATABASE_FILE),
            debug: false,
        }
    }
}

fn parse_flag(value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(ConfigError::InvalidDebugFlag(value.to_string())),
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let port_str = env::var(BOOKSHELF_PORT).unwrap_or_else(|_| DEFAULT_PORT.to_string());
        let port = port_str.trim().parse::<u16>()?;

        // Validate port is in valid range
        if port == 0 {
            return Err(ConfigError::PortOutOfRange(port));
        }

        let host = match env::var(BOOKSHELF_HOST) {
            Ok(value) => value.trim().parse::<IpAddr>()?,
            Err(_) => DEFAULT_HOST,
        };

        let database_path = env::var(BOOKSHELF_DATABASE_PATH)
            .ok()
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATABASE_FILE));

        let debug = match env::var(BOOKSHELF_DEBUG) {
            Ok(value) => parse_flag(&value)?,
            Err(_) => false,
        };

        Ok(Config {
            host,
            port,
            database_path,
            debug,
        })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Log filter used when RUST_LOG is not set
    pub fn default_log_filter(&self) -> &'static str {
        if self.debug {
            "debug"
        } else {
            "info"
        }
    }
}
