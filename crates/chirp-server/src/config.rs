use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};

/// Runtime settings, read from the environment (and `.env` when present).
pub struct Config {
    pub db_path: PathBuf,
    pub host: String,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let db_path = std::env::var("CHIRP_DB_PATH").unwrap_or_else(|_| "chirp.db".into());
        let host = std::env::var("CHIRP_HOST").unwrap_or_else(|_| "0.0.0.0".into());
        let port = std::env::var("CHIRP_PORT")
            .unwrap_or_else(|_| "8080".into())
            .parse()
            .context("CHIRP_PORT is not a valid port")?;

        Ok(Self {
            db_path: PathBuf::from(db_path),
            host,
            port,
        })
    }

    pub fn addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .with_context(|| format!("invalid listen address {}:{}", self.host, self.port))
    }
}
