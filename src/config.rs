use std::net::SocketAddr;

use anyhow::{Context, bail};

pub const DEFAULT_IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p/w500";

#[derive(Clone, Debug)]
pub struct Config {
    pub addr: SocketAddr,
    pub tmdb_api_key: String,
    pub tmdb_base_url: String,
    pub tmdb_image_base_url: String,
    pub secret_key: String,
    pub database_url: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup. Required keys must be present and
    /// non-blank; the process refuses to start otherwise.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let required = |key: &str| -> anyhow::Result<String> {
            match lookup(key) {
                Some(v) if !v.trim().is_empty() => Ok(v.trim().to_string()),
                _ => bail!("{key} must be set"),
            }
        };

        let tmdb_api_key = required("TMDB_API_KEY")?;
        let tmdb_base_url = required("TMDB_BASE_URL")?;
        let secret_key = required("SECRET_KEY")?;
        let database_url = required("DATABASE_URL")?;

        if secret_key.len() < 32 {
            bail!("SECRET_KEY must be at least 32 bytes");
        }

        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let port: u16 =
            lookup("PORT").unwrap_or_else(|| "3000".to_string()).parse().context("PORT")?;

        let tmdb_image_base_url =
            lookup("TMDB_IMAGE_BASE_URL").unwrap_or_else(|| DEFAULT_IMAGE_BASE_URL.to_string());

        Ok(Self {
            addr: format!("{host}:{port}").parse().context("HOST/PORT")?,
            tmdb_api_key,
            tmdb_base_url,
            tmdb_image_base_url,
            secret_key,
            database_url,
        })
    }
}
