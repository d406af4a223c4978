//! Process-wide configuration, read from the environment once at startup.

use anyhow::Context;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: String,
    pub search: SearchIndexConfig,
    pub database: DatabaseConfig,
}

#[derive(Debug, Clone)]
pub struct SearchIndexConfig {
    pub endpoint: String,
    pub admin_key: String,
    pub index_name: String,
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub user: String,
    pub password: String,
    pub host: String,
    pub port: u16,
    pub name: String,
    pub ssl_cert_path: Option<String>,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(AppConfig {
            bind_addr: std::env::var("BIND_ADDR").unwrap_or("0.0.0.0:8000".to_string()),
            search: SearchIndexConfig {
                endpoint: required_env("SEARCH_ENDPOINT")?,
                admin_key: required_env("SEARCH_ADMIN_KEY")?,
                index_name: required_env("INDEX_NAME")?,
            },
            database: DatabaseConfig {
                user: required_env("DB_USER")?,
                password: required_env("DB_PASSWORD")?,
                host: required_env("DB_HOST")?,
                port: required_env("DB_PORT")?
                    .parse()
                    .context("DB_PORT is not a valid port number")?,
                name: required_env("DB_NAME")?,
                ssl_cert_path: std::env::var("SSL_CERT_PATH").ok(),
            },
        })
    }
}

fn required_env(key: &str) -> anyhow::Result<String> {
    std::env::var(key).with_context(|| format!("Environment variable '{}' is not set", key))
}
