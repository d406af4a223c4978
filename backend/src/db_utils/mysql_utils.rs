//! MySQL connection pool setup.

use std::time::Duration;

use sqlx::mysql::{MySqlConnectOptions, MySqlPool, MySqlPoolOptions, MySqlSslMode};

use crate::config::DatabaseConfig;

pub async fn connect_mysql_pool(config: &DatabaseConfig) -> anyhow::Result<MySqlPool> {
    let mut options = MySqlConnectOptions::new()
        .host(&config.host)
        .port(config.port)
        .username(&config.user)
        .password(&config.password)
        .database(&config.name);
    if let Some(ca_path) = &config.ssl_cert_path {
        options = options.ssl_mode(MySqlSslMode::VerifyCa).ssl_ca(ca_path);
    }

    let pool = MySqlPoolOptions::new()
        .test_before_acquire(true)
        .max_lifetime(Duration::from_secs(3600))
        .connect_with(options)
        .await?;

    // Fail at startup rather than on the first request if the store
    // is unreachable.
    sqlx::query("SELECT 1").execute(&pool).await?;
    tracing::info!("mysql connection established: {}:{}", config.host, config.port);
    Ok(pool)
}
