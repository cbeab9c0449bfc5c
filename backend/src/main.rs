//! Roster server entry-point: loads configuration, prepares the data
//! directory and serves the REST API.

mod server;

use std::ffi::OsString;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use roster::config::AppConfig;
use roster::inbound::http::health::HealthState;
use server::{ServerConfig, create_server};

fn load_config() -> std::io::Result<ServerConfig> {
    let args: Vec<OsString> = std::env::args_os().collect();
    let app_config = AppConfig::load_from_iter(args)
        .map_err(|err| std::io::Error::other(format!("failed to load configuration: {err}")))?;
    ServerConfig::from_app_config(&app_config)
        .map_err(|err| std::io::Error::other(format!("invalid configuration: {err}")))
}

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let config = load_config()?;
    let bind_addr = config.bind_addr();
    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state.clone(), config).await?;
    info!(%bind_addr, "roster server listening");

    let drain_state = health_state.clone();
    actix_web::rt::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            drain_state.mark_unhealthy();
        }
    });

    server.await
}
