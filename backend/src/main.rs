//! Backend entry-point: loads settings, wires the store and serves the API.

mod server;

use std::ffi::OsString;

use actix_web::web;
use color_eyre::eyre::{Result, WrapErr};
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use backend::inbound::http::health::HealthState;
use backend::seeding::SeedSettings;
use server::{ServerSettings, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    // Settings come from the environment only, so the two prefixes never
    // compete for command-line flags.
    let program = [OsString::from("energy-backend")];
    let settings =
        ServerSettings::load_from_iter(program.clone()).wrap_err("failed to load server settings")?;
    let seed_settings =
        SeedSettings::load_from_iter(program).wrap_err("failed to load seeding settings")?;

    let health_state = web::Data::new(HealthState::new());
    let (server, bind_addr) = create_server(health_state, &settings, &seed_settings)
        .await
        .wrap_err("failed to start server")?;
    info!(%bind_addr, "energy dashboard backend listening");
    server.await.wrap_err("server terminated with an error")
}
