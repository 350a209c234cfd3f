//! Server construction and store wiring.

mod config;

pub use config::{ServerSettings, SettingsError};

use std::net::SocketAddr;
use std::sync::Arc;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use energy_data::DayGenerator;
use mockable::DefaultClock;
use tracing::info;

use backend::domain::DayDataResolver;
use backend::domain::ports::EnergyStoreWriter;
use backend::inbound::http::api_scope;
use backend::inbound::http::health::{HealthState, live, ready};
use backend::inbound::http::state::HttpState;
use backend::outbound::memory::InMemoryEnergyStore;
use backend::outbound::rest::RestEnergyStore;
use backend::seeding::{SeedSettings, seed_energy_data_on_startup};

/// Errors raised while assembling the server.
#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error(transparent)]
    Settings(#[from] SettingsError),
    #[error("invalid generator settings: {0}")]
    Generator(#[from] energy_data::GenerationError),
    #[error("failed to build store client: {0}")]
    StoreClient(#[from] reqwest::Error),
    #[error(transparent)]
    Seeding(#[from] backend::seeding::StartupSeedingError),
    #[error("failed to start HTTP server: {0}")]
    Io(#[from] std::io::Error),
}

fn build_app(
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(health_state)
        .app_data(http_state)
        .service(api_scope())
        .service(ready)
        .service(live)
}

/// Build the dashboard state over the configured store, seeding it first
/// when requested.
async fn build_http_state(
    settings: &ServerSettings,
    seed_settings: &SeedSettings,
) -> Result<HttpState, StartupError> {
    let generator = DayGenerator::with_optional_seed(settings.generator_seed)
        .with_event_probability(settings.event_probability())?;
    let clock = Arc::new(DefaultClock);

    match settings.store_url()? {
        Some(url) => {
            info!(store = %url, "using REST energy store");
            let store = Arc::new(RestEnergyStore::new(
                url,
                settings.store_api_key.clone(),
                settings.store_timeout(),
            )?);
            seed(seed_settings, store.clone()).await?;
            let resolver = DayDataResolver::new(store, generator, clock);
            Ok(HttpState::new(Arc::new(resolver)))
        }
        None => {
            info!("no store URL configured; using in-memory energy store");
            let store = Arc::new(InMemoryEnergyStore::new());
            seed(seed_settings, store.clone()).await?;
            let resolver = DayDataResolver::new(store, generator, clock);
            Ok(HttpState::new(Arc::new(resolver)))
        }
    }
}

async fn seed<W>(settings: &SeedSettings, writer: Arc<W>) -> Result<(), StartupError>
where
    W: EnergyStoreWriter + ?Sized,
{
    seed_energy_data_on_startup(settings, writer).await?;
    Ok(())
}

/// Construct the Actix HTTP server and mark the health state ready.
///
/// # Errors
/// Fails when the settings are malformed, the store client cannot be built,
/// or the socket cannot be bound.
pub async fn create_server(
    health_state: web::Data<HealthState>,
    settings: &ServerSettings,
    seed_settings: &SeedSettings,
) -> Result<(Server, SocketAddr), StartupError> {
    let bind_addr = settings.bind_addr()?;
    let http_state = web::Data::new(build_http_state(settings, seed_settings).await?);
    let server_health_state = health_state.clone();

    let server = HttpServer::new(move || build_app(server_health_state.clone(), http_state.clone()))
        .bind(bind_addr)?
        .run();

    health_state.mark_ready();
    Ok((server, bind_addr))
}
