//! User API entry-point: reads settings, then serves the REST endpoints.

use actix_web::{rt, web};
use mockable::DefaultEnv;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

use user_api::inbound::http::health::HealthState;
use user_api::server::{ServerConfig, create_server, fail_liveness_on};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let config = ServerConfig::from_env(&DefaultEnv::new()).map_err(std::io::Error::other)?;
    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state.clone(), config)?;
    rt::spawn(fail_liveness_on(health_state, rt::signal::ctrl_c()));
    server.await
}
