//! Server construction and middleware wiring.

mod config;

pub use config::{ServerConfig, ServerSettingsError};

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use mockable::DefaultClock;
use std::future::Future;
use std::sync::Arc;
use tracing::{info, warn};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::Trace;
use crate::doc::ApiDoc;
use crate::inbound::http::extractors::{path_config, payload_config};
use crate::inbound::http::health::{HealthState, live, ready};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::users::{
    create_user, delete_user, get_user, greet, list_users, update_user,
};
use crate::outbound::memory::InMemoryUserStore;

/// Everything [`build_app`] needs, cloned once per worker.
#[derive(Clone)]
pub struct AppDependencies {
    /// Health flags shared with the caller.
    pub health_state: web::Data<HealthState>,
    /// Handler state holding the user store.
    pub http_state: web::Data<HttpState>,
    /// Maximum request body size in bytes.
    pub json_limit: usize,
    /// Serve Swagger UI and the OpenAPI document.
    pub swagger_ui: bool,
}

/// Assemble the application: extractor configuration, tracing middleware,
/// user and health routes, and optionally Swagger UI.
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use actix_web::web;
/// use mockable::DefaultClock;
/// use user_api::inbound::http::health::HealthState;
/// use user_api::inbound::http::state::HttpState;
/// use user_api::outbound::memory::InMemoryUserStore;
/// use user_api::server::{AppDependencies, build_app};
///
/// let store = InMemoryUserStore::seeded(Arc::new(DefaultClock)).expect("seed users");
/// let _app = build_app(AppDependencies {
///     health_state: web::Data::new(HealthState::new()),
///     http_state: web::Data::new(HttpState::new(Arc::new(store))),
///     json_limit: 1024,
///     swagger_ui: false,
/// });
/// ```
pub fn build_app(
    deps: AppDependencies,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let AppDependencies {
        health_state,
        http_state,
        json_limit,
        swagger_ui,
    } = deps;

    // `greet` must precede `get_user` or `/user/hi` is parsed as an id.
    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .app_data(payload_config(json_limit))
        .app_data(path_config())
        .wrap(Trace)
        .service(create_user)
        .service(greet)
        .service(get_user)
        .service(update_user)
        .service(delete_user)
        .service(list_users)
        .service(ready)
        .service(live);

    if swagger_ui {
        app.service(SwaggerUi::new("/docs/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()))
    } else {
        app
    }
}

/// Seed the user store, bind the listener and mark the service ready.
///
/// # Returns
/// A [`Server`] that must be awaited to drive the listener.
///
/// # Errors
/// Propagates [`std::io::Error`] when seeding the store or binding the socket
/// fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let store = InMemoryUserStore::seeded(Arc::new(DefaultClock))
        .map_err(|e| std::io::Error::other(format!("failed to seed user store: {e}")))?;
    let http_state = web::Data::new(HttpState::new(Arc::new(store)));
    let server_health_state = health_state.clone();
    let ServerConfig {
        bind_addr,
        swagger_ui,
        json_limit,
    } = config;

    let server = HttpServer::new(move || {
        build_app(AppDependencies {
            health_state: server_health_state.clone(),
            http_state: http_state.clone(),
            json_limit,
            swagger_ui,
        })
    })
    .bind(bind_addr)?
    .run();

    info!(%bind_addr, swagger_ui, "user API listening");
    health_state.mark_ready();
    Ok(server)
}

/// Fail liveness checks once `shutdown` resolves.
///
/// Actix keeps serving in-flight requests after a stop signal; orchestrators
/// polling `/health/live` see 503 during that window.
pub async fn fail_liveness_on<F>(health_state: web::Data<HealthState>, shutdown: F)
where
    F: Future<Output = std::io::Result<()>>,
{
    match shutdown.await {
        Ok(()) => {
            info!("shutdown requested; failing liveness checks");
            health_state.mark_unhealthy();
        }
        Err(error) => warn!(%error, "shutdown signal listener failed"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[actix_web::test]
    async fn shutdown_signal_fails_liveness() {
        let health_state = web::Data::new(HealthState::new());
        fail_liveness_on(health_state.clone(), async { Ok(()) }).await;
        assert!(!health_state.is_alive());
    }

    #[actix_web::test]
    async fn listener_errors_keep_the_service_live() {
        let health_state = web::Data::new(HealthState::new());
        fail_liveness_on(health_state.clone(), async {
            Err(std::io::Error::other("no signal support"))
        })
        .await;
        assert!(health_state.is_alive());
    }
}
