//! Server construction and wiring.

mod settings;

pub use settings::ServerSettings;

use std::io;
use std::sync::Arc;

use actix_web::{web, App, HttpServer};
use tracing::info;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

use crate::domain::{LogbookService, RegistryService};
use crate::inbound::http::health::{self, HealthState};
use crate::inbound::http::{exercises, home, users, HttpState};
use crate::middleware::request_id::RequestTrace;
use crate::outbound::persistence::{
    run_pending_migrations, DbPool, DieselExerciseRepository, DieselUserRepository, PoolConfig,
};

/// Register the landing page and the `/api` endpoints against `state`.
///
/// Shared between [`run`] and the HTTP integration tests, which supply
/// in-memory port implementations instead of database-backed ones.
pub fn routes(state: HttpState) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg| {
        cfg.app_data(web::Data::new(state))
            .service(home::index)
            .service(users::register_user)
            .service(users::list_users)
            .service(exercises::create_exercise)
            .service(exercises::get_logs);
    }
}

/// Run migrations, build the dependency graph, and serve until shutdown.
pub async fn run(settings: ServerSettings) -> io::Result<()> {
    let database_url = settings
        .database_url()
        .ok_or_else(|| io::Error::other("TRACKER_DATABASE_URL must be set"))?
        .to_owned();

    run_pending_migrations(&database_url).map_err(io::Error::other)?;

    let pool = DbPool::new(PoolConfig::new(&database_url))
        .await
        .map_err(io::Error::other)?;

    let user_repository = Arc::new(DieselUserRepository::new(pool.clone()));
    let exercise_repository = Arc::new(DieselExerciseRepository::new(pool));
    let state = HttpState::new(
        Arc::new(RegistryService::new(Arc::clone(&user_repository))),
        Arc::new(LogbookService::new(exercise_repository, user_repository)),
    );

    let health_state = web::Data::new(HealthState::new());
    // Clone for the server factory so the readiness flag stays reachable.
    let server_health_state = health_state.clone();
    let server = HttpServer::new(move || {
        let app = App::new()
            .app_data(server_health_state.clone())
            .wrap(RequestTrace)
            .configure(routes(state.clone()))
            .service(health::ready)
            .service(health::live);

        #[cfg(debug_assertions)]
        let app = app.service(
            SwaggerUi::new("/docs/{_:.*}").url("/api-docs/openapi.json", crate::ApiDoc::openapi()),
        );

        app
    })
    .bind((settings.bind_addr().to_owned(), settings.port()))?;

    info!(
        addr = settings.bind_addr(),
        port = settings.port(),
        "activity log service listening"
    );
    health_state.mark_ready();
    server.run().await
}
