mod model;
mod server;

use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::server::{config::Config, error::AppError, router, startup, state::AppState};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    startup::init_tracing(&config);

    let db = startup::connect_to_database(&config).await?;

    let app = router::router()
        .with_state(AppState::new(db))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let listener = tokio::net::TcpListener::bind(config.bind_address).await?;
    tracing::info!("Starting server on {}", config.bind_address);

    axum::serve(listener, app)
        .with_graceful_shutdown(startup::shutdown_signal())
        .await?;

    Ok(())
}
