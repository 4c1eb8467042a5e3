use std::{net::SocketAddr, sync::Arc};

use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use shared::{
    error::{ApiError, ErrorCode},
    protocol::{run_simulation_route, SimulationQuery, SimulationResponse},
};
use tracing::info;

mod api;
mod config;

use api::ApiContext;
use config::load_settings;

#[derive(Clone)]
struct AppState {
    api: ApiContext,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();

    let settings = load_settings();
    let state = AppState {
        api: ApiContext {
            max_shots: settings.max_shots,
        },
    };
    let app = build_router(Arc::new(state));

    let addr: SocketAddr = settings.server_bind.parse()?;
    info!(%addr, "simulation server listening");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .route(run_simulation_route(), get(http_run_simulation))
        .with_state(state)
}

async fn healthz() -> &'static str {
    "ok"
}

async fn http_run_simulation(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SimulationQuery>,
) -> Result<Json<SimulationResponse>, (StatusCode, Json<ApiError>)> {
    api::run_simulation(&state.api, &query.bell_state, query.shots)
        .await
        .map(Json)
        .map_err(|err| (status_for(err.code), Json(err)))
}

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::Validation => StatusCode::BAD_REQUEST,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::Internal => StatusCode::INTERNAL_SERVER_ERROR,
    }
}
